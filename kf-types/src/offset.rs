use crate::Offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where to start reading a partition.
pub enum StartPolicy {
    /// Only records produced from now on.
    Newest,
    /// The oldest record still retained.
    Oldest,
    /// A specific offset.
    Explicit(Offset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a run does. Exactly one of these executes per run.
pub enum RunMode {
    /// Print the sorted topic names.
    ListTopics,
    /// Print the latest offset of the partition.
    ShowLatestOffset,
    /// Print records as they arrive. `max_messages == 0` means no limit.
    Stream {
        start: StartPolicy,
        max_messages: usize,
    },
}

impl Default for StartPolicy {
    fn default() -> Self {
        Self::Newest
    }
}

impl StartPolicy {
    /// `from_beginning` wins over `offset`; a non-positive `offset` means none was given.
    pub fn resolve(from_beginning: bool, offset: Offset) -> Self {
        if from_beginning {
            Self::Oldest
        } else if offset > 0 {
            Self::Explicit(offset)
        } else {
            Self::Newest
        }
    }
}

impl RunMode {
    /// First match wins: list, then latest, then stream.
    pub fn resolve(
        list: bool,
        latest: bool,
        from_beginning: bool,
        offset: Offset,
        max_messages: usize,
    ) -> Self {
        if list {
            Self::ListTopics
        } else if latest {
            Self::ShowLatestOffset
        } else {
            Self::Stream {
                start: StartPolicy::resolve(from_beginning, offset),
                max_messages,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_start_policy() {
        for offset in [i64::MIN, -5, 0, 1, 42, i64::MAX] {
            assert_eq!(StartPolicy::resolve(true, offset), StartPolicy::Oldest);
            let expected = if offset > 0 {
                StartPolicy::Explicit(offset)
            } else {
                StartPolicy::Newest
            };
            assert_eq!(StartPolicy::resolve(false, offset), expected);
        }
    }

    #[test]
    fn test_negative_offset_is_ignored() {
        assert_eq!(
            RunMode::resolve(false, false, false, -5, 0),
            RunMode::Stream {
                start: StartPolicy::Newest,
                max_messages: 0
            }
        );
    }

    #[test]
    fn test_run_mode_precedence() {
        assert_eq!(RunMode::resolve(true, true, true, 9, 3), RunMode::ListTopics);
        assert_eq!(
            RunMode::resolve(false, true, true, 9, 3),
            RunMode::ShowLatestOffset
        );
        assert_eq!(
            RunMode::resolve(false, false, false, 9, 3),
            RunMode::Stream {
                start: StartPolicy::Explicit(9),
                max_messages: 3
            }
        );
        assert_eq!(
            RunMode::resolve(false, false, true, 0, 0),
            RunMode::Stream {
                start: StartPolicy::Oldest,
                max_messages: 0
            }
        );
    }
}
