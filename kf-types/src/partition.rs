use std::fmt::Display;

use crate::ConfigErr;

/// Position of a record within a partition. Aka. sequence number.
pub type Offset = i64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifies a partition of a topic. Aka. shard.
pub struct Partition {
    id: i32,
}

impl Partition {
    pub const fn new(id: i32) -> Self {
        Self { id }
    }

    /// Partition ids are never negative.
    pub fn try_new(id: i32) -> Result<Self, ConfigErr> {
        if id < 0 {
            Err(ConfigErr::InvalidPartition(id))
        } else {
            Ok(Self::new(id))
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partition() {
        assert_eq!(Partition::try_new(0), Ok(Partition::default()));
        assert_eq!(Partition::try_new(3).map(|p| p.id()), Ok(3));
        assert_eq!(
            Partition::try_new(-1),
            Err(ConfigErr::InvalidPartition(-1))
        );
        assert_eq!(Partition::new(7).to_string(), "7");
    }
}
