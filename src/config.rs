use kf_types::{ClusterOptions, ConfigErr, Offset, Partition, RunMode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The command line intents, as given.
pub struct Flags {
    pub zookeeper: Option<String>,
    pub list: bool,
    pub latest: bool,
    pub verbose: bool,
    pub max: usize,
    pub from_beginning: bool,
    pub offset: Offset,
    pub group: Option<String>,
    pub client_id: Option<String>,
    pub partition: i32,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Configuration of one run. Resolved once at startup.
pub struct Config {
    zookeeper: String,
    topic: Option<String>,
    partition: Partition,
    mode: RunMode,
    options: ClusterOptions,
    verbose: bool,
}

impl Config {
    pub fn resolve(flags: Flags) -> Result<Self, ConfigErr> {
        let Flags {
            zookeeper,
            list,
            latest,
            verbose,
            max,
            from_beginning,
            offset,
            group,
            client_id,
            partition,
            topic,
        } = flags;

        let zookeeper = match zookeeper {
            Some(zookeeper) if !zookeeper.is_empty() => zookeeper,
            _ => return Err(ConfigErr::NoZookeeper),
        };
        let partition = Partition::try_new(partition)?;

        let mut options = ClusterOptions::default();
        if let Some(group) = group {
            options.set_group(group);
        }
        if let Some(client_id) = client_id {
            options.set_client_id(client_id);
        }

        Ok(Self {
            zookeeper,
            topic: topic.filter(|t| !t.is_empty()),
            partition,
            mode: RunMode::resolve(list, latest, from_beginning, offset, max),
            options,
            verbose,
        })
    }

    /// Address of the coordination service
    pub fn zookeeper(&self) -> &str {
        &self.zookeeper
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use kf_types::StartPolicy;

    fn flags() -> Flags {
        Flags {
            zookeeper: Some("zk:2181".to_owned()),
            topic: Some("x".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(flags()).unwrap();
        assert_eq!(config.zookeeper(), "zk:2181");
        assert_eq!(config.topic(), Some("x"));
        assert_eq!(config.partition(), Partition::new(0));
        assert_eq!(
            config.mode(),
            RunMode::Stream {
                start: StartPolicy::Newest,
                max_messages: 0
            }
        );
        assert_eq!(config.options().client_id(), "kf");
        assert_eq!(config.options().group(), "kf");
        assert!(!config.verbose());
    }

    #[test]
    fn test_no_zookeeper() {
        for zookeeper in [None, Some(String::new())] {
            let flags = Flags {
                zookeeper,
                ..flags()
            };
            assert_eq!(Config::resolve(flags), Err(ConfigErr::NoZookeeper));
        }
    }

    #[test]
    fn test_invalid_partition() {
        let flags = Flags {
            partition: -1,
            ..flags()
        };
        assert_eq!(Config::resolve(flags), Err(ConfigErr::InvalidPartition(-1)));
    }

    #[test]
    fn test_offset_and_identifiers() {
        let config = Config::resolve(Flags {
            offset: -5,
            max: 3,
            group: Some("readers".to_owned()),
            client_id: Some("cli".to_owned()),
            topic: Some(String::new()),
            ..flags()
        })
        .unwrap();
        assert_eq!(
            config.mode(),
            RunMode::Stream {
                start: StartPolicy::Newest,
                max_messages: 3
            }
        );
        assert_eq!(config.options().group(), "readers");
        assert_eq!(config.options().client_id(), "cli");
        assert_eq!(config.topic(), None);
    }
}
