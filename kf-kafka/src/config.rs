use kf_types::{broker_list, BrokerEndpoint, ClusterOptions, StartPolicy};
use rdkafka::{config::ClientConfig, Offset};

use crate::impl_into_string;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KafkaOptionKey {
    BootstrapServers,
    ClientId,
    GroupId,
    SocketTimeout,
    EnableAutoCommit,
    EnablePartitionEof,
    AutoOffsetReset,
}

type OptionKey = KafkaOptionKey;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AutoOffsetReset {
    /// automatically reset the offset to the earliest offset
    Earliest,
    /// automatically reset the offset to the latest offset
    Latest,
}

impl OptionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BootstrapServers => "bootstrap.servers",
            Self::ClientId => "client.id",
            Self::GroupId => "group.id",
            Self::SocketTimeout => "socket.timeout.ms",
            Self::EnableAutoCommit => "enable.auto.commit",
            Self::EnablePartitionEof => "enable.partition.eof",
            Self::AutoOffsetReset => "auto.offset.reset",
        }
    }
}

impl AutoOffsetReset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
        }
    }

    /// Where to land if the requested start offset is out of range.
    pub fn for_start(start: StartPolicy) -> Self {
        match start {
            StartPolicy::Oldest => Self::Earliest,
            StartPolicy::Newest | StartPolicy::Explicit(_) => Self::Latest,
        }
    }
}

impl_into_string!(OptionKey);
impl_into_string!(AutoOffsetReset);

/// Client config shared by the metadata client and the partition readers.
pub(crate) fn make_client_config(
    brokers: &[BrokerEndpoint],
    options: &ClusterOptions,
) -> ClientConfig {
    let mut client_config = ClientConfig::new();
    client_config.set(OptionKey::BootstrapServers, broker_list(brokers));
    client_config.set(OptionKey::ClientId, options.client_id());
    // librdkafka always require a group_id, even though we never join the group
    client_config.set(OptionKey::GroupId, options.group());
    client_config.set(
        OptionKey::SocketTimeout,
        format!("{}", options.timeout().as_millis()),
    );
    // shall not commit
    client_config.set(OptionKey::EnableAutoCommit, "false");
    client_config.set(OptionKey::EnablePartitionEof, "false");
    client_config
}

pub(crate) fn start_offset(start: StartPolicy) -> Offset {
    match start {
        StartPolicy::Newest => Offset::End,
        StartPolicy::Oldest => Offset::Beginning,
        StartPolicy::Explicit(offset) => Offset::Offset(offset),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_client_config() {
        let brokers = [
            BrokerEndpoint::new("node-a", 9092),
            BrokerEndpoint::new("node-b", 9092),
        ];
        let mut options = ClusterOptions::default();
        options.set_client_id("me").set_group("us");
        let config = make_client_config(&brokers, &options);

        assert_eq!(
            config.get("bootstrap.servers"),
            Some("node-a:9092,node-b:9092")
        );
        assert_eq!(config.get("client.id"), Some("me"));
        assert_eq!(config.get("group.id"), Some("us"));
        assert_eq!(config.get("socket.timeout.ms"), Some("60000"));
        assert_eq!(config.get("enable.auto.commit"), Some("false"));
    }

    #[test]
    fn test_start_offset() {
        assert_eq!(start_offset(StartPolicy::Newest), Offset::End);
        assert_eq!(start_offset(StartPolicy::Oldest), Offset::Beginning);
        assert_eq!(start_offset(StartPolicy::Explicit(42)), Offset::Offset(42));
        assert_eq!(
            AutoOffsetReset::for_start(StartPolicy::Oldest),
            AutoOffsetReset::Earliest
        );
        assert_eq!(
            AutoOffsetReset::for_start(StartPolicy::Explicit(42)).as_str(),
            "latest"
        );
    }
}
