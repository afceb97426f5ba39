use async_trait::async_trait;
use futures::Stream;
use std::fmt::Display;

use crate::{ClusterOptions, KfResult, Offset, Partition, Record, StartPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Address of one broker of the cluster, as registered with the coordination service.
pub struct BrokerEndpoint {
    host: String,
    port: u16,
}

impl BrokerEndpoint {
    pub fn new<S: Into<String>>(host: S, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Display for BrokerEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Join endpoints into a `host:port,host:port` bootstrap list.
pub fn broker_list(brokers: &[BrokerEndpoint]) -> String {
    brokers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
/// Turns a coordination service address into the brokers of the cluster.
pub trait BrokerResolver: Send + Sync {
    type Error: std::error::Error;

    /// Returns the reachable brokers, in a stable order. An empty cluster is an error.
    async fn resolve(&self, address: &str) -> KfResult<Vec<BrokerEndpoint>, Self::Error>;
}

#[async_trait]
/// Common interface of cluster clients, to be implemented by all backends.
///
/// The connection is released when the client is dropped.
pub trait Cluster: Sized + Send + Sync {
    type Error: std::error::Error;
    type Partition: PartitionStream<Error = Self::Error>;

    /// Establish a connection to the given brokers.
    async fn connect(
        brokers: &[BrokerEndpoint],
        options: ClusterOptions,
    ) -> KfResult<Self, Self::Error>;

    /// Names of all topics known to the cluster, in no particular order.
    async fn topics(&self) -> KfResult<Vec<String>, Self::Error>;

    /// The offset the next produced record of this partition will get.
    async fn latest_offset(
        &self,
        topic: &str,
        partition: Partition,
    ) -> KfResult<Offset, Self::Error>;

    /// Start reading one partition from the given position.
    async fn open_partition(
        &self,
        topic: &str,
        partition: Partition,
        start: StartPolicy,
    ) -> KfResult<Self::Partition, Self::Error>;
}

/// A live partition reader. Released when dropped.
pub trait PartitionStream: Sized + Send {
    type Error: std::error::Error;

    type Stream<'a>: Stream<Item = KfResult<Record, Self::Error>>
    where
        Self: 'a;

    /// Records in partition order, interleaved with transient errors.
    /// You cannot create multiple streams from the same partition.
    fn stream<'a, 'b: 'a>(&'b mut self) -> Self::Stream<'a>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_broker_list() {
        let brokers = [
            BrokerEndpoint::new("node-a", 9092),
            BrokerEndpoint::new("node-b", 9093),
        ];
        assert_eq!(brokers[0].to_string(), "node-a:9092");
        assert_eq!(broker_list(&brokers), "node-a:9092,node-b:9093");
        assert_eq!(broker_list(&[]), "");
    }
}
