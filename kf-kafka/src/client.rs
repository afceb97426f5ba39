use rdkafka::{
    consumer::{BaseConsumer, Consumer, StreamConsumer as RawConsumer},
    util::Timeout,
    TopicPartitionList,
};
use std::sync::Arc;

use kf_types::{
    export::async_trait, runtime_error, BrokerEndpoint, Cluster, ClusterOptions, Offset,
    Partition, StartPolicy,
};

use crate::{
    make_client_config, start_offset, stream_err, AutoOffsetReset, KafkaErr, KafkaOptionKey,
    KafkaPartition, KafkaResult,
};

/// A connection to a Kafka cluster, used for metadata queries. Closed on drop.
pub struct KafkaCluster {
    brokers: Vec<BrokerEndpoint>,
    options: ClusterOptions,
    inner: Arc<BaseConsumer>,
}

impl std::fmt::Debug for KafkaCluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KafkaCluster")
            .field("brokers", &self.brokers)
            .field("options", &self.options)
            .finish()
    }
}

#[async_trait]
impl Cluster for KafkaCluster {
    type Error = KafkaErr;
    type Partition = KafkaPartition;

    /// librdkafka connects lazily; a bad broker list surfaces on the first query.
    async fn connect(
        brokers: &[BrokerEndpoint],
        options: ClusterOptions,
    ) -> KafkaResult<Self> {
        let inner: BaseConsumer = make_client_config(brokers, &options)
            .create()
            .map_err(stream_err)?;
        Ok(KafkaCluster {
            brokers: brokers.to_vec(),
            options,
            inner: Arc::new(inner),
        })
    }

    async fn topics(&self) -> KafkaResult<Vec<String>> {
        let client = self.inner.clone();
        let timeout = Timeout::After(self.options.timeout());
        spawn_blocking(move || {
            let metadata = client.fetch_metadata(None, timeout)?;
            log::debug!("metadata: {} topic(s)", metadata.topics().len());
            Ok(metadata
                .topics()
                .iter()
                .map(|topic| topic.name().to_owned())
                .collect())
        })
        .await
    }

    async fn latest_offset(&self, topic: &str, partition: Partition) -> KafkaResult<Offset> {
        let client = self.inner.clone();
        let timeout = Timeout::After(self.options.timeout());
        let topic = topic.to_owned();
        spawn_blocking(move || {
            let (_low, high) = client.fetch_watermarks(&topic, partition.id(), timeout)?;
            Ok(high)
        })
        .await
    }

    async fn open_partition(
        &self,
        topic: &str,
        partition: Partition,
        start: StartPolicy,
    ) -> KafkaResult<KafkaPartition> {
        let mut client_config = make_client_config(&self.brokers, &self.options);
        client_config.set(
            KafkaOptionKey::AutoOffsetReset,
            AutoOffsetReset::for_start(start),
        );
        let consumer: RawConsumer = client_config.create().map_err(stream_err)?;

        let mut tpl = TopicPartitionList::new();
        tpl.add_partition_offset(topic, partition.id(), start_offset(start))
            .map_err(stream_err)?;
        consumer.assign(&tpl).map_err(stream_err)?;

        let reader = KafkaPartition::new(consumer, topic.to_owned(), partition);
        log::info!(
            "assigned {}/{} from {start:?}",
            reader.topic(),
            reader.partition()
        );
        Ok(reader)
    }
}

impl KafkaCluster {
    pub fn brokers(&self) -> &[BrokerEndpoint] {
        &self.brokers
    }
}

/// librdkafka metadata calls are sync; run them on the blocking pool.
async fn spawn_blocking<T, F>(f: F) -> KafkaResult<T>
where
    F: FnOnce() -> Result<T, KafkaErr> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(res) => res.map_err(stream_err),
        Err(err) => Err(runtime_error(err)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // librdkafka creates clients and assigns partitions locally; no broker is contacted
    #[tokio::test]
    async fn test_open_partition() {
        let brokers = [BrokerEndpoint::new("localhost", 9092)];
        let cluster = KafkaCluster::connect(&brokers, ClusterOptions::default())
            .await
            .unwrap();
        assert_eq!(cluster.brokers(), &brokers);

        let reader = cluster
            .open_partition("orders", Partition::new(3), StartPolicy::Explicit(42))
            .await
            .unwrap();
        assert_eq!(reader.topic(), "orders");
        assert_eq!(reader.partition(), Partition::new(3));
    }
}
