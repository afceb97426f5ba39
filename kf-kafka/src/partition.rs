use rdkafka::{
    consumer::{MessageStream as RawMessageStream, StreamConsumer as RawConsumer},
    message::BorrowedMessage as RawMessage,
    Message as KafkaMessageTrait,
};

use kf_types::{
    export::futures::{stream::Map as StreamMap, StreamExt},
    KfErr, Partition, PartitionStream, Record,
};

use crate::{KafkaErr, KafkaResult};

/// Reads one partition, assigned directly. Unassigned and closed on drop.
pub struct KafkaPartition {
    inner: RawConsumer,
    topic: String,
    partition: Partition,
}

pub type KafkaRecordStream<'a> = StreamMap<
    RawMessageStream<'a>,
    fn(Result<RawMessage<'a>, KafkaErr>) -> KafkaResult<Record>,
>;

impl std::fmt::Debug for KafkaPartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KafkaPartition")
            .field("topic", &self.topic)
            .field("partition", &self.partition)
            .finish()
    }
}

impl PartitionStream for KafkaPartition {
    type Error = KafkaErr;
    type Stream<'a> = KafkaRecordStream<'a>;

    fn stream<'a, 'b: 'a>(&'b mut self) -> Self::Stream<'a> {
        self.inner.stream().map(Self::process)
    }
}

impl KafkaPartition {
    pub(crate) fn new(inner: RawConsumer, topic: String, partition: Partition) -> Self {
        Self {
            inner,
            topic,
            partition,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    fn process(res: Result<RawMessage, KafkaErr>) -> KafkaResult<Record> {
        match res {
            // a tombstone prints as an empty line
            Ok(mess) => Ok(Record::new(mess.payload().unwrap_or_default(), mess.offset())),
            Err(err) => Err(KfErr::Backend(err)),
        }
    }
}
