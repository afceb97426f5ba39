/// Re-export of [`rdkafka::error::KafkaError`].
pub use rdkafka::error::KafkaError as KafkaErr;
use kf_types::{KfErr, KfResult};

/// Alias for `KfResult<T, KafkaErr>`.
pub type KafkaResult<T> = KfResult<T, KafkaErr>;

pub(crate) fn stream_err(err: KafkaErr) -> KfErr<KafkaErr> {
    KfErr::Backend(err)
}
