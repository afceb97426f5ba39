use kf_types::{KfErr, KfResult};
use thiserror::Error;

/// Re-export of [`zookeeper::ZkError`].
pub use zookeeper::ZkError;

/// Alias for `KfResult<T, ZkErr>`.
pub type ZkResult<T> = KfResult<T, ZkErr>;

#[derive(Error, Debug)]
/// Errors that may happen when discovering brokers
pub enum ZkErr {
    #[error("ZooKeeper error: {0}")]
    ZooKeeper(#[from] ZkError),
    #[error("Invalid registration of broker {id}: {source}")]
    Registration {
        id: String,
        source: serde_json::Error,
    },
    #[error("Broker {0} has no usable endpoint")]
    NoEndpoint(String),
    #[error("No broker is registered")]
    NoBroker,
}

pub(crate) fn zk_err<E: Into<ZkErr>>(err: E) -> KfErr<ZkErr> {
    KfErr::Backend(err.into())
}
