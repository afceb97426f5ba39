use thiserror::Error;

/// Type alias of the [`Result`] type specific to `kf`.
pub type KfResult<T, E> = std::result::Result<T, KfErr<E>>;

#[derive(Error, Debug)]
/// Common errors that may occur.
pub enum KfErr<E: std::error::Error> {
    #[error("{0}")]
    Config(#[from] ConfigErr),
    #[error("{0}")]
    Topic(#[from] TopicErr),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Backend error: {0}")]
    Backend(E),
    #[error("Runtime error: {0}")]
    Runtime(Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors in the run configuration, detected before any connection is made.
pub enum ConfigErr {
    #[error("no zookeeper given")]
    NoZookeeper,
    #[error("invalid partition: {0}")]
    InvalidPartition(i32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors that may happen when validating the requested topic
pub enum TopicErr {
    #[error("no topic given")]
    NoTopicRequested,
    #[error("no such topic: {0}")]
    NotFound(String),
}

/// Function to construct a [`KfErr::Runtime`] error variant.
pub fn runtime_error<T: std::error::Error, E: std::error::Error + Send + Sync + 'static>(
    e: E,
) -> KfErr<T> {
    KfErr::Runtime(Box::new(e))
}
