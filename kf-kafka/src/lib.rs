//! ### `kf-kafka`: Kafka / Redpanda Backend
//!
//! This is the Kafka / Redpanda backend implementation for kf.
//!
//! `KafkaCluster` holds a metadata connection to the brokers, and answers topic listing and
//! latest offset queries. `KafkaPartition` reads one partition from a given start position,
//! without joining a consumer group and without committing offsets.
//!
//! All librdkafka calls that block are moved onto the blocking thread pool, so they can be
//! awaited like any other async operation.
//!
//! This crate depends on [`rdkafka`](https://docs.rs/rdkafka),
//! which in turn depends on [librdkafka-sys](https://docs.rs/librdkafka-sys), which itself is a wrapper of
//! [librdkafka](https://docs.confluent.io/platform/current/clients/librdkafka/html/index.html).
//!
//! Configuration Reference: <https://kafka.apache.org/documentation/#configuration>

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod client;
mod config;
mod error;
mod partition;

pub use client::*;
pub use config::*;
pub use error::*;
pub use partition::*;

/// Re-export types from `rdkafka`
pub mod export {
    pub use rdkafka;
}

macro_rules! impl_into_string {
    ($name:ident) => {
        impl From<$name> for String {
            fn from(o: $name) -> Self {
                o.as_str().to_owned()
            }
        }
    };
}

pub(crate) use impl_into_string;
