//! ### `kf-zookeeper`: broker discovery
//!
//! Kafka brokers register themselves under `/brokers/ids/<id>` in ZooKeeper. [`ZkResolver`]
//! reads these registrations and turns them into the bootstrap list of the cluster client.
//!
//! The address may carry a chroot, i.e. `zk-a:2181,zk-b:2181/kafka`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

/// Where brokers register themselves
pub const BROKER_IDS_PATH: &str = "/brokers/ids";

mod error;
mod registration;
mod resolver;

pub use error::*;
pub use registration::*;
pub use resolver::*;
