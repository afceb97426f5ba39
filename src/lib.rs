//! <div align="center">
//!
//!   <h1>kf</h1>
//!
//!   <p>
//!     <strong>🌊 Tail one partition of a Kafka topic from the command line</strong>
//!   </p>
//!
//! </div>
//!
//! `kf` finds the brokers of a cluster through ZooKeeper, decides where to start reading a
//! partition, and prints the raw value of every record to stdout, one per line.
//!
//! ```sh
//! kf -z zk:2181 --list
//! kf -z zk:2181 --latest orders
//! kf -z zk:2181 --from-beginning --max 10 orders
//! kf -z zk:2181 --offset 1200 -p 3 orders
//! ```
//!
//! Diagnostics go to stderr; pass `--verbose` to see connection status and per-record offsets.
//!
//! ## Architecture
//!
//! `kf` is the facade crate re-exporting implementation from a number of sub-crates:
//!
//! + `kf-types`: traits, topic validation, start offset resolution and the consumption loop
//! + `kf-kafka`: the cluster client, over librdkafka
//! + `kf-zookeeper`: broker discovery

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod config;
mod run;

pub use config::*;
pub use run::*;

pub use kf_types::*;

#[cfg(feature = "kf-kafka")]
#[cfg_attr(docsrs, doc(cfg(feature = "kf-kafka")))]
pub use kf_kafka as kafka;

#[cfg(feature = "kf-zookeeper")]
#[cfg_attr(docsrs, doc(cfg(feature = "kf-zookeeper")))]
pub use kf_zookeeper as zookeeper;
