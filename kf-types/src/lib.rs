//! # 🌊 kf Types
//!
//! This crate defines the traits and types shared by the `kf` backends, together with the
//! backend-agnostic control logic: topic validation, start offset resolution and the
//! bounded consumption loop.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod cluster;
mod consume;
mod error;
mod offset;
mod options;
mod partition;
mod record;
mod topic;

pub use cluster::*;
pub use consume::*;
pub use error::*;
pub use offset::*;
pub use options::*;
pub use partition::*;
pub use record::*;
pub use topic::*;

pub mod export;
