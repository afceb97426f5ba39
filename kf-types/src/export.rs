//! Re-export of crates used in the public API.

pub use async_trait::async_trait;
pub use futures;
