//! Session wiring for the component tree

pub mod context;
pub mod storage;

pub use context::{SessionProvider, use_session};
