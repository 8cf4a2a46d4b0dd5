//! Session state and the registration → verification handoff

mod context;
pub mod storage;

pub use context::*;
