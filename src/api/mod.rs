//! REST client for the authentication backend

mod client;
mod types;

pub use client::*;
pub use types::*;
