//! Reusable UI components

mod toast;

pub use toast::*;
