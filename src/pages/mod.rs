//! Application screens

mod chat;
mod login;
mod otp_verification;
mod register;

pub use chat::*;
pub use login::*;
pub use otp_verification::*;
pub use register::*;
