//! User-facing messages and the macros that print or log them.
//!
//! Every string shown to the user is a [`Message`] variant; its text lives in
//! [`display`]. The `msg_*!` macros in [`macros`] route a message either to
//! the console or, in debug mode, to `tracing`.

pub mod display;
pub mod macros;
pub mod prompts;
pub mod types;

pub use types::Message;
