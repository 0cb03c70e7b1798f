//! Typed catalogue of backend calls.
//!
//! The UI never talks to the backend process directly. Settings and mining
//! views encode calls into the [`CommandOutbox`]; whatever hosts the app
//! drains it and feeds replies back through [`outbox::decode_reply`].

pub mod commands;
pub mod error;
pub mod outbox;

pub use outbox::CommandOutbox;
