//! Domain models for the account and session subsystem.

pub mod user;

pub use user::User;
