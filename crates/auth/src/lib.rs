//! Quizmill account and session subsystem.
//!
//! This crate is the authentication core of the Quizmill game backend. It
//! owns four operations and nothing else:
//!
//! - **register** - create an account from an email and password
//! - **login** - exchange credentials for a fresh session token
//! - **resolve session** - map a bearer token back to its user
//! - **logout** - revoke a session token
//!
//! The HTTP layer, the quiz/question domain, and the storage engine are all
//! external collaborators. Storage is reached through the narrow
//! [`store::AccountStore`] and [`store::SessionStore`] traits; this crate
//! ships a `PostgreSQL` adapter ([`db`]) and an in-memory adapter
//! ([`db::memory`]) that is also the test double.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod store;
