//! Kasira Core - Shared types library.
//!
//! This crate provides common types used across all Kasira components:
//! - `client` - Backend-facing state layer (stores, session, report export)
//! - `cli` - Command-line front end driving the state layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no durable
//! storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the domain entities mirrored from the backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
