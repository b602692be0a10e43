//! Shopmark Core - Shared types library.
//!
//! This crate provides common types used across the Shopmark components:
//! - `server` - Admin catalog API (listing + bulk discounts)
//! - `integration-tests` - End-to-end test harness
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shop sessions, product statuses, normalized products, and
//!   discount derivation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
