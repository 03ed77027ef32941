//! Core library for `statseq`.
//!
//! This crate provides two independent building blocks: lazy sequence
//! combinators (`seq`) for batching, chaining, and cycling over
//! caller-supplied iterators, and a buffered stats sink (`stats`) that
//! accumulates timestamped counter records and flushes them to a textual
//! file backend. Configuration loading and the shared error types round
//! out the public surface.
pub mod config;
pub mod error;
pub mod logger;
pub mod seq;
pub mod stats;
pub mod types;
