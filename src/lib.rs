//! tillroll — till-roll normaliser.
//!
//! Decodes heterogeneous per-server sale logs, merges them into one
//! time-ordered stream, and exports the canonical delimited form.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► Decode ──► Merge ──► Tally / Export
//! ```
//!
//! The pure pipeline lives in `tillroll-core`, acquisition in
//! `tillroll-feeds`. This crate is the orchestration shell: [`pipeline`]
//! holds the source-to-stream glue so integration tests can drive the whole
//! flow, and `main.rs` stays a thin argument-parsing wrapper around it.

pub mod pipeline;
