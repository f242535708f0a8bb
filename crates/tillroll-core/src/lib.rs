//! tillroll-core — the pure decode → merge → export pipeline.
//!
//! # Architecture
//!
//! ```text
//! text ──► decode (plain | compact | delimited) ──► Vec<Sale>   (one per source)
//!                                                      │
//!                                 merge_all ◄──────────┘
//!                                     │
//!                      ┌──────────────┴───────────────┐
//!                 tally / most_sold         render / render_jsonl
//! ```
//!
//! Everything in this crate is synchronous and allocation-only: decoding
//! never performs I/O, and each stage consumes its input fully and produces a
//! fresh immutable value. The feeds crate owns the blocking edges; the binary
//! wires the two together.

pub mod config;
pub mod cursor;
pub mod decode;
pub mod detect;
pub mod error;
pub mod export;
pub mod merge;
pub mod tally;
pub mod types;

pub use error::DecodeError;
pub use types::{Channel, Item, Sale};
