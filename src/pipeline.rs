//! Source-to-stream orchestration: pick the layout, decode each buffer,
//! merge the results.

use anyhow::Context;

use tillroll_core::cursor::Cursor;
use tillroll_core::decode;
use tillroll_core::detect::{self, Layout};
use tillroll_core::merge::merge_all;
use tillroll_core::types::Sale;

/// Whole-input policy for one source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Trailing undecodable content fails the input (the default).
    Strict,
    /// Keep the decoded prefix, ignore the rest.
    Lenient,
}

/// How to decode acquired buffers.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Explicit layout for every input, or `None` to sniff per input.
    pub layout: Option<Layout>,
    /// Field delimiter for delimited input (and canonical output).
    pub delimiter: char,
    /// Whole-input policy.
    pub policy: Policy,
    /// How many leading lines layout detection samples.
    pub detect_sample_lines: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            layout: None,
            delimiter: decode::DEFAULT_DELIMITER,
            policy: Policy::Strict,
            detect_sample_lines: 8,
        }
    }
}

/// Decode one acquired buffer with an explicit or detected layout.
pub fn decode_source(text: &str, options: &DecodeOptions) -> anyhow::Result<Vec<Sale>> {
    let layout = match options.layout {
        Some(layout) => layout,
        None => detect::detect(text, options.detect_sample_lines)
            .context("could not detect a known log layout; pass --format explicitly")?,
    };
    tracing::debug!(?layout, policy = ?options.policy, "decoding source");

    let decode_one = |cur: &mut Cursor<'_>| match layout {
        Layout::Plain => decode::decode_plain(cur),
        Layout::Compact => decode::decode_compact(cur),
        Layout::Delimited => decode::decode_row_with(cur, options.delimiter),
    };
    match options.policy {
        Policy::Strict => decode::decode_stream_strict(decode_one, text)
            .with_context(|| format!("undecodable content in a {layout:?}-layout source")),
        Policy::Lenient => Ok(decode::decode_stream(decode_one, text)),
    }
}

/// Decode every buffer, in the order given, and merge the results into one
/// stream ordered by timestamp.
///
/// Merge order follows the argument order, never acquisition completion
/// order, so the merge's left-bias tie rule stays deterministic no matter how
/// the buffers were fetched.
pub fn merge_sources(buffers: &[String], options: &DecodeOptions) -> anyhow::Result<Vec<Sale>> {
    let mut streams = Vec::with_capacity(buffers.len());
    for (index, text) in buffers.iter().enumerate() {
        let stream =
            decode_source(text, options).with_context(|| format!("source #{}", index + 1))?;
        tracing::info!(source = index + 1, records = stream.len(), "decoded source");
        streams.push(stream);
    }
    Ok(merge_all(streams))
}
