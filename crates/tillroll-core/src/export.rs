//! Canonical renderers: the delimited round-trip form, plus JSONL.

use crate::types::Sale;

/// Timestamp layout used on output regardless of which layout produced the
/// record — the plain layout's `YYYY-MM-DD HH:MM:SS`, zero-padded, 24-hour.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one sale in the canonical field order `ts, host, item, channel`,
/// joined by `delim`, names lowercase.
///
/// [`decode_row_with`](crate::decode::decode_row_with) with the same
/// delimiter gives the sale back field-for-field.
pub fn render(sale: &Sale, delim: char) -> String {
    format!(
        "{ts}{delim}{host}{delim}{item}{delim}{channel}",
        ts = sale.ts.format(TIMESTAMP_FORMAT),
        host = sale.host,
        item = sale.item,
        channel = sale.channel,
    )
}

/// Render a stream one record per line, newline-terminated, in stream order.
/// No re-sorting happens here — callers merge first.
pub fn render_stream(stream: &[Sale], delim: char) -> String {
    let mut out = String::new();
    for sale in stream {
        out.push_str(&render(sale, delim));
        out.push('\n');
    }
    out
}

/// Render a stream as JSONL, one object per line, newline-terminated.
///
/// Meant for downstream tooling; the delimited form stays the round-trip
/// contract.
pub fn render_jsonl(stream: &[Sale]) -> serde_json::Result<String> {
    let mut out = String::new();
    for sale in stream {
        out.push_str(&serde_json::to_string(sale)?);
        out.push('\n');
    }
    Ok(out)
}
