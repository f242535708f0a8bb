//! Static sale-log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines,
//! already ascending by timestamp so merge tests can use them directly.
//! The first two plain lines and the last compact line are the reference
//! records the end-to-end scenario in `pipeline_harness` is built around.

/// Plain-layout lines: `ts addr item [channel]`.
pub const CORPUS_PLAIN: &[&str] = &[
    "2013-06-29 11:16:23 124.67.34.60 keyboard",
    "2013-06-29 11:32:12 212.141.23.67 mouse",
    "2013-06-29 11:33:08 212.141.23.67 monitor internet",
    "2013-06-29 12:12:34 125.80.32.31 speakers friend",
    "2013-06-29 12:51:50 101.40.50.62 keyboard internet",
];

/// Compact-layout lines: `addr DD/MM/YYYY HH:MM:SS ordinal channel`.
pub const CORPUS_COMPACT: &[&str] = &[
    "154.41.32.99 29/06/2013 10:02:10 1 friend",
    "76.125.44.33 29/06/2013 11:45:11 2 internet",
    "154.41.32.99 29/06/2013 15:32:23 4 internet",
];

/// Canonical delimited rows, with and without surrounding whitespace.
pub const CORPUS_DELIMITED: &[&str] = &[
    "2013-06-29 11:16:23,124.67.34.60,keyboard,unknown",
    "2013-06-29 11:32:12 , 212.141.23.67 , mouse , unknown",
    "\t2013-06-29 15:32:23,154.41.32.99,speakers,internet",
];

/// Lines no layout should classify or decode.
pub const CORPUS_GARBAGE: &[&str] = &[
    "total sales today: 7",
    "-- rotated 2013-06-29 --",
    "",
];

/// Join corpus lines into a newline-terminated buffer, the shape feeds
/// hand to the decoder.
pub fn corpus_text(corpus: &[&str]) -> String {
    let mut text = corpus.join("\n");
    text.push('\n');
    text
}

/// Generate `n` plain-layout lines, one second apart, ascending, rotating
/// through the items. Used by throughput-ish stream tests and benches.
pub fn corpus_plain_volume(n: usize) -> String {
    let items = ["mouse", "keyboard", "monitor", "speakers"];
    let mut out = String::new();
    for i in 0..n {
        out.push_str(&format!(
            "2013-06-29 {:02}:{:02}:{:02} 10.0.{}.{} {}\n",
            (i / 3600) % 24,
            (i / 60) % 60,
            i % 60,
            (i / 250) % 256,
            i % 250 + 1,
            items[i % 4],
        ));
    }
    out
}
