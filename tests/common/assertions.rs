//! Domain-specific assertion macros for tillroll harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* pipeline invariant was violated.

// ---------------------------------------------------------------------------
// Stream assertions
// ---------------------------------------------------------------------------

/// Assert that a stream is ascending by timestamp.
///
/// ```rust
/// assert_sorted!(merged);
/// ```
#[macro_export]
macro_rules! assert_sorted {
    ($stream:expr) => {{
        let stream: &[tillroll_core::Sale] = &$stream;
        for window in stream.windows(2) {
            if window[0].ts > window[1].ts {
                panic!(
                    "assert_sorted! failed: {} precedes {} in the stream",
                    window[0].ts, window[1].ts
                );
            }
        }
    }};
}

/// Assert that two streams hold the same sales regardless of order.
#[macro_export]
macro_rules! assert_same_multiset {
    ($a:expr, $b:expr) => {{
        let mut a: Vec<tillroll_core::Sale> = $a.to_vec();
        let mut b: Vec<tillroll_core::Sale> = $b.to_vec();
        let key =
            |s: &tillroll_core::Sale| (s.ts, s.host, s.item.ordinal(), s.channel.name());
        a.sort_by_key(key);
        b.sort_by_key(key);
        pretty_assertions::assert_eq!(a, b, "assert_same_multiset! failed");
    }};
}

// ---------------------------------------------------------------------------
// Decoder assertions
// ---------------------------------------------------------------------------

/// Assert that a record decoder accepts a full line and produces the
/// expected sale, consuming everything.
///
/// ```rust
/// assert_decodes!(decode::decode_plain, line, expected);
/// ```
#[macro_export]
macro_rules! assert_decodes {
    ($decoder:path, $line:expr, $expected:expr) => {{
        let mut cur = tillroll_core::cursor::Cursor::new($line);
        match $decoder(&mut cur) {
            Ok(sale) => {
                pretty_assertions::assert_eq!(
                    sale,
                    $expected,
                    "decoded value mismatch for {:?}",
                    $line
                );
                assert!(
                    cur.is_empty(),
                    "decoder left input behind for {:?}: {:?}",
                    $line,
                    cur.rest()
                );
            }
            Err(err) => panic!("expected {:?} to decode, got: {err}", $line),
        }
    }};
}

/// Assert that a record decoder does not accept a line as a whole record —
/// either it fails outright or it leaves trailing input behind.
#[macro_export]
macro_rules! assert_rejects {
    ($decoder:path, $line:expr) => {{
        let mut cur = tillroll_core::cursor::Cursor::new($line);
        if let Ok(sale) = $decoder(&mut cur) {
            if cur.is_empty() {
                panic!("expected {:?} to be rejected, decoded {:?}", $line, sale);
            }
        }
    }};
}
