//! Heuristic layout detection for `--format auto`.
//!
//! Classification is regex shape-matching over a sample of leading lines,
//! majority wins. Detection only ever picks which decoder to try — the
//! decoder itself remains the arbiter of validity, so a wrong guess surfaces
//! as an ordinary decode failure, never as silently wrong records.

use std::sync::LazyLock;

use regex::Regex;

/// The three wire layouts tillroll can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `YYYY-MM-DD HH:MM:SS addr item [channel]`
    Plain,
    /// `addr DD/MM/YYYY HH:MM:SS ordinal channel`
    Compact,
    /// Canonical delimited rows. Detection assumes the default comma
    /// delimiter; inputs using another delimiter need `--format csv`.
    Delimited,
}

static PLAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3} [a-z]+")
        .expect("plain layout pattern must compile")
});

static COMPACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3} \d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2} \d [a-z]+")
        .expect("compact layout pattern must compile")
});

static DELIMITED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}[ \t]*,")
        .expect("delimited layout pattern must compile")
});

/// Classify a buffer by sampling its first `sample` lines and counting which
/// layout pattern matches the most of them. `None` when no sampled line
/// matches any layout.
pub fn detect(input: &str, sample: usize) -> Option<Layout> {
    let lines: Vec<&str> = input.lines().take(sample.max(1)).collect();
    let candidates = [
        (Layout::Plain, &*PLAIN_RE),
        (Layout::Compact, &*COMPACT_RE),
        (Layout::Delimited, &*DELIMITED_RE),
    ];

    let mut best: Option<(Layout, usize)> = None;
    for (layout, re) in candidates {
        let count = lines.iter().filter(|line| re.is_match(line)).count();
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((layout, count));
        }
    }
    best.map(|(layout, _)| layout)
}
