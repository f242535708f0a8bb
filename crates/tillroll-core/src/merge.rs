//! Ordered merge of time-sorted sale streams.

use crate::types::Sale;

/// Merge two streams already sorted ascending by timestamp into one sorted
/// stream containing every element of both exactly once.
///
/// Single left-to-right sweep: linear time, one comparison per emitted
/// element. Equal timestamps emit the element from `a` first (stable left
/// bias) — stream ordering looks at the timestamp alone, so this tie rule is
/// what keeps merging deterministic when distinct sales collide on time.
///
/// Merging with an empty stream returns the other stream unchanged.
///
/// Precondition: each input is individually sorted ascending by timestamp.
/// Violating it yields an unspecified (not necessarily sorted) result, never
/// a panic.
pub fn merge(a: Vec<Sale>, b: Vec<Sale>) -> Vec<Sale> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut left = a.into_iter().peekable();
    let mut right = b.into_iter().peekable();
    while let (Some(x), Some(y)) = (left.peek(), right.peek()) {
        if x.ts <= y.ts {
            out.extend(left.next());
        } else {
            out.extend(right.next());
        }
    }
    out.extend(left);
    out.extend(right);
    out
}

/// Fold [`merge`] over any number of sorted streams, left to right, starting
/// from the empty stream.
///
/// Pairwise folding costs O(total elements × stream count). That is fine for
/// the handful of per-server logs this tool merges; a k-way heap merge would
/// drop it to O(total × log k) but is not needed at this scale.
pub fn merge_all<I>(streams: I) -> Vec<Sale>
where
    I: IntoIterator<Item = Vec<Sale>>,
{
    streams.into_iter().fold(Vec::new(), merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Channel, Item};
    use chrono::NaiveDate;
    use std::net::Ipv4Addr;

    fn at(h: u32, m: u32, s: u32) -> Sale {
        Sale {
            ts: NaiveDate::from_ymd_opt(2013, 6, 29)
                .and_then(|d| d.and_hms_opt(h, m, s))
                .expect("valid test timestamp"),
            host: Ipv4Addr::new(10, 0, 0, 1),
            item: Item::Mouse,
            channel: Channel::Unknown,
        }
    }

    #[test]
    fn empty_is_the_identity() {
        let stream = vec![at(10, 0, 0), at(11, 0, 0)];
        assert_eq!(merge(stream.clone(), Vec::new()), stream);
        assert_eq!(merge(Vec::new(), stream.clone()), stream);
    }

    #[test]
    fn interleaves_in_timestamp_order() {
        let a = vec![at(10, 0, 0), at(12, 0, 0)];
        let b = vec![at(11, 0, 0), at(13, 0, 0)];
        let merged = merge(a, b);
        let hours: Vec<u32> = merged.iter().map(|s| chrono::Timelike::hour(&s.ts)).collect();
        assert_eq!(hours, [10, 11, 12, 13]);
    }

    #[test]
    fn equal_timestamps_keep_the_left_element_first() {
        let mut left = at(10, 0, 0);
        left.host = Ipv4Addr::new(1, 1, 1, 1);
        let mut right = at(10, 0, 0);
        right.host = Ipv4Addr::new(2, 2, 2, 2);

        let merged = merge(vec![left], vec![right]);
        assert_eq!(merged[0].host, Ipv4Addr::new(1, 1, 1, 1));
        assert_eq!(merged[1].host, Ipv4Addr::new(2, 2, 2, 2));
    }
}
