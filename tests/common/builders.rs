//! Test builders — ergonomic constructors for [`Sale`] values and streams.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::net::Ipv4Addr;

use chrono::{NaiveDate, NaiveDateTime};
use tillroll_core::{Channel, Item, Sale};

/// Shorthand for a second-precision timestamp.
pub fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("test timestamp must be valid")
}

// ---------------------------------------------------------------------------
// SaleBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Sale`] test fixtures.
///
/// # Example
///
/// ```rust
/// let sale = SaleBuilder::new()
///     .at(11, 16, 23)
///     .host([124, 67, 34, 60])
///     .item(Item::Keyboard)
///     .build();
/// ```
pub struct SaleBuilder {
    ts: NaiveDateTime,
    host: Ipv4Addr,
    item: Item,
    channel: Channel,
}

impl SaleBuilder {
    pub fn new() -> Self {
        Self {
            ts: ts(2013, 6, 29, 11, 16, 23),
            host: Ipv4Addr::new(10, 0, 0, 1),
            item: Item::Keyboard,
            channel: Channel::Unknown,
        }
    }

    /// Time of day on the default date (2013-06-29).
    pub fn at(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.ts = ts(2013, 6, 29, hour, minute, second);
        self
    }

    pub fn ts(mut self, ts: NaiveDateTime) -> Self {
        self.ts = ts;
        self
    }

    pub fn host(mut self, octets: [u8; 4]) -> Self {
        self.host = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.item = item;
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn build(self) -> Sale {
        Sale {
            ts: self.ts,
            host: self.host,
            item: self.item,
            channel: self.channel,
        }
    }
}

impl Default for SaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A sale of `item` at the given time of day on the default date.
pub fn sale_at(hour: u32, minute: u32, second: u32, item: Item) -> Sale {
    SaleBuilder::new().at(hour, minute, second).item(item).build()
}

/// `n` sales one second apart, ascending, rotating through the items.
pub fn sorted_stream(n: usize) -> Vec<Sale> {
    (0..n)
        .map(|i| {
            SaleBuilder::new()
                .at(
                    10 + (i / 3600) as u32 % 12,
                    (i / 60) as u32 % 60,
                    (i % 60) as u32,
                )
                .item(Item::ALL[i % 4])
                .build()
        })
        .collect()
}
