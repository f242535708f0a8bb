//! Core types for tillroll-core.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline stages: the normalised [`Sale`] record and its closed field
//! enumerations [`Item`] and [`Channel`].

use std::fmt;
use std::net::Ipv4Addr;

use chrono::NaiveDateTime;
use serde::Serialize;

/// The kind of item a sale moved.
///
/// A closed four-variant enumeration. Each variant has a stable wire ordinal
/// in 1..=4 used by the compact log layout. The mapping is written out by
/// hand in [`ordinal`](Item::ordinal) / [`from_ordinal`](Item::from_ordinal)
/// so declaration order is never load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Mouse,
    Keyboard,
    Monitor,
    Speakers,
}

impl Item {
    /// Every variant, in ordinal order.
    pub const ALL: [Item; 4] = [Item::Mouse, Item::Keyboard, Item::Monitor, Item::Speakers];

    /// Lowercase wire name, as it appears in the plain and delimited layouts.
    pub fn name(self) -> &'static str {
        match self {
            Item::Mouse => "mouse",
            Item::Keyboard => "keyboard",
            Item::Monitor => "monitor",
            Item::Speakers => "speakers",
        }
    }

    /// Wire ordinal for the compact layout, 1-indexed.
    pub fn ordinal(self) -> u8 {
        match self {
            Item::Mouse => 1,
            Item::Keyboard => 2,
            Item::Monitor => 3,
            Item::Speakers => 4,
        }
    }

    /// Inverse of [`ordinal`](Item::ordinal). Anything outside 1..=4 is `None`.
    pub fn from_ordinal(ordinal: u8) -> Option<Item> {
        match ordinal {
            1 => Some(Item::Mouse),
            2 => Some(Item::Keyboard),
            3 => Some(Item::Monitor),
            4 => Some(Item::Speakers),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the customer found the shop.
///
/// `Unknown` doubles as the default when a log line omits the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Internet,
    Friend,
    #[default]
    Unknown,
}

impl Channel {
    /// Every variant, in decode priority order.
    pub const ALL: [Channel; 3] = [Channel::Internet, Channel::Friend, Channel::Unknown];

    /// Lowercase wire name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Internet => "internet",
            Channel::Friend => "friend",
            Channel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalised sale record.
///
/// Equality is structural. The pipeline orders sales by `ts` alone: two sales
/// with equal timestamps rank equal even when other fields differ. That
/// non-total discriminator is intentional — it is what makes
/// [`merge`](crate::merge::merge)'s left-bias tie rule observable and stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sale {
    /// When the sale happened. Naive local time, second precision.
    pub ts: NaiveDateTime,
    /// Client address the sale came from.
    pub host: Ipv4Addr,
    /// What was sold.
    pub item: Item,
    /// How the customer found us.
    pub channel: Channel,
}
