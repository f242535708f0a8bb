//! Decoders for the three sale-log layouts.
//!
//! | Layout | Shape |
//! |--------|-------|
//! | plain | `YYYY-MM-DD HH:MM:SS SP addr SP item [SP channel]` |
//! | compact | `addr SP DD/MM/YYYY HH:MM:SS SP item-ordinal SP channel` |
//! | delimited | `ts DELIM addr DELIM item DELIM channel`, optional WS per field |
//!
//! All three produce the same [`Sale`] shape. Every decoder consumes exactly
//! the characters it matches and leaves the cursor immediately after; none
//! skips leading whitespace except the delimited row, which tolerates
//! horizontal whitespace around each field.
//!
//! The stream decoders at the bottom implement the two whole-input policies:
//! [`decode_stream`] keeps the decodable prefix and silently drops the rest,
//! [`decode_stream_strict`] fails the entire buffer when anything is left
//! over. Which one a caller wants is a policy decision, not an oversight.

use std::net::Ipv4Addr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::types::{Channel, Item, Sale};

/// Default field delimiter for the canonical delimited layout.
pub const DEFAULT_DELIMITER: char = ',';

/// Item names in decode priority order. The names are mutually prefix-free,
/// so the order cannot change what parses — it stays fixed anyway to keep the
/// alternation deterministic.
const ITEM_NAMES: [(&str, Item); 4] = [
    ("mouse", Item::Mouse),
    ("keyboard", Item::Keyboard),
    ("monitor", Item::Monitor),
    ("speakers", Item::Speakers),
];

/// Channel names in decode priority order.
const CHANNEL_NAMES: [(&str, Channel); 3] = [
    ("internet", Channel::Internet),
    ("friend", Channel::Friend),
    ("unknown", Channel::Unknown),
];

// ---------------------------------------------------------------------------
// Primitive field decoders
// ---------------------------------------------------------------------------

fn octet(cur: &mut Cursor<'_>) -> Result<u8, DecodeError> {
    let start = cur.mark();
    let run = cur.digit_run(3, "address octet")?;
    match run.parse::<u16>() {
        Ok(value) if value <= 255 => Ok(value as u8),
        _ => {
            cur.reset(start);
            Err(DecodeError::new(start, "address octet in 0..=255"))
        }
    }
}

/// Decode a dotted-quad IPv4 address: four decimal octets ≤ 255 joined by `.`.
pub fn address(cur: &mut Cursor<'_>) -> Result<Ipv4Addr, DecodeError> {
    let a = octet(cur)?;
    cur.char_lit('.')?;
    let b = octet(cur)?;
    cur.char_lit('.')?;
    let c = octet(cur)?;
    cur.char_lit('.')?;
    let d = octet(cur)?;
    Ok(Ipv4Addr::new(a, b, c, d))
}

fn time_of_day(cur: &mut Cursor<'_>) -> Result<NaiveTime, DecodeError> {
    let start = cur.mark();
    let hour = cur.fixed_number(2, "hour")?;
    cur.char_lit(':')?;
    let minute = cur.fixed_number(2, "minute")?;
    cur.char_lit(':')?;
    let second = cur.fixed_number(2, "second")?;
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| DecodeError::new(start, "valid time of day"))
}

fn calendar(start: usize, year: u32, month: u32, day: u32) -> Result<NaiveDate, DecodeError> {
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DecodeError::new(start, "valid calendar date"))
}

/// Decode the plain-layout timestamp `YYYY-MM-DD HH:MM:SS` — exactly
/// 4/2/2/2/2/2 digits with `-`,`-`,` `,`:`,`:` separators.
///
/// Field widths and separators are checked positionally; range violations
/// (month 13, Feb 30, hour 24, …) fail the decode rather than wrapping or
/// panicking.
pub fn timestamp_plain(cur: &mut Cursor<'_>) -> Result<NaiveDateTime, DecodeError> {
    let start = cur.mark();
    let year = cur.fixed_number(4, "year")?;
    cur.char_lit('-')?;
    let month = cur.fixed_number(2, "month")?;
    cur.char_lit('-')?;
    let day = cur.fixed_number(2, "day")?;
    cur.char_lit(' ')?;
    let time = time_of_day(cur)?;
    Ok(NaiveDateTime::new(calendar(start, year, month, day)?, time))
}

/// Decode the compact-layout timestamp `DD/MM/YYYY HH:MM:SS` — same field
/// widths as the plain layout, day-first order, `/` date separators.
pub fn timestamp_compact(cur: &mut Cursor<'_>) -> Result<NaiveDateTime, DecodeError> {
    let start = cur.mark();
    let day = cur.fixed_number(2, "day")?;
    cur.char_lit('/')?;
    let month = cur.fixed_number(2, "month")?;
    cur.char_lit('/')?;
    let year = cur.fixed_number(4, "year")?;
    cur.char_lit(' ')?;
    let time = time_of_day(cur)?;
    Ok(NaiveDateTime::new(calendar(start, year, month, day)?, time))
}

/// Decode an item by lowercase name, first match in a fixed priority order.
pub fn item_by_name(cur: &mut Cursor<'_>) -> Result<Item, DecodeError> {
    cur.first_of(&ITEM_NAMES, "item name")
}

/// Decode an item from its single-digit wire ordinal. 0 or anything above
/// the variant count fails.
pub fn item_by_ordinal(cur: &mut Cursor<'_>) -> Result<Item, DecodeError> {
    let start = cur.mark();
    let ordinal = cur.fixed_number(1, "item ordinal")?;
    match Item::from_ordinal(ordinal as u8) {
        Some(item) => Ok(item),
        None => {
            cur.reset(start);
            Err(DecodeError::new(start, "item ordinal in 1..=4"))
        }
    }
}

/// Decode a channel by lowercase name. No fallback here — the plain layout's
/// default-on-absence is the record decoder's job, not this primitive's.
pub fn channel(cur: &mut Cursor<'_>) -> Result<Channel, DecodeError> {
    cur.first_of(&CHANNEL_NAMES, "channel name")
}

// ---------------------------------------------------------------------------
// Record decoders
// ---------------------------------------------------------------------------

fn trailing_channel(cur: &mut Cursor<'_>) -> Result<Channel, DecodeError> {
    cur.char_lit(' ')?;
    channel(cur)
}

/// Decode one plain-layout record: `ts SP addr SP item [SP channel]`.
///
/// The trailing channel is optional. The decoder marks the cursor, attempts
/// ` channel`, and on failure resets to the mark and substitutes
/// [`Channel::Unknown`] — the failed attempt consumes nothing.
pub fn decode_plain(cur: &mut Cursor<'_>) -> Result<Sale, DecodeError> {
    let ts = timestamp_plain(cur)?;
    cur.char_lit(' ')?;
    let host = address(cur)?;
    cur.char_lit(' ')?;
    let item = item_by_name(cur)?;
    let mark = cur.mark();
    let channel = match trailing_channel(cur) {
        Ok(channel) => channel,
        Err(_) => {
            cur.reset(mark);
            Channel::Unknown
        }
    };
    Ok(Sale { ts, host, item, channel })
}

/// Decode one compact-layout record:
/// `addr SP DD/MM/YYYY HH:MM:SS SP ordinal SP channel`.
///
/// The channel is mandatory; its absence fails the record.
pub fn decode_compact(cur: &mut Cursor<'_>) -> Result<Sale, DecodeError> {
    let host = address(cur)?;
    cur.char_lit(' ')?;
    let ts = timestamp_compact(cur)?;
    cur.char_lit(' ')?;
    let item = item_by_ordinal(cur)?;
    cur.char_lit(' ')?;
    let channel = channel(cur)?;
    Ok(Sale { ts, host, item, channel })
}

fn field_sep(cur: &mut Cursor<'_>, delim: char) -> Result<(), DecodeError> {
    cur.skip_hspace();
    cur.char_lit(delim)?;
    cur.skip_hspace();
    Ok(())
}

/// Decode one canonical delimited row with the default comma delimiter.
pub fn decode_row(cur: &mut Cursor<'_>) -> Result<Sale, DecodeError> {
    decode_row_with(cur, DEFAULT_DELIMITER)
}

/// Decode one canonical delimited row: plain-layout field order, fields
/// joined by `delim`, horizontal whitespace tolerated around each field.
/// The channel is mandatory in this layout.
///
/// `delim` must not be a character that can occur inside a field (digits,
/// lowercase letters, `.`, `-`, `:`, space).
pub fn decode_row_with(cur: &mut Cursor<'_>, delim: char) -> Result<Sale, DecodeError> {
    cur.skip_hspace();
    let ts = timestamp_plain(cur)?;
    field_sep(cur, delim)?;
    let host = address(cur)?;
    field_sep(cur, delim)?;
    let item = item_by_name(cur)?;
    field_sep(cur, delim)?;
    let channel = channel(cur)?;
    cur.skip_hspace();
    Ok(Sale { ts, host, item, channel })
}

// ---------------------------------------------------------------------------
// Stream decoders
// ---------------------------------------------------------------------------

/// Decode zero or more line-terminated records, stopping silently at the
/// first position where `decode_one` (or its line terminator) fails.
///
/// Zero records is a valid empty result. Trailing unparseable content is NOT
/// an error: everything decoded before it is returned as-is. This prefix
/// policy is deliberate and relied upon; use [`decode_stream_strict`] when
/// leftover input should fail the whole buffer.
pub fn decode_stream<T, F>(mut decode_one: F, input: &str) -> Vec<T>
where
    F: FnMut(&mut Cursor<'_>) -> Result<T, DecodeError>,
{
    decode_prefix(&mut decode_one, input).0
}

/// Decode a whole buffer of line-terminated records, failing if any input is
/// left over.
///
/// Same zero-or-more repetition as [`decode_stream`], but an undecodable
/// remainder turns the entire input into an error carrying the offending
/// position. Nothing decoded before the failure survives.
pub fn decode_stream_strict<T, F>(mut decode_one: F, input: &str) -> Result<Vec<T>, DecodeError>
where
    F: FnMut(&mut Cursor<'_>) -> Result<T, DecodeError>,
{
    match decode_prefix(&mut decode_one, input) {
        (records, None) => Ok(records),
        (_, Some(err)) => Err(err),
    }
}

/// Shared zero-or-more loop. Returns the decoded prefix plus the error that
/// stopped it, or `None` when the input was consumed exactly.
fn decode_prefix<T, F>(decode_one: &mut F, input: &str) -> (Vec<T>, Option<DecodeError>)
where
    F: FnMut(&mut Cursor<'_>) -> Result<T, DecodeError>,
{
    let mut cur = Cursor::new(input);
    let mut records = Vec::new();
    while !cur.is_empty() {
        let mark = cur.mark();
        let result = decode_one(&mut cur).and_then(|record| {
            cur.line_end()?;
            Ok(record)
        });
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                cur.reset(mark);
                return (records, Some(err));
            }
        }
    }
    (records, None)
}
