//! Rupee and date formatting in the Indian style (lakh/crore units,
//! 2-2-3 digit grouping).
//!
//! Formatted prices are persisted next to the raw value, so the output of
//! [`format_inr`] must not drift between builds.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

pub const CRORE: f64 = 10_000_000.0;
pub const LAKH: f64 = 100_000.0;

/// `₹1.50 Cr`, `₹85.00 Lakhs`, or `₹50,000` below one lakh.
pub fn format_inr(price: f64) -> String {
    if price >= CRORE {
        format!("₹{:.2} Cr", price / CRORE)
    } else if price >= LAKH {
        format!("₹{:.2} Lakhs", price / LAKH)
    } else {
        format!("₹{}", group_indian(price.round() as i64))
    }
}

/// Groups digits as `12,34,56,789`: the last three, then pairs.
pub fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if value < 0 {
        out.push('-');
    }

    if digits.len() <= 3 {
        out.push_str(&digits);
        return out;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (idx, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if idx > 0 || lead == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|b| *b as char));
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Milliseconds since the Unix epoch, saturating at the `i64` bounds.
pub fn unix_millis(at: OffsetDateTime) -> i64 {
    let millis = (at - OffsetDateTime::UNIX_EPOCH).whole_milliseconds();
    i64::try_from(millis).unwrap_or(if millis < 0 { i64::MIN } else { i64::MAX })
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(time::UtcOffset::UTC);
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    utc.format(format)
        .unwrap_or_else(|_| utc.unix_timestamp().to_string())
}

/// `18 Oct 2026` for a stored ISO timestamp; unparsable input comes back
/// unchanged.
pub fn format_saved_date(iso: &str) -> String {
    let format = format_description!("[day padding:none] [month repr:short] [year]");
    OffsetDateTime::parse(iso, &Rfc3339)
        .ok()
        .and_then(|at| at.format(format).ok())
        .unwrap_or_else(|| iso.to_string())
}
