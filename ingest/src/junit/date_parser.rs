use chrono::{NaiveDateTime, Timelike};

/// ISO 8601 date and time without offset or fractional seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `YYYY-MM-DDTHH:MM:SS`, with `None` standing for a digit.
const TIMESTAMP_SHAPE: [Option<u8>; 19] = [
    None,
    None,
    None,
    None,
    Some(b'-'),
    None,
    None,
    Some(b'-'),
    None,
    None,
    Some(b'T'),
    None,
    None,
    Some(b':'),
    None,
    None,
    Some(b':'),
    None,
    None,
];

pub fn parse_timestamp<T: AsRef<str>>(date_str: T) -> Option<NaiveDateTime> {
    let date_str = date_str.as_ref();
    if date_str.is_empty() {
        return None;
    }

    // chrono tolerates short fields, signs, padding and leap seconds.
    if !has_timestamp_shape(date_str) {
        tracing::debug!("Ignoring timestamp {:?}: unexpected layout", date_str);
        return None;
    }

    NaiveDateTime::parse_from_str(date_str, TIMESTAMP_FORMAT)
        .inspect_err(|err| {
            tracing::debug!("Ignoring timestamp {:?}: {}", date_str, err);
        })
        .ok()
        .filter(|date_time| date_time.nanosecond() < 1_000_000_000)
}

fn has_timestamp_shape(date_str: &str) -> bool {
    let bytes = date_str.as_bytes();
    bytes.len() == TIMESTAMP_SHAPE.len()
        && bytes
            .iter()
            .zip(TIMESTAMP_SHAPE)
            .all(|(byte, expected)| match expected {
                Some(separator) => *byte == separator,
                None => byte.is_ascii_digit(),
            })
}
