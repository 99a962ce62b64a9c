use std::time::Duration;

/// Normalizes a `time` attribute into an elapsed duration.
///
/// Accepts a plain number of seconds (`"1.5"`, `"1,234.5"`) or a unit
/// expression (`"1h2m3.5s"`, `"250ms"`). Anything else, including negative
/// and non-finite values, yields zero.
pub fn parse_duration<T: AsRef<str>>(timespec: T) -> Duration {
    // Some runners group digits of large totals.
    let timespec = timespec.as_ref().replace(',', "");

    parse_seconds(&timespec)
        .or_else(|| parse_unit_expression(&timespec))
        .unwrap_or_else(|| {
            if !timespec.is_empty() {
                tracing::debug!("Unparsable duration {:?}, using zero", timespec);
            }
            Duration::ZERO
        })
}

fn parse_seconds(timespec: &str) -> Option<Duration> {
    let seconds = timespec
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())?;
    if seconds <= 0.0 {
        return Some(Duration::ZERO);
    }
    Some(Duration::try_from_secs_f64(seconds).unwrap_or_default())
}

const NANOS_PER_MICRO: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const NANOS_PER_MINUTE: f64 = 60.0 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MINUTE;

fn unit_nanos(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parses `[-+]?(<number><unit>)+`, where a number has at least one digit and
/// an optional fraction. A bare `0` is also accepted.
fn parse_unit_expression(timespec: &str) -> Option<Duration> {
    let (negative, mut rest) = match timespec.as_bytes().first() {
        Some(b'-') => (true, &timespec[1..]),
        Some(b'+') => (false, &timespec[1..]),
        _ => (false, timespec),
    };
    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut nanos = 0.0_f64;
    while !rest.is_empty() {
        let (number, tail) = rest.split_at(
            rest.find(|c: char| !is_number_char(c))
                .unwrap_or(rest.len()),
        );
        if !number.bytes().any(|b| b.is_ascii_digit()) || number.matches('.').count() > 1 {
            return None;
        }

        let (unit, tail) = tail.split_at(tail.find(is_number_char).unwrap_or(tail.len()));
        let scale = unit_nanos(unit)?;

        nanos += number.parse::<f64>().ok()? * scale;
        rest = tail;
    }

    if negative || nanos <= 0.0 {
        return Some(Duration::ZERO);
    }
    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos.round() as u64))
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
