//! Time-slot key parsing.
//!
//! Slot keys arrive as `"HH:MM-HH:MM"` or the bare `"HHMM-HHMM"` shorthand
//! some templates use. Both sides are normalized to `HH:MM` before any date
//! arithmetic; anything else is rejected so the materializer never emits a
//! zero-duration or nonsense event.

use chrono::NaiveTime;

/// Parse a slot key into its start and end times.
///
/// Errors carry a human-readable reason; the caller wraps them with the
/// offending day and key. Slots spanning midnight are not supported, so
/// `start < end` is required.
pub fn parse_slot_key(key: &str) -> Result<(NaiveTime, NaiveTime), String> {
    let (start_raw, end_raw) = key
        .split_once('-')
        .ok_or_else(|| "missing '-' separator".to_string())?;

    let start = parse_time(start_raw.trim())?;
    let end = parse_time(end_raw.trim())?;

    if start >= end {
        return Err(format!("start {start} is not before end {end}"));
    }

    Ok((start, end))
}

/// Parse one side of a slot key, accepting `HH:MM` or the 4-digit `HHMM`
/// shorthand.
fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    let normalized = if raw.contains(':') {
        raw.to_string()
    } else {
        if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("'{raw}' is not a valid HH:MM or HHMM time"));
        }
        format!("{}:{}", &raw[..2], &raw[2..])
    };

    NaiveTime::parse_from_str(&normalized, "%H:%M")
        .map_err(|_| format!("'{raw}' is not a valid HH:MM or HHMM time"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_colon_form() {
        assert_eq!(
            parse_slot_key("09:00-10:00").unwrap(),
            (time(9, 0), time(10, 0))
        );
    }

    #[test]
    fn test_parse_bare_shorthand() {
        assert_eq!(
            parse_slot_key("0900-1050").unwrap(),
            (time(9, 0), time(10, 50))
        );
    }

    #[test]
    fn test_mixed_forms_are_fine() {
        assert_eq!(
            parse_slot_key("0900-10:00").unwrap(),
            (time(9, 0), time(10, 0))
        );
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = parse_slot_key("0900").unwrap_err();
        assert!(err.contains("separator"), "got: {err}");
    }

    #[test]
    fn test_non_numeric_parts_are_rejected() {
        assert!(parse_slot_key("bad-slot").is_err());
        assert!(parse_slot_key("9am-10am").is_err());
    }

    #[test]
    fn test_out_of_range_times_are_rejected() {
        assert!(parse_slot_key("25:00-26:00").is_err());
        assert!(parse_slot_key("09:61-10:00").is_err());
    }

    #[test]
    fn test_reversed_or_empty_ranges_are_rejected() {
        assert!(parse_slot_key("10:00-09:00").is_err());
        assert!(parse_slot_key("09:00-09:00").is_err());
    }
}
