//! Weekday anchoring: the next calendar date matching a target weekday.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// Compute the next occurrence of `target_from_sunday` (0 = Sunday .. 6 =
/// Saturday) at the given wall-clock time, anchored to `reference`.
///
/// The result is always within `[reference_date, reference_date + 6 days]`:
/// the next, possibly today's, occurrence. When the target weekday is the
/// reference's own day, the time-of-day may lie before the reference instant;
/// that is deliberate, since the weekly template is a fixed recurring pattern
/// rather than a "next class" countdown.
pub fn next_occurrence(
    target_from_sunday: u32,
    time: NaiveTime,
    reference: NaiveDateTime,
) -> NaiveDateTime {
    let anchored = reference.date().and_time(time);
    let current = reference.weekday().num_days_from_sunday();
    let delta = (target_from_sunday % 7 + 7 - current) % 7;
    anchored + Duration::days(i64::from(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn reference() -> NaiveDateTime {
        // Wednesday
        NaiveDate::from_ymd_opt(2025, 6, 11)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_result_lands_on_target_weekday_within_a_week() {
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        for target in 0..7u32 {
            let result = next_occurrence(target, time, reference());
            assert_eq!(result.weekday().num_days_from_sunday(), target);

            let days_ahead = (result.date() - reference().date()).num_days();
            assert!(
                (0..=6).contains(&days_ahead),
                "target {target} resolved {days_ahead} days ahead"
            );
        }
    }

    #[test]
    fn test_same_weekday_resolves_to_today_even_if_time_passed() {
        // Reference is Wednesday 14:30; a Wednesday 09:00 slot stays on the
        // reference date rather than jumping a week ahead.
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let result = next_occurrence(3, time, reference());
        assert_eq!(result.date(), reference().date());
        assert_eq!(result.time(), time);
    }

    #[test]
    fn test_monday_from_wednesday_is_five_days_out() {
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let result = next_occurrence(1, time, reference());
        assert_eq!(result.date(), NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(result.weekday(), Weekday::Mon);
    }
}
