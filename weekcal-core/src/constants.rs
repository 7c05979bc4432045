//! Engine-wide policy constants.

use chrono_tz::Tz;

/// How many months forward a recurring class stays valid.
/// Chosen to span roughly one academic semester.
pub const DEFAULT_HORIZON_MONTHS: u32 = 5;

/// Default timezone for schedules that don't specify one.
/// The source deployment anchors everything to this zone; callers that need a
/// different policy pass their own `Tz` explicitly.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// PRODID emitted in every generated calendar.
pub const ICS_PRODID: &str = "-//weekcal//Timetable//EN";

/// Domain suffix for generated UIDs.
pub const UID_DOMAIN: &str = "weekcal";

/// Summary prefix that tags an academic-calendar entry as a holiday.
pub const HOLIDAY_MARKER: &str = "Holiday -";
