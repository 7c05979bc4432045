//! RFC 5545 calendar text generation.

mod escape;
mod generate;

pub use escape::{escape_text, unescape_text};
pub use generate::{generate_academic_ics, generate_timetable_ics};
