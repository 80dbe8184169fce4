//! Display formatting for wish dates.

use jiff::civil::Date;

/// `d/m/yyyy` without zero padding, e.g. `5/1/2026`.
pub fn display_date(date: Date) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Today's display date in the system time zone.
pub fn today() -> String {
    display_date(jiff::Zoned::now().date())
}
