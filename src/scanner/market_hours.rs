//! Trading-session window check.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};

/// Weekday trading window in the exchange's wall-clock time.
///
/// `utc_offset_minutes` shifts the UTC clock into session time; daylight
/// saving moves are a configuration change, not tracked here.
#[derive(Debug, Clone, Copy)]
pub struct MarketHours {
    /// Minutes from session-local midnight.
    pub open_minute: u32,
    pub close_minute: u32,
    pub utc_offset_minutes: i32,
}

impl Default for MarketHours {
    /// Regular US equity session, 09:30-16:00 Eastern standard time.
    fn default() -> Self {
        Self {
            open_minute: 9 * 60 + 30,
            close_minute: 16 * 60,
            utc_offset_minutes: -5 * 60,
        }
    }
}

impl MarketHours {
    /// True on weekdays within [open, close), judged on the session clock.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        let session = (now + Duration::minutes(self.utc_offset_minutes as i64)).naive_utc();
        match session.weekday() {
            Weekday::Sat | Weekday::Sun => return false,
            _ => {}
        }
        let minute = session.hour() * 60 + session.minute();
        self.open_minute <= minute && minute < self.close_minute
    }
}
