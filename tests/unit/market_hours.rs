//! Unit tests for the market-hours gate

use alertix::scanner::MarketHours;
use chrono::{DateTime, TimeZone, Utc};

fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    // March 2024: the 4th is a Monday, the 9th a Saturday.
    Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
}

#[test]
fn open_during_a_weekday_session() {
    // Default window is 09:30-16:00 at UTC-5, i.e. 14:30-21:00 UTC.
    let hours = MarketHours::default();
    assert!(hours.is_open(utc(4, 14, 30)));
    assert!(hours.is_open(utc(4, 17, 0)));
    assert!(hours.is_open(utc(8, 20, 59)));
}

#[test]
fn closed_outside_the_session_window() {
    let hours = MarketHours::default();
    assert!(!hours.is_open(utc(4, 14, 29)));
    assert!(!hours.is_open(utc(4, 21, 0)));
    assert!(!hours.is_open(utc(4, 8, 0)));
}

#[test]
fn closed_on_weekends() {
    let hours = MarketHours::default();
    assert!(!hours.is_open(utc(9, 17, 0)));
    assert!(!hours.is_open(utc(10, 17, 0)));
}

#[test]
fn offset_shifts_the_weekday_boundary() {
    // Friday 22:00 ET is already Saturday in UTC; the session clock, not
    // the UTC calendar, decides the weekday.
    let hours = MarketHours {
        open_minute: 0,
        close_minute: 24 * 60,
        utc_offset_minutes: -5 * 60,
    };
    // Saturday 02:00 UTC = Friday 21:00 ET.
    assert!(hours.is_open(utc(9, 2, 0)));
    // Monday 02:00 UTC = Sunday 21:00 ET.
    assert!(!hours.is_open(utc(11, 2, 0)));
}

#[test]
fn zero_offset_runs_on_utc() {
    let hours = MarketHours {
        open_minute: 9 * 60 + 30,
        close_minute: 16 * 60,
        utc_offset_minutes: 0,
    };
    assert!(hours.is_open(utc(4, 9, 30)));
    assert!(!hours.is_open(utc(4, 14, 30)));

    let all_day = MarketHours {
        open_minute: 0,
        close_minute: 24 * 60,
        utc_offset_minutes: 0,
    };
    assert!(all_day.is_open(utc(4, 0, 0)));
    assert!(all_day.is_open(utc(4, 23, 59)));
    assert!(!all_day.is_open(utc(9, 12, 0)));
}
