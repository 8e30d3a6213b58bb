//! Next live workshop session, in the attendee's regional time zone.
//!
//! India sessions run at 7:30 PM IST (UTC+5:30); everyone else gets 9:00 AM EST
//! (fixed UTC-5, no daylight saving). Sessions are on Fridays; from Friday
//! onwards the following week's Friday is announced.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::region::Region;

const IST_OFFSET_MINUTES: i64 = 5 * 60 + 30;
const EST_OFFSET_MINUTES: i64 = -5 * 60;
/// `num_days_from_monday()` of Friday.
const FRIDAY: i64 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkshopSession {
    pub date: NaiveDate,
    pub label: String,
}

pub fn next_workshop(region: &Region, now: DateTime<Utc>) -> WorkshopSession {
    let (offset, time) = if region.is_india() {
        (IST_OFFSET_MINUTES, "7:30 PM IST")
    } else {
        (EST_OFFSET_MINUTES, "9:00 AM EST")
    };

    let today = (now.naive_utc() + Duration::minutes(offset)).date();
    let weekday = i64::from(today.weekday().num_days_from_monday());
    let days_ahead = if weekday >= FRIDAY {
        FRIDAY - weekday + 7
    } else {
        FRIDAY - weekday
    };

    let date = today + Duration::days(days_ahead);
    let label = format!("{} at {time}", date.format("%A, %-d %b"));

    WorkshopSession { date, label }
}
