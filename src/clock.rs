// ══════════════════════════════════════════════════════════════════════════════
// CLOCK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Wall-clock source for the DATE and TIME placeholders. SystemClock reads local
// time through chrono; FixedClock pins a moment so rendered lines are stable.

use chrono::{Local, NaiveDateTime};
use crate::constants::{DATE_FORMAT, TIME_FORMAT};

/// Date (`YYYY-MM-DD`) and time (`HH:MM:SS`) strings for one log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
	pub date: String,
	pub time: String,
}

impl Timestamp {
	pub fn from_datetime(moment: NaiveDateTime) -> Self {
		Self {
			date: moment.format(DATE_FORMAT).to_string(),
			time: moment.format(TIME_FORMAT).to_string(),
		}
	}
}

pub trait Clock {
	fn now(&self) -> NaiveDateTime;

	fn timestamp(&self) -> Timestamp {
		Timestamp::from_datetime(self.now())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> NaiveDateTime {
		Local::now().naive_local()
	}
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
	fn now(&self) -> NaiveDateTime {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	#[test]
	fn formats_are_zero_padded() {
		let moment = NaiveDate::from_ymd_opt(2024, 3, 7)
			.and_then(|d| d.and_hms_opt(9, 5, 2))
			.unwrap();
		let stamp = FixedClock(moment).timestamp();
		assert_eq!(stamp.date, "2024-03-07");
		assert_eq!(stamp.time, "09:05:02");
	}

	#[test]
	fn system_clock_shapes() {
		let stamp = SystemClock.timestamp();
		assert_eq!(stamp.date.len(), 10);
		assert_eq!(stamp.time.len(), 8);
		assert_eq!(&stamp.time[2..3], ":");
	}
}
