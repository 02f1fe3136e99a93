use crate::domain::clock_time::ClockTime;
use crate::utils::error::{Result, WorkingTimeError};
use crate::utils::validation::validate_required_argument;
use serde::Serialize;

pub const DEFAULT_WORKING_HOURS: i32 = 8;

const EARLIEST_START: ClockTime = ClockTime::from_hours(0);
const LATEST_END: ClockTime = ClockTime::new(23, 59);

/// A working period from `start` (exclusive for [`Workday::contains`]) to
/// `end_inclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Workday {
    start: ClockTime,
    end_inclusive: ClockTime,
}

impl Workday {
    /// Fails with [`WorkingTimeError::InvalidRange`] unless
    /// `start >= 00:00` and `end_inclusive < 23:59`.
    pub fn new(start: ClockTime, end_inclusive: ClockTime) -> Result<Self> {
        let workday = Self {
            start,
            end_inclusive,
        };

        if !workday.is_valid() {
            tracing::debug!("Rejected workday {} to {}", start, end_inclusive);
            return Err(WorkingTimeError::InvalidRange {
                start,
                end: end_inclusive,
            });
        }

        Ok(workday)
    }

    /// Both parts are checked for presence before the range is validated.
    pub fn from_parts(start: Option<ClockTime>, end_inclusive: Option<ClockTime>) -> Result<Self> {
        let start = validate_required_argument("start", start)?;
        let end_inclusive = validate_required_argument("end_inclusive", end_inclusive)?;
        Self::new(start, end_inclusive)
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end_inclusive(&self) -> ClockTime {
        self.end_inclusive
    }

    pub fn is_valid(&self) -> bool {
        self.start >= EARLIEST_START && self.end_inclusive < LATEST_END
    }

    pub fn duration(&self) -> ClockTime {
        self.end_inclusive - self.start
    }

    pub fn calculate_overtime(&self) -> ClockTime {
        self.calculate_overtime_against(ClockTime::from_hours(DEFAULT_WORKING_HOURS))
    }

    pub fn calculate_overtime_against(&self, baseline: ClockTime) -> ClockTime {
        self.end_inclusive - self.start - baseline
    }

    pub fn contains(&self, time: ClockTime) -> bool {
        self.start < time && time <= self.end_inclusive
    }
}

impl Default for Workday {
    fn default() -> Self {
        Self {
            start: ClockTime::from_hours(8),
            end_inclusive: ClockTime::from_hours(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workday(start: ClockTime, end: ClockTime) -> Workday {
        Workday::new(start, end).unwrap()
    }

    #[test]
    fn test_default_workday() {
        let default = Workday::default();
        assert_eq!(default.start(), ClockTime::from_hours(8));
        assert_eq!(default.end_inclusive(), ClockTime::from_hours(16));
        assert!(default.is_valid());
    }

    #[test]
    fn test_overtime() {
        let regular = workday(ClockTime::from_hours(8), ClockTime::from_hours(16));
        assert_eq!(regular.calculate_overtime().to_string(), "00:00");

        let long = workday(ClockTime::from_hours(8), ClockTime::new(17, 15));
        assert_eq!(long.calculate_overtime().to_string(), "01:15");

        let short = workday(ClockTime::from_hours(8), ClockTime::from_hours(15));
        assert_eq!(short.calculate_overtime().to_string(), "-01:00");
    }

    #[test]
    fn test_overtime_against_custom_baseline() {
        let day = workday(ClockTime::from_hours(9), ClockTime::new(15, 30));
        assert_eq!(day.duration(), ClockTime::new(6, 30));
        assert_eq!(
            day.calculate_overtime_against(ClockTime::from_hours(6)),
            ClockTime::new(0, 30)
        );
    }

    #[test]
    fn test_contains_bounds() {
        let day = workday(ClockTime::from_hours(8), ClockTime::from_hours(16));
        assert!(day.contains(ClockTime::new(10, 30)));
        assert!(day.contains(ClockTime::from_hours(16)));
        assert!(!day.contains(ClockTime::from_hours(8)));
        assert!(!day.contains(ClockTime::new(16, 1)));
        assert!(!Workday::default().contains(ClockTime::from_hours(7)));
    }

    #[test]
    fn test_invalid_range() {
        let err = Workday::new(ClockTime::from_hours(-1), ClockTime::from_hours(12)).unwrap_err();
        assert!(err.to_string().contains("-01:00 to 12:00"));

        // end must stay strictly before 23:59
        assert!(Workday::new(ClockTime::from_hours(0), ClockTime::new(23, 59)).is_err());
        assert!(Workday::new(ClockTime::from_hours(0), ClockTime::new(23, 58)).is_ok());
    }

    #[test]
    fn test_from_parts_checks_both() {
        let missing_start = Workday::from_parts(None, Some(ClockTime::from_hours(16))).unwrap_err();
        assert!(matches!(missing_start, WorkingTimeError::MissingArgument { ref field } if field == "start"));

        let missing_end = Workday::from_parts(Some(ClockTime::from_hours(8)), None).unwrap_err();
        assert!(matches!(missing_end, WorkingTimeError::MissingArgument { ref field } if field == "end_inclusive"));

        // presence is checked before the range
        let both = Workday::from_parts(Some(ClockTime::from_hours(-1)), None).unwrap_err();
        assert!(matches!(both, WorkingTimeError::MissingArgument { .. }));

        assert!(Workday::from_parts(Some(ClockTime::from_hours(8)), Some(ClockTime::from_hours(16))).is_ok());
    }
}
