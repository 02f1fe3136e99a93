use crate::domain::clock_time::ClockTime;
use crate::domain::workday::Workday;
use crate::utils::error::{Result, WorkingTimeError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl std::str::FromStr for OutputFormat {
    type Err = WorkingTimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(WorkingTimeError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Summary of one workday measured against a baseline.
#[derive(Debug, Clone, Serialize)]
pub struct WorkdayReport {
    pub start: ClockTime,
    pub end_inclusive: ClockTime,
    pub duration: ClockTime,
    pub baseline: ClockTime,
    pub overtime: ClockTime,
}

impl WorkdayReport {
    pub fn new(workday: &Workday, baseline: ClockTime) -> Self {
        Self {
            start: workday.start(),
            end_inclusive: workday.end_inclusive(),
            duration: workday.duration(),
            baseline,
            overtime: workday.calculate_overtime_against(baseline),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.overtime.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_is_overtime() {
        let workday = Workday::new(ClockTime::from_hours(8), ClockTime::new(17, 15)).unwrap();
        let report = WorkdayReport::new(&workday, ClockTime::from_hours(8));
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "01:15");
    }

    #[test]
    fn test_render_json() {
        let workday = Workday::new(ClockTime::from_hours(8), ClockTime::from_hours(15)).unwrap();
        let report = WorkdayReport::new(&workday, ClockTime::from_hours(8));
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["start"], "08:00");
        assert_eq!(json["duration"], "07:00");
        assert_eq!(json["overtime"], "-01:00");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
