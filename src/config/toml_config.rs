use crate::core::report::OutputFormat;
use crate::domain::clock_time::ClockTime;
use crate::domain::workday::{Workday, DEFAULT_WORKING_HOURS};
use crate::utils::error::{Result, WorkingTimeError};
use crate::utils::validation::{validate_one_of, validate_range, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkingTimeConfig {
    pub workday: Option<WorkdayConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkdayConfig {
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub baseline_hours: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl WorkingTimeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(WorkingTimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WorkingTimeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            WorkingTimeError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(workday) = &self.workday {
            if let Some(hours) = workday.baseline_hours {
                validate_range("workday.baseline_hours", hours, 0, 24)?;
            }
            if workday.start.is_some() || workday.end.is_some() {
                let start = validate_required_field("workday.start", &workday.start)?;
                let end = validate_required_field("workday.end", &workday.end)?;
                Workday::new(*start, *end)?;
            }
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }

    pub fn baseline(&self) -> ClockTime {
        let hours = self
            .workday
            .as_ref()
            .and_then(|w| w.baseline_hours)
            .unwrap_or(DEFAULT_WORKING_HOURS);
        ClockTime::from_hours(hours)
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    /// Explicit endpoints win over configured ones. With nothing given
    /// anywhere the default 08:00 to 16:00 workday is used.
    pub fn resolve_workday(
        &self,
        start: Option<ClockTime>,
        end: Option<ClockTime>,
    ) -> Result<Workday> {
        let configured = self.workday.clone().unwrap_or_default();
        let start = start.or(configured.start);
        let end = end.or(configured.end);

        if start.is_none() && end.is_none() {
            return Ok(Workday::default());
        }

        Workday::from_parts(start, end)
    }
}

impl Validate for WorkingTimeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
