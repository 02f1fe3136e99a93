pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::toml_config::WorkingTimeConfig;
pub use crate::core::report::{OutputFormat, WorkdayReport};
pub use crate::domain::clock_time::ClockTime;
pub use crate::domain::conversion::{
    from_fractional_hours, from_whole_hours, to_clock_time, to_fractional_hours, ToClockTime,
};
pub use crate::domain::workday::{Workday, DEFAULT_WORKING_HOURS};
pub use crate::utils::error::{Result, WorkingTimeError};
