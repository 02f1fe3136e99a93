pub mod demo;
pub mod report;

pub use crate::domain::clock_time::ClockTime;
pub use crate::domain::workday::Workday;
pub use crate::utils::error::Result;
