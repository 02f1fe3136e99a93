use crate::domain::clock_time::ClockTime;
use crate::domain::conversion::to_clock_time;
use crate::domain::workday::Workday;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the demonstration sequence, one result per line.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    tracing::debug!("Running demonstration");

    writeln!(out, "{}", ClockTime::new(1, 30) > ClockTime::new(0, 45))?;
    writeln!(out, "{}", ClockTime::new(1, 30) - ClockTime::new(0, 45))?;

    let office = Workday::new(ClockTime::from_hours(8), ClockTime::from_hours(16))?;
    writeln!(out, "{}", office.contains(ClockTime::new(10, 30)))?;
    writeln!(out, "{}", Workday::default().contains(ClockTime::from_hours(7)))?;

    let long = Workday::new(ClockTime::from_hours(8), ClockTime::new(17, 15))?;
    writeln!(out, "{}", long.calculate_overtime())?;
    let short = Workday::new(ClockTime::from_hours(8), ClockTime::from_hours(15))?;
    writeln!(out, "{}", short.calculate_overtime())?;

    writeln!(out, "{}", to_clock_time(3.5))?;

    match Workday::new(ClockTime::from_hours(-1), ClockTime::from_hours(12)) {
        Ok(workday) => tracing::warn!("Unexpectedly accepted {:?}", workday),
        Err(e) => writeln!(out, "{}", e)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_line_count() {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 8);
    }
}
