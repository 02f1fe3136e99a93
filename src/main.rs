use clap::Parser;
use std::io::Write;
use working_time::core::demo;
use working_time::domain::conversion::parse_hours;
use working_time::utils::error::ErrorSeverity;
use working_time::utils::{logger, validation::Validate};
use working_time::{CliConfig, Command, OutputFormat, WorkdayReport, WorkingTimeConfig, WorkingTimeError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(cli: CliConfig) -> Result<(), WorkingTimeError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            WorkingTimeConfig::from_file(path)?
        }
        None => WorkingTimeConfig::default(),
    };
    config.validate()?;

    let format = match cli.format.as_deref() {
        Some(format) => format.parse()?,
        None => config.output_format()?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo::run(&mut out)?,
        Command::Overtime { start, end } => {
            let workday = config.resolve_workday(start, end)?;
            let report = WorkdayReport::new(&workday, config.baseline());
            tracing::debug!("Report: {:?}", report);
            writeln!(out, "{}", report.render(format)?)?;
        }
        Command::Contains { start, end, time } => {
            let workday = config.resolve_workday(start, end)?;
            let inside = workday.contains(time);
            match format {
                OutputFormat::Text => writeln!(out, "{}", inside)?,
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::json!({ "workday": workday, "time": time, "contains": inside })
                )?,
            }
        }
        Command::Convert { hours } => {
            let time = parse_hours(&hours)?;
            match format {
                OutputFormat::Text => writeln!(out, "{}", time)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&time)?)?,
            }
        }
    }

    Ok(())
}
