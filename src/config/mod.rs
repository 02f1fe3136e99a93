pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::clock_time::ClockTime;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "working-time")]
    #[command(about = "Clock time and workday calculations")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Output format for reports (text or json), overrides the config file
        #[arg(long)]
        pub format: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Emit logs as JSON lines on stderr
        #[arg(long)]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Print the demonstration sequence
        Demo,
        /// Overtime of a workday against the baseline
        Overtime {
            #[arg(long, allow_hyphen_values = true)]
            start: Option<ClockTime>,
            #[arg(long, allow_hyphen_values = true)]
            end: Option<ClockTime>,
        },
        /// Whether a time falls inside a workday
        Contains {
            #[arg(long, allow_hyphen_values = true)]
            start: Option<ClockTime>,
            #[arg(long, allow_hyphen_values = true)]
            end: Option<ClockTime>,
            #[arg(long, allow_hyphen_values = true)]
            time: ClockTime,
        },
        /// Convert an hour count (e.g. 3.5) to HH:MM
        Convert {
            #[arg(allow_hyphen_values = true)]
            hours: String,
        },
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_overtime_args() {
            let config = CliConfig::try_parse_from([
                "working-time",
                "--format",
                "json",
                "overtime",
                "--start",
                "08:00",
                "--end",
                "17:15",
            ])
            .unwrap();

            assert_eq!(config.format.as_deref(), Some("json"));
            match config.command {
                Some(Command::Overtime { start, end }) => {
                    assert_eq!(start, Some(ClockTime::from_hours(8)));
                    assert_eq!(end, Some(ClockTime::new(17, 15)));
                }
                other => panic!("unexpected command {:?}", other),
            }
        }

        #[test]
        fn test_rejects_malformed_time() {
            let result = CliConfig::try_parse_from(["working-time", "contains", "--time", "noon"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_no_subcommand() {
            let config = CliConfig::try_parse_from(["working-time", "-v"]).unwrap();
            assert!(config.verbose);
            assert!(!config.log_json);
            assert!(config.command.is_none());
        }

        #[test]
        fn test_negative_hours_for_convert() {
            let config = CliConfig::try_parse_from(["working-time", "convert", "-0.25"]).unwrap();
            assert!(matches!(config.command, Some(Command::Convert { ref hours }) if hours == "-0.25"));
        }
    }
}
