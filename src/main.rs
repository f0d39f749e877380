mod app;
mod filter;
mod heatmap;
mod help;
mod hierarchy;
mod picker;
mod records;
mod scale;
mod theme;
use crate::app::{App, YEAR_MAX, YEAR_MIN};
use crate::records::{demo_records, load_records};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        year: Option<i32>,
        data: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut year = None;
        let mut data = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('d') | Arg::Long("data") => {
                    data = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if year.is_none() => {
                    let value = value.string()?;
                    match value.parse::<i32>() {
                        Ok(y) if (YEAR_MIN..=YEAR_MAX).contains(&y) => year = Some(y),
                        Ok(_) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: format!("year must be between {YEAR_MIN} and {YEAR_MAX}")
                                    .into(),
                            })
                        }
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { year, data })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { year, data } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let year = year.unwrap_or_else(|| today.year().clamp(YEAR_MIN, YEAR_MAX));
                let records = match data {
                    Some(path) => load_records(&path)?,
                    None => demo_records(year),
                };
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(today, year, records).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: heatcal [-d FILE] [YEAR]");
                println!();
                println!("Terminal heatmap of daily assessment submissions, filterable by");
                println!("subject, chapter, and topic");
                println!();
                println!("Arguments:");
                println!("  [YEAR]            Calendar year to display [default: current year]");
                println!();
                println!("Options:");
                println!("  -d, --data FILE   Read score records from a JSON file");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_iter(
            std::iter::once("heatcal").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run {
                year: None,
                data: None
            }
        );
    }

    #[test]
    fn test_parse_year_and_data() {
        assert_eq!(
            parse(&["-d", "scores.json", "2024"]).unwrap(),
            Command::Run {
                year: Some(2024),
                data: Some(PathBuf::from("scores.json")),
            }
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_rejects_bad_year() {
        assert!(parse(&["twenty"]).is_err());
        assert!(parse(&["0"]).is_err());
        assert!(parse(&["9999"]).is_err());
    }

    #[test]
    fn test_parse_rejects_extra_positional() {
        assert!(parse(&["2024", "2025"]).is_err());
    }
}
