use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use zoneshift_core::{OffsetFormatter, offset_minutes, to_instant, utc_formatter};

#[derive(Parser, Debug)]
#[command(
    name = "zoneshift",
    version,
    about = "UTC offsets and plain-date conversion for IANA time zones"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// UTC offset in minutes for a zone at an instant
    Offset {
        /// IANA zone identifier, e.g. America/Denver
        #[arg(long)]
        zone: String,

        /// Instant to inspect, RFC3339 (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read a plain date string as wall-clock time in a zone
    Convert {
        /// Plain date string, e.g. "2023-01-01 20:00:00"
        plain: String,

        /// IANA zone identifier the string should be read in
        #[arg(long)]
        zone: String,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct OffsetReport<'a> {
    zone: &'a str,
    instant: String,
    offset_minutes: i32,
    wall_clock: String,
    utc_wall_clock: String,
}

#[derive(Serialize)]
struct ConvertReport<'a> {
    zone: &'a str,
    plain: &'a str,
    instant: String,
    wall_clock: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Offset { zone, at, json } => {
            let formatter = OffsetFormatter::new(zone.as_str());
            let instant = parse_instant(at)?;

            let minutes = offset_minutes(instant, &formatter)?;
            let report = OffsetReport {
                zone: formatter.zone_id(),
                instant: rfc3339(instant),
                offset_minutes: minutes,
                wall_clock: formatter.format(instant)?,
                utc_wall_clock: utc_formatter().format(instant)?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} at {}", report.zone, report.instant);
                println!("  offset:     {:+} minutes", report.offset_minutes);
                println!("  wall clock: {}", report.wall_clock);
                println!("  utc:        {}", report.utc_wall_clock);
            }
        }

        Command::Convert { plain, zone, json } => {
            let formatter = OffsetFormatter::new(zone.as_str());
            let instant = to_instant(&plain, &formatter)
                .with_context(|| format!("converting {plain:?} in {zone}"))?;

            let report = ConvertReport {
                zone: formatter.zone_id(),
                plain: &plain,
                instant: rfc3339(instant),
                wall_clock: formatter.format(instant)?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} in {} is {}", report.plain, report.zone, report.instant);
                println!("  wall clock there: {}", report.wall_clock);
            }
        }
    }

    Ok(())
}

fn parse_instant(at: Option<String>) -> Result<DateTime<Utc>> {
    match at {
        Some(s) => Ok(DateTime::parse_from_rfc3339(&s)
            .with_context(|| format!("invalid RFC3339 instant: {s}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
