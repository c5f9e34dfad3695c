use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use timeline_rs::api::{TimelineConfig, TimelineEngine, TimelineItem};
use timeline_rs::core::{ScrollViewport, floor_date};
use timeline_rs::render::{NullRenderer, Renderer};
use timeline_rs::TimelineResult;

const USAGE: &str = "usage: timeline_layout_dump [--config <path>] [--events <count>] [--time-unit <minutes>] [--scroll <px>] [--output <path>]";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    events: Option<usize>,
    time_unit_minutes: Option<f64>,
    scroll_px: Option<f64>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = timeline_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?
        }
        None => sample_config()?,
    };
    let config = match args.time_unit_minutes {
        Some(minutes) => TimelineConfig {
            time_unit_minutes: Some(minutes),
            ..config
        },
        None => config,
    };

    let mut engine = TimelineEngine::new(NullRenderer::default(), config)
        .map_err(|err| format!("failed to build engine: {err}"))?;
    add_sample_events(&mut engine, args.events.unwrap_or(1000))
        .map_err(|err| format!("failed to add sample events: {err}"))?;
    if let Some(scroll_px) = args.scroll_px {
        engine
            .scroll_to(scroll_px)
            .map_err(|err| format!("failed to scroll: {err}"))?;
    }
    engine
        .render()
        .map_err(|err| format!("failed to render: {err}"))?;

    let json = engine
        .snapshot_json()
        .map_err(|err| format!("failed to serialize snapshot: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn sample_start() -> Result<NaiveDateTime, String> {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .and_then(|day| day.and_hms_opt(9, 0, 17))
        .ok_or_else(|| "invalid sample start date".to_owned())
}

fn sample_config() -> Result<TimelineConfig, String> {
    let start = sample_start()?;
    Ok(TimelineConfig::new(ScrollViewport::new(1200.0, 60.0))
        .with_date_range(start, start + TimeDelta::hours(5))
        .with_current_date(start + TimeDelta::minutes(42))
        .with_time_unit(TimeDelta::minutes(5))
        .with_zoom_enabled(true)
        .with_flyout_enabled(true))
}

/// Adds a few hand-placed events followed by `count` points spread evenly
/// over the range.
fn add_sample_events<R: Renderer>(
    engine: &mut TimelineEngine<R>,
    count: usize,
) -> TimelineResult<()> {
    let (Some(start), Some(end)) = (engine.start_date(), engine.end_date()) else {
        return Ok(());
    };
    let whole_start = floor_date(start);
    engine.add_item(TimelineItem::at(whole_start + TimeDelta::minutes(1)))?;
    engine.add_item(
        TimelineItem::at(whole_start + TimeDelta::minutes(3)).with_duration(TimeDelta::minutes(8)),
    )?;
    engine.add_item(
        TimelineItem::at(whole_start + TimeDelta::minutes(3)).with_duration(TimeDelta::minutes(1)),
    )?;

    let span_seconds = (end - start).num_seconds().max(0) as f64;
    // Golden-ratio stepping gives a deterministic, well spread sequence.
    let step = 0.618_033_988_749_895_f64;
    for index in 0..count {
        let fraction = (index as f64 * step).fract();
        let offset = TimeDelta::seconds((fraction * span_seconds) as i64);
        engine.add_item(TimelineItem::at(start + offset))?;
    }
    engine.add_item(TimelineItem::at(floor_date(end)))?;
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--output" => parsed.output = Some(PathBuf::from(value("--output")?)),
            "--events" => {
                let raw = value("--events")?;
                parsed.events = Some(
                    raw.parse()
                        .map_err(|err| format!("invalid --events `{raw}`: {err}"))?,
                );
            }
            "--time-unit" => {
                let raw = value("--time-unit")?;
                parsed.time_unit_minutes = Some(
                    raw.parse()
                        .map_err(|err| format!("invalid --time-unit `{raw}`: {err}"))?,
                );
            }
            "--scroll" => {
                let raw = value("--scroll")?;
                parsed.scroll_px = Some(
                    raw.parse()
                        .map_err(|err| format!("invalid --scroll `{raw}`: {err}"))?,
                );
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }
    Ok(parsed)
}
