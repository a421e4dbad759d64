// SPDX-License-Identifier: MPL-2.0
use iced_core::Size;
use photo_lens::config;
use photo_lens::config::paths;
use photo_lens::error::{Error, Result};
use photo_lens::replay::{self, GestureScript};
use photo_lens::ui::state::GestureTuning;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
photo_lens - replay a gesture script through the photo viewer

USAGE:
    photo_lens [OPTIONS] SCRIPT.toml

OPTIONS:
    --config-dir DIR    Read settings.toml from DIR
    --screen WxH        Override the logical screen size
    -v                  Increase log verbosity (repeatable)
    -h, --help          Print this help
";

#[derive(Debug)]
struct Args {
    config_dir: Option<String>,
    screen: Option<Size>,
    verbosity: u8,
    script: PathBuf,
}

fn parse_screen(value: &str) -> std::result::Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{value}'"))?;
    let width: f32 = width.trim().parse().map_err(|_| format!("bad width '{width}'"))?;
    let height: f32 = height
        .trim()
        .parse()
        .map_err(|_| format!("bad height '{height}'"))?;
    if !(width >= 1.0 && height >= 1.0) {
        return Err(format!("screen must be at least 1x1, got '{value}'"));
    }
    Ok(Size::new(width, height))
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut verbosity = 0u8;
    while args.contains("-v") {
        verbosity = verbosity.saturating_add(1);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let screen = args.opt_value_from_fn("--screen", parse_screen)?;
    let script = args.free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring extra arguments {rest:?}");
    }

    Ok(Some(Args {
        config_dir,
        screen,
        verbosity,
        script,
    }))
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn run(args: &Args) -> Result<()> {
    paths::init_cli_override(args.config_dir.clone());

    let (settings, warning) = config::load();
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    let script = GestureScript::load(&args.script)?;
    let mut tuning = script.tuning(GestureTuning::from_config(&settings));
    if let Some(screen) = args.screen {
        tuning = tuning.with_screen(screen);
    }
    log::debug!("Replaying {} with {tuning:?}", args.script.display());

    let report = replay::run(&script, tuning);
    println!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_logging(args.verbosity);
    log::info!("photo_lens {} starting", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Script(_)) | Err(err @ Error::Config(_)) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
