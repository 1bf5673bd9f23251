// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider OpenKeyframe project*
//!
//! Command line tool for inspecting a keyframe list and trying out the
//! keyframe toggle action
//!

use clap::{Parser, Subcommand, ValueEnum, builder::PossibleValue};
use open_keyframe_actions::{
    Action, ActionError, Canvas, KeyframeChangedSignal, KeyframeToggle, Param, SharedCanvas,
};
use open_keyframe_core::{Keyframe, KeyframeList, Time};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::rc::Rc;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the keyframe tool
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("open_keyframe")
        .add_filter_allow_str("keyframes")
        .build();

    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
        std::process::exit(1);
    }

    let canvas = build_canvas(&args.keyframe, &args.disabled);
    canvas.borrow().keyframe_list().dump();

    match &args.command {
        Command::List => print_list(canvas.borrow().keyframe_list()),
        Command::Next { time, search } => {
            match canvas
                .borrow()
                .keyframe_list()
                .find_next(*time, !search.include_disabled)
            {
                Some(keyframe) => print_keyframe(keyframe),
                None => println!("No keyframe after {time}"),
            }
        }
        Command::Prev { time, search } => {
            match canvas
                .borrow()
                .keyframe_list()
                .find_prev(*time, !search.include_disabled)
            {
                Some(keyframe) => print_keyframe(keyframe),
                None => println!("No keyframe before {time}"),
            }
        }
        Command::Around { time, search } => {
            let (prev, next) = canvas
                .borrow()
                .keyframe_list()
                .find_prev_next(*time, !search.include_disabled);
            println!("{prev}\t{next}");
        }
        Command::Toggle { time } => {
            if let Err(error) = toggle(&canvas, *time) {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        }
    }
}

/// Toggle the keyframe at `time`, then undo it, printing the list after each
/// step
fn toggle(canvas: &SharedCanvas, time: Time) -> Result<(), ActionError> {
    let keyframe = canvas
        .borrow()
        .keyframe_list()
        .find_by_time(time)
        .cloned()
        .ok_or_else(|| ActionError::NotFound(format!("No keyframe at {time}")))?;

    let signal = Rc::new(KeyframeChangedSignal::new());
    signal.connect(|keyframe: &Keyframe| {
        info!(
            "keyframe {} at {} changed (was active: {})",
            keyframe.id(),
            keyframe.time(),
            keyframe.active()
        )
    });

    let mut action = KeyframeToggle::new();
    action.set_param("keyframe", Param::Keyframe(keyframe))?;
    action.set_param("canvas", Param::Canvas(Rc::clone(canvas)))?;
    action.set_param("canvas_interface", Param::CanvasInterface(signal))?;
    println!("{}", action.info().local_name);

    action.prepare()?;

    action.perform()?;
    println!("After perform:");
    print_list(canvas.borrow().keyframe_list());

    action.undo()?;
    println!("After undo:");
    print_list(canvas.borrow().keyframe_list());

    Ok(())
}

/// Build a canvas from the enabled and disabled keyframe times
fn build_canvas(enabled: &[Time], disabled: &[Time]) -> SharedCanvas {
    let mut keyframes = KeyframeList::new();
    for time in enabled {
        keyframes.add(Keyframe::new(*time));
    }
    for time in disabled {
        match keyframes.find_by_time_mut(*time) {
            Some(keyframe) => keyframe.disable(),
            None => {
                let mut keyframe = Keyframe::new(*time);
                keyframe.disable();
                keyframes.add(keyframe);
            }
        }
    }
    Canvas::from_keyframes(keyframes).into_shared()
}

fn print_list(keyframes: &KeyframeList) {
    if keyframes.is_empty() {
        println!("No keyframes");
    }
    for keyframe in keyframes {
        print_keyframe(keyframe);
    }
}

fn print_keyframe(keyframe: &Keyframe) {
    let state = if keyframe.active() { "active" } else { "disabled" };
    println!("{}\t{state}\t{}", keyframe.time(), keyframe.id());
}

/// Parse a frame number into a [`Time`]
fn parse_time(string: &str) -> Result<Time, String> {
    let value: i64 = string
        .parse()
        .map_err(|error| format!("not a frame number: {error}"))?;
    Time::try_from(value).map_err(|error| error.to_string())
}

/// OpenKeyframe CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "OpenKeyframe tool for searching and toggling keyframes",
    after_help = "Times are frame numbers.  Keyframes only live for one run."
)]
pub struct Cli {
    /// Add an active keyframe at this time
    #[arg(long, value_parser = parse_time, allow_hyphen_values = true)]
    pub keyframe: Vec<Time>,

    /// Add (or mark) a disabled keyframe at this time
    #[arg(long, value_parser = parse_time, allow_hyphen_values = true)]
    pub disabled: Vec<Time>,

    /// How much to log
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every keyframe in time order
    List,

    /// Print the first keyframe after a time
    Next {
        #[arg(value_parser = parse_time, allow_hyphen_values = true)]
        time: Time,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the nearest keyframe before a time
    Prev {
        #[arg(value_parser = parse_time, allow_hyphen_values = true)]
        time: Time,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the keyframe times either side of a time
    Around {
        #[arg(value_parser = parse_time, allow_hyphen_values = true)]
        time: Time,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Toggle the keyframe at a time, then undo
    Toggle {
        #[arg(value_parser = parse_time, allow_hyphen_values = true)]
        time: Time,
    },
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Don't skip disabled keyframes
    #[arg(long)]
    pub include_disabled: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Off,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            LogLevel::Off => Some(PossibleValue::new("off").help("Log nothing")),
            LogLevel::Error => Some(PossibleValue::new("error")),
            LogLevel::Warn => Some(PossibleValue::new("warn")),
            LogLevel::Info => Some(PossibleValue::new("info").help("The default")),
            LogLevel::Debug => Some(PossibleValue::new("debug")),
            LogLevel::Trace => {
                Some(PossibleValue::new("trace").help("Includes every search step"))
            }
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
