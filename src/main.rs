//! spark-timepicker - edit a time on the command line.
//!
//! Draws `Time: HH:MM:SS` on the current line, lets you edit it with the
//! arrow keys and digits, and prints the value on Enter.
//!
//! Run with: cargo run -- --initial 08:30:00

use std::io::stdout;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use spark_timepicker::config::DEFAULT_CONFIG_FILE;
use spark_timepicker::{
    logging, mount, run, Config, Exit, Result, TerminalEvents, TerminalField, TimePicker,
};

/// Keyboard-driven HH:MM:SS picker
#[derive(Parser, Debug)]
#[command(name = "spark-timepicker", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./timepicker.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting value, HH:MM:SS
    #[arg(short, long)]
    initial: Option<String>,

    /// Idle milliseconds before typed digits stop combining (0 = never)
    #[arg(long)]
    idle_ms: Option<u64>,

    /// Log level when RUST_LOG is unset (logs go to stderr)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    dump_config: bool,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        let path = match &self.config {
            Some(path) => Some(path.as_path()),
            None if default_path.exists() => Some(default_path),
            None => None,
        };

        let mut config = Config::load(path)?;
        if let Some(initial) = &self.initial {
            config.picker.initial = initial.clone();
        }
        if let Some(idle_ms) = self.idle_ms {
            config.picker.idle_reset_ms = idle_ms;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match pick(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("spark-timepicker: {err}");
            ExitCode::FAILURE
        }
    }
}

fn pick(cli: &Cli) -> Result<ExitCode> {
    let config = cli.load_config()?;

    if cli.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(&config.log.level)?;
    info!(initial = %config.picker.initial, idle_reset_ms = config.picker.idle_reset_ms, "starting");

    let field = TerminalField::new(stdout())
        .with_label(config.display.label.clone())
        .with_highlight(config.highlight_attr()?);
    let mut picker = TimePicker::with_policy(field, config.buffer_policy());
    picker.set_time(config.initial_time()?);

    let handle = mount()?;
    let exit = run(&mut picker, &mut TerminalEvents);
    let finished = picker.host_mut().finish();
    handle.unmount();
    finished?;

    match exit? {
        Exit::Submitted(time) => {
            info!(%time, "submitted");
            println!("{time}");
            Ok(ExitCode::SUCCESS)
        }
        Exit::Cancelled => {
            info!("cancelled");
            Ok(ExitCode::from(1))
        }
    }
}
