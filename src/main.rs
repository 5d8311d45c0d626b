// Countdown Card
// Terminal host: draws the card to stdout and reads button presses from stdin

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use parking_lot::Mutex;

use countdown_card::models::mode::CountdownMode;
use countdown_card::services::countdown::{Clock, CountdownDisplay, LabelSink, SystemClock};
use countdown_card::services::settings::SettingsService;

/// Command line options
#[derive(Parser)]
#[command(name = "countdown-card")]
#[command(about = "Countdown to end of workday, weekend, holidays, birthday and year-end")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to config.toml in the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mode to show first, e.g. next_holiday or end_of_year
    #[arg(short, long)]
    mode: Option<String>,

    /// Draw a single frame and exit
    #[arg(long)]
    once: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Writes each new frame to stdout. Repeated identical frames are skipped.
#[derive(Default)]
struct TerminalSink {
    indicator: String,
    last_frame: Option<String>,
}

impl LabelSink for TerminalSink {
    fn set_text(&mut self, text: &str) {
        let frame = format!("[{}]\n{}", self.indicator, text);
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return;
        }
        let mut out = io::stdout().lock();
        // A closed stdout just means nobody is watching.
        let _ = writeln!(out, "{frame}\n");
        let _ = out.flush();
        self.last_frame = Some(frame);
    }

    fn set_mode_indicator(&mut self, indicator: &str) {
        self.indicator = indicator.to_string();
    }
}

type TerminalDisplay = CountdownDisplay<SystemClock, TerminalSink>;

enum InputEvent {
    Button(u8),
    Quit,
}

fn parse_input(line: &str) -> Option<InputEvent> {
    match line.trim() {
        "" => Some(InputEvent::Button(1)),
        "q" | "quit" => Some(InputEvent::Quit),
        other => other.parse().ok().map(InputEvent::Button),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    log::info!("Starting countdown card");

    let settings = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let config = settings.load()?;
    let interval = Duration::from_secs(config.refresh_interval_secs);
    let clock = SystemClock::new(config.min_valid_year);

    let mut display = CountdownDisplay::new(config, clock, TerminalSink::default())
        .context("Failed to set up countdown display")?;

    if let Some(name) = &cli.mode {
        let Some(mode) = CountdownMode::from_name(name) else {
            let known: Vec<_> = CountdownMode::ALL.iter().map(|m| m.name()).collect();
            bail!("Unknown mode '{}', expected one of: {}", name, known.join(", "));
        };
        if let Err(err) = display.set_mode(mode) {
            log::warn!("Initial draw failed: {err}");
        }
    }

    if cli.once {
        display.refresh().context("Failed to compute countdown")?;
        return Ok(());
    }

    run(display, interval)
}

/// Refresh loop. Button presses are handled on the stdin thread, so the
/// display sits behind a mutex shared with the refresh tick.
fn run(display: TerminalDisplay, interval: Duration) -> Result<()> {
    let display = Arc::new(Mutex::new(display));

    eprintln!("Enter: next mode, <n>: press button n, q: quit");
    if let Err(err) = display.lock().refresh() {
        log::warn!("Refresh failed: {err}");
    }

    let ticks = run_loop(display, io::BufReader::new(io::stdin()), interval, None);
    log::info!("Countdown card stopped after {ticks} refreshes");
    Ok(())
}

/// Refreshes every `interval` until `q` arrives on `input`, or until
/// `max_ticks` refreshes when set. End of input only stops the input thread;
/// a headless host with no stdin keeps refreshing. Returns the tick count.
fn run_loop<C, S, R>(
    display: Arc<Mutex<CountdownDisplay<C, S>>>,
    input: R,
    interval: Duration,
    max_ticks: Option<usize>,
) -> usize
where
    C: Clock + Send + 'static,
    S: LabelSink + Send + 'static,
    R: BufRead + Send + 'static,
{
    // Held for the whole loop so the channel never reports a disconnect.
    let (quit_tx, quit_rx) = mpsc::channel::<()>();

    let input_tx = quit_tx.clone();
    let input_display = Arc::clone(&display);
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else { break };
            match parse_input(&line) {
                Some(InputEvent::Button(index)) => {
                    if !input_display.lock().handle_button(index) {
                        log::debug!("Button {index} not handled");
                    }
                }
                Some(InputEvent::Quit) => {
                    let _ = input_tx.send(());
                    return;
                }
                None => log::debug!("Ignoring input {line:?}"),
            }
        }
        log::debug!("Input closed, refreshing until stopped");
    });

    let mut ticks = 0;
    while max_ticks.map_or(true, |max| ticks < max) {
        match quit_rx.recv_timeout(interval) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                if let Err(err) = display.lock().refresh() {
                    log::warn!("Refresh failed: {err}");
                }
                ticks += 1;
            }
        }
    }

    drop(quit_tx);
    ticks
}
