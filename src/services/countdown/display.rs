//! Display adapter.
//!
//! Sits between the host UI loop and the engine: recomputes on every
//! refresh tick, formats the result and pushes it into the visible label.
//! Creating, styling and laying out the label is the host's job.

use super::clock::Clock;
use super::engine::{CountdownEngine, CountdownResult};
use super::error::CountdownError;
use crate::models::config::CountdownConfig;
use crate::models::mode::CountdownMode;

/// Shown in place of the value when no countdown could be computed.
pub const PLACEHOLDER_VALUE: &str = "---";

/// The writable text elements of the card.
pub trait LabelSink {
    /// Replace the main label's text.
    fn set_text(&mut self, text: &str);

    /// Replace the small "3/6" position indicator. Hosts without one can
    /// ignore it.
    fn set_mode_indicator(&mut self, _indicator: &str) {}
}

impl<S: LabelSink + ?Sized> LabelSink for &mut S {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_mode_indicator(&mut self, indicator: &str) {
        (**self).set_mode_indicator(indicator);
    }
}

/// `"<mode label>\n<value> <unit>"`, plus `"\n(<context>)"` when present.
pub fn format_label(result: &CountdownResult) -> String {
    let mut text = format!("{}\n{} {}", result.mode.label(), result.value, result.unit);
    if let Some(context) = &result.context {
        text.push_str(&format!("\n({context})"));
    }
    text
}

/// Label used when the countdown could not be computed.
pub fn format_unavailable(mode: CountdownMode) -> String {
    format!("{}\n{PLACEHOLDER_VALUE}", mode.label())
}

/// One-based position of `mode` out of all modes, e.g. `"2/6"`.
pub fn mode_indicator(mode: CountdownMode) -> String {
    format!("{}/{}", mode.position() + 1, CountdownMode::ALL.len())
}

/// Owns the engine and the label it draws into.
pub struct CountdownDisplay<C: Clock, S: LabelSink> {
    engine: CountdownEngine<C>,
    sink: S,
    cycle_button: u8,
}

impl<C: Clock, S: LabelSink> CountdownDisplay<C, S> {
    /// Validates the configuration. Nothing is drawn until the first refresh.
    pub fn new(config: CountdownConfig, clock: C, sink: S) -> Result<Self, CountdownError> {
        let cycle_button = config.cycle_button;
        let engine = CountdownEngine::new(config, clock)?;
        Ok(Self {
            engine,
            sink,
            cycle_button,
        })
    }

    pub fn mode(&self) -> CountdownMode {
        self.engine.mode()
    }

    pub fn engine(&self) -> &CountdownEngine<C> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Recomputes the selected countdown and redraws.
    ///
    /// On failure the label shows a placeholder instead of a stale value and
    /// the error is returned.
    pub fn refresh(&mut self) -> Result<CountdownResult, CountdownError> {
        let mode = self.engine.mode();
        self.sink.set_mode_indicator(&mode_indicator(mode));
        match self.engine.current() {
            Ok(result) => {
                self.sink.set_text(&format_label(&result));
                Ok(result)
            }
            Err(err) => {
                log::warn!("Countdown for {mode:?} unavailable: {err}");
                self.sink.set_text(&format_unavailable(mode));
                Err(err)
            }
        }
    }

    /// Advances to the next mode and redraws immediately.
    pub fn cycle_mode(&mut self) -> Result<CountdownResult, CountdownError> {
        let mode = self.engine.cycle();
        log::info!("Countdown mode changed to {mode:?}");
        self.refresh()
    }

    /// Selects `mode` and redraws.
    pub fn set_mode(&mut self, mode: CountdownMode) -> Result<CountdownResult, CountdownError> {
        self.engine.set_mode(mode);
        self.refresh()
    }

    /// Routes a button press. Only the configured cycle button is handled;
    /// `false` means the press was not for this card.
    ///
    /// A handled press always advances the mode. If the redraw that follows
    /// fails, the label already shows the placeholder and the failure is
    /// logged; the press still counts as handled.
    pub fn handle_button(&mut self, button_index: u8) -> bool {
        if button_index != self.cycle_button {
            log::debug!("Ignoring button {button_index}");
            return false;
        }
        if let Err(err) = self.cycle_mode() {
            log::warn!("Redraw after button {button_index} failed: {err}");
        }
        true
    }
}
