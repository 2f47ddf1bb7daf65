use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::command::{Action, CalcCommand, Operator};
use crate::constants::{
    CALC_DECIMAL_PLACES, CALC_DIVIDE_BY_ZERO_MESSAGE, CALC_ERROR_CLEAR_MS, CALC_MAX_ENTRY_LEN,
};
use crate::timer::OneShot;

/// Tunables for the calculator engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcSettings {
    /// Longest entry digit input may grow to
    pub max_entry_len: usize,
    /// Decimal places results are rounded to
    pub decimal_places: u32,
    /// How long an error stays on screen before the calculator resets
    pub error_clear_delay: Duration,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            max_entry_len: CALC_MAX_ENTRY_LEN,
            decimal_places: CALC_DECIMAL_PLACES,
            error_clear_delay: Duration::from_millis(CALC_ERROR_CLEAR_MS),
        }
    }
}

/// What the display regions currently show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcView {
    /// Primary display: the entry, or an error message
    pub display: String,
    /// Secondary "previous operation" indicator, e.g. `12 ×`
    pub previous_operation: String,
    pub is_error: bool,
}

/// Four-function calculator state machine
#[derive(Debug, Clone)]
pub struct Calculator {
    settings: CalcSettings,
    current_entry: String,
    pending_operand: String,
    pending_operator: Option<Operator>,
    awaiting_fresh_entry: bool,
    last_result: Option<f64>,
    previous_operation: String,
    error: Option<String>,
    error_timer: OneShot<()>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalcSettings::default())
    }
}

impl Calculator {
    pub fn new(settings: CalcSettings) -> Self {
        Self {
            settings,
            current_entry: "0".to_string(),
            pending_operand: String::new(),
            pending_operator: None,
            awaiting_fresh_entry: false,
            last_result: None,
            previous_operation: String::new(),
            error: None,
            error_timer: OneShot::new(),
        }
    }

    /// Dispatch a command to the matching operation
    pub fn apply(&mut self, command: CalcCommand) {
        match command {
            CalcCommand::Digit(_) | CalcCommand::Point => {
                if let Some(token) = command.entry_char() {
                    self.append_digit_or_point(token);
                }
            }
            CalcCommand::Operator(op) => self.choose_operator(op),
            CalcCommand::Action(Action::Equals) => self.compute(),
            CalcCommand::Action(Action::Clear) => self.clear(),
            CalcCommand::Action(Action::Delete) => self.delete_last_char(),
        }
    }

    /// Advance deferred work by `elapsed`; fires the error auto-clear when due
    pub fn tick(&mut self, elapsed: Duration) {
        if self.error_timer.advance(elapsed).is_some() {
            debug!("error display expired, resetting calculator");
            self.clear();
        }
    }

    /// Append a digit or the decimal point to the current entry
    pub fn append_digit_or_point(&mut self, token: char) {
        if self.awaiting_fresh_entry {
            self.current_entry = "0".to_string();
            self.awaiting_fresh_entry = false;
        }

        if token == '.' {
            if self.current_entry.contains('.') {
                return;
            }
            if self.current_entry == "0" || self.current_entry.is_empty() {
                self.current_entry = "0.".to_string();
            } else {
                self.current_entry.push('.');
            }
        } else if token.is_ascii_digit() {
            if self.current_entry == "0" {
                self.current_entry = token.to_string();
            } else if self.current_entry.len() < self.settings.max_entry_len {
                self.current_entry.push(token);
            }
        } else {
            return;
        }

        self.refresh_display();
    }

    /// Select the pending operator, folding any completed pending operation first
    pub fn choose_operator(&mut self, op: Operator) {
        if self.pending_operator.is_some() && !self.awaiting_fresh_entry {
            self.compute();
        }

        self.pending_operand = self.current_entry.clone();
        self.pending_operator = Some(op);
        self.awaiting_fresh_entry = true;
        self.refresh_previous_operation();
    }

    /// Apply the pending operator to the pending operand and the current entry
    pub fn compute(&mut self) {
        let Some(op) = self.pending_operator else {
            return;
        };
        if self.pending_operand.is_empty() {
            return;
        }

        let (Ok(lhs), Ok(rhs)) = (
            self.pending_operand.parse::<f64>(),
            self.current_entry.parse::<f64>(),
        ) else {
            return;
        };
        // "NaN" parses, but it is not a number to compute with
        if lhs.is_nan() || rhs.is_nan() {
            return;
        }

        if op == Operator::Divide && rhs == 0.0 {
            self.display_error(CALC_DIVIDE_BY_ZERO_MESSAGE);
            return;
        }

        let result = round_to(op.apply(lhs, rhs), self.settings.decimal_places);
        debug!(lhs, rhs, ?op, result, "computed");

        self.last_result = Some(result);
        self.current_entry = format_number(result);
        self.pending_operator = None;
        self.pending_operand.clear();
        self.awaiting_fresh_entry = true;

        self.refresh_display();
        self.refresh_previous_operation();
    }

    /// Reset everything to the initial state
    pub fn clear(&mut self) {
        self.current_entry = "0".to_string();
        self.pending_operand.clear();
        self.pending_operator = None;
        self.awaiting_fresh_entry = false;
        self.last_result = None;
        self.error_timer.cancel();

        self.refresh_display();
        self.refresh_previous_operation();
    }

    /// Backspace over the current entry
    pub fn delete_last_char(&mut self) {
        if self.awaiting_fresh_entry {
            return;
        }

        self.current_entry.pop();
        if self.current_entry.is_empty() || self.current_entry == "-" {
            self.current_entry = "0".to_string();
        }

        self.refresh_display();
    }

    /// Show `message` in place of the entry and reset once the delay runs out.
    /// A second error before then restarts the delay.
    pub fn display_error(&mut self, message: &str) {
        debug!(message, "calculator error");
        self.error = Some(message.to_string());
        self.error_timer.arm(self.settings.error_clear_delay, ());
    }

    pub fn view(&self) -> CalcView {
        CalcView {
            display: self
                .error
                .clone()
                .unwrap_or_else(|| self.current_entry.clone()),
            previous_operation: self.previous_operation.clone(),
            is_error: self.error.is_some(),
        }
    }

    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    pub fn pending_operand(&self) -> &str {
        &self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Time left before a visible error clears itself
    pub fn error_time_remaining(&self) -> Option<Duration> {
        self.error_timer.remaining()
    }

    fn refresh_display(&mut self) {
        self.error = None;
    }

    fn refresh_previous_operation(&mut self) {
        self.previous_operation = match self.pending_operator {
            Some(op) if !self.pending_operand.is_empty() => {
                format!("{} {}", self.pending_operand, op.glyph())
            }
            _ => String::new(),
        };
    }
}

/// Round to `places` decimals, halves going toward positive infinity
fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    let floor = scaled.floor();
    // whole values, even above 2^52, come back unchanged
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}

fn format_number(value: f64) -> String {
    // -0 displays as 0
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}
