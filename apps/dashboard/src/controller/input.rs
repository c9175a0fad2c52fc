//! Text commands for the two dashboard controls and the control state they
//! edit. The state always holds both fields so every change carries the
//! untouched control's current value.

use shared::{
    domain::{PayloadRange, Selection, SiteFilter, ALL_SITES},
    protocol::DashboardLayout,
};

use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext};

pub const HELP: &str = "\
commands:
  site <NAME|ALL>    choose a launch site
  range <lo> <hi>    set the payload range in kg
  min <lo>           move the lower payload bound
  max <hi>           move the upper payload bound
  reset              restore the initial selection
  show               print the controls
  help               print this help
  quit               exit";

#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    Site(SiteFilter),
    Range(PayloadRange),
    Min(f64),
    Max(f64),
    Reset,
    Show,
    Help,
    Quit,
}

fn parse_mass(raw: &str) -> Result<f64, UiError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            UiError::new(
                UiErrorCategory::Validation,
                UiErrorContext::Input,
                format!("invalid payload mass '{raw}', expected kilograms"),
            )
        })
}

/// Typed site value. The `ALL` sentinel is accepted in any case; site
/// names stay case-sensitive.
pub fn parse_site(raw: &str) -> SiteFilter {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(ALL_SITES) {
        SiteFilter::All
    } else {
        SiteFilter::parse(raw)
    }
}

pub fn parse_command(line: &str) -> Result<InputCommand, UiError> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("site", [_, ..]) => InputCommand::Site(parse_site(rest)),
        ("range", [lo, hi]) => InputCommand::Range(PayloadRange::new(parse_mass(lo)?, parse_mass(hi)?)),
        ("min", [lo]) => InputCommand::Min(parse_mass(lo)?),
        ("max", [hi]) => InputCommand::Max(parse_mass(hi)?),
        ("reset", []) => InputCommand::Reset,
        ("show", []) => InputCommand::Show,
        ("help", []) | ("?", []) => InputCommand::Help,
        ("quit", []) | ("exit", []) => InputCommand::Quit,
        _ => {
            return Err(UiError::new(
                UiErrorCategory::Validation,
                UiErrorContext::Input,
                format!("unknown command '{line}'; type 'help' for the command list"),
            ))
        }
    };
    Ok(command)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    selection: Selection,
}

impl ControlState {
    pub fn new(layout: &DashboardLayout) -> Self {
        Self {
            selection: layout.initial_selection.clone(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Applies a control edit. Returns the full selection to send when a
    /// control changed, `None` for commands that only display things.
    pub fn apply(
        &mut self,
        command: &InputCommand,
        layout: &DashboardLayout,
    ) -> Result<Option<Selection>, UiError> {
        let next = match command {
            InputCommand::Site(filter) => {
                let Some(option) = layout.option_for(&filter.to_string()) else {
                    let choices: Vec<&str> = layout
                        .site_options
                        .iter()
                        .map(|option| option.label.as_str())
                        .collect();
                    return Err(UiError::new(
                        UiErrorCategory::Validation,
                        UiErrorContext::Input,
                        format!("unknown site '{filter}'; choose one of: {}", choices.join(", ")),
                    ));
                };
                self.selection.with_site(option.value.clone())
            }
            InputCommand::Range(range) => self.checked_range(*range, layout)?,
            InputCommand::Min(lo) => {
                let range = PayloadRange::new(*lo, self.selection.payload_range.hi);
                self.checked_range(range, layout)?
            }
            InputCommand::Max(hi) => {
                let range = PayloadRange::new(self.selection.payload_range.lo, *hi);
                self.checked_range(range, layout)?
            }
            InputCommand::Reset => layout.initial_selection.clone(),
            InputCommand::Show | InputCommand::Help | InputCommand::Quit => return Ok(None),
        };

        self.selection = next.clone();
        Ok(Some(next))
    }

    fn checked_range(
        &self,
        range: PayloadRange,
        layout: &DashboardLayout,
    ) -> Result<Selection, UiError> {
        let slider = layout.payload_slider;
        if !slider.admits(&range) {
            return Err(UiError::new(
                UiErrorCategory::Validation,
                UiErrorContext::Input,
                format!(
                    "payload range {range} is outside the slider domain [{}, {}] or inverted",
                    slider.min, slider.max
                ),
            ));
        }
        Ok(self.selection.with_range(range))
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
