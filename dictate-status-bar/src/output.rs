// SPDX-License-Identifier: GPL-3.0-only
use clap::ValueEnum;
use serde::Serialize;

use dictate_status_client::state::DisplayState;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Bare indicator text, one line
    Plain,
    /// One-line JSON for waybar custom modules (`text` plus `class`)
    Waybar,
}

/// Shape waybar expects from a custom module; severity tags land in `class`
/// so CSS can style the recording indicator.
#[derive(Serialize)]
struct WaybarOutput<'a> {
    text: &'a str,
    class: &'a [String],
}

impl Format {
    /// Render the display state as the single stdout line for this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(self, state: &DisplayState) -> Result<String, serde_json::Error> {
        match self {
            Self::Plain => Ok(state.text.clone()),
            Self::Waybar => serde_json::to_string(&WaybarOutput {
                text: &state.text,
                class: &state.tags,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prints_indicator_text() {
        assert_eq!(
            Format::Plain.render(&DisplayState::recording()).unwrap(),
            "REC"
        );
        assert_eq!(Format::Plain.render(&DisplayState::idle()).unwrap(), "");
    }

    #[test]
    fn test_waybar_carries_tags_as_classes() {
        assert_eq!(
            Format::Waybar.render(&DisplayState::recording()).unwrap(),
            r#"{"text":"REC","class":["critical"]}"#
        );
        assert_eq!(
            Format::Waybar.render(&DisplayState::idle()).unwrap(),
            r#"{"text":"","class":[]}"#
        );
    }
}
