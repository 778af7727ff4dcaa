// SPDX-License-Identifier: GPL-3.0-only
use crate::models::protocol::ACTIVE_REPLY;

/// Text shown while the daemon is capturing audio.
pub const RECORDING_TEXT: &str = "REC";

/// Severity tag attached to the recording indicator so bars style it as
/// demanding attention.
pub const CRITICAL_TAG: &str = "critical";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationState {
    Active,
    Idle,
}

impl DictationState {
    /// Interpret a stripped reply token. Only the exact active token counts;
    /// an unexpected token reads as idle rather than erroring.
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        if reply == ACTIVE_REPLY {
            Self::Active
        } else {
            Self::Idle
        }
    }
}

/// What a status bar renders for one poll: the text row plus the severity
/// tags styling it. Rebuilt from scratch every poll; nothing carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub text: String,
    pub tags: Vec<String>,
}

impl DisplayState {
    #[must_use]
    pub fn recording() -> Self {
        Self::from_text(RECORDING_TEXT)
    }

    #[must_use]
    pub fn idle() -> Self {
        Self::from_text("")
    }

    /// Build a display state with its tags derived from the text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tags: severity_tags(text),
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.text == RECORDING_TEXT
    }
}

impl From<DictationState> for DisplayState {
    fn from(state: DictationState) -> Self {
        match state {
            DictationState::Active => Self::recording(),
            DictationState::Idle => Self::idle(),
        }
    }
}

/// Severity tags for a rendered text row. A pure function of the text so
/// hosts can re-derive tags at render time without another poll.
#[must_use]
pub fn severity_tags(text: &str) -> Vec<String> {
    if text == RECORDING_TEXT {
        vec![CRITICAL_TAG.to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_active_token_counts() {
        assert_eq!(DictationState::from_reply("active"), DictationState::Active);

        assert_eq!(DictationState::from_reply("Active"), DictationState::Idle);
        assert_eq!(DictationState::from_reply("ACTIVE"), DictationState::Idle);
        assert_eq!(DictationState::from_reply("activex"), DictationState::Idle);
        assert_eq!(DictationState::from_reply(" active"), DictationState::Idle);
        assert_eq!(DictationState::from_reply("idle"), DictationState::Idle);
        assert_eq!(DictationState::from_reply(""), DictationState::Idle);
    }

    #[test]
    fn test_recording_display_state() {
        let state = DisplayState::recording();
        assert_eq!(state.text, RECORDING_TEXT);
        assert_eq!(state.tags, vec![CRITICAL_TAG.to_string()]);
        assert!(state.is_recording());
    }

    #[test]
    fn test_idle_display_state() {
        let state = DisplayState::idle();
        assert_eq!(state.text, "");
        assert!(state.tags.is_empty());
        assert!(!state.is_recording());
    }

    #[test]
    fn test_display_state_from_dictation_state() {
        assert_eq!(
            DisplayState::from(DictationState::Active),
            DisplayState::recording()
        );
        assert_eq!(
            DisplayState::from(DictationState::Idle),
            DisplayState::idle()
        );
    }

    #[test]
    fn test_severity_tags_depend_on_text_alone() {
        assert_eq!(severity_tags(RECORDING_TEXT), vec![CRITICAL_TAG.to_string()]);

        assert!(severity_tags("").is_empty());
        assert!(severity_tags("rec").is_empty());
        assert!(severity_tags("RECORDING").is_empty());
        assert!(severity_tags("active").is_empty());
    }

    #[test]
    fn test_tags_always_match_text() {
        for text in ["", RECORDING_TEXT, "something else"] {
            let state = DisplayState::from_text(text);
            assert_eq!(state.tags, severity_tags(&state.text));
        }
    }
}
