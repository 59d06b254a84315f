//! Per-session navigation and preference state.
//!
//! The state lives in an explicit struct passed by reference into the page
//! renderers; nothing here is ambient or global. It is created once per
//! interactive session with defaults and mutated only through the event
//! methods, which keep the transition invariants: the pending input and the
//! selected model are always written as a pair, and returning home clears
//! them both.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::features::FeatureVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct LanguageParseError(String);

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// The two pages of the navigation machine. There is no terminal state;
/// the machine cycles between them for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Result,
}

/// Raised when the predict transition out of the home page is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no models are available")]
    EmptyRegistry,
    #[error("no model selected")]
    NoModelSelected,
}

impl SelectionError {
    pub fn translation_key(&self) -> &'static str {
        match self {
            SelectionError::EmptyRegistry => "no_models_found",
            SelectionError::NoModelSelected => "no_model_selected",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    language: Language,
    theme: Theme,
    page: Page,
    pending_input: Option<FeatureVector>,
    selected_model: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            theme: Theme::Light,
            page: Page::Home,
            pending_input: None,
            selected_model: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// The pending input/model pair carried from the home page to the
    /// result page, if one is in flight.
    pub fn pending(&self) -> Option<(&FeatureVector, &str)> {
        match (&self.pending_input, &self.selected_model) {
            (Some(input), Some(model)) => Some((input, model.as_str())),
            _ => None,
        }
    }

    /// Language is orthogonal to navigation: switching never touches the
    /// page or the pending pair.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Theme is equally orthogonal, from either page.
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// Writes the pending pair together and moves to the result page.
    ///
    /// Guarding the transition (a model must be selected, the registry must
    /// not be empty) is the page controller's job; by the time this is
    /// called the selection is known to exist.
    pub fn submit_prediction(&mut self, input: FeatureVector, model: impl Into<String>) {
        self.pending_input = Some(input);
        self.selected_model = Some(model.into());
        self.page = Page::Result;
    }

    /// Unconditional back-transition, valid from any prior error state.
    /// Pending data from the finished cycle is cleared so a later predict
    /// can never silently reuse a stale selection.
    pub fn return_home(&mut self) {
        self.page = Page::Home;
        self.pending_input = None;
        self.selected_model = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SessionState::new();
        assert_eq!(state.language(), Language::En);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.page(), Page::Home);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut state = SessionState::new();
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_preferences_survive_navigation() {
        let mut state = SessionState::new();
        state.set_language(Language::Ar);
        state.toggle_theme();

        let input = FeatureVector::new([2.0, 130.0, 70.0, 20.0, 80.0, 28.5, 0.35, 33.0]);
        state.submit_prediction(input, "logreg.json");
        assert_eq!(state.language(), Language::Ar);
        assert_eq!(state.theme(), Theme::Dark);

        state.return_home();
        assert_eq!(state.language(), Language::Ar);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_submit_writes_pair_and_transitions() {
        let mut state = SessionState::new();
        let input = FeatureVector::new([2.0, 130.0, 70.0, 20.0, 80.0, 28.5, 0.35, 33.0]);
        state.submit_prediction(input.clone(), "mlp.onnx");

        assert_eq!(state.page(), Page::Result);
        let (pending, model) = state.pending().unwrap();
        assert_eq!(pending, &input);
        assert_eq!(model, "mlp.onnx");
    }

    #[test]
    fn test_return_home_clears_pending_pair() {
        let mut state = SessionState::new();
        let input = FeatureVector::new([0.0; 8]);
        state.submit_prediction(input, "logreg.json");

        state.return_home();
        assert_eq!(state.page(), Page::Home);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert!("fr".parse::<Language>().is_err());
    }
}
