use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Exercise data
// ---------------------------------------------------------------------------

/// One drill item, supplied by the exercise source and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    /// Drill category label. Display only.
    #[serde(rename = "type")]
    pub kind: String,
    pub prompt: String,
    /// The canonical correct answer.
    pub answer: String,
    /// Candidate answers. Non-empty switches the exercise to multiple choice.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Exercise {
    /// Free-text exercise with no choices and no explanation.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Exercise {
            id: id.into(),
            kind: kind.into(),
            prompt: prompt.into(),
            answer: answer.into(),
            choices: Vec::new(),
            explanation: None,
        }
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn mode(&self) -> InteractionMode {
        if self.choices.is_empty() {
            InteractionMode::FreeText
        } else {
            InteractionMode::MultipleChoice
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    FreeText,
    MultipleChoice,
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionMode::FreeText       => write!(f, "Free text"),
            InteractionMode::MultipleChoice => write!(f, "Multiple choice"),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-exercise interaction state
// ---------------------------------------------------------------------------

/// Answer state for the active exercise. Replaced wholesale on advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub value: String,
    pub has_checked: bool,
    /// `None` until checked, then fixed for the lifetime of the exercise.
    pub is_correct: Option<bool>,
}

/// Where keyboard focus should land once the new exercise has rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    ChoiceList,
    TextInput,
}

impl FocusTarget {
    pub fn for_mode(mode: InteractionMode) -> Self {
        match mode {
            InteractionMode::MultipleChoice => FocusTarget::ChoiceList,
            InteractionMode::FreeText       => FocusTarget::TextInput,
        }
    }
}

/// Momentary style signal raised by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pulse {
    Success,
    Error,
}

// ---------------------------------------------------------------------------
// Rendering surface
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds { width: 800.0, height: 600.0 }
    }
}

/// One choice as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    /// 1-based digit shortcut, `None` past the ninth choice.
    pub shortcut: Option<u8>,
    pub text: String,
    pub selected: bool,
}

/// Read-only snapshot of the drill for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillView {
    pub exercise_id: String,
    pub kind: String,
    pub prompt: String,
    pub mode: InteractionMode,
    pub value: String,
    pub choices: Vec<ChoiceView>,
    pub has_checked: bool,
    pub is_correct: Option<bool>,
    /// Revealed only after checking.
    pub answer: Option<String>,
    /// Revealed only after checking.
    pub explanation: Option<String>,
    pub pulse: Option<Pulse>,
    pub animating: bool,
}
