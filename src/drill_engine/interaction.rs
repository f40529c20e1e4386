//! The exercise interaction state machine.
//!
//! ```text
//! Idle(exercise) --input--> Answering --check, non-empty--> Checked(correct)
//!        ^                                                        |
//!        +-------------------------- advance ---------------------+
//! ```
//!
//! `Answering` is implicit: any edit of the value. `Checked` is terminal for
//! the exercise; edits and further checks are ignored until `advance`, which
//! swaps in the next exercise and a fresh [`InteractionState`] in one step.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    confetti::{Canvas, Confetti, ConfettiConfig, SpriteBuffer},
    keys::{Key, KeyOutcome},
    matcher::matches,
    models::{
        Bounds, ChoiceView, DrillView, Exercise, FocusTarget, InteractionMode,
        InteractionState, Pulse,
    },
    session::ExerciseSource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Seeds particle initialization. `None` uses entropy.
    pub rng_seed: Option<u64>,
    pub confetti: ConfettiConfig,
    /// Initial render surface size, see [`Drill::resize`].
    pub bounds: Bounds,
    /// Frames a check's pulse stays raised before it clears itself.
    pub pulse_frames: u32,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            rng_seed: None,
            confetti: ConfettiConfig::default(),
            bounds: Bounds::default(),
            pulse_frames: 20,
        }
    }
}

pub struct Drill<S: ExerciseSource, C: Canvas = SpriteBuffer> {
    source: S,
    state: InteractionState,
    pulse: Option<Pulse>,
    pulse_frames: u32,
    pulse_left: u32,
    pending_focus: Option<FocusTarget>,
    confetti: Confetti<C>,
    bounds: Bounds,
    rng: StdRng,
}

impl<S: ExerciseSource, C: Canvas> Drill<S, C> {
    pub fn new(source: S, canvas: C, config: DrillConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let focus = FocusTarget::for_mode(source.current().mode());
        Drill {
            source,
            state: InteractionState::default(),
            pulse: None,
            pulse_frames: config.pulse_frames,
            pulse_left: 0,
            pending_focus: Some(focus),
            confetti: Confetti::new(canvas, config.confetti),
            bounds: config.bounds,
            rng,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn exercise(&self) -> &Exercise {
        self.source.current()
    }

    pub fn mode(&self) -> InteractionMode {
        self.exercise().mode()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn has_checked(&self) -> bool {
        self.state.has_checked
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.state.is_correct
    }

    pub fn pulse(&self) -> Option<Pulse> {
        self.pulse
    }

    /// Index of the first choice equal to the current value.
    pub fn selected_index(&self) -> Option<usize> {
        self.exercise().choices.iter().position(|c| *c == self.state.value)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn confetti(&self) -> &Confetti<C> {
        &self.confetti
    }

    pub fn canvas(&self) -> &C {
        self.confetti.canvas()
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Replace the typed value. Ignored once checked.
    pub fn set_answer_value(&mut self, text: impl Into<String>) {
        if self.state.has_checked {
            return;
        }
        self.state.value = text.into();
    }

    /// Pick a choice by its text. Ignored in free-text mode, for texts that
    /// are not among the choices, and once checked.
    pub fn select_choice(&mut self, choice: &str) {
        let idx = self.exercise().choices.iter().position(|c| c == choice);
        match idx {
            Some(idx) => self.select_choice_index(idx),
            None => tracing::trace!(choice, "ignoring unknown choice"),
        }
    }

    /// Pick a choice by 0-based index. Out-of-range indices are ignored.
    pub fn select_choice_index(&mut self, idx: usize) {
        if self.state.has_checked {
            return;
        }
        if let Some(choice) = self.source.current().choices.get(idx) {
            self.state.value = choice.clone();
        }
    }

    /// Judge the current value against the exercise answer.
    ///
    /// Returns the verdict, or `None` when nothing was checked because the
    /// exercise is already checked or the trimmed value is empty.
    pub fn check(&mut self) -> Option<bool> {
        if self.state.has_checked || self.state.value.trim().is_empty() {
            return None;
        }

        let exercise = self.source.current();
        let correct = matches(&self.state.value, &exercise.answer);
        tracing::debug!(id = %exercise.id, correct, "answer checked");

        self.state.has_checked = true;
        self.state.is_correct = Some(correct);
        if correct {
            self.raise_pulse(Pulse::Success);
            self.confetti.start(self.bounds, &mut self.rng);
        } else {
            self.raise_pulse(Pulse::Error);
        }
        Some(correct)
    }

    /// Move to the next exercise with a fresh interaction state. Allowed at
    /// any time, abandoning an unchecked answer.
    pub fn advance(&mut self) {
        let next = self.source.advance();
        tracing::debug!(id = %next.id, mode = %next.mode(), "advanced to exercise");
        let focus = FocusTarget::for_mode(next.mode());

        self.state = InteractionState::default();
        self.pulse = None;
        self.pulse_left = 0;
        // Overwrites any target the renderer has not consumed yet.
        self.pending_focus = Some(focus);
    }

    /// Route one key press according to the exercise mode.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let mode = self.mode();
        tracing::trace!(?key, %mode, "routing key");

        match (key, mode) {
            (Key::Enter, _) => {
                if self.state.has_checked {
                    self.advance();
                } else {
                    self.check();
                }
                KeyOutcome::Handled
            }
            (Key::ArrowDown, InteractionMode::MultipleChoice) => {
                self.move_selection(true);
                KeyOutcome::Handled
            }
            (Key::ArrowUp, InteractionMode::MultipleChoice) => {
                self.move_selection(false);
                KeyOutcome::Handled
            }
            (Key::Char(_), InteractionMode::MultipleChoice) => match key.digit() {
                Some(n) if n <= self.exercise().choices.len() => {
                    self.select_choice_index(n - 1);
                    KeyOutcome::Handled
                }
                _ => KeyOutcome::PassThrough,
            },
            _ => KeyOutcome::PassThrough,
        }
    }

    /// Cyclic move through the choices. With nothing selected either
    /// direction lands on the first choice.
    fn move_selection(&mut self, forward: bool) {
        let len = self.exercise().choices.len();
        if len == 0 {
            return;
        }
        let next = match self.selected_index() {
            None                => 0,
            Some(i) if forward  => (i + 1) % len,
            Some(i)             => (i + len - 1) % len,
        };
        self.select_choice_index(next);
    }

    // -----------------------------------------------------------------------
    // Rendering hooks
    // -----------------------------------------------------------------------

    /// Consume the focus target scheduled by the last exercise change. Call
    /// after the new exercise has rendered.
    pub fn take_pending_focus(&mut self) -> Option<FocusTarget> {
        self.pending_focus.take()
    }

    pub fn pending_focus(&self) -> Option<FocusTarget> {
        self.pending_focus
    }

    /// Size of the surface the next confetti burst is laid out on.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Advance one frame: counts down the pulse and steps the confetti.
    /// Returns whether the confetti is still running.
    pub fn tick(&mut self) -> bool {
        if self.pulse.is_some() {
            self.pulse_left = self.pulse_left.saturating_sub(1);
            if self.pulse_left == 0 {
                self.pulse = None;
            }
        }
        self.confetti.tick()
    }

    fn raise_pulse(&mut self, pulse: Pulse) {
        self.pulse = Some(pulse);
        self.pulse_left = self.pulse_frames;
    }

    pub fn view(&self) -> DrillView {
        let exercise = self.exercise();
        let selected = self.selected_index();
        let checked = self.state.has_checked;

        let choices = exercise
            .choices
            .iter()
            .enumerate()
            .map(|(i, text)| ChoiceView {
                shortcut: (i < 9).then(|| i as u8 + 1),
                text: text.clone(),
                selected: selected == Some(i),
            })
            .collect();

        DrillView {
            exercise_id: exercise.id.clone(),
            kind: exercise.kind.clone(),
            prompt: exercise.prompt.clone(),
            mode: exercise.mode(),
            value: self.state.value.clone(),
            choices,
            has_checked: checked,
            is_correct: self.state.is_correct,
            answer: checked.then(|| exercise.answer.clone()),
            explanation: if checked { exercise.explanation.clone() } else { None },
            pulse: self.pulse,
            animating: self.confetti.is_running(),
        }
    }
}
