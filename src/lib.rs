//! # drill_trainer
//!
//! A keyboard-driven, single-user drill trainer core.
//!
//! The crate presents randomized exercises from a fixed in-memory set, takes
//! an answer as free text or as a multiple-choice pick, judges it with a
//! normalized string comparison, and raises immediate feedback: a confetti
//! burst on success, an error pulse on failure. Rendering is left to the
//! host; the crate exposes a snapshot for display, a pending focus target,
//! and a [`Canvas`] seam for the animation.
//!
//! ## How it works
//!
//! 1. Load and validate an exercise set with [`load_exercises`].
//! 2. Wrap it in a [`Session`], which picks exercises at random and never
//!    repeats the current one when there is an alternative.
//! 3. Drive a [`Drill`] with [`Drill::handle_key`], [`Drill::set_answer_value`]
//!    and [`Drill::select_choice`]. `Enter` checks, then advances.
//! 4. Call [`Drill::tick`] once per frame to run the confetti, and read
//!    [`Drill::view`] to render.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `Some(seed)` to [`Session::with_seed`] and
//!   [`DrillConfig::rng_seed`] to reproduce selection and particles exactly.
//! - **Two modes**: free text (only `Enter` is bound) and multiple choice
//!   (`1`..`9` select, `ArrowUp`/`ArrowDown` cycle).
//! - **Normalized matching**: trim, lowercase, collapse whitespace. Diacritics
//!   are significant.
//!
//! ## Quick start
//!
//! ```rust
//! use drill_trainer::{load_exercises, Drill, DrillConfig, Key, Session, SpriteBuffer};
//!
//! let exercises = load_exercises(r#"[
//!     { "id": "1", "type": "vocab", "prompt": "house", "answer": "dom",
//!       "choices": ["dom", "kot", "pies"] }
//! ]"#).unwrap();
//!
//! let session = Session::with_seed(exercises, Some(42)).unwrap();
//! let mut drill = Drill::new(session, SpriteBuffer::new(), DrillConfig::default());
//!
//! drill.handle_key(Key::parse("1"));
//! drill.handle_key(Key::parse("Enter"));
//! assert_eq!(drill.is_correct(), Some(true));
//! while drill.tick() {}
//! ```

pub mod drill_engine;

pub use drill_engine::{
    load_exercises, matches, normalize, pick_random, validate_exercises, Bounds, Canvas,
    ChoiceView, ConfettiConfig, Drill, DrillConfig, DrillView, Exercise, ExerciseError,
    ExerciseSource, FocusTarget, InteractionMode, InteractionState, Key, KeyOutcome, Pulse,
    SelectError, Session, Sprite, SpriteBuffer,
};
