//! Core drill engine — answer matching, exercise selection, the interaction
//! state machine and the success animation.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: exercises, interaction state, focus, view snapshot |
//! | `error`       | Load-time and selection errors |
//! | `matcher`     | Answer normalization and comparison |
//! | `selector`    | Uniform random picks with an injected RNG |
//! | `loader`      | JSON exercise sets and boundary validation |
//! | `session`     | `ExerciseSource` trait and the random-advance `Session` |
//! | `keys`        | Key identifiers and routing outcome |
//! | `confetti`    | Particle simulation ticked once per frame |
//! | `interaction` | `Drill`: per-exercise state, key routing, feedback |

pub mod confetti;
pub mod error;
pub mod interaction;
pub mod keys;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod selector;
pub mod session;

pub use confetti::{Canvas, Confetti, ConfettiConfig, Sprite, SpriteBuffer};
pub use error::{ExerciseError, SelectError};
pub use interaction::{Drill, DrillConfig};
pub use keys::{Key, KeyOutcome};
pub use loader::{load_exercises, validate_exercises};
pub use matcher::{matches, normalize};
pub use models::{
    Bounds, ChoiceView, DrillView, Exercise, FocusTarget, InteractionMode,
    InteractionState, Pulse,
};
pub use selector::{pick_different_index, pick_index, pick_random};
pub use session::{ExerciseSource, Session};
