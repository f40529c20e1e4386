//! Exercise pool and advance policy.
//!
//! The interaction core only sees the [`ExerciseSource`] trait. [`Session`]
//! is the stock implementation: a fixed pool with uniformly random advances
//! that never repeat the current exercise when there is an alternative.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::drill_engine::{
    error::ExerciseError,
    loader::validate_exercises,
    models::Exercise,
    selector::{pick_different_index, pick_index},
};

/// Supplies the active exercise and the next one on request.
pub trait ExerciseSource {
    fn current(&self) -> &Exercise;

    /// Move to a new exercise and return it. The new exercise must have a
    /// different id whenever the source has more than one to offer.
    fn advance(&mut self) -> &Exercise;
}

pub struct Session<R: Rng = StdRng> {
    exercises: Vec<Exercise>,
    current: usize,
    rng: R,
}

impl Session<StdRng> {
    /// Seeded session. `None` draws from OS entropy.
    pub fn with_seed(exercises: Vec<Exercise>, rng_seed: Option<u64>) -> Result<Self, ExerciseError> {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Session::new(exercises, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Validate the pool and pick the first exercise at random.
    pub fn new(exercises: Vec<Exercise>, mut rng: R) -> Result<Self, ExerciseError> {
        validate_exercises(&exercises)?;
        let current = pick_index(&mut rng, exercises.len())?;
        Ok(Session { exercises, current, rng })
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }
}

impl<R: Rng> ExerciseSource for Session<R> {
    fn current(&self) -> &Exercise {
        &self.exercises[self.current]
    }

    fn advance(&mut self) -> &Exercise {
        match pick_different_index(&mut self.rng, self.exercises.len(), self.current) {
            Ok(next) => {
                if next == self.current {
                    tracing::warn!(
                        id = %self.exercises[next].id,
                        "single-exercise pool, keeping the current exercise"
                    );
                }
                self.current = next;
            }
            // `new` rejects empty pools, so this is a broken invariant.
            Err(err) => unreachable!("session pool is never empty: {err}"),
        }
        &self.exercises[self.current]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> Vec<Exercise> {
        (0..n)
            .map(|i| Exercise::new(format!("e{i}"), "vocab", format!("prompt {i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn empty_pool_fails_on_construction() {
        assert!(matches!(Session::with_seed(Vec::new(), Some(1)), Err(ExerciseError::EmptyPool)));
    }

    #[test]
    fn len_reports_the_validated_pool() {
        let session = Session::with_seed(pool(3), Some(1)).unwrap();
        assert_eq!(session.len(), 3);
        assert_eq!(session.exercises().len(), 3);
    }

    #[test]
    fn advance_always_changes_id_when_possible() {
        for n in [2, 3, 10] {
            let mut session = Session::with_seed(pool(n), Some(5)).unwrap();
            for _ in 0..100 {
                let before = session.current().id.clone();
                let after = session.advance().id.clone();
                assert_ne!(before, after, "pool of {n} repeated {before}");
            }
        }
    }

    #[test]
    fn advance_on_single_exercise_pool_is_a_no_op() {
        let mut session = Session::with_seed(pool(1), Some(5)).unwrap();
        assert_eq!(session.current().id, "e0");
        assert_eq!(session.advance().id, "e0");
        assert_eq!(session.current().id, "e0");
    }

    #[test]
    fn same_seed_produces_same_sequence() {
        let run = |seed: u64| -> Vec<String> {
            let mut session = Session::with_seed(pool(8), Some(seed)).unwrap();
            let mut ids = vec![session.current().id.clone()];
            for _ in 0..12 {
                ids.push(session.advance().id.clone());
            }
            ids
        };
        assert_eq!(run(2024), run(2024));
    }

    #[test]
    fn every_exercise_is_eventually_visited() {
        let mut session = Session::with_seed(pool(4), Some(11)).unwrap();
        let mut seen = std::collections::HashSet::new();
        seen.insert(session.current().id.clone());
        for _ in 0..200 {
            seen.insert(session.advance().id.clone());
        }
        assert_eq!(seen.len(), 4);
    }
}
