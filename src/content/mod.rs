//! Exercise content.
//!
//! The dataset is a JSON array of `{ id, prompt, answer, rule }` records.
//! A copy is compiled into the binary; a file on disk overrides it.

pub mod exercises;

pub use exercises::{Exercise, ExerciseLoadError, ExerciseStore};
