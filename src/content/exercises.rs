//! Exercise loading and level paging.
//!
//! The dataset is a flat, ordered list of fill-in-the-blank exercises.
//! Levels are not stored: level `n` is simply the slice of positions
//! `[(n-1)*20, n*20)`, clamped to whatever the dataset actually holds.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::{EXERCISES_PER_LEVEL, LEVEL_COUNT};

/// Dataset compiled into the binary, used when no file is configured.
const BUNDLED_EXERCISES: &str = include_str!("../../data/exercises.json");

/// A single fill-in-the-blank exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise ID within the dataset
    pub id: u32,
    /// Sentence with a blank to fill (or a phrase to transform)
    pub prompt: String,
    /// The canonical completion
    pub answer: String,
    /// Grammar rule shown after answering
    pub rule: String,
}

/// Error loading exercises.
#[derive(Debug)]
pub enum ExerciseLoadError {
    Io(String),
    Parse(String),
    DuplicateId(u32),
}

impl std::fmt::Display for ExerciseLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseLoadError::Io(e) => write!(f, "IO error: {}", e),
            ExerciseLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            ExerciseLoadError::DuplicateId(id) => write!(f, "Duplicate exercise id: {}", id),
        }
    }
}

impl std::error::Error for ExerciseLoadError {}

/// Ordered, immutable collection of exercises.
#[derive(Debug, Clone, Default)]
pub struct ExerciseStore {
    exercises: Vec<Exercise>,
}

impl ExerciseStore {
    /// Build a store from an ordered list, rejecting duplicate ids.
    pub fn from_exercises(exercises: Vec<Exercise>) -> Result<Self, ExerciseLoadError> {
        let mut seen = HashSet::with_capacity(exercises.len());
        for ex in &exercises {
            if !seen.insert(ex.id) {
                return Err(ExerciseLoadError::DuplicateId(ex.id));
            }
        }
        Ok(Self { exercises })
    }

    /// Parse a JSON array of exercises.
    pub fn from_json(json: &str) -> Result<Self, ExerciseLoadError> {
        let exercises: Vec<Exercise> =
            serde_json::from_str(json).map_err(|e| ExerciseLoadError::Parse(e.to_string()))?;
        Self::from_exercises(exercises)
    }

    /// Load exercises from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ExerciseLoadError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ExerciseLoadError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&content).map_err(|e| match e {
            ExerciseLoadError::Parse(msg) => {
                ExerciseLoadError::Parse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// The dataset shipped with the binary.
    pub fn bundled() -> Result<Self, ExerciseLoadError> {
        Self::from_json(BUNDLED_EXERCISES)
    }

    /// Load from `path` if it exists, otherwise fall back to the bundled dataset.
    pub fn load_or_bundled(path: &Path) -> Result<Self, ExerciseLoadError> {
        if path.exists() {
            let store = Self::load(path)?;
            tracing::info!("Loaded {} exercises from {}", store.len(), path.display());
            Ok(store)
        } else {
            let store = Self::bundled()?;
            tracing::info!(
                "{} not found, using {} bundled exercises",
                path.display(),
                store.len()
            );
            Ok(store)
        }
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises for a 1-based level number.
    ///
    /// Out-of-range levels and levels past the end of the dataset yield an
    /// empty slice; the last populated level may be short.
    pub fn page(&self, level_number: u8) -> &[Exercise] {
        if level_number == 0 || level_number > LEVEL_COUNT {
            return &[];
        }

        let start = (level_number as usize - 1) * EXERCISES_PER_LEVEL;
        let end = (start + EXERCISES_PER_LEVEL).min(self.exercises.len());
        if start >= end {
            return &[];
        }

        &self.exercises[start..end]
    }
}
