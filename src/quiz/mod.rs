//! Quiz session state: level numbers and the navigation state machine.

pub mod controller;
pub mod level;

pub use controller::{LevelRun, Phase, QuizSession, Screen, ScreenKind, SessionView};
pub use level::Level;
