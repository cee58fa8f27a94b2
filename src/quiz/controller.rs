//! Level/exercise navigation state machine.
//!
//! A session is either on the level menu or inside a level. Inside a level
//! the learner is either answering the current exercise or reviewing the
//! answer they submitted. Every mutation goes through one of the action
//! methods on [`QuizSession`]; each returns `true` when it changed state.

use serde::Serialize;
use std::collections::BTreeSet;

use super::Level;
use crate::content::{Exercise, ExerciseStore};

/// Sub-state of a level in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Answering,
    /// Snapshot of the draft taken when the answer was checked
    Reviewing { submitted: String },
}

/// Progress through one level's page of exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRun {
    level: Level,
    index: usize,
    /// Actual page length, which may be shorter than a full level
    page_len: usize,
    draft: String,
    phase: Phase,
}

impl LevelRun {
    fn start(level: Level, page_len: usize) -> Self {
        Self {
            level,
            index: 0,
            page_len,
            draft: String::new(),
            phase: Phase::Answering,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Zero-based position within the page.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_len(&self) -> usize {
        self.page_len
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_reviewing(&self) -> bool {
        matches!(self.phase, Phase::Reviewing { .. })
    }

    pub fn submitted(&self) -> Option<&str> {
        match &self.phase {
            Phase::Reviewing { submitted } => Some(submitted),
            Phase::Answering => None,
        }
    }

    /// True on the final exercise of the page.
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.page_len
    }
}

/// Which screen the session is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    InLevel(LevelRun),
}

/// Per-learner quiz progress, kept in memory for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    screen: Screen,
    completed: BTreeSet<Level>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn run(&self) -> Option<&LevelRun> {
        match &self.screen {
            Screen::InLevel(run) => Some(run),
            Screen::Menu => None,
        }
    }

    pub fn active_level(&self) -> Option<Level> {
        self.run().map(|r| r.level)
    }

    pub fn completed_levels(&self) -> &BTreeSet<Level> {
        &self.completed
    }

    pub fn is_completed(&self, level: Level) -> bool {
        self.completed.contains(&level)
    }

    /// The exercise currently shown, if inside a level.
    pub fn current_exercise<'a>(&self, store: &'a ExerciseStore) -> Option<&'a Exercise> {
        let run = self.run()?;
        store.page(run.level.number()).get(run.index)
    }

    /// Enter a level at its first exercise.
    ///
    /// Levels with no exercises cannot be entered; the session stays put.
    pub fn select_level(&mut self, level: Level, store: &ExerciseStore) -> bool {
        let page_len = store.page(level.number()).len();
        if page_len == 0 {
            tracing::warn!("Level {} has no exercises, staying on menu", level);
            return false;
        }

        tracing::debug!("Starting level {} ({} exercises)", level, page_len);
        self.screen = Screen::InLevel(LevelRun::start(level, page_len));
        true
    }

    /// Replace the in-progress answer. Rejected unless answering.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.screen {
            Screen::InLevel(run) if run.phase == Phase::Answering => {
                run.draft = text.into();
                true
            }
            _ => false,
        }
    }

    /// Snapshot the draft verbatim and switch to reviewing.
    pub fn check_answer(&mut self) -> bool {
        match &mut self.screen {
            Screen::InLevel(run) if run.phase == Phase::Answering => {
                run.phase = Phase::Reviewing {
                    submitted: run.draft.clone(),
                };
                true
            }
            _ => false,
        }
    }

    /// Move past the reviewed exercise.
    ///
    /// On the last exercise of the page the level is marked complete and the
    /// session returns to the menu.
    pub fn advance(&mut self) -> bool {
        let Screen::InLevel(run) = &mut self.screen else {
            return false;
        };
        if !run.is_reviewing() {
            return false;
        }

        if run.is_last() {
            let level = run.level;
            self.completed.insert(level);
            self.screen = Screen::Menu;
            tracing::debug!("Level {} complete", level);
        } else {
            run.index += 1;
            run.draft.clear();
            run.phase = Phase::Answering;
        }
        true
    }

    /// Leave the current level without marking it complete.
    pub fn return_to_menu(&mut self) -> bool {
        if matches!(self.screen, Screen::Menu) {
            return false;
        }
        self.screen = Screen::Menu;
        true
    }

    pub fn view(&self) -> SessionView {
        let run = self.run();
        SessionView {
            screen: match run {
                None => ScreenKind::Menu,
                Some(r) if r.is_reviewing() => ScreenKind::Reviewing,
                Some(_) => ScreenKind::Answering,
            },
            level: run.map(|r| r.level),
            position: run.map(|r| r.index + 1),
            page_len: run.map(|r| r.page_len),
            draft: run.map(|r| r.draft.clone()),
            submitted: run.and_then(|r| r.submitted()).map(str::to_string),
            completed_levels: self.completed.iter().copied().collect(),
        }
    }
}

/// Flat tag for [`Screen`] plus [`Phase`], as exposed in [`SessionView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Menu,
    Answering,
    Reviewing,
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub screen: ScreenKind,
    pub level: Option<Level>,
    /// One-based position within the page
    pub position: Option<usize>,
    pub page_len: Option<usize>,
    pub draft: Option<String>,
    pub submitted: Option<String>,
    pub completed_levels: Vec<Level>,
}
