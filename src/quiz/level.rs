use serde::Serialize;

use crate::config::LEVEL_COUNT;

/// A level number in `1..=LEVEL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub fn new(number: u8) -> Option<Self> {
        (1..=LEVEL_COUNT).contains(&number).then_some(Self(number))
    }

    /// All levels in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (1..=LEVEL_COUNT).map(Level)
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert!(Level::new(0).is_none());
        assert_eq!(Level::new(1).map(|l| l.number()), Some(1));
        assert_eq!(Level::new(10).map(|l| l.number()), Some(10));
        assert!(Level::new(11).is_none());
    }

    #[test]
    fn test_all_levels() {
        let numbers: Vec<u8> = Level::all().map(|l| l.number()).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    }
}
