use std::collections::HashSet;

use super::action::Action;

/// Keys the manual game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    fn action(self) -> Action {
        match self {
            Self::Up => Action::Up,
            Self::Down => Action::Down,
        }
    }
}

/// Which keys are currently held
///
/// Written by the input listener between ticks and only read during a tick.
/// Multi-threaded front-ends must serialize writes, e.g. behind a `Mutex`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Moves requested by the held keys, Up before Down
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        [Key::Up, Key::Down]
            .into_iter()
            .filter(|&k| self.is_pressed(k))
            .map(Key::action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_writer_wins() {
        let mut keys = KeyState::new();
        keys.press(Key::Up);
        keys.release(Key::Up);
        assert!(!keys.is_pressed(Key::Up));
        keys.press(Key::Down);
        keys.press(Key::Down);
        assert!(keys.is_pressed(Key::Down));
    }

    #[test]
    fn actions_in_fixed_order() {
        let mut keys = KeyState::new();
        assert_eq!(keys.actions().count(), 0);
        keys.press(Key::Down);
        keys.press(Key::Up);
        assert_eq!(keys.actions().collect::<Vec<_>>(), [Action::Up, Action::Down]);
        keys.clear();
        assert_eq!(keys.actions().count(), 0, "Cleared");
    }
}
