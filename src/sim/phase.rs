//! Top-level session phase tracking

use serde::{Deserialize, Serialize};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, no session running
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Session frozen
    Paused,
    /// Player died
    GameOver,
}

/// Tracks the current phase and the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateManager {
    current: GamePhase,
    previous: GamePhase,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> GamePhase {
        self.current
    }

    pub fn previous(&self) -> GamePhase {
        self.previous
    }

    pub fn set(&mut self, phase: GamePhase) {
        self.previous = self.current;
        self.current = phase;
    }

    /// Playing <-> Paused; no effect in any other phase
    pub fn toggle_pause(&mut self) {
        match self.current {
            GamePhase::Playing => self.set(GamePhase::Paused),
            GamePhase::Paused => self.set(GamePhase::Playing),
            GamePhase::Menu | GamePhase::GameOver => {}
        }
    }

    pub fn is_menu(&self) -> bool {
        self.current == GamePhase::Menu
    }

    pub fn is_playing(&self) -> bool {
        self.current == GamePhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.current == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.current == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_menu() {
        let sm = StateManager::new();
        assert!(sm.is_menu());
        assert_eq!(sm.previous(), GamePhase::Menu);
    }

    #[test]
    fn test_set_keeps_one_previous() {
        let mut sm = StateManager::new();
        sm.set(GamePhase::Playing);
        sm.set(GamePhase::GameOver);
        assert!(sm.is_game_over());
        assert_eq!(sm.previous(), GamePhase::Playing);
    }

    #[test]
    fn test_toggle_pause() {
        let mut sm = StateManager::new();
        sm.toggle_pause();
        assert!(sm.is_menu(), "menu ignores pause");

        sm.set(GamePhase::Playing);
        sm.toggle_pause();
        assert!(sm.is_paused());
        assert_eq!(sm.previous(), GamePhase::Playing);

        sm.toggle_pause();
        assert!(sm.is_playing());
        assert_eq!(sm.previous(), GamePhase::Paused);

        sm.set(GamePhase::GameOver);
        sm.toggle_pause();
        assert!(sm.is_game_over());
    }
}
