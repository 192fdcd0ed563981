//! Turning setup answers into players.

use derive_getters::Getters;
use tictac_core::{Difficulty, GameError, Mark, Player};
use tracing::{info, instrument, warn};

/// Name given to the automated opponent.
pub const AI_NAME: &str = "AI";

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human against a move policy.
    VsAi(Difficulty),
    /// Two humans sharing the input.
    TwoPlayer,
}

/// A symbol choice after defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolChoice {
    /// The mark to use.
    pub mark: Mark,
    /// True when the input was not X or O and X was substituted.
    pub defaulted: bool,
}

/// Resolves a symbol answer. Anything other than X or O falls back to X.
#[instrument]
pub fn resolve_symbol(input: &str) -> SymbolChoice {
    match Mark::from_symbol(input) {
        Some(mark) => SymbolChoice {
            mark,
            defaulted: false,
        },
        None => {
            warn!(input, "Invalid symbol, defaulting to X");
            SymbolChoice {
                mark: Mark::X,
                defaulted: true,
            }
        }
    }
}

/// Uses `input` as a name unless blank.
pub fn resolve_name(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Everything needed to start (and restart) a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchSetup {
    mode: Mode,
    players: [Player; 2],
}

impl MatchSetup {
    /// Human (first to move) against the AI, which takes the other mark.
    #[instrument]
    pub fn vs_ai(name: &str, mark: Mark, difficulty: Difficulty) -> Result<Self, GameError> {
        let human = Player::human(resolve_name(name, "Player 1"), mark)?;
        let ai = Player::automated(AI_NAME, mark.opponent())?;
        info!(human = %human.name(), ?difficulty, "Single player setup");
        Ok(Self {
            mode: Mode::VsAi(difficulty),
            players: [human, ai],
        })
    }

    /// Two humans; the second takes the other mark.
    #[instrument]
    pub fn two_player(first: &str, mark: Mark, second: &str) -> Result<Self, GameError> {
        let p1 = Player::human(resolve_name(first, "Player 1"), mark)?;
        let p2 = Player::human(resolve_name(second, "Player 2"), mark.opponent())?;
        info!(first = %p1.name(), second = %p2.name(), "Two player setup");
        Ok(Self {
            mode: Mode::TwoPlayer,
            players: [p1, p2],
        })
    }

    /// The AI difficulty, if an AI is playing.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.mode {
            Mode::VsAi(d) => Some(d),
            Mode::TwoPlayer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_defaults_to_x() {
        assert_eq!(
            resolve_symbol("q"),
            SymbolChoice {
                mark: Mark::X,
                defaulted: true
            }
        );
        assert_eq!(
            resolve_symbol("o"),
            SymbolChoice {
                mark: Mark::O,
                defaulted: false
            }
        );
    }

    #[test]
    fn test_vs_ai_gives_ai_other_mark() {
        let setup = MatchSetup::vs_ai("Ada", Mark::O, Difficulty::Minimax).expect("setup");
        let [human, ai] = setup.players();
        assert_eq!(*human.mark(), Mark::O);
        assert!(!*human.is_automated());
        assert_eq!(*ai.mark(), Mark::X);
        assert!(*ai.is_automated());
        assert_eq!(ai.name(), AI_NAME);
        assert_eq!(setup.difficulty(), Some(Difficulty::Minimax));
    }

    #[test]
    fn test_blank_names_fall_back() {
        let setup = MatchSetup::two_player("  ", Mark::X, "").expect("setup");
        assert_eq!(setup.players()[0].name(), "Player 1");
        assert_eq!(setup.players()[1].name(), "Player 2");
        assert_eq!(setup.difficulty(), None);
    }
}
