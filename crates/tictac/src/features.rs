//! Feature list shown by both front-ends.

/// One line per feature, in menu order.
pub const FEATURES: &[&str] = &[
    "Game mode selection (Single Player with Easy/Medium/Hard AI, Two Player)",
    "Player name entry and symbol choice (X/O)",
    "Undo/redo (stack-based)",
    "Scoreboard (persistent, tracks wins/losses/ties)",
    "Replay last game (step through moves)",
    "Input validation loop (never crashes, always prompts again)",
    "Position guide (1-9 mapping beside board in console)",
    "Interactive grid with mouse support, light/dark themes and winning line highlight",
    "Features/help screen",
];
