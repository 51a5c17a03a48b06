//! Character-by-character text reveal used by the signup success panel.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::time::Duration;

/// Wait before the first character appears.
pub const REVEAL_START_DELAY: Duration = Duration::from_millis(50);
/// Wait between subsequent characters.
pub const REVEAL_STEP_DELAY: Duration = Duration::from_millis(120);

/// Reveals `text` one `char` at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self { text, shown: 0, total }
    }

    /// The currently revealed prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        let end = self.text.char_indices().nth(self.shown).map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Reveal one more character and return the new prefix, or `None` once the
    /// whole text is visible.
    pub fn advance(&mut self) -> Option<&str> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }

    /// Delay to wait before revealing character number `step` (zero-based).
    #[must_use]
    pub fn delay_before(step: usize) -> Duration {
        if step == 0 { REVEAL_START_DELAY } else { REVEAL_STEP_DELAY }
    }
}
