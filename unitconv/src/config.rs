//! Session configuration

/// Prompt written before each read
pub const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";

/// First token that ends the session
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// How a session talks to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub prompt: String,
    /// Stored lowercase, compared against the case-folded first token
    pub exit_word: String,
    pub show_prompt: bool,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            show_prompt: true,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_exit_word(mut self, word: impl Into<String>) -> Self {
        self.exit_word = word.into().to_lowercase();
        self
    }

    pub fn with_show_prompt(mut self, show: bool) -> Self {
        self.show_prompt = show;
        self
    }

    /// Check whether a raw line asks to end the session
    pub fn is_exit(&self, line: &str) -> bool {
        line.split_whitespace()
            .next()
            .is_some_and(|first| first.to_lowercase() == self.exit_word)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
