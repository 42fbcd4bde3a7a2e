use thiserror::Error;

/// Default number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// Default number of attempts
pub const MAX_ROWS: usize = 6;

/// Longest word a board can hold
pub const WORD_LENGTH_LIMIT: usize = 32;

/// Most attempts a board can hold
pub const MAX_ROWS_LIMIT: usize = 32;

/// Configuration for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word (columns of the board)
    pub word_length: usize,
    /// Attempts allowed (rows of the board)
    pub max_rows: usize,
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("the board needs at least one row")]
    ZeroRows,
    #[error("word length {0} exceeds the limit of {max}", max = WORD_LENGTH_LIMIT)]
    TooLong(usize),
    #[error("{0} rows exceed the limit of {max}", max = MAX_ROWS_LIMIT)]
    TooManyRows(usize),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_rows: MAX_ROWS,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    #[must_use]
    pub const fn new(word_length: usize, max_rows: usize) -> Self {
        Self {
            word_length,
            max_rows,
        }
    }

    /// Check that a game can be played with this configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero or above its limit.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.word_length > WORD_LENGTH_LIMIT {
            return Err(ConfigError::TooLong(self.word_length));
        }
        if self.max_rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.max_rows > MAX_ROWS_LIMIT {
            return Err(ConfigError::TooManyRows(self.max_rows));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_rows, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_config() {
        let config = GameConfig::new(6, 4);
        assert_eq!(config.word_length, 6);
        assert_eq!(config.max_rows, 4);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(GameConfig::new(0, 6).validate(), Err(ConfigError::ZeroLength));
        assert_eq!(GameConfig::new(5, 0).validate(), Err(ConfigError::ZeroRows));
    }

    #[test]
    fn oversized_dimensions_rejected() {
        assert!(GameConfig::new(WORD_LENGTH_LIMIT, MAX_ROWS_LIMIT).validate().is_ok());
        assert_eq!(
            GameConfig::new(256, 6).validate(),
            Err(ConfigError::TooLong(256))
        );
        assert_eq!(
            GameConfig::new(5, 65_535).validate(),
            Err(ConfigError::TooManyRows(65_535))
        );
    }
}
