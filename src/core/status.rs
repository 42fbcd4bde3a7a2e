//! Per-letter feedback status
//!
//! Statuses are ordered by strength so that keyboard aggregation can keep the
//! best one seen: `Absent < Present < Correct`.

use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter not in the secret word (or all its occurrences already credited)
    Absent,
    /// Letter in the secret word, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterStatus {
    /// Merge priority (1-3), higher wins
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Emoji square used in shareable patterns
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
