use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Activity tags the app emits, each with a default point value.
///
/// The ledger stores the tag as a plain string, so tags outside this list are
/// still accepted when the caller states the points explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityKind {
    JournalEntry,
    MoodLog,
    Exercise,
    Assessment,
    ChatSession,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        Self::JournalEntry,
        Self::MoodLog,
        Self::Exercise,
        Self::Assessment,
        Self::ChatSession,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JournalEntry => "journal_entry",
            Self::MoodLog => "mood_log",
            Self::Exercise => "exercise",
            Self::Assessment => "assessment",
            Self::ChatSession => "chat_session",
        }
    }

    pub fn default_points(&self) -> u32 {
        match self {
            Self::JournalEntry => 10,
            Self::MoodLog => 5,
            Self::Exercise => 15,
            Self::Assessment => 20,
            Self::ChatSession => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or(())
    }
}
