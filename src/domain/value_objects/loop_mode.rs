//! Loop Mode Value Object

use serde::{Deserialize, Serialize};

/// How often the lock-screen sound plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play a single time
    #[default]
    Once,
    /// Repeat until the session ends
    Loop,
    /// Play `n` times in total
    RepeatN(u32),
}

impl LoopMode {
    /// Build from the persisted mode and repeat count
    pub fn from_parts(kind: LoopModeKind, repeat_count: u32) -> Self {
        match kind {
            LoopModeKind::Once => LoopMode::Once,
            LoopModeKind::Loop => LoopMode::Loop,
            LoopModeKind::RepeatN => LoopMode::RepeatN(repeat_count.max(1)),
        }
    }

    /// Number of plays, `None` when unbounded
    pub fn play_count(&self) -> Option<u32> {
        match self {
            LoopMode::Once => Some(1),
            LoopMode::Loop => None,
            LoopMode::RepeatN(n) => Some(*n),
        }
    }
}

/// Persisted loop selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoopModeKind {
    #[default]
    Once,
    Loop,
    RepeatN,
}
