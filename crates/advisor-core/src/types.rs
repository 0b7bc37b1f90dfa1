//! ============================================================================
//! Advisor Types - Builds, game profiles, and chat turns
//! ============================================================================
//! Core data model for the BuildHub advisor: catalog records, the chat
//! history entries exchanged with the calling layer, and the engine error.
//! ============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique catalog identifier of a build
pub type BuildId = u32;

/// Display tier of a catalog build (grouping and badges only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildTier {
    /// Budget configuration for Full HD on medium settings
    Entry,
    /// Mid-range configuration for high-refresh Full HD
    Mid,
    /// Enthusiast configuration for 2K and above
    High,
}

impl BuildTier {
    /// Badge label shown on a build card
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildTier::Entry => "НАЧАЛЬНЫЙ",
            BuildTier::Mid => "СРЕДНИЙ",
            BuildTier::High => "ТОПОВЫЙ",
        }
    }
}

/// Store link where a build can be ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorLink {
    /// Store display name
    pub name: String,
    /// Target URL, passed through to the caller untouched
    pub url: String,
}

/// A pre-configured PC build from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Unique catalog id
    pub id: BuildId,
    /// Human-readable build name
    pub name: String,
    /// Display tier used for grouping and badges
    pub tier: BuildTier,
    /// Price in whole rubles
    pub price: u32,
    /// Processor descriptor
    pub cpu: String,
    /// Graphics card descriptor
    pub gpu: String,
    /// Memory descriptor
    pub ram: String,
    /// Storage descriptor
    pub storage: String,
    /// Performance label shown on the card, e.g. "60 FPS в Full HD"
    pub fps_label: String,
    /// Representative frame rate used for requirement matching
    pub benchmark_fps: u32,
    /// Stores where the build can be ordered (at least one)
    pub vendors: Vec<VendorLink>,
}

/// Frame-rate requirements for a specific game title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    /// Stable lookup key, e.g. "valorant"
    pub key: String,
    /// Title shown to the user
    pub display_name: String,
    /// Minimum playable frame rate
    pub min_fps: u32,
    /// Frame rate recommended for comfortable play (>= min_fps)
    pub rec_fps: u32,
}

/// Static hardware guide entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Icon name hint for the rendering layer
    pub icon: String,
}

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the conversation history, owned by the calling layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    /// Record a user message
    pub fn user(text: &str) -> Self {
        Self {
            role: ChatRole::User,
            text: text.to_string(),
        }
    }

    /// Record an assistant reply
    pub fn assistant(text: &str) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.to_string(),
        }
    }
}

/// Errors surfaced by the advisor engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    /// Caller passed a game key that is not in the catalog
    #[error("Unknown game profile: {0}")]
    UnknownGame(String),
}

/// Format a ruble amount the way build cards show it, e.g. "₽45,000"
pub fn format_price(rub: u32) -> String {
    let digits = rub.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₽{}", grouped)
}
