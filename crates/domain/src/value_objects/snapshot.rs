//! Session snapshot value objects
//!
//! A `GameSnapshot` describes one configured activity as fetched for a play
//! session: steps, phases, roles, artifacts, triggers, and an optional board.
//! Snapshots are read-only inputs; capability resolution never mutates them.
//!
//! Field names are snake_case to match the stored JSON shape. Collections
//! default to empty so a partial snapshot still deserializes, and unknown
//! enum strings fall back to a safe variant rather than failing the whole
//! snapshot.

use serde::{Deserialize, Serialize};

/// Declared play-mode intent of an activity.
///
/// This is the author's intent, not the resolved view: a session declared
/// `Facilitated` without phases still renders the basic view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    Facilitated,
    Participants,
    // serde(other) requires the last declared variant
    #[default]
    #[serde(other)]
    Basic,
}

/// Kind of artifact attached to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    Keypad,
    Riddle,
    Cipher,
    LogicGrid,
    Matching,
    Prop,
    Card,
    Document,
    Image,
    /// Anything this build does not recognize. Unknown artifacts still
    /// count toward `has_artifacts` but never toward puzzles or props.
    #[serde(other)]
    Other,
}

impl ArtifactType {
    /// Whether this artifact drives the puzzles panel.
    ///
    /// The puzzle set is closed: keypad, riddle, cipher, logic grid,
    /// matching.
    pub fn is_puzzle(&self) -> bool {
        matches!(
            self,
            ArtifactType::Keypad
                | ArtifactType::Riddle
                | ArtifactType::Cipher
                | ArtifactType::LogicGrid
                | ArtifactType::Matching
        )
    }

    /// Whether this artifact is a physical prop.
    pub fn is_prop(&self) -> bool {
        matches!(self, ArtifactType::Prop)
    }
}

/// One instruction step in an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Suggested duration in seconds
    #[serde(default)]
    pub duration_secs: Option<u32>,
}

/// A facilitated-mode phase grouping steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Step ids belonging to this phase, in play order
    #[serde(default)]
    pub step_ids: Vec<String>,
}

/// A participant role with public and private briefing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub public_description: Option<String>,
    #[serde(default)]
    pub private_instructions: Option<String>,
}

/// An artifact handed out or revealed during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub artifact_type: ArtifactType,
    #[serde(default)]
    pub content: Option<String>,
}

/// A host-fired or condition-fired event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

/// Shared-board configuration, present when the activity uses a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub layout: String,
    #[serde(default)]
    pub background: Option<String>,
}

/// Core activity metadata carried by the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub play_mode: PlayMode,
}

/// One configured activity as fetched for a session view.
///
/// Immutable for the duration of a capability computation; a new fetch
/// produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameSnapshot {
    #[serde(default)]
    pub game: GameInfo,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub board_config: Option<BoardConfig>,
}

/// Who a session mini-tool is turned on for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolScope {
    Host,
    Participants,
    #[default]
    #[serde(other)]
    Both,
}

/// One session mini-tool entry (dice roller, conversation cards, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub tool_key: String,
    pub enabled: bool,
    #[serde(default)]
    pub scope: ToolScope,
}
