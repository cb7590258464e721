//! Session capability resolution
//!
//! Derives everything the session UI needs to know from a `GameSnapshot`
//! and the session's tool list: which view to render, which panels to
//! show, and which tabs exist in which order.
//!
//! `SessionCapabilities::resolve` is pure and total. It never fails:
//! a missing snapshot yields a fixed default record, and malformed or
//! absent fields count as absent. Recomputing from the same inputs always
//! produces an identical record.

use serde::{Deserialize, Serialize};

use super::snapshot::{GameSnapshot, PlayMode, ToolConfig};

/// The view a session actually renders.
///
/// Distinct from [`PlayMode`]: the intent degrades to `Basic` when the
/// snapshot lacks the data the advanced view requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    #[default]
    Basic,
    Facilitated,
    Participants,
}

impl ViewType {
    /// Whether this is one of the advanced views.
    pub fn is_advanced(&self) -> bool {
        *self != ViewType::Basic
    }
}

/// Top-level session tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionTab {
    Play,
    Content,
    Manage,
}

/// Sub-tabs under the content tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSubTab {
    Artifacts,
    Puzzles,
    Decisions,
    Outcome,
}

/// Sub-tabs under the manage tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManageSubTab {
    Roles,
    Triggers,
    Settings,
}

/// Derived UI capabilities for one session view.
///
/// Every `show_*` flag is a pure function of the `has_*` facts and the
/// resolved view type. The record is always replaced wholesale, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCapabilities {
    /// Resolved view (intent after graceful degradation)
    pub view_type: ViewType,
    /// Declared play-mode intent, kept for diagnostics
    pub intent: PlayMode,

    // Facts mirroring snapshot contents
    pub has_steps: bool,
    pub has_phases: bool,
    pub has_roles: bool,
    pub has_artifacts: bool,
    pub has_triggers: bool,
    pub has_tools: bool,
    pub has_board: bool,
    pub has_puzzles: bool,
    pub has_props: bool,

    // UI visibility decisions
    pub show_phase_navigation: bool,
    pub show_role_assigner: bool,
    pub show_triggers_panel: bool,
    pub show_director_mode: bool,
    pub show_toolbelt: bool,
    pub show_artifacts_panel: bool,
    pub show_decisions_panel: bool,
    pub show_outcome_panel: bool,
    pub show_board_toggle: bool,
    pub show_chat: bool,
    pub show_puzzles_panel: bool,
    pub show_props_manager: bool,

    // Tab ordering (order matters; never re-sorted downstream)
    pub visible_tabs: Vec<SessionTab>,
    pub content_sub_tabs: Vec<ContentSubTab>,
    pub manage_sub_tabs: Vec<ManageSubTab>,
}

impl Default for SessionCapabilities {
    /// The terminal/initial record shown before any snapshot loads.
    fn default() -> Self {
        Self {
            view_type: ViewType::Basic,
            intent: PlayMode::Basic,
            has_steps: false,
            has_phases: false,
            has_roles: false,
            has_artifacts: false,
            has_triggers: false,
            has_tools: false,
            has_board: false,
            has_puzzles: false,
            has_props: false,
            show_phase_navigation: false,
            show_role_assigner: false,
            show_triggers_panel: false,
            show_director_mode: false,
            show_toolbelt: false,
            show_artifacts_panel: false,
            show_decisions_panel: false,
            show_outcome_panel: false,
            show_board_toggle: false,
            show_chat: false,
            show_puzzles_panel: false,
            show_props_manager: false,
            visible_tabs: vec![SessionTab::Play],
            content_sub_tabs: vec![],
            manage_sub_tabs: vec![ManageSubTab::Settings],
        }
    }
}

impl SessionCapabilities {
    /// Resolve capabilities from a snapshot and tool list.
    ///
    /// Safe to call on every recomputation; callers that want memoization
    /// wrap this in an engine-side cache. `None` snapshot yields the
    /// default record regardless of `tools`.
    pub fn resolve(snapshot: Option<&GameSnapshot>, tools: Option<&[ToolConfig]>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::default();
        };

        // Fact extraction
        let has_steps = !snapshot.steps.is_empty();
        let has_phases = !snapshot.phases.is_empty();
        let has_roles = !snapshot.roles.is_empty();
        let has_artifacts = !snapshot.artifacts.is_empty();
        let has_triggers = !snapshot.triggers.is_empty();
        let has_tools = tools.is_some_and(|t| !t.is_empty());
        let has_board = snapshot.board_config.is_some();
        let has_puzzles = snapshot.artifacts.iter().any(|a| a.artifact_type.is_puzzle());
        let has_props = snapshot.artifacts.iter().any(|a| a.artifact_type.is_prop());

        // View-type resolution: a declared advanced mode without the data
        // that view requires degrades to basic instead of rendering a
        // broken UI. Steps intentionally play no role here.
        let intent = snapshot.game.play_mode;
        let view_type = match intent {
            PlayMode::Participants if has_roles => ViewType::Participants,
            PlayMode::Facilitated if has_phases => ViewType::Facilitated,
            _ => ViewType::Basic,
        };
        let is_advanced = view_type.is_advanced();

        // Visibility derivation
        let show_phase_navigation = has_phases && is_advanced;
        let show_role_assigner = has_roles && view_type == ViewType::Participants;
        let show_triggers_panel = has_triggers && is_advanced;
        let show_director_mode = has_triggers && is_advanced;
        let show_toolbelt = has_tools;
        let show_artifacts_panel = has_artifacts;
        let show_decisions_panel = is_advanced;
        let show_outcome_panel = is_advanced;
        let show_board_toggle = has_board && is_advanced;
        let show_chat = is_advanced;
        let show_puzzles_panel = has_puzzles;
        let show_props_manager = has_props;

        // Tab construction
        let mut visible_tabs = vec![SessionTab::Play];
        if has_artifacts || has_puzzles {
            visible_tabs.push(SessionTab::Content);
        }
        if is_advanced || has_triggers || has_roles {
            visible_tabs.push(SessionTab::Manage);
        }

        let mut content_sub_tabs = Vec::new();
        if has_artifacts {
            content_sub_tabs.push(ContentSubTab::Artifacts);
        }
        if has_puzzles {
            content_sub_tabs.push(ContentSubTab::Puzzles);
        }
        if is_advanced {
            content_sub_tabs.push(ContentSubTab::Decisions);
            content_sub_tabs.push(ContentSubTab::Outcome);
        }

        let mut manage_sub_tabs = Vec::new();
        if has_roles && view_type == ViewType::Participants {
            manage_sub_tabs.push(ManageSubTab::Roles);
        }
        if has_triggers {
            manage_sub_tabs.push(ManageSubTab::Triggers);
        }
        manage_sub_tabs.push(ManageSubTab::Settings);

        Self {
            view_type,
            intent,
            has_steps,
            has_phases,
            has_roles,
            has_artifacts,
            has_triggers,
            has_tools,
            has_board,
            has_puzzles,
            has_props,
            show_phase_navigation,
            show_role_assigner,
            show_triggers_panel,
            show_director_mode,
            show_toolbelt,
            show_artifacts_panel,
            show_decisions_panel,
            show_outcome_panel,
            show_board_toggle,
            show_chat,
            show_puzzles_panel,
            show_props_manager,
            visible_tabs,
            content_sub_tabs,
            manage_sub_tabs,
        }
    }
}
