//! Fully formed view data returned to the presentation layer.

use serde::Serialize;

use super::{Level, Player};
use crate::grouping::{Partition, ResolvedAssignment};
use crate::schedule::NextMatch;

/// Groups of one level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelGroups {
    pub level: Level,
    pub full_groups: Vec<Vec<Player>>,
    pub forming_group: Option<Vec<Player>>,
}

impl LevelGroups {
    pub fn new(level: Level, partition: Partition<Player>) -> Self {
        Self {
            level,
            full_groups: partition.full_groups,
            forming_group: partition.forming_group,
        }
    }
}

/// Data behind `GET /`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexView {
    pub next_match: NextMatch,
    pub levels: Vec<LevelGroups>,
}

/// Data behind `GET /thanks/{signup_id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    pub player: String,
    pub level: Level,
    /// Creation timestamp of the signup as stored.
    pub joined_at: String,
    pub group_num: usize,
    pub is_full: bool,
    pub group_members: Vec<Player>,
    pub next_match: NextMatch,
}

impl AssignmentView {
    pub fn new(resolved: ResolvedAssignment, next_match: NextMatch) -> Self {
        Self {
            player: resolved.player,
            level: resolved.level,
            joined_at: resolved.joined_at,
            group_num: resolved.assignment.group_num,
            is_full: resolved.assignment.is_full,
            group_members: resolved.assignment.members,
            next_match,
        }
    }
}
