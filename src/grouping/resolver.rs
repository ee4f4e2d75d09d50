//! Works out which group a single signup belongs to.

use serde::Serialize;

use super::{partition, GROUP_SIZE};
use crate::db::SignupStore;
use crate::errors::AppError;
use crate::models::{Level, Player};

/// Group a signup has been placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// 1-based group number within the level.
    pub group_num: usize,
    pub is_full: bool,
    pub members: Vec<Player>,
}

/// An assignment together with who it belongs to.
#[derive(Debug, Clone)]
pub struct ResolvedAssignment {
    pub player: String,
    pub level: Level,
    pub joined_at: String,
    pub assignment: Assignment,
}

/// Place `signup_id` within an ordered player list of one level.
///
/// Returns `None` when the id is not part of the list.
pub fn assign(players: &[Player], signup_id: i64) -> Option<Assignment> {
    let idx = players.iter().position(|p| p.id == signup_id)?;
    let group_num = idx / GROUP_SIZE.get() + 1;

    let groups = partition(players, GROUP_SIZE);

    if group_num <= groups.full_groups.len() {
        let members = groups
            .full_groups
            .into_iter()
            .nth(group_num - 1)
            .unwrap_or_default();
        return Some(Assignment {
            group_num,
            is_full: true,
            members,
        });
    }

    let members = groups.forming_group.unwrap_or_default();
    // a forming group is short by construction, but report what is actually there
    let is_full = members.len() == GROUP_SIZE.get();

    Some(Assignment {
        group_num,
        is_full,
        members,
    })
}

/// Look up a signup and resolve its group from the current state of its level.
pub async fn resolve(
    store: &mut SignupStore,
    signup_id: i64,
) -> Result<ResolvedAssignment, AppError> {
    let signup = store
        .get(signup_id)
        .await?
        .ok_or_else(|| AppError::signup_not_found(signup_id))?;

    let players = store.list_by_level(signup.level).await?;

    // the signup can vanish between the two reads if a reset runs concurrently
    let assignment =
        assign(&players, signup.id).ok_or_else(|| AppError::signup_not_found(signup.id))?;

    Ok(ResolvedAssignment {
        player: signup.display_name(),
        level: signup.level,
        joined_at: signup.created_at,
        assignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: i64) -> Vec<Player> {
        (1..=n)
            .map(|id| Player {
                id,
                name: format!("Player {}", id),
            })
            .collect()
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(assign(&players(3), 99), None);
        assert_eq!(assign(&[], 1), None);
    }

    #[test]
    fn test_group_number_follows_position() {
        let list = players(13);
        for (idx, player) in list.iter().enumerate() {
            let assignment = assign(&list, player.id).unwrap();
            assert_eq!(assignment.group_num, idx / 4 + 1);
            assert!(assignment.members.contains(player));
        }
    }

    #[test]
    fn test_first_positions_share_group_one() {
        let list = players(8);
        for id in 1..=4 {
            assert_eq!(assign(&list, id).unwrap().group_num, 1);
        }
        for id in 5..=8 {
            assert_eq!(assign(&list, id).unwrap().group_num, 2);
        }
    }

    #[test]
    fn test_fifth_player_is_forming() {
        let list = players(5);
        let assignment = assign(&list, 5).unwrap();
        assert_eq!(assignment.group_num, 2);
        assert!(!assignment.is_full);
        assert_eq!(assignment.members, vec![list[4].clone()]);

        let first = assign(&list, 1).unwrap();
        assert!(first.is_full);
        assert_eq!(first.members, list[..4].to_vec());
    }

    #[test]
    fn test_eighth_player_is_full() {
        let list = players(8);
        let assignment = assign(&list, 8).unwrap();
        assert_eq!(assignment.group_num, 2);
        assert!(assignment.is_full);
        assert_eq!(assignment.members, list[4..].to_vec());
    }
}
