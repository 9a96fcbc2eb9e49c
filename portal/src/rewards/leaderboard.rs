//! Leaderboard ranking
//!
//! Peers are seeded; the current user is ranked at the live balance.
//! Badges come from the tier resolver rather than being stored.

use shared::models::LeaderboardEntry;
use shared::types::Points;

use super::tiers::TierTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    pub name: String,
    pub points: Points,
}

impl Peer {
    pub fn new(name: impl Into<String>, points: Points) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Rank peers plus the current user, highest points first.
///
/// Ties keep peers ahead of the current user.
pub fn rank(
    peers: &[Peer],
    user_name: &str,
    user_points: Points,
    tiers: &TierTable,
) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(&str, Points, bool)> = peers
        .iter()
        .map(|p| (p.name.as_str(), p.points, false))
        .collect();
    rows.push((user_name, user_points, true));
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, points, is_current_user))| LeaderboardEntry {
            rank: i + 1,
            name: if is_current_user {
                format!("You ({})", name)
            } else {
                name.to_string()
            },
            points,
            badge: tiers.resolve(points).level,
            is_current_user,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TierLevel;

    fn peers() -> Vec<Peer> {
        vec![
            Peer::new("Sarah Johnson", 1245),
            Peer::new("Michael Chen", 987),
            Peer::new("David Kim", 423),
            Peer::new("Maria Garcia", 189),
        ]
    }

    #[test]
    fn test_user_ranked_by_live_balance() {
        let board = rank(&peers(), "John Doe", 450, &TierTable::standard());
        let me = board.iter().find(|e| e.is_current_user).unwrap();
        assert_eq!(me.rank, 3);
        assert_eq!(me.name, "You (John Doe)");
        assert_eq!(me.badge, TierLevel::Silver);

        let board = rank(&peers(), "John Doe", 2000, &TierTable::standard());
        assert!(board[0].is_current_user);
        assert_eq!(board[0].badge, TierLevel::Platinum);
    }

    #[test]
    fn test_badges_follow_tiers() {
        let board = rank(&peers(), "John Doe", 0, &TierTable::standard());
        let badges: Vec<TierLevel> = board.iter().map(|e| e.badge).collect();
        assert_eq!(
            badges,
            vec![
                TierLevel::Platinum,
                TierLevel::Gold,
                TierLevel::Silver,
                TierLevel::Bronze,
                TierLevel::Bronze
            ]
        );
        assert_eq!(board.last().map(|e| e.rank), Some(5));
    }

    #[test]
    fn test_ties_keep_peers_first() {
        let board = rank(&peers(), "John Doe", 423, &TierTable::standard());
        assert_eq!(board[2].name, "David Kim");
        assert!(board[3].is_current_user);
    }
}
