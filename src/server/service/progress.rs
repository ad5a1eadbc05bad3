//! XP level table.

use crate::server::model::user::Progress;

/// XP needed to reach each level, starting at level 1.
pub const LEVEL_THRESHOLDS: [i32; 10] = [0, 100, 250, 500, 1000, 2000, 3500, 5500, 8000, 12000];

/// XP awarded per quality point of a flashcard review.
pub const XP_PER_REVIEW_QUALITY: i32 = 2;

/// Looks up the level reached with `xp` and the thresholds around it.
///
/// Negative totals are treated as zero. Above the last threshold the level stays at the
/// maximum and there is no next threshold.
pub fn level_for_xp(xp: i32) -> Progress {
    let xp = xp.max(0);
    let index = LEVEL_THRESHOLDS
        .iter()
        .rposition(|threshold| xp >= *threshold)
        .unwrap_or(0);

    Progress {
        xp,
        level: index as i32 + 1,
        current_level_xp: LEVEL_THRESHOLDS[index],
        next_level_xp: LEVEL_THRESHOLDS.get(index + 1).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_one() {
        let progress = level_for_xp(0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.current_level_xp, 0);
        assert_eq!(progress.next_level_xp, Some(100));
    }

    #[test]
    fn crosses_threshold_exactly() {
        assert_eq!(level_for_xp(99).level, 1);
        assert_eq!(level_for_xp(100).level, 2);
        assert_eq!(level_for_xp(249).level, 2);
        assert_eq!(level_for_xp(250).level, 3);
        assert_eq!(level_for_xp(7999).level, 8);
    }

    #[test]
    fn caps_at_max_level() {
        let progress = level_for_xp(12000);
        assert_eq!(progress.level, 10);
        assert_eq!(progress.next_level_xp, None);

        let progress = level_for_xp(1_000_000);
        assert_eq!(progress.level, 10);
        assert_eq!(progress.current_level_xp, 12000);
        assert_eq!(progress.next_level_xp, None);
    }

    #[test]
    fn treats_negative_as_zero() {
        assert_eq!(level_for_xp(-5).level, 1);
    }
}
