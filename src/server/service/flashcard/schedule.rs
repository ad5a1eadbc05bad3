//! SM-2 spaced repetition on a 1-5 quality scale.

use chrono::{DateTime, Duration, Utc};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::flashcard::Schedule,
};

pub const MIN_QUALITY: i32 = 1;
pub const MAX_QUALITY: i32 = 5;

/// Reviews below this quality count as a lapse.
const PASSING_QUALITY: i32 = 3;
const MIN_EASE_FACTOR: f64 = 1.3;
/// Longest interval a card can be scheduled out, roughly a century.
pub const MAX_INTERVAL_DAYS: i32 = 36_500;

/// Computes the schedule that follows a review of `quality`.
///
/// A lapse restarts the card at a one day interval. Otherwise the first two successful
/// repetitions use fixed 1 and 6 day intervals and later ones multiply the previous
/// interval by the ease factor, capped at [`MAX_INTERVAL_DAYS`]. The ease factor moves with
/// every review and never drops below 1.3.
pub fn next_schedule(current: Schedule, quality: i32) -> Schedule {
    let q = f64::from(MAX_QUALITY - quality);
    let ease_factor = (current.ease_factor + (0.1 - q * (0.08 + q * 0.02))).max(MIN_EASE_FACTOR);

    if quality < PASSING_QUALITY {
        return Schedule {
            ease_factor,
            interval_days: 1,
            repetitions: 0,
        };
    }

    let repetitions = current.repetitions + 1;
    let interval_days = match repetitions {
        1 => 1,
        2 => 6,
        _ => (f64::from(current.interval_days) * ease_factor)
            .round()
            .min(f64::from(MAX_INTERVAL_DAYS)) as i32,
    };

    Schedule {
        ease_factor,
        interval_days,
        repetitions,
    }
}

/// When a card with `schedule` becomes due after being reviewed at `reviewed_at`.
///
/// # Returns
/// - `Err(InternalError::DueDateOutOfRange)` - The due date is not representable
pub fn due_after(
    schedule: &Schedule,
    reviewed_at: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    Duration::try_days(i64::from(schedule.interval_days))
        .and_then(|interval| reviewed_at.checked_add_signed(interval))
        .ok_or_else(|| {
            InternalError::DueDateOutOfRange {
                interval_days: schedule.interval_days,
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_success_is_one_day() {
        let next = next_schedule(Schedule::default(), 4);
        assert_eq!(next.repetitions, 1);
        assert_eq!(next.interval_days, 1);
        assert!(approx(next.ease_factor, 2.5));
    }

    #[test]
    fn second_success_is_six_days() {
        let first = next_schedule(Schedule::default(), 5);
        let second = next_schedule(first, 5);
        assert_eq!(second.repetitions, 2);
        assert_eq!(second.interval_days, 6);
        assert!(approx(second.ease_factor, 2.7));
    }

    #[test]
    fn later_successes_multiply_by_ease() {
        let current = Schedule {
            ease_factor: 2.5,
            interval_days: 6,
            repetitions: 2,
        };
        let next = next_schedule(current, 4);
        assert_eq!(next.repetitions, 3);
        assert_eq!(next.interval_days, 15);
    }

    #[test]
    fn lapse_resets_repetitions() {
        let current = Schedule {
            ease_factor: 2.5,
            interval_days: 15,
            repetitions: 3,
        };
        let next = next_schedule(current, 2);
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval_days, 1);
        assert!(approx(next.ease_factor, 2.18));
    }

    #[test]
    fn ease_never_drops_below_floor() {
        let mut schedule = Schedule::default();
        for _ in 0..10 {
            schedule = next_schedule(schedule, 1);
        }
        assert!(approx(schedule.ease_factor, 1.3));
    }

    #[test]
    fn due_date_follows_interval() {
        let now = Utc::now();
        let schedule = Schedule {
            ease_factor: 2.5,
            interval_days: 6,
            repetitions: 2,
        };
        assert_eq!(due_after(&schedule, now).unwrap(), now + Duration::days(6));
    }

    #[test]
    fn interval_is_capped_after_many_perfect_reviews() {
        let now = Utc::now();
        let mut schedule = Schedule::default();
        for _ in 0..50 {
            schedule = next_schedule(schedule, MAX_QUALITY);
            assert!(schedule.interval_days <= MAX_INTERVAL_DAYS);
            assert!(due_after(&schedule, now).is_ok());
        }
        assert_eq!(schedule.interval_days, MAX_INTERVAL_DAYS);
        assert_eq!(schedule.repetitions, 50);
    }

    #[test]
    fn unrepresentable_due_date_is_an_error() {
        let schedule = Schedule {
            ease_factor: 2.5,
            interval_days: i32::MAX,
            repetitions: 3,
        };
        let result = due_after(&schedule, DateTime::<Utc>::MAX_UTC);
        assert!(matches!(
            result,
            Err(AppError::InternalErr(
                InternalError::DueDateOutOfRange { .. }
            ))
        ));
    }
}
