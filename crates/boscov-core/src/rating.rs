//! Rating Aggregation
//!
//! Display-side helpers. The movie list shows the backend's aggregate while
//! the details view recomputes the mean from the rating list it loaded; the
//! two can disagree and are deliberately not reconciled here.

use crate::models::Rating;

/// Placeholder shown when there is nothing to average
pub const NO_AVERAGE: &str = "--";

/// How one of the five stars is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Arithmetic mean of the scores; `None` for an empty list
pub fn average(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: f64 = ratings.iter().map(|r| r.score).sum();
    Some(total / ratings.len() as f64)
}

/// One decimal place with halves rounded away from zero, or [`NO_AVERAGE`]
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(value) if value.is_finite() => format!("{:.1}", (value * 10.0).round() / 10.0),
        _ => NO_AVERAGE.to_string(),
    }
}

/// Five stars for a score in [0, 5] with half-star granularity
pub fn star_fills(score: Option<f64>) -> [StarFill; 5] {
    let score = score.unwrap_or(0.0);
    std::array::from_fn(|i| {
        let position = (i + 1) as f64;
        if score >= position {
            StarFill::Full
        } else if score >= position - 0.5 {
            StarFill::Half
        } else {
            StarFill::Empty
        }
    })
}

/// The rating a user left on this list, if any
pub fn rating_by_user(ratings: &[Rating], user_id: u32) -> Option<&Rating> {
    ratings.iter().find(|r| r.author_id() == user_id)
}

/// Only the ratings written by `user_id`
pub fn filter_by_user(ratings: &[Rating], user_id: u32) -> Vec<Rating> {
    ratings.iter().filter(|r| r.author_id() == user_id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(id: u32, user_id: u32, score: f64) -> Rating {
        Rating { id, user_id, score, ..Default::default() }
    }

    #[test]
    fn test_zero_ratings_show_placeholder() {
        assert_eq!(average(&[]), None);
        assert_eq!(format_average(average(&[])), "--");
        assert_eq!(format_average(Some(f64::NAN)), "--");
    }

    #[test]
    fn test_average_and_format() {
        let ratings = vec![rating(1, 1, 4.0), rating(2, 2, 5.0), rating(3, 3, 2.0)];
        let avg = average(&ratings).unwrap();
        assert!((avg - 11.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(format_average(Some(avg)), "3.7");
        assert_eq!(format_average(Some(4.0)), "4.0");
    }

    #[test]
    fn test_format_rounds_halves_up() {
        let ratings = vec![rating(1, 1, 1.0), rating(2, 2, 2.0), rating(3, 3, 3.0), rating(4, 4, 3.0)];
        assert_eq!(format_average(average(&ratings)), "2.3");
        assert_eq!(format_average(Some(2.25)), "2.3");
        assert_eq!(format_average(Some(4.75)), "4.8");
    }

    #[test]
    fn test_star_fills() {
        use StarFill::*;
        assert_eq!(star_fills(None), [Empty; 5]);
        assert_eq!(star_fills(Some(5.0)), [Full; 5]);
        assert_eq!(star_fills(Some(3.5)), [Full, Full, Full, Half, Empty]);
        assert_eq!(star_fills(Some(3.4)), [Full, Full, Full, Empty, Empty]);
        assert_eq!(star_fills(Some(0.5)), [Half, Empty, Empty, Empty, Empty]);
    }

    #[test]
    fn test_user_lookup() {
        let ratings = vec![rating(1, 1, 4.0), rating(2, 2, 5.0), rating(3, 1, 2.0)];
        assert_eq!(rating_by_user(&ratings, 2).map(|r| r.id), Some(2));
        assert!(rating_by_user(&ratings, 9).is_none());
        let mine: Vec<u32> = filter_by_user(&ratings, 1).iter().map(|r| r.id).collect();
        assert_eq!(mine, vec![1, 3]);
    }
}
