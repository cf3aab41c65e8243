// SPDX-License-Identifier: MPL-2.0
//! Star rating derivation.
//!
//! A popularity score out of 5 is turned into a fixed row of five stars:
//! `floor(score)` full stars, one half star when the fractional part is at
//! least one half, and empty stars for the remaining slots.
//!
//! The derivation is pure and returns counts; rendering glyphs or widgets is
//! left to the view layer.

use crate::domain::catalog::format_amount;

/// Number of star slots in a rating.
pub const MAX_STARS: u8 = 5;

/// Glyph drawn for a full star (also used, dimmed, for the half star).
pub const FULL_STAR: char = '★';

/// Glyph drawn for an empty star.
pub const EMPTY_STAR: char = '☆';

/// One slot of a rendered rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    /// Returns the character drawn for this slot.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            StarGlyph::Full | StarGlyph::Half => FULL_STAR,
            StarGlyph::Empty => EMPTY_STAR,
        }
    }
}

/// Star counts derived from a popularity score.
///
/// `full + half + empty` is always [`MAX_STARS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    full: u8,
    half: bool,
    empty: u8,
    score: f64,
}

impl StarRating {
    /// Derives a rating from a score out of 5.
    ///
    /// Scores are clamped to `[0, 5]`; `NaN` and infinite scores count as 0.
    /// The original score is kept for the numeric label.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        let clamped = if score.is_finite() {
            score.clamp(0.0, f64::from(MAX_STARS))
        } else {
            0.0
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = clamped.floor() as u8;
        let half = full < MAX_STARS && clamped.fract() >= 0.5;
        let empty = MAX_STARS - full - u8::from(half);

        Self {
            full,
            half,
            empty,
            score,
        }
    }

    #[must_use]
    pub fn full(&self) -> u8 {
        self.full
    }

    #[must_use]
    pub fn has_half(&self) -> bool {
        self.half
    }

    /// Returns 1 when a half star is shown, 0 otherwise.
    #[must_use]
    pub fn half(&self) -> u8 {
        u8::from(self.half)
    }

    #[must_use]
    pub fn empty(&self) -> u8 {
        self.empty
    }

    /// Returns the score the rating was derived from, unclamped.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Numeric label appended after the stars, e.g. `4.5/5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", format_amount(self.score), MAX_STARS)
    }

    /// Returns the five slots in display order.
    #[must_use]
    pub fn glyphs(&self) -> Vec<StarGlyph> {
        let mut glyphs = Vec::with_capacity(usize::from(MAX_STARS));
        glyphs.extend(std::iter::repeat_n(StarGlyph::Full, usize::from(self.full)));
        if self.half {
            glyphs.push(StarGlyph::Half);
        }
        glyphs.extend(std::iter::repeat_n(StarGlyph::Empty, usize::from(self.empty)));
        glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(score: f64) -> (u8, u8, u8) {
        let rating = StarRating::from_score(score);
        (rating.full(), rating.half(), rating.empty())
    }

    #[test]
    fn four_and_a_half_has_one_half_star() {
        assert_eq!(counts(4.5), (4, 1, 0));
    }

    #[test]
    fn three_point_two_rounds_down() {
        assert_eq!(counts(3.2), (3, 0, 2));
    }

    #[test]
    fn zero_is_all_empty() {
        assert_eq!(counts(0.0), (0, 0, 5));
    }

    #[test]
    fn perfect_score_is_all_full() {
        assert_eq!(counts(5.0), (5, 0, 0));
    }

    #[test]
    fn nan_is_all_empty() {
        assert_eq!(counts(f64::NAN), (0, 0, 5));
        assert_eq!(counts(f64::INFINITY), (0, 0, 5));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(counts(7.0), (5, 0, 0));
        assert_eq!(counts(-1.0), (0, 0, 5));
        assert_eq!(counts(5.7), (5, 0, 0));
    }

    #[test]
    fn slots_always_sum_to_five() {
        for step in 0..=50 {
            let score = f64::from(step) / 10.0;
            let (full, half, empty) = counts(score);
            assert_eq!(full + half + empty, MAX_STARS, "score {score}");
        }
    }

    #[test]
    fn label_keeps_original_score() {
        assert_eq!(StarRating::from_score(4.5).label(), "4.5/5");
        assert_eq!(StarRating::from_score(4.0).label(), "4/5");
        assert_eq!(StarRating::from_score(7.0).label(), "7/5");
    }

    #[test]
    fn glyphs_are_ordered_full_half_empty() {
        let glyphs = StarRating::from_score(2.6).glyphs();
        assert_eq!(
            glyphs,
            vec![
                StarGlyph::Full,
                StarGlyph::Full,
                StarGlyph::Half,
                StarGlyph::Empty,
                StarGlyph::Empty,
            ]
        );
        let text: String = glyphs.iter().map(|g| g.as_char()).collect();
        assert_eq!(text, "★★★☆☆");
    }
}
