//! Star rating breakdown.

use serde::Serialize;

/// Number of stars on the scale.
pub const MAX_STARS: u8 = 5;

/// A rating split into full, half and empty stars.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarRating {
    /// Break a 0-5 score into stars.
    ///
    /// Full stars are the floor of the score; a fractional part of one half
    /// or more adds a half star. Out-of-range and NaN scores are clamped.
    pub fn from_score(score: f32) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, MAX_STARS as f32)
        };

        let full = score.floor() as u8;
        let half = u8::from(score - score.floor() >= 0.5);

        Self {
            full,
            half,
            empty: MAX_STARS - full - half,
        }
    }

    /// Text rendition, e.g. `★★★★½` for 4.5.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(MAX_STARS as usize * 3);
        out.extend(std::iter::repeat_n('★', self.full as usize));
        out.extend(std::iter::repeat_n('½', self.half as usize));
        out.extend(std::iter::repeat_n('☆', self.empty as usize));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_and_a_half() {
        let stars = StarRating::from_score(4.5);
        assert_eq!(
            stars,
            StarRating {
                full: 4,
                half: 1,
                empty: 0
            }
        );
        assert_eq!(stars.render(), "★★★★½");
    }

    #[test]
    fn test_fraction_below_half_rounds_down() {
        let stars = StarRating::from_score(3.4);
        assert_eq!((stars.full, stars.half, stars.empty), (3, 0, 2));
        assert_eq!(stars.render(), "★★★☆☆");
    }

    #[test]
    fn test_whole_scores() {
        assert_eq!(StarRating::from_score(5.0).full, 5);
        assert_eq!(StarRating::from_score(0.0).empty, 5);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(StarRating::from_score(7.2), StarRating::from_score(5.0));
        assert_eq!(StarRating::from_score(-1.0), StarRating::from_score(0.0));
        assert_eq!(StarRating::from_score(f32::NAN), StarRating::from_score(0.0));
    }

    #[test]
    fn test_always_five_stars_total() {
        for tenths in 0..=50 {
            let s = StarRating::from_score(tenths as f32 / 10.0);
            assert_eq!(s.full + s.half + s.empty, MAX_STARS);
        }
    }
}
