//! Word scoring and the combo multiplier

/// Minimum word length that earns the 2x tier and builds combos
pub const COMBO_LENGTH: usize = 6;

/// Minimum word length that earns the 3x tier
pub const TOP_TIER_LENGTH: usize = 8;

/// Highest value the combo multiplier can reach
pub const MAX_MULTIPLIER: u8 = 5;

/// Length multiplier for a word of `len` letters
#[inline]
#[must_use]
pub const fn tier(len: usize) -> u32 {
    if len >= TOP_TIER_LENGTH {
        3
    } else if len >= COMBO_LENGTH {
        2
    } else {
        1
    }
}

/// Points for a word: `length * tier`
///
/// # Examples
/// ```
/// use wordrush::core::score;
///
/// assert_eq!(score("CAT"), 3);
/// assert_eq!(score("GARDEN"), 12);
/// assert_eq!(score("COMPUTER"), 24);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    let len = word.chars().count();
    len as u32 * tier(len)
}

/// Multiplier after accepting a word of `len` letters
///
/// Long words extend the combo (capped at [`MAX_MULTIPLIER`]); anything
/// shorter resets it to 1.
#[inline]
#[must_use]
pub const fn next_multiplier(current: u8, len: usize) -> u8 {
    if len >= COMBO_LENGTH {
        let next = current.saturating_add(1);
        if next > MAX_MULTIPLIER {
            MAX_MULTIPLIER
        } else {
            next
        }
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn score_examples() {
        assert_eq!(score("CAT"), 3);
        assert_eq!(score("RATES"), 5);
        assert_eq!(score("GARDEN"), 12);
        assert_eq!(score("COMPUTER"), 24);
    }

    #[test]
    fn score_tier_boundaries() {
        assert_eq!(tier(5), 1);
        assert_eq!(tier(6), 2);
        assert_eq!(tier(7), 2);
        assert_eq!(tier(8), 3);
        assert_eq!(score("WRITTEN"), 14);
    }

    #[test]
    fn multiplier_grows_on_long_words() {
        assert_eq!(next_multiplier(1, 6), 2);
        assert_eq!(next_multiplier(4, 8), 5);
        assert_eq!(next_multiplier(5, 7), 5);
    }

    #[test]
    fn multiplier_resets_on_short_words() {
        assert_eq!(next_multiplier(4, 5), 1);
        assert_eq!(next_multiplier(1, 3), 1);
    }

    proptest! {
        // Within a tier, one more letter never lowers the score
        #[test]
        fn score_monotonic_in_length(len in 1usize..12) {
            let shorter = "A".repeat(len);
            let longer = "A".repeat(len + 1);
            prop_assert!(score(&longer) > score(&shorter));
        }

        #[test]
        fn multiplier_stays_in_range(current in 1u8..=5, len in 0usize..12) {
            let next = next_multiplier(current, len);
            prop_assert!((1..=MAX_MULTIPLIER).contains(&next));
        }
    }
}
