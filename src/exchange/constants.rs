/// Calorie anchor of one protein portion.
pub const PROTEIN_PORTION_KCAL: f64 = 150.0;

/// Calorie anchor of one carbohydrate portion.
pub const CARB_PORTION_KCAL: f64 = 200.0;

/// Calorie anchor of one fat portion.
pub const FAT_PORTION_KCAL: f64 = 100.0;

/// Case-insensitive name prefix marking a synthetic block entry.
pub const GENERIC_MARKER: &str = "bloque";

/// Gram quantity assumed when neither a portion weight nor a prior basis
/// is known.
pub const DEFAULT_SPECIFIC_GRAMS: f64 = 100.0;

/// Portion count assumed when the original line's food cannot be resolved.
pub const DEFAULT_PORTION_COUNT: f64 = 1.0;

/// Relative tolerance when checking a plan total against a calorie target.
pub const CALORIE_TOLERANCE: f64 = 0.03;

/// Minimum Jaro-Winkler score for a fuzzy catalog match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Round to the nearest tenth (displayed precision for macro grams and
/// portion counts).
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(198.75), 198.8);
        assert_eq!(round1(1.04), 1.0);
        assert_eq!(round1(0.049), 0.0);
        assert_eq!(round1(2.0), 2.0);
    }
}
