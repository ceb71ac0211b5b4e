//! Small numeric helpers shared by both engines

use std::cmp::Ordering;

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round every element of a slice
pub fn round_all(values: &[f64], decimals: i32) -> Vec<f64> {
    values.iter().map(|&v| round_to(v, decimals)).collect()
}

/// Descending comparison for scores; NaN sorts as equal so stable order is kept.
pub fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(-1.23454, 4), -1.2345);
        assert_eq!(round_to(2.0, 6), 2.0);
    }

    #[test]
    fn test_by_score_desc_is_stable_for_ties() {
        let mut items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0), ("d", 2.0)];
        items.sort_by(|x, y| by_score_desc(x.1, y.1));
        let order: Vec<_> = items.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }
}
