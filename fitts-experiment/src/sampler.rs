//! Weighted draw over a small, ordered category table.

use fitts_core::{FittsError, Result};
use rand::Rng;

pub trait Weighted {
    fn weight(&self) -> f64;
}

impl<K> Weighted for (K, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

/// Sum of all weights. Fails on an empty table, on any weight that is
/// zero, negative or not finite, and on a sum that overflows.
pub fn total_weight<W: Weighted>(table: &[W]) -> Result<f64> {
    if table.is_empty() {
        return Err(FittsError::InvalidDistribution(
            "category table is empty".to_string(),
        ));
    }
    let mut total = 0.0;
    for (idx, entry) in table.iter().enumerate() {
        let w = entry.weight();
        if !w.is_finite() || w <= 0.0 {
            return Err(FittsError::InvalidDistribution(format!(
                "weight at position {idx} must be positive and finite, got {w}"
            )));
        }
        total += w;
    }
    if !total.is_finite() {
        return Err(FittsError::InvalidDistribution(
            "sum of weights is not finite".to_string(),
        ));
    }
    Ok(total)
}

/// Returns the first entry whose cumulative weight exceeds `r`.
/// Falls back to the last entry when rounding leaves `r` past the final sum.
pub fn select<W: Weighted>(table: &[W], r: f64) -> Option<&W> {
    let mut cumulative = 0.0;
    for entry in table {
        cumulative += entry.weight();
        if r < cumulative {
            return Some(entry);
        }
    }
    table.last()
}

/// Draws one entry with probability proportional to its weight
pub fn sample<'a, W, R>(table: &'a [W], rng: &mut R) -> Result<&'a W>
where
    W: Weighted,
    R: Rng + ?Sized,
{
    let total = total_weight(table)?;
    let r = rng.random_range(0.0..total);
    select(table, r)
        .ok_or_else(|| FittsError::InvalidDistribution("category table is empty".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_select_walks_cumulative_weights() {
        let table = [(1, 400.0), (2, 500.0), (3, 600.0)];
        assert_eq!(select(&table, 0.0).map(|e| e.0), Some(1));
        assert_eq!(select(&table, 399.999).map(|e| e.0), Some(1));
        assert_eq!(select(&table, 400.0).map(|e| e.0), Some(2));
        assert_eq!(select(&table, 899.5).map(|e| e.0), Some(2));
        assert_eq!(select(&table, 900.0).map(|e| e.0), Some(3));
        assert_eq!(select(&table, 1499.9).map(|e| e.0), Some(3));
        // rounding overflow lands on the last category
        assert_eq!(select(&table, 1500.0).map(|e| e.0), Some(3));
    }

    #[test]
    fn test_select_empty() {
        let table: [(u32, f64); 0] = [];
        assert!(select(&table, 0.0).is_none());
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<(u32, f64)> = Vec::new();
        assert!(matches!(
            sample(&empty, &mut rng),
            Err(FittsError::InvalidDistribution(_))
        ));

        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let table = [(1u32, 10.0), (2u32, bad)];
            assert!(
                matches!(
                    sample(&table, &mut rng),
                    Err(FittsError::InvalidDistribution(_))
                ),
                "weight {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let table = [(1u32, 1e308), (2u32, 1e308)];
        assert!(matches!(
            total_weight(&table),
            Err(FittsError::InvalidDistribution(_))
        ));
        assert!(matches!(
            sample(&table, &mut rng),
            Err(FittsError::InvalidDistribution(_))
        ));

        // large but finite totals still sample
        let table = [(1u32, 1e307), (2u32, 1e307)];
        assert!(sample(&table, &mut rng).is_ok());
    }

    #[test]
    fn test_single_category_always_selected() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = [("only", 0.25)];
        for _ in 0..100 {
            assert_eq!(sample(&table, &mut rng).unwrap().0, "only");
        }
    }

    #[test]
    fn test_frequencies_converge_to_weights() {
        let mut rng = StdRng::seed_from_u64(0xF1775);
        let table = [(400u32, 400.0), (500u32, 500.0), (600u32, 600.0)];
        let draws = 60_000;
        let mut counts = [0usize; 3];

        for _ in 0..draws {
            let picked = sample(&table, &mut rng).unwrap();
            let idx = table.iter().position(|e| e.0 == picked.0).unwrap();
            counts[idx] += 1;
        }

        let total: f64 = table.iter().map(|e| e.1).sum();
        for (idx, entry) in table.iter().enumerate() {
            let expected = entry.1 / total;
            let observed = counts[idx] as f64 / draws as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "category {} observed {observed:.4}, expected {expected:.4}",
                entry.0
            );
        }
    }
}
