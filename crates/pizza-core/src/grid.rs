// File: crates/pizza-core/src/grid.rs
// Summary: Simple grid/ring layout helpers.

use crate::scale::radius_for;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced interior fractions of `(0, 1)`: `count = 4` gives 0.2/0.4/0.6/0.8.
pub fn ring_fractions(count: usize) -> Vec<f64> {
    if count == 0 { return Vec::new(); }
    let all = linspace(0.0, 1.0, count + 2);
    all[1..all.len() - 1].to_vec()
}

/// Radii of `count` concentric reference rings for a donut with the given hole.
/// Independent of any sector geometry.
pub fn reference_rings(count: usize, hole: f64) -> Vec<f64> {
    ring_fractions(count).into_iter().map(|f| radius_for(f, hole)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rings_at_fifths() {
        let f = ring_fractions(4);
        assert_eq!(f.len(), 4);
        for (got, want) in f.iter().zip([0.2, 0.4, 0.6, 0.8]) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    #[test]
    fn zero_rings_is_empty() {
        assert!(ring_fractions(0).is_empty());
        assert!(reference_rings(0, 0.15).is_empty());
    }

    #[test]
    fn rings_sit_between_hole_and_rim() {
        for r in reference_rings(3, 0.15) {
            assert!(r > 0.15 && r < 1.0);
        }
    }
}
