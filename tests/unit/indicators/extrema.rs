//! Unit tests for local extrema detection

use crate::common_series::v_shape_closes;
use pentrix::indicators::structure::extrema::{local_extrema, Extremum};

#[test]
fn test_v_shape_single_minimum_no_maxima() {
    let closes = v_shape_closes();
    let minima = local_extrema(&closes, 5, Extremum::Minimum);
    let maxima = local_extrema(&closes, 5, Extremum::Maximum);
    assert_eq!(minima, vec![19]);
    assert!(maxima.is_empty());
}

#[test]
fn test_boundary_indices_never_qualify() {
    // Endpoints are global extremes here but are not interior points.
    let rising: Vec<f64> = (0..30).map(|i| i as f64).collect();
    assert!(local_extrema(&rising, 5, Extremum::Maximum).is_empty());
    assert!(local_extrema(&rising, 5, Extremum::Minimum).is_empty());
}

#[test]
fn test_plateau_is_not_an_extremum() {
    // Equal neighbors break strictness.
    let values = [5.0, 3.0, 1.0, 1.0, 3.0, 5.0, 3.0, 1.0, 3.0, 5.0];
    let minima = local_extrema(&values, 2, Extremum::Minimum);
    assert_eq!(minima, vec![7]);
}

#[test]
fn test_window_is_clipped_at_edges() {
    let values = [5.0, 1.0, 4.0, 6.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0];
    // Index 1 has fewer than `order` neighbors on the left but still counts.
    let minima = local_extrema(&values, 5, Extremum::Minimum);
    assert_eq!(minima, vec![1]);
}

#[test]
fn test_multiple_extrema() {
    let values = [10.0, 6.0, 10.0, 14.0, 10.0, 6.0, 10.0];
    assert_eq!(local_extrema(&values, 1, Extremum::Minimum), vec![1, 5]);
    assert_eq!(local_extrema(&values, 1, Extremum::Maximum), vec![3]);
}
