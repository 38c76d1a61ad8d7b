//! Strict local extrema over an ordered numeric sequence.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Minimum,
    Maximum,
}

/// Indices whose value is strictly more extreme than every neighbor within
/// `order` positions on both sides.
///
/// Comparisons at the boundary are clipped to the sequence, and since they are
/// strict the first and last index never qualify. A strictly-monotone run
/// therefore produces no extrema at its ends.
pub fn local_extrema(values: &[f64], order: usize, kind: Extremum) -> Vec<usize> {
    let n = values.len();
    if n < 3 || order == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    'candidates: for i in 1..n - 1 {
        let lo = i.saturating_sub(order);
        let hi = (i + order).min(n - 1);
        for j in lo..=hi {
            if j == i {
                continue;
            }
            let extreme = match kind {
                Extremum::Minimum => values[i] < values[j],
                Extremum::Maximum => values[i] > values[j],
            };
            if !extreme {
                continue 'candidates;
            }
        }
        out.push(i);
    }
    out
}
