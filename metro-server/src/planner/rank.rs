//! Path ranking for enumeration results.
//!
//! Ranks paths by a combination of factors to present the most useful
//! options first.

use std::cmp::Ordering;

use crate::domain::Path;

/// Compare two paths by preference.
///
/// Paths are ordered by:
/// 1. Total distance (shorter is better)
/// 2. Number of transfers (fewer is better)
/// 3. Number of stations (fewer is better)
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    a.total_distance()
        .total_cmp(&b.total_distance())
        .then_with(|| a.transfer_count().cmp(&b.transfer_count()))
        .then_with(|| a.station_count().cmp(&b.station_count()))
}

/// Rank paths best-first using [`compare_paths`].
///
/// The sort is stable, so equally ranked paths keep discovery order.
pub fn rank_paths(mut paths: Vec<Path>) -> Vec<Path> {
    paths.sort_by(compare_paths);
    paths
}

/// Returns true if `a` is at least as good as `b` on distance and transfers
/// and strictly better on one of them.
fn dominates(a: &Path, b: &Path) -> bool {
    a.total_distance() <= b.total_distance()
        && a.transfer_count() <= b.transfer_count()
        && (a.total_distance() < b.total_distance() || a.transfer_count() < b.transfer_count())
}

/// Remove dominated paths.
///
/// A path is dominated if another path:
/// - Is no longer
/// - Has the same or fewer transfers
/// - Is strictly better in at least one of the two
///
/// Paths that tie on both measures are all kept.
pub fn remove_dominated(paths: Vec<Path>) -> Vec<Path> {
    if paths.len() <= 1 {
        return paths;
    }

    let mut result: Vec<Path> = Vec::with_capacity(paths.len());

    for path in paths {
        if result.iter().any(|existing| dominates(existing, &path)) {
            continue;
        }
        // Also remove any kept paths dominated by this one
        result.retain(|existing| !dominates(&path, existing));
        result.push(path);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    /// Build a path whose steps alternate lines according to `lines`.
    fn make_path(distances: &[f64], lines: &[usize]) -> Path {
        let mut path = Path::new(StationId(0));
        for (i, (&d, &l)) in distances.iter().zip(lines).enumerate() {
            path.push(StationId(i + 1), LineId(l), d);
        }
        path
    }

    #[test]
    fn rank_by_distance() {
        let long = make_path(&[5.0, 5.0], &[0, 0]);
        let short = make_path(&[1.0, 1.0], &[0, 1]);

        let ranked = rank_paths(vec![long, short.clone()]);
        assert_eq!(ranked[0], short);
    }

    #[test]
    fn rank_ties_by_transfers_then_stations() {
        let one_change = make_path(&[2.0, 2.0], &[0, 1]);
        let direct = make_path(&[2.0, 2.0], &[0, 0]);
        let direct_single_hop = make_path(&[4.0], &[0]);

        let ranked = rank_paths(vec![one_change.clone(), direct.clone(), direct_single_hop.clone()]);
        assert_eq!(ranked, vec![direct_single_hop, direct, one_change]);
    }

    #[test]
    fn remove_dominated_keeps_trade_offs() {
        // Shorter but with a change vs longer but direct: neither dominates
        let short_change = make_path(&[1.0, 1.0], &[0, 1]);
        let long_direct = make_path(&[3.0], &[0]);
        // Worse than both
        let bad = make_path(&[2.0, 2.0, 2.0], &[0, 1, 0]);

        let result = remove_dominated(vec![bad, short_change.clone(), long_direct.clone()]);
        assert_eq!(result.len(), 2);
        assert!(result.contains(&short_change));
        assert!(result.contains(&long_direct));
    }

    #[test]
    fn remove_dominated_keeps_exact_ties() {
        let a = make_path(&[2.0], &[0]);
        let b = make_path(&[1.0, 1.0], &[1, 1]);

        assert_eq!(remove_dominated(vec![a, b]).len(), 2);
    }

    #[test]
    fn remove_dominated_trivial_inputs() {
        assert!(remove_dominated(Vec::new()).is_empty());
        assert_eq!(remove_dominated(vec![make_path(&[1.0], &[0])]).len(), 1);
    }
}
