// CSG (Constructive Solid Geometry) operations on signed distances.
//
// - union:        the merged shape (min)
// - intersection: the overlapping region (max)

/// Boolean union of two SDF values (logical OR).
/// Returns the minimum distance: the point is inside whichever shape is closer.
pub fn union(d1: f64, d2: f64) -> f64 {
    d1.min(d2)
}

/// N-ary boolean union. The union of nothing is empty space everywhere,
/// so an empty iterator yields `f64::INFINITY`.
pub fn union_all<I: IntoIterator<Item = f64>>(distances: I) -> f64 {
    distances.into_iter().fold(f64::INFINITY, union)
}

/// Boolean intersection of two SDF values (logical AND).
/// Returns the maximum distance: the point must be inside both shapes.
pub fn intersection(d1: f64, d2: f64) -> f64 {
    d1.max(d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_all_matches_pairwise_min() {
        assert_eq!(union_all([3.0, -1.0, 2.0]), -1.0);
        assert_eq!(union_all([4.0]), 4.0);
    }

    #[test]
    fn union_all_of_nothing_is_outside() {
        assert!(union_all(std::iter::empty()).is_infinite());
    }

    #[test]
    fn intersection_requires_both() {
        assert_eq!(intersection(-2.0, 1.0), 1.0);
        assert_eq!(intersection(-2.0, -1.0), -1.0);
    }
}
