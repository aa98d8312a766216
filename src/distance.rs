use crate::Point;

use std::ops::Index;

/// The precomputed distances between all pairs of Points.
///
/// `table[(i, j)]` is the Euclidean distance between Point `i` and Point `j` of the sequence the
/// table was built from. The table is symmetric with a zero diagonal and never changes after
/// construction, so it can be shared by any number of searches.
///
/// ## Examples
/// ```
/// # use route_coverage::{DistanceTable, Point};
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let table = DistanceTable::new(&points);
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[(0, 1)], 5.0);
/// assert_eq!(table[(2, 0)], 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    len: usize,
    distances: Vec<f64>,
}

impl DistanceTable {
    /// calculates the distances between all `points`
    pub fn new(points: &[Point]) -> DistanceTable {
        let len = points.len();
        let mut distances = Vec::with_capacity(len * len);
        for &from in points {
            distances.extend(points.iter().map(|&to| from.distance(to)));
        }
        DistanceTable { len, distances }
    }

    /// The number of Points covered by the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the table was built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The distances from Point `from` to every Point, in sequence order.
    #[track_caller]
    pub fn row(&self, from: usize) -> &[f64] {
        assert!(from < self.len, "point index {} out of range", from);
        &self.distances[from * self.len..(from + 1) * self.len]
    }

    /// Sums up the distances between consecutive entries of `route`.
    /// ## Examples
    /// ```
    /// # use route_coverage::{DistanceTable, Point};
    /// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
    /// let table = DistanceTable::new(&points);
    ///
    /// assert_eq!(table.route_cost(&[0, 1, 2]), 10.0);
    /// assert_eq!(table.route_cost(&[2]), 0.0);
    /// ```
    #[track_caller]
    pub fn route_cost(&self, route: &[usize]) -> f64 {
        route.windows(2).map(|pair| self[(pair[0], pair[1])]).sum()
    }
}

impl Index<(usize, usize)> for DistanceTable {
    type Output = f64;
    #[track_caller]
    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        assert!(
            from < self.len && to < self.len,
            "point index ({}, {}) out of range for {} points",
            from,
            to,
            self.len
        );
        &self.distances[from * self.len + to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_with_zero_diagonal() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 7.0),
            Point::new(4.0, 2.0),
            Point::new(9.0, 9.0),
        ];
        let table = DistanceTable::new(&points);

        for i in 0..points.len() {
            assert_eq!(table[(i, i)], 0.0);
            for j in 0..points.len() {
                assert_eq!(table[(i, j)], table[(j, i)]);
                assert_eq!(table[(i, j)], points[i].distance(points[j]));
            }
        }
        assert_eq!(table.row(2), &[table[(2, 0)], table[(2, 1)], 0.0, table[(2, 3)]]);
    }

    #[test]
    fn empty() {
        let table = DistanceTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range() {
        let table = DistanceTable::new(&[Point::new(0.0, 0.0)]);
        let _ = table[(0, 1)];
    }
}
