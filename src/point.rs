use std::cmp::Ordering;
use std::fmt;

/// A Point on the plane.
///
/// Points have no identity beyond their coordinates. Within a search they are referred to by
/// their index in the sorted Point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// the X coordinate
    pub x: f64,
    /// the Y coordinate
    pub y: f64,
}

impl Point {
    /// creates a new Point from its coordinates
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The Euclidean distance between two Points.
    /// ## Examples
    /// ```
    /// # use route_coverage::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    ///
    /// assert_eq!(a.distance(b), 5.0);
    /// assert_eq!(b.distance(a), 5.0);
    /// ```
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Compares two Points by X, then by Y.
    ///
    /// This is the order in which Points are sorted before searching.
    pub fn cmp_coords(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Sorts `points` ascending by X, then by Y.
    /// ## Examples
    /// ```
    /// # use route_coverage::Point;
    /// let mut points = vec![Point::new(2.0, 0.0), Point::new(1.0, 5.0), Point::new(1.0, 2.0)];
    /// Point::sort(&mut points);
    ///
    /// assert_eq!(points, [Point::new(1.0, 2.0), Point::new(1.0, 5.0), Point::new(2.0, 0.0)]);
    /// ```
    pub fn sort(points: &mut [Point]) {
        points.sort_by(Point::cmp_coords);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:.0} {:.0}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-1.0, 2.5);
        let b = Point::new(4.0, -7.0);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn sort_by_x_then_y() {
        let mut points = vec![
            Point::new(3.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, -1.0),
        ];
        Point::sort(&mut points);
        assert_eq!(
            points,
            [
                Point::new(0.0, 0.0),
                Point::new(2.0, -1.0),
                Point::new(2.0, 1.0),
                Point::new(3.0, 0.0),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Point::new(12.0, 7.4)), "12 7");
    }
}
