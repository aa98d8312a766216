use crate::{DistanceTable, Point};

/// A Route through the Point sequence.
///
/// Stores the indices of the visited Points in travel order, together with the total cost of
/// walking them. A Route that was not found is empty and has an infinite cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<usize>,
    cost: f64,
}

impl Route {
    /// creates a new Route with the given sequence of Points and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use route_coverage::Route;
    /// let route = Route::new(vec![0, 2, 3], 4.5);
    ///
    /// assert_eq!(route.points(), &[0, 2, 3]);
    /// assert_eq!(route.cost(), 4.5);
    /// assert_eq!(route.len(), 3);
    /// ```
    pub fn new(points: Vec<usize>, cost: f64) -> Route {
        Route { points, cost }
    }

    /// The result of a search that found no Route.
    /// ## Examples
    /// ```
    /// # use route_coverage::Route;
    /// let route = Route::none();
    ///
    /// assert!(!route.is_found());
    /// assert!(route.is_empty());
    /// assert_eq!(route.cost(), f64::INFINITY);
    /// ```
    pub fn none() -> Route {
        Route {
            points: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// `true` unless this is [`Route::none`]
    pub fn is_found(&self) -> bool {
        !self.points.is_empty()
    }

    /// the total Cost of the Route
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// the indices of the visited Points, in travel order
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// the number of visited Points, including start and goal
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the Route visits no Points at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an Iterator over the visited Point indices
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.points.iter().copied()
    }

    /// Returns an Iterator over the coordinates of the visited Points.
    ///
    /// `points` must be the sequence the Route was searched on.
    pub fn coordinates<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = Point> + 'a {
        self.iter().map(move |index| points[index])
    }

    /// Appends `other` to this Route. `other` has to start where this Route ends; that Point is
    /// only included once.
    /// ## Examples
    /// ```
    /// # use route_coverage::Route;
    /// let there = Route::new(vec![0, 2, 4], 3.0);
    /// let back = Route::new(vec![4, 3, 0], 2.5);
    ///
    /// let round = there.chain(&back);
    /// assert_eq!(round.points(), &[0, 2, 4, 3, 0]);
    /// assert_eq!(round.cost(), 5.5);
    /// ```
    #[track_caller]
    pub fn chain(mut self, other: &Route) -> Route {
        if let (Some(&end), Some(&start)) = (self.points.last(), other.points.first()) {
            assert_eq!(end, start, "chained Routes have to meet at the same Point");
            self.points.extend_from_slice(&other.points[1..]);
            self.cost += other.cost;
            self
        } else {
            Route::none()
        }
    }

    /// Recalculates the cost of walking this Route from scratch.
    ///
    /// For a Route returned by a search this equals [`cost`](Route::cost) up to rounding.
    #[track_caller]
    pub fn walked_cost(&self, table: &DistanceTable) -> f64 {
        table.route_cost(&self.points)
    }
}

use std::ops::{Deref, Index};

impl Index<usize> for Route {
    type Output = usize;
    fn index(&self, index: usize) -> &usize {
        &self.points[index]
    }
}

impl Deref for Route {
    type Target = [usize];
    fn deref(&self) -> &[usize] {
        &self.points
    }
}

use std::fmt;
impl fmt::Display for Route {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Route[Cost = {:.1}]: ", self.cost)?;
        if self.points.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.points[0])?;
            for p in self.points.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
