use crate::{DistanceTable, Leg, PrioritySearch, Route, SearchConfig};

use hashbrown::HashSet;
use thiserror::Error;

/// Errors from [`round_trip`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RoundTripError {
    /// the share of the budget for the way out is not within `0.0..=1.0`
    #[error("ratio must be between 0.0 and 1.0, got {0}")]
    InvalidRatio(f64),
}

/// The share of a round trip's budget reserved for the way out, within `0.0..=1.0`.
///
/// ## Examples
/// ```
/// # use route_coverage::{Ratio, RoundTripError};
/// assert_eq!(Ratio::new(0.25).map(Ratio::get), Ok(0.25));
/// assert_eq!(Ratio::new(1.5), Err(RoundTripError::InvalidRatio(1.5)));
/// assert!(Ratio::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    /// an even split between the way out and the way back
    pub const HALF: Ratio = Ratio(0.5);

    /// Checks that `ratio` is within `0.0..=1.0`.
    pub fn new(ratio: f64) -> Result<Ratio, RoundTripError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Ratio(ratio))
        } else {
            Err(RoundTripError::InvalidRatio(ratio))
        }
    }

    /// the share as a number
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Ratio {
    fn default() -> Ratio {
        Ratio::HALF
    }
}

impl TryFrom<f64> for Ratio {
    type Error = RoundTripError;
    fn try_from(ratio: f64) -> Result<Ratio, RoundTripError> {
        Ratio::new(ratio)
    }
}

/// A Route to the last Point and back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    /// the way from the first to the last Point
    pub forward: Route,
    /// the way back, never visiting an inner Point of `forward` again
    pub backward: Route,
}

impl RoundTrip {
    /// A RoundTrip for which no Route was found.
    pub fn none() -> RoundTrip {
        RoundTrip {
            forward: Route::none(),
            backward: Route::none(),
        }
    }

    /// `true` if both ways were found
    pub fn is_found(&self) -> bool {
        self.forward.is_found() && self.backward.is_found()
    }

    /// the total cost of both ways
    pub fn cost(&self) -> f64 {
        self.forward.cost() + self.backward.cost()
    }

    /// Both ways joined into a single Route, with the last Point appearing once.
    pub fn route(&self) -> Route {
        self.forward.clone().chain(&self.backward)
    }
}

/// Finds a Route from the first to the last Point and back that visits as many Points as
/// possible, each at most once, within `budget`.
///
/// `ratio` is the share of the budget reserved for the way out. It is clamped so that either
/// way can at least afford the direct connection. The way back may use everything the way out
/// left over, and avoids all Points already visited on the way out.
///
/// If the budget is less than twice the direct distance between the first and the last Point,
/// [`RoundTrip::none`] is returned.
///
/// ## Examples
/// ```
/// # use route_coverage::prelude::*;
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(2.0, -1.0),
///     Point::new(3.0, 0.0),
/// ];
/// let table = DistanceTable::new(&points);
///
/// let trip = round_trip(&table, 20.0, Ratio::HALF);
/// assert!(trip.is_found());
/// assert_eq!(trip.route().points(), &[0, 1, 2, 3, 0]);
/// ```
pub fn round_trip(table: &DistanceTable, budget: f64, ratio: Ratio) -> RoundTrip {
    if table.is_empty() {
        return RoundTrip::none();
    }

    let last = table.len() - 1;
    let direct = table[(0, last)];
    if !(budget >= 2.0 * direct) {
        search_log!(
            debug,
            "budget {} cannot cover the direct round trip of {}",
            budget,
            2.0 * direct
        );
        return RoundTrip::none();
    }

    let forward_budget = (budget * ratio.get()).clamp(direct, budget - direct);
    let config = SearchConfig::default().with_max_cost(forward_budget);
    let mut search = PrioritySearch::new(table, config);
    let forward = search.run_leg(Leg::forward(table.len()), |_| true);
    if !forward.is_found() {
        return RoundTrip::none();
    }

    let visited: HashSet<usize> = match forward.points() {
        [_, inner @ .., _] => inner.iter().copied().collect(),
        _ => HashSet::new(),
    };
    search.set_config(SearchConfig::default().with_max_cost(budget - forward.cost()));
    let backward = search.run_leg(Leg::backward(table.len()), |point| {
        !visited.contains(&point)
    });

    search_log!(
        debug,
        "round trip: {} points out for {}, {} points back for {}",
        forward.len(),
        forward.cost(),
        backward.len(),
        backward.cost()
    );

    if !backward.is_found() {
        return RoundTrip::none();
    }
    RoundTrip { forward, backward }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn diamond() -> DistanceTable {
        DistanceTable::new(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
        ])
    }

    #[test]
    fn invalid_ratio() {
        assert_eq!(Ratio::new(-0.1), Err(RoundTripError::InvalidRatio(-0.1)));
        assert!(Ratio::try_from(f64::NAN).is_err());
        assert_eq!(Ratio::new(0.0).map(Ratio::get), Ok(0.0));
        assert_eq!(Ratio::new(1.0).map(Ratio::get), Ok(1.0));
        assert_eq!(Ratio::default(), Ratio::HALF);
    }

    #[test]
    fn budget_below_direct_round_trip() {
        let table = diamond();
        let trip = round_trip(&table, 5.9, Ratio::HALF);
        assert!(!trip.is_found());
        assert_eq!(trip.cost(), f64::INFINITY);
    }

    #[test]
    fn direct_both_ways() {
        let table = diamond();
        let trip = round_trip(&table, 6.0, Ratio::HALF);
        assert_eq!(trip.forward.points(), &[0, 3]);
        assert_eq!(trip.backward.points(), &[3, 0]);
        assert_eq!(trip.route().points(), &[0, 3, 0]);
        assert_eq!(trip.cost(), 6.0);
    }

    #[test]
    fn inner_points_visited_once() {
        let table = diamond();
        let trip = round_trip(&table, 100.0, Ratio::HALF);
        let route = trip.route();

        assert_eq!(route.points(), &[0, 1, 2, 3, 0]);
        assert!(trip.cost() <= 100.0);
        assert!((route.walked_cost(&table) - trip.cost()).abs() < 1e-9);
    }

    #[test]
    fn ratio_is_clamped() {
        let table = diamond();
        // all of the budget would go to the way out, but the way back still needs the direct way
        let trip = round_trip(&table, 6.0, Ratio(1.0));
        assert!(trip.is_found());
        assert_eq!(trip.route().points(), &[0, 3, 0]);
    }

    #[test]
    fn empty_table() {
        let trip = round_trip(&DistanceTable::new(&[]), 1.0, Ratio::HALF);
        assert_eq!(trip, RoundTrip::none());
    }
}
