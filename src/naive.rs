use crate::{DistanceTable, Route, SearchConfig};

/// Finds the best Route from the first to the last Point by trying all of them.
///
/// Routes are explored depth-first in sequence order, abandoning a Route as soon as it exceeds
/// the budget or the exact length of `config`. The result visits the most Points possible,
/// and among those has the lowest cost. This takes exponential time in the number of Points and
/// is meant for checking [`PrioritySearch`](crate::PrioritySearch) on small inputs.
///
/// ## Examples
/// ```
/// # use route_coverage::prelude::*;
/// # use route_coverage::naive_search;
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 1.0),
///     Point::new(3.0, 0.0),
/// ];
/// let table = DistanceTable::new(&points);
///
/// let route = naive_search(&table, SearchConfig::default().with_max_cost(10.0));
/// assert_eq!(route.points(), &[0, 1, 2, 3]);
///
/// let route = naive_search(&table, SearchConfig::default().with_max_cost(2.0));
/// assert!(!route.is_found());
/// ```
pub fn naive_search(table: &DistanceTable, config: SearchConfig) -> Route {
    if table.is_empty() {
        return Route::none();
    }

    let mut explorer = Explorer {
        table,
        config,
        goal: table.len() - 1,
        current: vec![0],
        best: Route::none(),
        explored: 0,
    };
    explorer.explore(0.0);

    search_log!(
        debug,
        "naive search explored {} routes, best has {} points",
        explorer.explored,
        explorer.best.len()
    );
    explorer.best
}

struct Explorer<'a> {
    table: &'a DistanceTable,
    config: SearchConfig,
    goal: usize,
    current: Vec<usize>,
    best: Route,
    explored: usize,
}

impl Explorer<'_> {
    fn explore(&mut self, cost: f64) {
        let point = match self.current.last() {
            Some(&point) => point,
            None => return,
        };

        if point == self.goal {
            self.explored += 1;
            let len = self.current.len();
            if self.config.accepts_length(len)
                && (len > self.best.len() || (len == self.best.len() && cost < self.best.cost()))
            {
                self.best = Route::new(self.current.clone(), cost);
            }
            return;
        }

        if self.config.exceeds_length(self.current.len() + 1) {
            return;
        }

        for next in point + 1..=self.goal {
            let next_cost = cost + self.table[(point, next)];
            if !(next_cost <= self.config.max_cost) {
                continue;
            }
            self.current.push(next);
            self.explore(next_cost);
            self.current.pop();
        }
    }
}

/// Finds the best round trip from the first Point to the last and back by trying all of them.
///
/// Every inner Point is either skipped, visited on the way out or visited on the way back, and
/// no Point is visited twice. Unlike [`round_trip`](crate::round_trip) the budget is not split
/// between the two ways, so this is an upper bound for what any [`Ratio`](crate::Ratio) achieves.
/// The result is a single Route `first -> .. -> last -> .. -> first` that visits the most Points
/// possible within `budget`, and among those has the lowest cost. Takes `3^(n - 2)` steps.
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
/// let route = naive_round_trip(&table, 20.0);
/// assert_eq!(route.len(), 5);
/// assert_eq!(route.points()[2], 3);
///
/// assert_eq!(naive_round_trip(&table, 6.0).points(), &[0, 3, 0]);
/// ```
pub fn naive_round_trip(table: &DistanceTable, budget: f64) -> Route {
    match table.len() {
        0 => return Route::none(),
        1 if budget >= 0.0 => return Route::new(vec![0], 0.0),
        1 => return Route::none(),
        _ => {}
    }

    let mut explorer = TripExplorer {
        table,
        budget,
        goal: table.len() - 1,
        forward: vec![0],
        backward: vec![0],
        best: Route::none(),
        explored: 0,
    };
    explorer.explore(1, 0.0);

    search_log!(
        debug,
        "naive round trip explored {} routes, best has {} points",
        explorer.explored,
        explorer.best.len()
    );
    explorer.best
}

/// Both ways are kept in ascending order, starting at the first Point.
struct TripExplorer<'a> {
    table: &'a DistanceTable,
    budget: f64,
    goal: usize,
    forward: Vec<usize>,
    backward: Vec<usize>,
    best: Route,
    explored: usize,
}

impl TripExplorer<'_> {
    fn ends(&self) -> (usize, usize) {
        (
            self.forward[self.forward.len() - 1],
            self.backward[self.backward.len() - 1],
        )
    }

    fn explore(&mut self, next: usize, cost: f64) {
        if !(cost <= self.budget) {
            return;
        }
        if next == self.goal {
            self.finish(cost);
            return;
        }
        let (forward_end, backward_end) = self.ends();

        self.forward.push(next);
        self.explore(next + 1, cost + self.table[(forward_end, next)]);
        self.forward.pop();

        self.backward.push(next);
        self.explore(next + 1, cost + self.table[(backward_end, next)]);
        self.backward.pop();

        self.explore(next + 1, cost);
    }

    fn finish(&mut self, cost: f64) {
        self.explored += 1;
        let (forward_end, backward_end) = self.ends();
        let cost =
            cost + self.table[(forward_end, self.goal)] + self.table[(self.goal, backward_end)];
        if !(cost <= self.budget) {
            return;
        }

        let len = self.forward.len() + 1 + self.backward.len();
        if len > self.best.len() || (len == self.best.len() && cost < self.best.cost()) {
            let mut points = self.forward.clone();
            points.push(self.goal);
            points.extend(self.backward.iter().rev());
            let cost = self.table.route_cost(&points);
            self.best = Route::new(points, cost);
        }
    }
}
