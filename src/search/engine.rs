use super::{reconstruct, Entry, EntryKey, EntryQueue, Node};
use crate::state_map::{node_map_with_cap, NodeMap};
use crate::{DistanceTable, Route};

use hashbrown::hash_map::Entry as MapEntry;

/// Options for a [`PrioritySearch`]
///
/// Default options:
/// ```
/// # use route_coverage::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         max_cost: f64::INFINITY,
///         max_length: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// The budget: no Route may cost more than this (defaults to infinity)
    ///
    /// A NaN budget accepts no step, so only a Route consisting of the start alone can be found.
    pub max_cost: f64,
    /// `Some(n)`: only Routes visiting exactly `n` Points (including start and goal) are accepted.
    ///
    /// `None` (default): Routes of any length are accepted.
    pub max_length: Option<usize>,
}

impl SearchConfig {
    /// a SearchConfig without any restrictions
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        max_cost: f64::INFINITY,
        max_length: None,
    };

    /// Returns a copy with the budget set to `max_cost`.
    pub fn with_max_cost(self, max_cost: f64) -> SearchConfig {
        SearchConfig { max_cost, ..self }
    }

    /// Returns a copy that only accepts Routes of exactly `max_length` Points.
    pub fn with_max_length(self, max_length: usize) -> SearchConfig {
        SearchConfig {
            max_length: Some(max_length),
            ..self
        }
    }

    pub(crate) fn accepts_length(&self, visited: usize) -> bool {
        self.max_length.map_or(true, |max| visited == max)
    }

    pub(crate) fn exceeds_length(&self, visited: usize) -> bool {
        self.max_length.map_or(false, |max| visited > max)
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}

/// The two ends of a search.
///
/// A Route may only move towards `goal`: upwards through the sequence if `start < goal`, and
/// downwards if `start > goal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg {
    /// index of the first Point
    pub start: usize,
    /// index of the last Point
    pub goal: usize,
}

impl Leg {
    /// The Leg from the first to the last of `len` Points.
    pub fn forward(len: usize) -> Leg {
        Leg {
            start: 0,
            goal: len.saturating_sub(1),
        }
    }

    /// The Leg from the last to the first of `len` Points.
    pub fn backward(len: usize) -> Leg {
        Leg {
            start: len.saturating_sub(1),
            goal: 0,
        }
    }

    /// `true` if the Leg runs from higher to lower indices
    pub fn is_backward(&self) -> bool {
        self.start > self.goal
    }

    /// The number of Points strictly after `point` up to and including the goal.
    pub fn remaining(&self, point: usize) -> usize {
        self.goal.abs_diff(point)
    }

    /// The Points reachable from `point`, nearest first.
    fn candidates(&self, point: usize) -> impl Iterator<Item = usize> {
        let (upwards, downwards) = if self.is_backward() {
            (0..0, self.goal..point)
        } else {
            (point + 1..self.goal + 1, 0..0)
        };
        upwards.chain(downwards.rev())
    }
}

/// Searches for the Route that visits the most Points within a budget.
///
/// The search works on a sequence of Points, represented only through their [`DistanceTable`].
/// Every run is independent: the queue, the known Entries and the predecessor links are created
/// at the start of a run and dropped at its end, so one `PrioritySearch` may be run any number of
/// times, and several may share one table.
///
/// ## Examples
/// ```
/// # use route_coverage::prelude::*;
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 1.0),
///     Point::new(3.0, 0.0),
/// ];
/// let table = DistanceTable::new(&points);
///
/// // enough budget for every Point
/// let route = PrioritySearch::new(&table, SearchConfig::default().with_max_cost(10.0)).run();
/// assert_eq!(route.points(), &[0, 1, 2, 3]);
///
/// // one Point has to be skipped
/// let route = PrioritySearch::new(&table, SearchConfig::default().with_max_cost(3.7)).run();
/// assert_eq!(route.points(), &[0, 1, 3]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PrioritySearch<'a> {
    table: &'a DistanceTable,
    config: SearchConfig,
}

impl<'a> PrioritySearch<'a> {
    /// creates a new search over the Points of `table`
    pub fn new(table: &'a DistanceTable, config: SearchConfig) -> PrioritySearch<'a> {
        PrioritySearch { table, config }
    }

    /// the options of this search
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// changes the options used by following runs
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Finds the Route from the first to the last Point.
    ///
    /// Returns [`Route::none`] if no Route fits within the configured limits, including when the
    /// table is empty.
    pub fn run(&self) -> Route {
        if self.table.is_empty() {
            return Route::none();
        }
        self.run_leg(Leg::forward(self.table.len()), |_| true)
    }

    /// Finds a Route along `leg` that only passes through Points for which `is_allowed` returns
    /// `true`. The start and the goal are not checked.
    ///
    /// The returned Route is in travel order, from `leg.start` to `leg.goal`.
    ///
    /// ## Examples
    /// ```
    /// # use route_coverage::prelude::*;
    /// # let points = [
    /// #     Point::new(0.0, 0.0),
    /// #     Point::new(1.0, 1.0),
    /// #     Point::new(2.0, 1.0),
    /// #     Point::new(3.0, 0.0),
    /// # ];
    /// # let table = DistanceTable::new(&points);
    /// let search = PrioritySearch::new(&table, SearchConfig::default());
    ///
    /// let route = search.run_leg(Leg::backward(4), |point| point != 2);
    /// assert_eq!(route.points(), &[3, 1, 0]);
    /// ```
    ///
    /// ## Panics
    /// if `leg.start` or `leg.goal` is not a Point of the table
    #[track_caller]
    pub fn run_leg(&self, leg: Leg, is_allowed: impl Fn(usize) -> bool) -> Route {
        let len = self.table.len();
        assert!(
            leg.start < len && leg.goal < len,
            "{:?} out of range for {} points",
            leg,
            len
        );

        let mut run = SearchRun::new(len);
        run.push_start(leg);

        while let Some(key) = run.queue.pop_best() {
            let popped = run.queue[key];
            run.expanded += 1;

            if popped.node.point == leg.goal && self.config.accepts_length(popped.node.visited) {
                let mut points = reconstruct(&run.previous, popped.node);
                points.reverse();
                // reopened States can leave a chain cheaper than the queued cost behind `popped`
                let cost = self.table.route_cost(&points);
                search_log!(
                    debug,
                    "{:?}: goal {} for {} (queued for {}), {} expansions, {} entries",
                    leg,
                    popped.node,
                    cost,
                    popped.cost,
                    run.expanded,
                    run.queue.stored()
                );
                return Route::new(points, cost);
            }

            let next_visited = popped.node.visited + 1;
            if self.config.exceeds_length(next_visited) {
                continue;
            }

            let distances = self.table.row(popped.node.point);
            for next in leg.candidates(popped.node.point) {
                if !is_allowed(next) {
                    continue;
                }
                let cost = popped.cost + distances[next];
                if !(cost <= self.config.max_cost) {
                    continue;
                }
                let node = Node::new(next, next_visited);
                run.relax(node, leg.remaining(next), cost, popped.node);
            }
        }

        search_log!(
            debug,
            "{:?}: no route within {} after {} expansions",
            leg,
            self.config.max_cost,
            run.expanded
        );
        Route::none()
    }
}

/// The state of a single run, dropped when the run ends.
struct SearchRun {
    queue: EntryQueue,
    entries: NodeMap<EntryKey>,
    previous: NodeMap<Node>,
    expanded: usize,
}

impl SearchRun {
    fn new(len: usize) -> SearchRun {
        SearchRun {
            queue: EntryQueue::with_capacity(len),
            entries: node_map_with_cap(len),
            previous: node_map_with_cap(len),
            expanded: 0,
        }
    }

    fn push_start(&mut self, leg: Leg) {
        let node = Node::new(leg.start, 1);
        let key = self
            .queue
            .push(Entry::new(node, leg.remaining(leg.start), 0.0));
        self.entries.insert(node, key);
    }

    /// Records that `node` can be reached from `from` for `cost`, if that is new or cheaper.
    fn relax(&mut self, node: Node, to_visit: usize, cost: f64, from: Node) {
        match self.entries.entry(node) {
            MapEntry::Vacant(vacant) => {
                let key = self.queue.push(Entry::new(node, to_visit, cost));
                vacant.insert(key);
                self.previous.insert(node, from);
            }
            MapEntry::Occupied(occupied) => {
                let key = *occupied.get();
                if cost < self.queue[key].cost {
                    if !self.queue[key].is_queued() {
                        search_log!(
                            trace,
                            "{} reopened, cost {} -> {}",
                            node,
                            self.queue[key].cost,
                            cost
                        );
                    }
                    self.queue.set_cost(key, cost);
                    self.previous.insert(node, from);
                    self.queue.fix(key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn convex() -> DistanceTable {
        DistanceTable::new(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 0.0),
        ])
    }

    fn run(table: &DistanceTable, config: SearchConfig) -> Route {
        PrioritySearch::new(table, config).run()
    }

    #[test]
    fn visits_every_point() {
        let table = convex();
        let route = run(&table, SearchConfig::default().with_max_cost(10.0));

        assert_eq!(route.points(), &[0, 1, 2, 3]);
        let expected = table[(0, 1)] + table[(1, 2)] + table[(2, 3)];
        assert!((route.cost() - expected).abs() < 1e-9);
    }

    #[test]
    fn skips_point_under_tight_budget() {
        let table = convex();
        let route = run(&table, SearchConfig::default().with_max_cost(3.7));

        // both [0, 1, 3] and [0, 2, 3] cost the same, the first one found is kept
        assert_eq!(route.points(), &[0, 1, 3]);
        assert!((route.cost() - (2f64.sqrt() + 5f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn budget_below_direct_distance() {
        let table = convex();
        let route = run(&table, SearchConfig::default().with_max_cost(2.9));

        assert!(!route.is_found());
        assert_eq!(route.cost(), f64::INFINITY);
        assert!(route.is_empty());
    }

    #[test]
    fn exact_length() {
        let table = convex();
        let config = SearchConfig::default().with_max_cost(10.0);

        assert_eq!(run(&table, config.with_max_length(2)).points(), &[0, 3]);
        assert_eq!(run(&table, config.with_max_length(3)).points(), &[0, 1, 3]);
        assert_eq!(run(&table, config.with_max_length(4)).points(), &[0, 1, 2, 3]);
        assert!(!run(&table, config.with_max_length(5)).is_found());
        assert!(!run(&table, config.with_max_length(1)).is_found());
    }

    #[test]
    fn nan_budget_accepts_nothing() {
        let table = convex();
        let route = run(&table, SearchConfig::default().with_max_cost(f64::NAN));

        assert!(!route.is_found());
        assert_eq!(route.cost(), f64::INFINITY);
    }

    #[test]
    fn single_point() {
        let table = DistanceTable::new(&[Point::new(4.0, 2.0)]);

        let route = run(&table, SearchConfig::default().with_max_cost(0.0));
        assert_eq!(route.points(), &[0]);
        assert_eq!(route.cost(), 0.0);

        assert!(!run(&table, SearchConfig::default().with_max_length(2)).is_found());
    }

    #[test]
    fn no_points() {
        let table = DistanceTable::new(&[]);
        assert!(!run(&table, SearchConfig::default()).is_found());
    }

    #[test]
    fn repeated_runs_match() {
        let table = convex();
        let search = PrioritySearch::new(&table, SearchConfig::default().with_max_cost(3.7));
        assert_eq!(search.run(), search.run());
    }

    #[test]
    fn cheaper_arrival_replaces_entry() {
        // (3, 3) is first reached through the detour over 1, then found again through 2
        let table = DistanceTable::new(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 5.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        let route = run(&table, SearchConfig::default().with_max_length(3).with_max_cost(20.0));

        assert_eq!(route.points(), &[0, 2, 3]);
        assert_eq!(route.cost(), 3.0);
        assert_eq!(route.walked_cost(&table), route.cost());
    }

    #[test]
    fn over_budget_points_are_skipped() {
        let table = DistanceTable::new(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 10.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        let route = run(&table, SearchConfig::default().with_max_cost(10.0));

        assert_eq!(route.points(), &[0, 1, 3, 4]);
        assert_eq!(route.cost(), 3.0);
    }

    #[test]
    fn backward_leg() {
        let table = convex();
        let search = PrioritySearch::new(&table, SearchConfig::default().with_max_cost(10.0));

        let route = search.run_leg(Leg::backward(4), |_| true);
        assert_eq!(route.points(), &[3, 2, 1, 0]);

        let route = search.run_leg(Leg::backward(4), |point| point != 1 && point != 2);
        assert_eq!(route.points(), &[3, 0]);
        assert_eq!(route.cost(), 3.0);
    }

    #[test]
    fn inner_leg() {
        let table = convex();
        let search = PrioritySearch::new(&table, SearchConfig::default());
        let route = search.run_leg(Leg { start: 1, goal: 2 }, |_| true);
        assert_eq!(route.points(), &[1, 2]);
        assert_eq!(route.cost(), 1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn leg_out_of_range() {
        let table = convex();
        PrioritySearch::new(&table, SearchConfig::default())
            .run_leg(Leg { start: 0, goal: 4 }, |_| true);
    }

    #[test]
    fn leg_candidates() {
        let forward = Leg::forward(5);
        assert_eq!(forward.candidates(1).collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(forward.candidates(4).count(), 0);
        assert_eq!(forward.remaining(1), 3);

        let backward = Leg::backward(5);
        assert!(backward.is_backward());
        assert_eq!(backward.candidates(3).collect::<Vec<_>>(), [2, 1, 0]);
        assert_eq!(backward.candidates(0).count(), 0);
        assert_eq!(backward.remaining(3), 3);
    }
}
