use crate::{DistanceTable, PrioritySearch, Route, SearchConfig};

use std::time::{Duration, Instant};

/// The outcome of searching with one budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// the budget the Route had to fit into
    pub budget: f64,
    /// the Route found, or [`Route::none`]
    pub route: Route,
    /// the wall-clock time the search took
    pub elapsed: Duration,
}

/// Runs one [`PrioritySearch`] per budget, each with `config` and its own budget.
///
/// The searches are independent of each other. With the `parallel` feature they run
/// concurrently; the results are returned in the order of `budgets` either way.
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
/// let scenarios = solve_budgets(&table, &[2.0, 3.7, 10.0], SearchConfig::default());
///
/// let lengths: Vec<usize> = scenarios.iter().map(|s| s.route.len()).collect();
/// assert_eq!(lengths, [0, 3, 4]);
/// assert_eq!(scenarios[1].budget, 3.7);
/// ```
pub fn solve_budgets(
    table: &DistanceTable,
    budgets: &[f64],
    config: SearchConfig,
) -> Vec<Scenario> {
    solve_each(budgets, |budget| {
        PrioritySearch::new(table, config.with_max_cost(budget)).run()
    })
}

/// Calls `solve` once per budget and records how long each call took.
///
/// This is the general form of [`solve_budgets`], for other ways of finding a Route, like
/// [`naive_search`](crate::naive_search) or [`round_trip`](crate::round_trip).
pub fn solve_each<F>(budgets: &[f64], solve: F) -> Vec<Scenario>
where
    F: Fn(f64) -> Route + Send + Sync,
{
    let timed = |&budget: &f64| {
        let start = Instant::now();
        let route = solve(budget);
        let elapsed = start.elapsed();
        search_log!(
            debug,
            "budget {}: {} points for {} in {:?}",
            budget,
            route.len(),
            route.cost(),
            elapsed
        );
        Scenario {
            budget,
            route,
            elapsed,
        }
    };

    #[cfg(feature = "parallel")]
    let scenarios = {
        use rayon::prelude::*;
        budgets.par_iter().map(timed).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scenarios = budgets.iter().map(timed).collect();

    scenarios
}
