#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find budget-constrained Routes that cover as many Points as possible.
//!
//! ## Introduction
//! Given a set of Points on a plane, sorted by their X and then Y coordinate, this crate searches
//! for a Route from the first Point to the last one that visits the largest possible number of
//! Points in between, without the total travelled distance exceeding a given budget. Among Routes
//! visiting the same number of Points, the cheaper one is preferred.
//!
//! Routes may only move forward along the sorted sequence, which turns the Points into an
//! implicit directed acyclic Graph. The search is a best-first relaxation similar to Dijkstra's
//! Algorithm, except that a search State is a pair of (Point, number of Points visited so far) and
//! the Priority Queue prefers States with the most unexplored Points ahead of them.
//!
//! ## Examples
//! Loading Points and finding a Route:
//! ```
//! use route_coverage::prelude::*;
//!
//! let input = "4\n3 0\n0 0\n2 1\n1 1\n";
//! let points = load_points(input.as_bytes()).unwrap();
//! let table = DistanceTable::new(&points);
//!
//! let search = PrioritySearch::new(&table, SearchConfig::default().with_max_cost(10.0));
//! let route = search.run();
//!
//! // all four Points are visited, in sorted order
//! assert_eq!(route.points(), &[0, 1, 2, 3]);
//! assert!(route.cost() < 4.0);
//! ```
//!
//! If the budget is too small to even walk from the first to the last Point, no Route exists:
//! ```
//! # use route_coverage::prelude::*;
//! # let input = "4\n3 0\n0 0\n2 1\n1 1\n";
//! # let points = load_points(input.as_bytes()).unwrap();
//! # let table = DistanceTable::new(&points);
//! let search = PrioritySearch::new(&table, SearchConfig::default().with_max_cost(2.5));
//! let route = search.run();
//!
//! assert!(!route.is_found());
//! assert_eq!(route.cost(), f64::INFINITY);
//! ```
//!
//! ### Exact Route length
//! [`SearchConfig::max_length`] requires the Route to contain exactly that many Points:
//! ```
//! # use route_coverage::prelude::*;
//! # let input = "4\n3 0\n0 0\n2 1\n1 1\n";
//! # let points = load_points(input.as_bytes()).unwrap();
//! # let table = DistanceTable::new(&points);
//! let config = SearchConfig::default().with_max_cost(10.0).with_max_length(2);
//! let route = PrioritySearch::new(&table, config).run();
//!
//! assert_eq!(route.points(), &[0, 3]);
//! assert_eq!(route.cost(), 3.0);
//! ```
//!
//! ### Several budgets
//! [`solve_budgets`] runs one independent search per budget. With the `parallel` feature
//! (enabled by default) the searches run concurrently, sharing the Points and the
//! [`DistanceTable`].

#[cfg(feature = "log")]
macro_rules! search_log {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! search_log {
    ($level:ident, $($arg:tt)+) => {
        if false {
            let _ = format!($($arg)+);
        }
    };
}

mod point;
pub use point::Point;

mod input;
pub use input::{load_points, load_points_from_file, InputError};

mod distance;
pub use distance::DistanceTable;

mod state_map;

mod route;
pub use route::Route;

pub mod search;
pub use search::{Leg, PrioritySearch, SearchConfig};

mod naive;
pub use naive::{naive_round_trip, naive_search};

mod round_trip;
pub use round_trip::{round_trip, Ratio, RoundTrip, RoundTripError};

mod scenario;
pub use scenario::{solve_budgets, solve_each, Scenario};

/// The most commonly used items of this crate.
///
/// ## Examples
/// ```
/// use route_coverage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        load_points, naive_round_trip, naive_search, round_trip, solve_budgets, DistanceTable,
        Leg, Point, PrioritySearch, Ratio, Route, SearchConfig,
    };
}
