//! The best-first search for Routes with the most visited Points.
//!
//! A [`PrioritySearch`] explores States ([`Node`]s) of the form (Point, number of Points
//! visited). Queued States are [`Entry`]s in an [`EntryQueue`], ordered by
//! [`Entry::is_better_than`]. Whenever a cheaper way to reach a known State is found, its
//! Entry is updated in place and its position in the queue fixed.

mod node;
pub use self::node::{Entry, Node};

mod queue;
pub use self::queue::{EntryKey, EntryQueue};

mod reconstruct;
pub(crate) use self::reconstruct::reconstruct;

mod engine;
pub use self::engine::{Leg, PrioritySearch, SearchConfig};
