use std::fmt;

/// A State of the search: the Point a Route currently ends at, and how many Points it has
/// visited so far (including that one).
///
/// Two partial Routes ending at the same Point after visiting the same number of Points are the
/// same State, regardless of which Points they visited on the way. The search only keeps the
/// cheaper of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// index of the current Point in the sorted sequence
    pub point: usize,
    /// number of Points visited, including `point`
    pub visited: usize,
}

impl Node {
    /// creates a new Node
    pub const fn new(point: usize, visited: usize) -> Node {
        Node { point, visited }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.point, self.visited)
    }
}

/// A [`Node`] as stored in the Priority Queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// the State
    pub node: Node,
    /// how many Points between this one and the goal can still be visited
    pub to_visit: usize,
    /// the cheapest known cost of reaching `node`
    pub cost: f64,
    /// current slot in the queue's heap, `None` once popped
    pub(crate) position: Option<usize>,
}

impl Entry {
    /// creates a new Entry that is not part of any queue yet
    pub const fn new(node: Node, to_visit: usize, cost: f64) -> Entry {
        Entry {
            node,
            to_visit,
            cost,
            position: None,
        }
    }

    /// `true` if this Entry is currently queued
    pub fn is_queued(&self) -> bool {
        self.position.is_some()
    }

    /// Returns `true` if `self` should be expanded before `other`.
    ///
    /// Entries with more Points left to visit come first, then Entries that already visited more
    /// Points. The cost only decides when both Entries visited the same number of Points and
    /// `self.to_visit` equals that number.
    ///
    /// Note that the last rule compares `to_visit` of `self` with `visited` of `other`. This is
    /// not symmetric, so two Entries may both be better than each other.
    ///
    /// ## Examples
    /// ```
    /// # use route_coverage::search::{Entry, Node};
    /// let near = Entry::new(Node::new(1, 2), 8, 1.0);
    /// let far = Entry::new(Node::new(5, 2), 4, 1.0);
    /// assert!(near.is_better_than(&far));
    /// assert!(!far.is_better_than(&near));
    ///
    /// let longer = Entry::new(Node::new(5, 4), 4, 9.0);
    /// assert!(longer.is_better_than(&far));
    ///
    /// let cheaper = Entry::new(Node::new(5, 4), 4, 2.0);
    /// assert!(cheaper.is_better_than(&longer));
    /// ```
    pub fn is_better_than(&self, other: &Entry) -> bool {
        if self.to_visit == other.node.visited && self.node.visited == other.node.visited {
            self.cost < other.cost
        } else if self.to_visit == other.to_visit {
            self.node.visited > other.node.visited
        } else {
            self.to_visit > other.to_visit
        }
    }
}
