use super::Node;
use crate::state_map::NodeMap;

/// Walks the predecessor links back from `end` and collects the visited Points.
///
/// The result is in goal-to-start order: `end.point` comes first, the start Point last. Every
/// step lowers the visited count by one, so the result has exactly `end.visited` Points. No
/// predecessor is looked up for a Node that visited a single Point, since that is the start.
///
/// Panics if a Node on the way has no predecessor, which the search never produces.
#[track_caller]
pub(crate) fn reconstruct(previous: &NodeMap<Node>, end: Node) -> Vec<usize> {
    let mut route = Vec::with_capacity(end.visited);
    let mut current = end;
    while current.visited > 0 {
        route.push(current.point);
        if current.visited == 1 {
            break;
        }
        current = previous[&current];
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_map::node_map_with_cap;

    #[test]
    fn walks_back_to_start() {
        let mut previous = node_map_with_cap(4);
        previous.insert(Node::new(6, 4), Node::new(3, 3));
        previous.insert(Node::new(3, 3), Node::new(1, 2));
        previous.insert(Node::new(1, 2), Node::new(0, 1));
        // unrelated State reaching the same Point
        previous.insert(Node::new(3, 2), Node::new(0, 1));

        assert_eq!(reconstruct(&previous, Node::new(6, 4)), [6, 3, 1, 0]);
        assert_eq!(reconstruct(&previous, Node::new(3, 2)), [3, 0]);
    }

    #[test]
    fn start_only() {
        let previous = node_map_with_cap(0);
        assert_eq!(reconstruct(&previous, Node::new(0, 1)), [0]);
    }

    #[test]
    #[should_panic]
    fn missing_predecessor() {
        let previous = node_map_with_cap(0);
        reconstruct(&previous, Node::new(2, 2));
    }
}
