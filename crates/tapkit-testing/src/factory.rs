//! Factories for pointer-input records and layout-node fixtures.

use tapkit_events::{PointerId, PointerInputData, PointerInputEvent, PointerInputEventData};
use tapkit_geometry::{IntPoint, Point};
use tapkit_tree::LayoutNode;

/// Builds a single pointer sample in the nested shape the input pipeline
/// expects.
pub fn pointer_input_event_data(
    id: PointerId,
    uptime: u64,
    position: Option<Point>,
    down: bool,
) -> PointerInputEventData {
    let data = PointerInputData {
        uptime,
        position,
        down,
    };
    PointerInputEventData { id, data }
}

/// Builds a composite event carrying exactly one pointer sample.
pub fn pointer_input_event(
    id: PointerId,
    uptime: u64,
    position: Option<Point>,
    down: bool,
) -> PointerInputEvent {
    PointerInputEvent::new(
        uptime,
        vec![pointer_input_event_data(id, uptime, position, down)],
    )
}

/// Builds a node positioned at `(x, y)` and sized out to the opposite
/// corner `(x2, y2)`.
pub fn layout_node(x: i32, y: i32, x2: i32, y2: i32) -> LayoutNode {
    let node = LayoutNode::new();
    node.move_to(x, y);
    node.resize(x2 - x, y2 - y);
    node
}

/// Builds a node at `position` with its size left unset.
pub fn layout_node_at(position: IntPoint) -> LayoutNode {
    let node = LayoutNode::new();
    node.move_to(position.x, position.y);
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapkit_geometry::{IntPoint, IntSize};

    #[test]
    fn event_data_reproduces_every_input() {
        let data = pointer_input_event_data(8, 200, Some(Point::new(2.5, 9.0)), true);

        assert_eq!(data.id, 8);
        assert_eq!(data.data.uptime, 200);
        assert_eq!(data.data.position, Some(Point::new(2.5, 9.0)));
        assert!(data.data.down);
    }

    #[test]
    fn event_data_keeps_missing_position() {
        let data = pointer_input_event_data(8, 200, None, false);

        assert_eq!(data.data.position, None);
        assert!(!data.data.down);
    }

    #[test]
    fn event_is_single_pointer() {
        let event = pointer_input_event(8, 200, Some(Point::new(2.5, 9.0)), true);

        assert_eq!(event.uptime, 200);
        assert_eq!(event.pointers.len(), 1);
        assert_eq!(
            event.pointers[0],
            pointer_input_event_data(8, 200, Some(Point::new(2.5, 9.0)), true)
        );
    }

    #[test]
    fn corner_factory_positions_and_sizes() {
        let node = layout_node(0, 0, 10, 5);

        assert_eq!(node.position(), IntPoint::new(0, 0));
        assert_eq!(node.size(), IntSize::new(10, 5));
    }

    #[test]
    fn position_factory_leaves_size_unset() {
        let node = layout_node_at(IntPoint::new(7, 11));

        assert_eq!(node.position(), IntPoint::new(7, 11));
        assert_eq!(node.size(), IntSize::ZERO);
    }

    #[test]
    fn inverted_corners_pass_through_unguarded() {
        let node = layout_node(10, 10, 4, 4);

        assert_eq!(node.position(), IntPoint::new(10, 10));
        assert_eq!(node.size(), IntSize::new(-6, -6));
    }
}
