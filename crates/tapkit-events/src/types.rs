use std::cell::Cell;
use tapkit_geometry::Point;

pub type PointerId = u64;

/// A named phase in the dispatch pipeline during which pointer events are
/// delivered to handlers. Initial tunnels from ancestor to descendant, Main
/// bubbles back up, Final tunnels again for post-processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventPass {
    Initial,
    Main,
    Final,
}

impl PointerEventPass {
    /// The order passes run in within a single event.
    pub const ORDER: [PointerEventPass; 3] = [
        PointerEventPass::Initial,
        PointerEventPass::Main,
        PointerEventPass::Final,
    ];
}

/// A single input-pointer sample.
///
/// `position` is absent for a pointer that has left the tracked surface but
/// is still known to the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInputData {
    pub uptime: u64,
    pub position: Option<Point>,
    pub down: bool,
}

/// Data that describes a particular pointer within an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInputEventData {
    pub id: PointerId,
    pub data: PointerInputData,
}

/// The normalized data structure for pointer input event information.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerInputEvent {
    pub uptime: u64,
    pub pointers: Vec<PointerInputEventData>,
}

impl PointerInputEvent {
    pub fn new(uptime: u64, pointers: Vec<PointerInputEventData>) -> Self {
        Self { uptime, pointers }
    }
}

/// Describes a change in a pointer between two consecutive samples.
#[derive(Clone, Debug)]
pub struct PointerInputChange {
    pub id: PointerId,
    pub uptime: u64,
    pub position: Option<Point>,
    pub pressed: bool,
    pub previous_uptime: u64,
    pub previous_position: Option<Point>,
    pub previous_pressed: bool,
    pub is_consumed: Cell<bool>,
}

impl PointerInputChange {
    pub fn is_consumed(&self) -> bool {
        self.is_consumed.get()
    }

    /// Marks the change as handled. Consumption never reverts within the
    /// change's dispatch lifetime.
    pub fn consume(&self) {
        self.is_consumed.set(true);
    }

    pub fn changed_to_down(&self) -> bool {
        !self.is_consumed() && !self.previous_pressed && self.pressed
    }

    pub fn changed_to_down_ignore_consumed(&self) -> bool {
        !self.previous_pressed && self.pressed
    }

    pub fn changed_to_up(&self) -> bool {
        !self.is_consumed() && self.previous_pressed && !self.pressed
    }

    pub fn changed_to_up_ignore_consumed(&self) -> bool {
        self.previous_pressed && !self.pressed
    }

    pub fn position_changed(&self) -> bool {
        self.position_change_internal(false) != Point::ZERO
    }

    pub fn position_changed_ignore_consumed(&self) -> bool {
        self.position_change_internal(true) != Point::ZERO
    }

    /// The movement this change carries, or `Point::ZERO` once consumed.
    pub fn position_change(&self) -> Point {
        self.position_change_internal(false)
    }

    fn position_change_internal(&self, ignore_consumed: bool) -> Point {
        let delta = match (self.position, self.previous_position) {
            (Some(current), Some(previous)) => current - previous,
            // A pointer without a position on either side moved nowhere.
            _ => Point::ZERO,
        };
        if !ignore_consumed && self.is_consumed() {
            Point::ZERO
        } else {
            delta
        }
    }
}
