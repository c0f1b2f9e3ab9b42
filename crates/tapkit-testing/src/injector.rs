//! Synthetic pointer-stream injection without a windowing backend.

use indexmap::IndexMap;
use tapkit_events::{
    PointerEventQueue, PointerId, PointerInputData, PointerInputEvent, PointerInputEventData,
};
use tapkit_geometry::Point;
use web_time::Instant;

const DEFAULT_POINTER: PointerId = 0;
const FRAME_MS: u64 = 16;

struct PointerState {
    position: Point,
    down: bool,
}

enum UptimeSource {
    /// Deterministic frame-stepped uptime for reproducible tests.
    Fixed { step_ms: u64 },
    /// Wall-clock uptime for soak-style tests against real timing.
    Wall { started: Instant },
}

/// Emits pointer events the way a platform integration would, queueing them
/// for the test to drain.
///
/// Every emitted event snapshots all live pointers, so multi-touch streams
/// come out batched per event. Uptimes are strictly increasing.
pub struct PointerInjector {
    queue: PointerEventQueue,
    // Press order is event order, so the table keeps insertion order.
    pointers: IndexMap<PointerId, PointerState>,
    uptime: u64,
    source: UptimeSource,
}

impl PointerInjector {
    /// A deterministic injector advancing one 16ms frame per event.
    pub fn new() -> Self {
        Self::with_frame_interval(FRAME_MS)
    }

    pub fn with_frame_interval(step_ms: u64) -> Self {
        Self {
            queue: PointerEventQueue::new(),
            pointers: IndexMap::new(),
            uptime: 0,
            source: UptimeSource::Fixed {
                step_ms: step_ms.max(1),
            },
        }
    }

    /// An injector stamping events with elapsed wall-clock time.
    pub fn with_wall_clock() -> Self {
        Self {
            queue: PointerEventQueue::new(),
            pointers: IndexMap::new(),
            uptime: 0,
            source: UptimeSource::Wall {
                started: Instant::now(),
            },
        }
    }

    pub fn queue(&self) -> &PointerEventQueue {
        &self.queue
    }

    /// Adds an idle gap before the next emitted event.
    pub fn advance(&mut self, ms: u64) {
        self.uptime += ms;
    }

    /// Presses the default pointer at `(x, y)`.
    pub fn down(&mut self, x: f32, y: f32) {
        self.down_with_id(DEFAULT_POINTER, x, y);
    }

    pub fn down_with_id(&mut self, id: PointerId, x: f32, y: f32) {
        self.pointers.insert(
            id,
            PointerState {
                position: Point::new(x, y),
                down: true,
            },
        );
        self.emit();
    }

    /// Moves the default pointer to `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.move_with_id(DEFAULT_POINTER, x, y);
    }

    pub fn move_with_id(&mut self, id: PointerId, x: f32, y: f32) {
        if let Some(pointer) = self.pointers.get_mut(&id) {
            pointer.position = Point::new(x, y);
            self.emit();
        } else {
            log::debug!("ignoring move for unknown pointer {id}");
        }
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        if let Some(pointer) = self.pointers.get(&DEFAULT_POINTER) {
            let target = pointer.position + Point::new(dx, dy);
            self.move_to(target.x, target.y);
        }
    }

    /// Releases the default pointer at its current position.
    pub fn up(&mut self) {
        self.up_with_id(DEFAULT_POINTER);
    }

    pub fn up_with_id(&mut self, id: PointerId) {
        if let Some(pointer) = self.pointers.get_mut(&id) {
            pointer.down = false;
            self.emit();
            self.pointers.shift_remove(&id);
        } else {
            log::debug!("ignoring release for unknown pointer {id}");
        }
    }

    /// Drops all live pointers without emitting release events, the way a
    /// platform cancels a gesture.
    pub fn cancel(&mut self) {
        self.pointers.clear();
    }

    /// Presses at `from`, moves to `to` in `steps` interpolated events, and
    /// releases.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) {
        self.down(from.x, from.y);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.move_to(x, y);
        }
        self.up();
    }

    fn emit(&mut self) {
        let uptime = self.next_uptime();
        let pointers: Vec<PointerInputEventData> = self
            .pointers
            .iter()
            .map(|(id, state)| PointerInputEventData {
                id: *id,
                data: PointerInputData {
                    uptime,
                    position: Some(state.position),
                    down: state.down,
                },
            })
            .collect();
        self.queue.push_event(PointerInputEvent::new(uptime, pointers));
    }

    fn next_uptime(&mut self) -> u64 {
        self.uptime = match &self.source {
            UptimeSource::Fixed { step_ms } => self.uptime + step_ms,
            UptimeSource::Wall { started } => {
                let elapsed = started.elapsed().as_millis() as u64;
                elapsed.max(self.uptime + 1)
            }
        };
        self.uptime
    }
}

impl Default for PointerInjector {
    fn default() -> Self {
        Self::new()
    }
}
