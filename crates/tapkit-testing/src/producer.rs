//! Converts raw pointer events into per-pointer change records.

use rustc_hash::FxHashMap;
use std::cell::Cell;
use tapkit_events::{PointerId, PointerInputChange, PointerInputData, PointerInputEvent};

/// Produces `PointerInputChange`s from consecutive `PointerInputEvent`s.
///
/// Remembers the previous sample of every pointer that is down so each
/// change carries its deltas. The first sample of a pointer reports itself
/// as its own previous state, with `previous_pressed` false. State is kept
/// while the pointer stays down and dropped on release.
#[derive(Default)]
pub struct PointerChangeProducer {
    previous: FxHashMap<PointerId, PointerInputData>,
}

impl PointerChangeProducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn produce(&mut self, event: &PointerInputEvent) -> Vec<PointerInputChange> {
        let mut changes = Vec::with_capacity(event.pointers.len());
        for pointer in &event.pointers {
            let sample = pointer.data;
            let previous = self
                .previous
                .get(&pointer.id)
                .copied()
                .unwrap_or(PointerInputData {
                    uptime: sample.uptime,
                    position: sample.position,
                    down: false,
                });

            changes.push(PointerInputChange {
                id: pointer.id,
                uptime: sample.uptime,
                position: sample.position,
                pressed: sample.down,
                previous_uptime: previous.uptime,
                previous_position: previous.position,
                previous_pressed: previous.down,
                is_consumed: Cell::new(false),
            });

            if sample.down {
                self.previous.insert(pointer.id, sample);
            } else {
                self.previous.remove(&pointer.id);
            }
        }
        log::trace!(
            "produced {} change(s) at uptime {}",
            changes.len(),
            event.uptime
        );
        changes
    }

    /// Forgets all per-pointer state (cancel semantics).
    pub fn clear(&mut self) {
        self.previous.clear();
    }
}
