//! Pointer event queue plumbing.
//!
//! Platform integrations (and the test injector) enqueue normalized pointer
//! events here; the host drains them in arrival order when it is ready to
//! process input.

use crate::PointerInputEvent;
use std::cell::RefCell;

/// Queue for pointer events that need to be processed.
#[derive(Default)]
pub struct PointerEventQueue {
    queue: RefCell<Vec<PointerInputEvent>>,
}

impl PointerEventQueue {
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(Vec::new()),
        }
    }

    pub fn push_event(&self, event: PointerInputEvent) {
        log::trace!(
            "queueing pointer event at uptime {} with {} pointer(s)",
            event.uptime,
            event.pointers.len()
        );
        self.queue.borrow_mut().push(event);
    }

    /// Delivers every queued event to `handler` in arrival order.
    pub fn drain<F>(&self, mut handler: F)
    where
        F: FnMut(PointerInputEvent),
    {
        let events: Vec<PointerInputEvent> = self.queue.borrow_mut().drain(..).collect();
        for event in events {
            handler(event);
        }
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(uptime: u64) -> PointerInputEvent {
        PointerInputEvent::new(uptime, Vec::new())
    }

    #[test]
    fn drains_in_arrival_order() {
        let queue = PointerEventQueue::new();
        queue.push_event(event(1));
        queue.push_event(event(2));
        queue.push_event(event(3));

        let mut uptimes = Vec::new();
        queue.drain(|event| uptimes.push(event.uptime));

        assert_eq!(uptimes, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_discards_without_delivering() {
        let queue = PointerEventQueue::new();
        queue.push_event(event(1));
        queue.clear();

        let mut delivered = 0;
        queue.drain(|_| delivered += 1);
        assert_eq!(delivered, 0);
    }

    #[test]
    fn handlers_may_enqueue_during_drain() {
        let queue = PointerEventQueue::new();
        queue.push_event(event(1));

        queue.drain(|incoming| {
            if incoming.uptime == 1 {
                queue.push_event(event(2));
            }
        });

        // The event enqueued mid-drain waits for the next drain.
        assert_eq!(queue.len(), 1);
    }
}
