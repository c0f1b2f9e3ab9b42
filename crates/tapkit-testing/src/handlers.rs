//! Handler doubles for pointer-input callback slots.

use smallvec::SmallVec;
use tapkit_events::{PointerEventPass, PointerId, PointerInputChange, PointerInputHandler};

type ModifyBlock = Box<dyn FnMut(PointerInputChange, PointerEventPass) -> PointerInputChange>;

/// Pointer-input handler double with injectable per-call behavior.
///
/// With no modify block assigned the handler is an identity passthrough;
/// assigning one delegates every call to it. Tests install this in a
/// framework callback slot and swap the block between phases of a scenario.
#[derive(Default)]
pub struct StubPointerInputHandler {
    pub modify_block: Option<ModifyBlock>,
}

impl StubPointerInputHandler {
    pub fn new() -> Self {
        Self { modify_block: None }
    }

    pub fn with_modify_block(
        block: impl FnMut(PointerInputChange, PointerEventPass) -> PointerInputChange + 'static,
    ) -> Self {
        Self {
            modify_block: Some(Box::new(block)),
        }
    }

    pub fn set_modify_block(
        &mut self,
        block: impl FnMut(PointerInputChange, PointerEventPass) -> PointerInputChange + 'static,
    ) {
        self.modify_block = Some(Box::new(block));
    }

    pub fn clear_modify_block(&mut self) {
        self.modify_block = None;
    }
}

impl PointerInputHandler for StubPointerInputHandler {
    fn on_pointer_input(
        &mut self,
        change: PointerInputChange,
        pass: PointerEventPass,
    ) -> PointerInputChange {
        match self.modify_block.as_mut() {
            Some(block) => block(change, pass),
            None => change,
        }
    }
}

/// Records every invocation in dispatch order, optionally consuming changes
/// on one chosen pass.
///
/// Lets tests assert pass ordering and consumption visibility across a
/// handler chain.
pub struct RecordingPointerInputHandler {
    pub invocations: SmallVec<[(PointerId, PointerEventPass); 8]>,
    consume_on: Option<PointerEventPass>,
}

impl RecordingPointerInputHandler {
    pub fn new() -> Self {
        Self {
            invocations: SmallVec::new(),
            consume_on: None,
        }
    }

    /// A recorder that consumes any not-yet-consumed change it sees during
    /// `pass`.
    pub fn consuming_on(pass: PointerEventPass) -> Self {
        Self {
            consume_on: Some(pass),
            ..Self::new()
        }
    }

    /// The passes observed so far, in invocation order.
    pub fn passes(&self) -> Vec<PointerEventPass> {
        self.invocations.iter().map(|(_, pass)| *pass).collect()
    }

    pub fn clear(&mut self) {
        self.invocations.clear();
    }
}

impl Default for RecordingPointerInputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerInputHandler for RecordingPointerInputHandler {
    fn on_pointer_input(
        &mut self,
        change: PointerInputChange,
        pass: PointerEventPass,
    ) -> PointerInputChange {
        self.invocations.push((change.id, pass));
        if self.consume_on == Some(pass) && !change.is_consumed() {
            change.consume();
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tapkit_geometry::Point;

    fn move_change(id: PointerId) -> PointerInputChange {
        PointerInputChange {
            id,
            uptime: 32,
            position: Some(Point::new(6.0, 6.0)),
            pressed: true,
            previous_uptime: 16,
            previous_position: Some(Point::new(4.0, 4.0)),
            previous_pressed: true,
            is_consumed: Cell::new(false),
        }
    }

    #[test]
    fn stub_defaults_to_identity() {
        let mut stub = StubPointerInputHandler::new();
        let change = move_change(1);

        let returned = stub.on_pointer_input(change.clone(), PointerEventPass::Main);

        assert_eq!(returned.id, change.id);
        assert_eq!(returned.position, change.position);
        assert!(!returned.is_consumed());
    }

    #[test]
    fn stub_delegates_to_modify_block() {
        let mut stub = StubPointerInputHandler::with_modify_block(|change, pass| {
            if pass == PointerEventPass::Initial {
                change.consume();
            }
            change
        });

        let initial = stub.on_pointer_input(move_change(1), PointerEventPass::Initial);
        assert!(initial.is_consumed());

        let main = stub.on_pointer_input(move_change(1), PointerEventPass::Main);
        assert!(!main.is_consumed());
    }

    #[test]
    fn stub_reverts_to_identity_when_cleared() {
        let mut stub = StubPointerInputHandler::with_modify_block(|change, _| {
            change.consume();
            change
        });
        stub.clear_modify_block();

        let returned = stub.on_pointer_input(move_change(1), PointerEventPass::Main);
        assert!(!returned.is_consumed());
    }

    #[test]
    fn recorder_preserves_invocation_order() {
        let mut recorder = RecordingPointerInputHandler::new();

        for pass in PointerEventPass::ORDER {
            recorder.on_pointer_input(move_change(5), pass);
        }

        assert_eq!(recorder.passes(), PointerEventPass::ORDER.to_vec());
        assert_eq!(recorder.invocations[0], (5, PointerEventPass::Initial));
    }

    #[test]
    fn recorder_consumes_only_on_chosen_pass() {
        let mut recorder = RecordingPointerInputHandler::consuming_on(PointerEventPass::Main);

        let initial = recorder.on_pointer_input(move_change(2), PointerEventPass::Initial);
        assert!(!initial.is_consumed());

        let main = recorder.on_pointer_input(initial, PointerEventPass::Main);
        assert!(main.is_consumed());
    }
}
