use crate::{PointerEventPass, PointerInputChange};

/// Callback slot a pointer-input element exposes to the dispatch pipeline.
///
/// A handler sees the same change once per event pass and returns the change
/// downstream handlers should observe, possibly after consuming it.
pub trait PointerInputHandler {
    fn on_pointer_input(
        &mut self,
        change: PointerInputChange,
        pass: PointerEventPass,
    ) -> PointerInputChange;
}

impl<F> PointerInputHandler for F
where
    F: FnMut(PointerInputChange, PointerEventPass) -> PointerInputChange,
{
    fn on_pointer_input(
        &mut self,
        change: PointerInputChange,
        pass: PointerEventPass,
    ) -> PointerInputChange {
        self(change, pass)
    }
}
