//! Pointer-input data model for Tapkit
//!
//! The normalized event records a platform integration produces, the change
//! records handed to pointer-input handlers during dispatch, and the queue
//! plumbing between the two.

mod handler;
mod queue;
mod types;

pub use handler::*;
pub use queue::*;
pub use types::*;

pub mod prelude {
    pub use crate::handler::PointerInputHandler;
    pub use crate::queue::PointerEventQueue;
    pub use crate::types::{
        PointerEventPass, PointerId, PointerInputChange, PointerInputData, PointerInputEvent,
        PointerInputEventData,
    };
}
