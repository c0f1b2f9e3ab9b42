//! Testing utilities and harness for Tapkit pointer input
//!
//! This crate provides the pieces pointer-input tests are built from:
//! - Factories for pointer samples, single-pointer events, and layout nodes
//! - Panic capture for assertion-style tests
//! - Handler doubles with injectable per-call behavior
//! - A synthetic input injector and a change producer for driving handlers
//!   without a windowing backend

pub mod catch;
pub mod factory;
pub mod handlers;
pub mod injector;
pub mod producer;

pub use catch::*;
pub use factory::*;
pub use handlers::*;
pub use injector::*;
pub use producer::*;

pub mod prelude {
    pub use crate::catch::{catch_panic, panic_message};
    pub use crate::factory::{
        layout_node, layout_node_at, pointer_input_event, pointer_input_event_data,
    };
    pub use crate::handlers::{RecordingPointerInputHandler, StubPointerInputHandler};
    pub use crate::injector::PointerInjector;
    pub use crate::producer::PointerChangeProducer;
}
