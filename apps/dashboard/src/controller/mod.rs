//! Controller layer: presentation events, text input handling, and hand-off
//! of selection changes to the worker.

pub mod events;
pub mod input;
pub mod orchestration;
