//! Threads behind the front-end: the selection worker that owns the
//! dashboard controller, and the presenter that turns its events into output.

pub mod runtime;
