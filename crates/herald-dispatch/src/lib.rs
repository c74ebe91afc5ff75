//! Dispatch pipeline for Herald.
//!
//! [`Dispatcher`] owns the engine state (registry, cooldown table,
//! permission oracle, scope configuration) and runs the gate pipeline for
//! one message at a time; [`runner`] drains an inbound queue and spawns one
//! dispatch task per message so a slow handler never stalls unrelated
//! traffic.

pub mod dispatcher;
pub mod runner;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use runner::run;
