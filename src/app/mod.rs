// CE Autopilot - app/mod.rs
//
// Application layer: state management, evidence session, timers.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod evidence;
pub mod generation;
pub mod state;
pub mod ticker;
