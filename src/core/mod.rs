// CE Autopilot - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod demo_data;
pub mod evidence;
pub mod model;
pub mod nav;
pub mod score;
pub mod summary;
