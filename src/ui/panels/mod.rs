// CE Autopilot - ui/panels/mod.rs

pub mod about;
pub mod dashboard;
pub mod evidence;
pub mod header;
pub mod placeholder;
pub mod sidebar;
