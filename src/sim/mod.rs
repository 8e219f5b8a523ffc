/// Scene state over time: scroll counters, the orchestrating `Scene`, and
/// the events a tick reports.

pub mod event;
pub mod scene;
pub mod scroll;
