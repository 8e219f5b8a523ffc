/// Pure scene data and rules: entity descriptors, glyph tables, generation,
/// and the agent state machine. Nothing here touches the terminal.

pub mod agent;
pub mod entity;
pub mod generator;
pub mod shapes;
