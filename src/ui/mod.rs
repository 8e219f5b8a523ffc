/// Everything between the scene and the terminal: the frame buffer, the
/// layer renderers that paint it, the terminal sink, and quit detection.

pub mod frame;
pub mod input;
pub mod layers;
pub mod renderer;
