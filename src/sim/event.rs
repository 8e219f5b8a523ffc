/// Events emitted during a scene tick.
/// The frame clock logs them; nothing in the scene depends on them.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layer {
    Trees,
    Stars,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SceneEvent {
    /// The whole starfield was replaced; `batch` counts regenerations.
    StarsRegenerated { batch: u32 },
    /// A scroll offset wrapped back to 0.
    OffsetWrapped { layer: Layer },
    AgentJumped { tree_x: i32 },
    AgentLanded,
    AgentRecovered,
}
