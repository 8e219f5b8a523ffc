/// Scene: owns every piece of animation state and drives one frame at a time.
///
/// Per frame the clock calls:
///   1. `tick()`        : advance scroll state, regenerate stars on schedule,
///                         advance the agent
///   2. `render_frame()`: clear the buffer, paint layers in order, serialize
///
/// Entity collections are generated once here and never mutated, except the
/// starfield, which is replaced wholesale on its regeneration cadence.

use crate::config::SceneConfig;
use crate::domain::agent::{Agent, AgentTransition};
use crate::domain::entity::{Bush, Star, Tree};
use crate::domain::generator::Generator;
use crate::ui::frame::FrameBuffer;
use crate::ui::layers::{self, Clip, WindowFrame};
use super::event::{Layer, SceneEvent};
use super::scroll::ScrollState;

pub struct Scene {
    pub config: SceneConfig,
    pub scroll: ScrollState,
    pub trees: Vec<Tree>,
    pub bushes: Vec<Bush>,
    pub stars: Vec<Star>,
    /// Number of starfield regenerations so far (wrapping).
    pub star_batch: u32,
    pub agent: Option<Agent>,
    generator: Generator,
    buffer: FrameBuffer,
    clip: Clip,
    window: WindowFrame,
}

impl Scene {
    /// Build a scene, drawing a fresh layout seed unless the config pins one.
    pub fn new(config: SceneConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Scene::with_seed(config, seed)
    }

    pub fn with_seed(mut config: SceneConfig, seed: u64) -> Self {
        config.validate();
        let (w, h) = (config.width, config.height);

        let mut generator = Generator::new(seed);
        let trees = generator.tree_line(&config);
        let bushes = if config.undergrowth.enabled {
            generator.undergrowth(&config)
        } else {
            Vec::new()
        };
        let stars = generator.generate_stars(config.sky.star_count, w, h);
        let agent = config
            .agent
            .enabled
            .then(|| Agent::new(config.agent.tuning.x, config.ground_row()));

        log::debug!(
            "scene {:?} {w}x{h} seed={seed}: {} trees, {} bushes, {} stars, agent={}",
            config.variant,
            trees.len(),
            bushes.len(),
            stars.len(),
            agent.is_some(),
        );

        for (i, t) in trees.iter().enumerate() {
            log::trace!(
                "tree {i}: {} {:?} at x={}",
                config.trees.set.archetype_name(t.archetype),
                t.tier,
                t.sprite.base_x,
            );
        }

        Scene {
            scroll: ScrollState::new(&config),
            trees,
            bushes,
            stars,
            star_batch: 0,
            agent,
            generator,
            buffer: FrameBuffer::new(w, h),
            clip: Clip::new(w, h, config.clip_margin),
            window: WindowFrame::for_viewport(w, h),
            config,
        }
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    // ── Update ──

    pub fn tick(&mut self) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        let step = self.scroll.advance();

        if step.tree_wrapped {
            events.push(SceneEvent::OffsetWrapped { layer: Layer::Trees });
        }
        if step.star_wrapped {
            events.push(SceneEvent::OffsetWrapped { layer: Layer::Stars });
        }

        if step.regenerate_stars {
            let (w, h) = (self.config.width, self.config.height);
            self.stars = self.generator.generate_stars(self.config.sky.star_count, w, h);
            self.star_batch = self.star_batch.wrapping_add(1);
            events.push(SceneEvent::StarsRegenerated { batch: self.star_batch });
        }

        if let Some(agent) = self.agent.as_mut() {
            let offset = self.scroll.tree_offset();
            let projected = self
                .trees
                .iter()
                .map(|t| layers::project(t.sprite.base_x, offset));
            let interior = self.clip.columns();

            match agent.update(&self.config.agent.tuning, projected, &interior) {
                Some(AgentTransition::Jumped { tree_x }) => {
                    events.push(SceneEvent::AgentJumped { tree_x });
                }
                Some(AgentTransition::Landed) => events.push(SceneEvent::AgentLanded),
                Some(AgentTransition::Recovered) => events.push(SceneEvent::AgentRecovered),
                None => {}
            }
        }

        events
    }

    // ── Render ──

    /// Rebuild the frame buffer. Paint order is fixed; later layers occlude
    /// earlier ones.
    pub fn compose(&mut self) -> &FrameBuffer {
        let offset = self.scroll.tree_offset();
        self.buffer.clear();

        layers::render_sky(
            &mut self.buffer,
            &self.stars,
            self.scroll.star_offset(),
            self.config.sky.parallax_divisor,
        );
        layers::render_sprites(
            &mut self.buffer,
            self.trees.iter().map(|t| &t.sprite),
            offset,
            self.config.trees.cull_slack,
            &self.clip,
        );
        layers::render_sprites(
            &mut self.buffer,
            self.bushes.iter().map(|b| &b.sprite),
            offset,
            self.config.undergrowth.cull_slack,
            &self.clip,
        );
        layers::render_window(&mut self.buffer, &self.window);
        if let Some(agent) = &self.agent {
            layers::render_agent(&mut self.buffer, agent, &self.window);
        }

        &self.buffer
    }

    /// Compose and serialize: rows joined by '\n', no trailing newline.
    pub fn render_frame(&mut self) -> String {
        self.compose();
        self.buffer.to_text()
    }
}
