/// Scene configuration.
///
/// One `SceneConfig` describes every program variant: a preset is picked
/// first, then an optional `config.toml` (exe directory, then CWD) overrides
/// individual keys. Missing file or missing keys fall back to the preset.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::shapes::TreeSet;

/// Smallest viewport the window frame, clip margins and star band fit in.
pub const MIN_WIDTH: usize = 40;
pub const MIN_HEIGHT: usize = 16;

// ── Public Config Struct ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    /// Stars, trees, window. Slow frame rate.
    Minimal,
    /// Adds sparse bushes under the tree line.
    Undergrowth,
    /// Adds the running figure and a varied tree line.
    Runner,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Spacing {
    /// Constant stride between consecutive trees.
    Fixed { stride: i32 },
    /// Stride drawn from `min..=max` for every segment.
    Variable { min: i32, max: i32 },
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub variant: Variant,
    pub width: usize,
    pub height: usize,
    pub frame_delay_ms: u64,
    /// Layout seed. `None` draws a fresh one at startup.
    pub seed: Option<u64>,
    /// Shape columns outside `[clip_margin, width - clip_margin)` are never painted.
    pub clip_margin: i32,
    pub trees: TreeConfig,
    pub undergrowth: UndergrowthConfig,
    pub sky: SkyConfig,
    pub agent: AgentConfig,
}

#[derive(Clone, Debug)]
pub struct TreeConfig {
    pub spacing: Spacing,
    pub count: usize,
    pub set: TreeSet,
    pub cull_slack: i32,
}

#[derive(Clone, Debug)]
pub struct UndergrowthConfig {
    pub enabled: bool,
    pub slots: usize,
    pub probability_pct: u32,
    pub min_x: i32,
    pub max_x: i32,   // exclusive
    pub cull_slack: i32,
}

#[derive(Clone, Debug)]
pub struct SkyConfig {
    pub star_count: usize,
    pub regen_interval: u32,   // ticks between whole-sky regeneration
    pub cadence: u32,          // star offset advances every `cadence` ticks
    pub parallax_divisor: i32, // star offset is divided again at render time
}

#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub enabled: bool,
    pub tuning: AgentTuning,
}

#[derive(Clone, Copy, Debug)]
pub struct AgentTuning {
    pub x: i32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub landing_ticks: u32,
    /// Trigger window: a tree strictly between `x + near` and `x + far`.
    pub trigger_near: i32,
    pub trigger_far: i32,
}

impl Default for AgentTuning {
    fn default() -> Self {
        AgentTuning {
            x: 14,
            jump_velocity: -3.2,
            gravity: 0.3,
            landing_ticks: 4,
            trigger_near: 2,
            trigger_far: 8,
        }
    }
}

impl SceneConfig {
    pub fn preset(variant: Variant) -> Self {
        let width = 80;
        let (frame_delay_ms, spacing, set, undergrowth, agent) = match variant {
            Variant::Minimal => (200, Spacing::Fixed { stride: 35 }, TreeSet::Classic, false, false),
            Variant::Undergrowth => (120, Spacing::Fixed { stride: 35 }, TreeSet::Classic, true, false),
            Variant::Runner => (120, Spacing::Variable { min: 25, max: 45 }, TreeSet::Symbols, false, true),
        };

        SceneConfig {
            variant,
            width,
            height: 24,
            frame_delay_ms,
            seed: None,
            clip_margin: 5,
            trees: TreeConfig {
                spacing,
                count: 20,
                set,
                cull_slack: 20,
            },
            undergrowth: UndergrowthConfig {
                enabled: undergrowth,
                slots: 30,
                probability_pct: 25,
                min_x: 10,
                max_x: 710,
                cull_slack: 10,
            },
            sky: SkyConfig {
                star_count: 20,
                regen_interval: 300,
                cadence: 3,
                parallax_divisor: 3,
            },
            agent: AgentConfig {
                enabled: agent,
                tuning: AgentTuning::default(),
            },
        }
    }

    /// Row the tree line, undergrowth and agent stand on.
    pub fn ground_row(&self) -> i32 {
        self.height as i32 - 6
    }

    /// Tree offset wraps modulo this bound.
    pub fn tree_offset_bound(&self) -> u32 {
        self.width as u32 * 4
    }

    /// Star offset wraps modulo this bound.
    pub fn star_offset_bound(&self) -> u32 {
        self.width as u32 * 6
    }

    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let Some(text) = read_toml(&search_dirs) else {
            return SceneConfig::preset(Variant::Undergrowth);
        };
        match SceneConfig::from_toml_str(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("config.toml parse error: {e}");
                log::warn!("Using default settings.");
                SceneConfig::preset(Variant::Undergrowth)
            }
        }
    }

    /// Parse a TOML document and apply it on top of its preset.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let schema: TomlConfig = toml::from_str(text)?;
        Ok(schema.resolve())
    }

    /// Clamp unusable values to the nearest usable one.
    pub fn validate(&mut self) {
        if self.width < MIN_WIDTH {
            log::warn!("width {} too small, using {MIN_WIDTH}", self.width);
            self.width = MIN_WIDTH;
        }
        if self.height < MIN_HEIGHT {
            log::warn!("height {} too small, using {MIN_HEIGHT}", self.height);
            self.height = MIN_HEIGHT;
        }
        let max_margin = self.width as i32 / 4;
        if self.clip_margin < 0 || self.clip_margin > max_margin {
            log::warn!("clip_margin {} out of range, clamping", self.clip_margin);
            self.clip_margin = self.clip_margin.clamp(0, max_margin);
        }

        // A gap wider than one scroll cycle never brings the next tree on screen
        let max_stride = self.tree_offset_bound() as i32;
        match &mut self.trees.spacing {
            Spacing::Fixed { stride } => {
                if *stride < 1 || *stride > max_stride {
                    log::warn!("tree stride {stride} out of range, clamping");
                    *stride = (*stride).clamp(1, max_stride);
                }
            }
            Spacing::Variable { min, max } => {
                if *min < 1 || *min > max_stride {
                    log::warn!("min_stride {min} out of range, clamping");
                    *min = (*min).clamp(1, max_stride);
                }
                if *max > max_stride {
                    log::warn!("max_stride {max} too large, using {max_stride}");
                    *max = max_stride;
                }
                if *max < *min {
                    log::warn!("max_stride {max} below min_stride {min}, using {min}");
                    *max = *min;
                }
            }
        }

        let ug = &mut self.undergrowth;
        if ug.probability_pct > 100 {
            log::warn!("undergrowth probability {}% clamped to 100%", ug.probability_pct);
            ug.probability_pct = 100;
        }
        if ug.max_x <= ug.min_x {
            log::warn!("undergrowth range {}..{} is empty, widening", ug.min_x, ug.max_x);
            ug.max_x = ug.min_x + 1;
        }

        let sky = &mut self.sky;
        if sky.regen_interval == 0 {
            log::warn!("star regen interval 0 invalid, using 1");
            sky.regen_interval = 1;
        }
        if sky.cadence == 0 {
            log::warn!("star cadence 0 invalid, using 1");
            sky.cadence = 1;
        }
        if sky.parallax_divisor < 1 {
            log::warn!("star parallax divisor {} invalid, using 1", sky.parallax_divisor);
            sky.parallax_divisor = 1;
        }

        // Keep the figure inside the window: columns 4..=width-5
        let min_x = 4;
        let max_x = self.width as i32 - 5;
        let t = &mut self.agent.tuning;
        if t.x < min_x || t.x > max_x {
            log::warn!("agent x {} outside the window, clamping", t.x);
            t.x = t.x.clamp(min_x, max_x);
        }
        if t.trigger_far <= t.trigger_near {
            log::warn!("agent trigger window {}..{} is empty, widening", t.trigger_near, t.trigger_far);
            t.trigger_far = t.trigger_near + 2;
        }
        if !t.gravity.is_finite() || t.gravity <= 0.0 {
            log::warn!("agent gravity {} would never land, using default", t.gravity);
            t.gravity = AgentTuning::default().gravity;
        }
        if !t.jump_velocity.is_finite() {
            log::warn!("agent jump velocity {} unusable, using default", t.jump_velocity);
            t.jump_velocity = AgentTuning::default().jump_velocity;
        }
    }
}

// ── TOML Schema ──
//
// Every key is optional; absent keys keep the preset's value.

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    scene: TomlScene,
    #[serde(default)]
    trees: TomlTrees,
    #[serde(default)]
    undergrowth: TomlUndergrowth,
    #[serde(default)]
    agent: TomlAgent,
}

#[derive(Deserialize, Debug, Default)]
struct TomlScene {
    variant: Option<String>,
    width: Option<usize>,
    height: Option<usize>,
    frame_delay_ms: Option<u64>,
    seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlTrees {
    spacing: Option<String>,
    stride: Option<i32>,
    min_stride: Option<i32>,
    max_stride: Option<i32>,
    count: Option<usize>,
    set: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlUndergrowth {
    enabled: Option<bool>,
    slots: Option<usize>,
    probability_pct: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlAgent {
    enabled: Option<bool>,
    x: Option<i32>,
    jump_velocity: Option<f32>,
    gravity: Option<f32>,
    landing_ticks: Option<u32>,
}

impl TomlConfig {
    fn resolve(self) -> SceneConfig {
        let variant = match self.scene.variant.as_deref() {
            None | Some("undergrowth") => Variant::Undergrowth,
            Some("minimal") => Variant::Minimal,
            Some("runner") => Variant::Runner,
            Some(other) => {
                log::warn!("unknown variant '{other}', using 'undergrowth'");
                Variant::Undergrowth
            }
        };
        let mut cfg = SceneConfig::preset(variant);

        let s = self.scene;
        if let Some(v) = s.width { cfg.width = v; }
        if let Some(v) = s.height { cfg.height = v; }
        if let Some(v) = s.frame_delay_ms { cfg.frame_delay_ms = v; }
        if s.seed.is_some() { cfg.seed = s.seed; }

        let t = self.trees;
        let (cur_stride, cur_min, cur_max) = match cfg.trees.spacing {
            Spacing::Fixed { stride } => (stride, 25, 45),
            Spacing::Variable { min, max } => (35, min, max),
        };
        let variable = match t.spacing.as_deref() {
            None => matches!(cfg.trees.spacing, Spacing::Variable { .. }),
            Some("fixed") => false,
            Some("variable") => true,
            Some(other) => {
                log::warn!("unknown tree spacing '{other}', keeping preset");
                matches!(cfg.trees.spacing, Spacing::Variable { .. })
            }
        };
        cfg.trees.spacing = if variable {
            Spacing::Variable {
                min: t.min_stride.unwrap_or(cur_min),
                max: t.max_stride.unwrap_or(cur_max),
            }
        } else {
            Spacing::Fixed { stride: t.stride.unwrap_or(cur_stride) }
        };
        if let Some(v) = t.count { cfg.trees.count = v; }
        match t.set.as_deref() {
            None => {}
            Some("classic") => cfg.trees.set = TreeSet::Classic,
            Some("symbols") => cfg.trees.set = TreeSet::Symbols,
            Some(other) => log::warn!("unknown tree set '{other}', keeping preset"),
        }

        let u = self.undergrowth;
        if let Some(v) = u.enabled { cfg.undergrowth.enabled = v; }
        if let Some(v) = u.slots { cfg.undergrowth.slots = v; }
        if let Some(v) = u.probability_pct { cfg.undergrowth.probability_pct = v; }

        let a = self.agent;
        if let Some(v) = a.enabled { cfg.agent.enabled = v; }
        if let Some(v) = a.x { cfg.agent.tuning.x = v; }
        if let Some(v) = a.jump_velocity { cfg.agent.tuning.jump_velocity = v; }
        if let Some(v) = a.gravity { cfg.agent.tuning.gravity = v; }
        if let Some(v) = a.landing_ticks { cfg.agent.tuning.landing_ticks = v; }

        cfg.validate();
        cfg
    }
}

// ── Loading ──

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Read the first config.toml found in the candidate directories.
fn read_toml(search_dirs: &[PathBuf]) -> Option<String> {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    log::debug!("reading {}", path.display());
                    return Some(text);
                }
                Err(e) => {
                    log::warn!("could not read {}: {e}", path.display());
                }
            }
        }
    }
    None
}
