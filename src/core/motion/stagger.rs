//! Layout and stagger plan for a reveal list.
//!
//! A [`RevealConfig`] describes one list; a [`RevealPlan`] applies it to a
//! concrete item count and yields per-item motion.

use std::time::Duration;

use super::direction::{AnimationDirection, Displacement, PosePair};
use super::policy::VisibilityState;
use super::preset::{Transition, TransitionPreset};

/// Default delay between consecutive items (250ms)
pub const DEFAULT_STAGGER_MS: u64 = 250;

/// Flex axis the items are laid out along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

/// Configuration for one reveal list
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub flex_direction: FlexDirection,
    /// CSS gap between items, e.g. `"1.5rem"`
    pub gap: Option<String>,
    /// Delay added per item index
    pub stagger: Duration,
    pub fade_direction: AnimationDirection,
    pub displacement: Displacement,
    pub preset: TransitionPreset,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Column,
            gap: None,
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
            fade_direction: AnimationDirection::Top,
            displacement: Displacement::default(),
            preset: TransitionPreset::Default,
        }
    }
}

impl RevealConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self) -> Self {
        self.flex_direction = FlexDirection::Row;
        self
    }

    pub fn column(mut self) -> Self {
        self.flex_direction = FlexDirection::Column;
        self
    }

    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn fade_from(mut self, direction: AnimationDirection) -> Self {
        self.fade_direction = direction;
        self
    }

    pub fn displacement(mut self, displacement: Displacement) -> Self {
        self.displacement = displacement;
        self
    }

    pub fn preset(mut self, preset: TransitionPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Inline CSS for the flex container wrapping the items
    pub fn container_style(&self) -> String {
        let mut style = format!(
            "display: flex; flex-direction: {};",
            self.flex_direction.as_css()
        );
        if let Some(gap) = &self.gap {
            style.push_str(&format!(" gap: {};", gap));
        }
        style
    }

    /// Motion for the item at `index`
    pub fn item(&self, index: usize) -> ItemMotion {
        let delay = self.stagger.saturating_mul(index.min(u32::MAX as usize) as u32);
        ItemMotion {
            index,
            poses: PosePair::new(self.fade_direction, self.displacement),
            transition: self.preset.transition().with_delay(delay),
        }
    }
}

/// Pose pair and timing for a single wrapped item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemMotion {
    pub index: usize,
    pub poses: PosePair,
    pub transition: Transition,
}

impl ItemMotion {
    pub fn delay(&self) -> Duration {
        self.transition.delay
    }

    /// Inline CSS for the item container in the given state
    pub fn style(&self, state: VisibilityState) -> String {
        format!(
            "{} {}",
            self.poses.pose(state).to_css(),
            self.transition.to_css()
        )
    }
}

/// A [`RevealConfig`] applied to a list of `len` items
#[derive(Clone, Debug, PartialEq)]
pub struct RevealPlan {
    config: RevealConfig,
    len: usize,
}

impl RevealPlan {
    pub fn new(config: RevealConfig, len: usize) -> Self {
        Self { config, len }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn items(&self) -> impl Iterator<Item = ItemMotion> + '_ {
        (0..self.len).map(|index| self.config.item(index))
    }

    /// Time until the last item finishes its transition
    pub fn settle_time(&self) -> Duration {
        match self.len.checked_sub(1) {
            Some(last) => self.config.item(last).transition.end(),
            None => Duration::ZERO,
        }
    }
}
