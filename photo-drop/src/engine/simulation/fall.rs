use bevy::prelude::Resource;
use rand::Rng;
use rand::rngs::StdRng;

/// Indexable height storage the fall machine reads and writes.
///
/// The ECS adapter maps indices onto panel entities; tests use a plain `Vec<f32>`.
pub trait PanelHeights {
    fn panel_count(&self) -> usize;
    fn height(&self, index: usize) -> Option<f32>;
    fn set_height(&mut self, index: usize, height: f32);
}

impl PanelHeights for Vec<f32> {
    fn panel_count(&self) -> usize {
        self.len()
    }

    fn height(&self, index: usize) -> Option<f32> {
        self.get(index).copied()
    }

    fn set_height(&mut self, index: usize, height: f32) {
        if let Some(slot) = self.get_mut(index) {
            *slot = height;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Falling(usize),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallTick {
    /// Nothing to select from.
    Empty,
    /// The selected panel moved down to `height`.
    Dropped {
        index: usize,
        height: f32,
        newly_selected: bool,
    },
    /// The selected panel was at rest (or gone) and the selection cleared.
    Released { index: usize },
}

/// Drops one randomly chosen panel at a time towards the ground.
///
/// Each tick first picks a target when idle, then either lowers the target by
/// `step` (while it is above `rest_threshold`) or clears the selection. A
/// cleared selection is only replaced on the following tick.
#[derive(Resource)]
pub struct FallAnimator {
    selection: Selection,
    rng: StdRng,
    step: f32,
    rest_threshold: f32,
}

impl FallAnimator {
    pub fn with_motion(rng: StdRng, step: f32, rest_threshold: f32) -> Self {
        Self {
            selection: Selection::Idle,
            rng,
            step,
            rest_threshold,
        }
    }

    pub fn step<H: PanelHeights + ?Sized>(&mut self, panels: &mut H) -> FallTick {
        let (index, newly_selected) = match self.selection {
            Selection::Falling(index) => (index, false),
            Selection::Idle => {
                let count = panels.panel_count();
                if count == 0 {
                    return FallTick::Empty;
                }
                let index = self.rng.random_range(0..count);
                self.selection = Selection::Falling(index);
                (index, true)
            }
        };

        match panels.height(index) {
            Some(height) if height > self.rest_threshold => {
                let height = height - self.step;
                panels.set_height(index, height);
                FallTick::Dropped {
                    index,
                    height,
                    newly_selected,
                }
            }
            _ => {
                self.selection = Selection::Idle;
                FallTick::Released { index }
            }
        }
    }
}

#[cfg(test)]
impl FallAnimator {
    pub fn new(rng: StdRng) -> Self {
        use crate::constants::animation::{FALL_STEP, REST_THRESHOLD};

        Self::with_motion(rng, FALL_STEP, REST_THRESHOLD)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        match self.selection {
            Selection::Idle => None,
            Selection::Falling(index) => Some(index),
        }
    }
}
