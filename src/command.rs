//! Command-based control for animators.

use crate::animator::Effect;

/// Actions for controlling animators.
#[derive(Debug, Clone)]
pub enum AnimatorAction<const N: usize> {
    /// Load effect.
    Load(Effect<N>),
    /// Start effect.
    Start,
    /// Stop effect and blank the strip.
    Stop,
    /// Restart effect.
    Restart,
    /// Remove effect and blank the strip.
    Clear,
}

/// Command targeting a specific strip.
#[derive(Debug, Clone)]
pub struct AnimatorCommand<Id, const N: usize> {
    pub strip_id: Id,
    pub action: AnimatorAction<N>,
}

impl<Id, const N: usize> AnimatorCommand<Id, N> {
    /// Creates command.
    pub fn new(strip_id: Id, action: AnimatorAction<N>) -> Self {
        Self { strip_id, action }
    }
}
