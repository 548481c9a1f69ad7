//! Control-loop driver: one active effect rendered onto one strip.
//!
//! Provides [`Effect`], a closed set of every animation in the crate bundled
//! with its colors, and [`Animator`], which owns the strip, tracks the effect's
//! lifecycle and feeds it the clock and the restart flag on every service call.

use crate::animation::{ColorPulse, DotPingPong, DoubleSideFill, FadeIn, FadeOut, Police, fill};
use crate::generator::Generator;
use crate::palettes::ColorPalette;
use crate::procedural::{Candle, Fire, RandomNoise};
use crate::strip::{LedStrip, clear};
use crate::time::{Instant, TimeSource};

/// An animation together with the colors it draws.
///
/// `N` is the fire effect's heat-cell capacity and the number of pixels a
/// fade-out can capture.
#[derive(Debug, Clone)]
pub enum Effect<const N: usize> {
    Fill {
        color: Generator,
        cut_off: f32,
    },
    DotPingPong {
        color: Generator,
        animation: DotPingPong,
    },
    ColorPulse {
        color: Generator,
        animation: ColorPulse,
    },
    DoubleSideFill {
        color: Generator,
        animation: DoubleSideFill,
    },
    Police(Police),
    FadeOut(FadeOut<N>),
    FadeIn {
        color: Generator,
        animation: FadeIn,
    },
    Fire(Fire<N>),
    RandomNoise {
        palette: ColorPalette,
        animation: RandomNoise,
    },
    Candle {
        palette: ColorPalette,
        animation: Candle,
    },
}

impl<const N: usize> Effect<N> {
    pub fn fill(color: impl Into<Generator>, cut_off: f32) -> Self {
        Effect::Fill {
            color: color.into(),
            cut_off,
        }
    }

    pub fn dot_ping_pong(color: impl Into<Generator>, duration: u32, cut_off: f32) -> Self {
        Effect::DotPingPong {
            color: color.into(),
            animation: DotPingPong::new(duration, cut_off),
        }
    }

    pub fn color_pulse(
        color: impl Into<Generator>,
        duration_up: u32,
        duration_down: u32,
        cut_off: f32,
    ) -> Self {
        Effect::ColorPulse {
            color: color.into(),
            animation: ColorPulse::new(duration_up, duration_down, cut_off),
        }
    }

    pub fn double_side_fill(color: impl Into<Generator>, duration: u32) -> Self {
        Effect::DoubleSideFill {
            color: color.into(),
            animation: DoubleSideFill::new(duration),
        }
    }

    pub fn police(period: u32) -> Self {
        Effect::Police(Police::new(period))
    }

    pub fn fade_out(duration: u32) -> Self {
        Effect::FadeOut(FadeOut::new(duration))
    }

    pub fn fade_in(
        color: impl Into<Generator>,
        duration: u32,
        first_cut_off: f32,
        second_cut_off: f32,
    ) -> Self {
        Effect::FadeIn {
            color: color.into(),
            animation: FadeIn::with_cut_offs(duration, first_cut_off, second_cut_off),
        }
    }

    pub fn fire(seed: u64) -> Self {
        Effect::Fire(Fire::new(seed))
    }

    pub fn random_noise(palette: ColorPalette, scale: u16, color_loop: bool) -> Self {
        Effect::RandomNoise {
            palette,
            animation: RandomNoise::new(scale, color_loop),
        }
    }

    pub fn candle(palette: ColorPalette, seed: u64) -> Self {
        Effect::Candle {
            palette,
            animation: Candle::new(seed),
        }
    }

    /// Short name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Fill { .. } => "fill",
            Effect::DotPingPong { .. } => "dot-ping-pong",
            Effect::ColorPulse { .. } => "color-pulse",
            Effect::DoubleSideFill { .. } => "double-side-fill",
            Effect::Police(_) => "police",
            Effect::FadeOut(_) => "fade-out",
            Effect::FadeIn { .. } => "fade-in",
            Effect::Fire(_) => "fire",
            Effect::RandomNoise { .. } => "random-noise",
            Effect::Candle { .. } => "candle",
        }
    }

    /// True for effects that never finish on their own.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            Effect::Police(_) | Effect::Fire(_) | Effect::RandomNoise { .. } | Effect::Candle { .. }
        )
    }

    /// Renders one frame. Returns `true` once a finite effect is complete.
    pub fn tick<L: LedStrip + ?Sized>(&mut self, now: Instant, restart: bool, strip: &mut L) -> bool {
        match self {
            Effect::Fill { color, cut_off } => {
                fill(&*color, strip, *cut_off);
                true
            }
            Effect::DotPingPong { color, animation } => animation.tick(&*color, now, restart, strip),
            Effect::ColorPulse { color, animation } => animation.tick(&*color, now, restart, strip),
            Effect::DoubleSideFill { color, animation } => {
                animation.tick(&*color, now, restart, strip)
            }
            Effect::Police(animation) => animation.tick(now, restart, strip),
            Effect::FadeOut(animation) => animation.tick(now, restart, strip),
            Effect::FadeIn { color, animation } => animation.tick(&*color, now, restart, strip),
            Effect::Fire(animation) => animation.tick(now, restart, strip),
            Effect::RandomNoise { palette, animation } => {
                animation.tick(&*palette, now, restart, strip)
            }
            Effect::Candle { palette, animation } => animation.tick(&*palette, now, restart, strip),
        }
    }
}

/// The current state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorState {
    /// No effect loaded.
    Idle,
    /// Effect loaded and ready to start.
    Loaded,
    /// Effect rendering on every service call.
    Running,
    /// Finite effect rendered its final frame. The strip keeps that frame.
    Complete,
}

/// Result of a service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Frame rendered; service again next loop iteration.
    Running,

    /// Effect has finished. No further servicing is needed until a new
    /// effect is loaded or the effect is restarted.
    Complete,
}

/// Errors that can occur during animator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorError {
    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of expected state(s), e.g. "Running" or "Running or Complete"
        expected: &'static str,
        /// The actual current state
        actual: AnimatorState,
    },
    /// No effect is loaded.
    NoAnimationLoaded,
}

impl core::fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimatorError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but animator is in {:?}",
                    expected, actual
                )
            }
            AnimatorError::NoAnimationLoaded => {
                write!(f, "no animation loaded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimatorError {}

/// Drives one effect on one LED strip from the control loop.
///
/// The animator never blocks and never calls [`LedStrip::show`]; call
/// [`service`](Self::service) once per loop iteration, then push the frame
/// with `animator.strip_mut().show()`.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `L` - Strip implementation type
/// * `T` - Time source implementation type
/// * `N` - Heat-cell capacity for the fire effect
pub struct Animator<'t, L: LedStrip, T: TimeSource, const N: usize> {
    strip: L,
    time_source: &'t T,
    state: AnimatorState,
    effect: Option<Effect<N>>,
    restart_pending: bool,
}

impl<'t, L: LedStrip, T: TimeSource, const N: usize> Animator<'t, L, T, N> {
    /// Creates an idle animator and blanks the strip.
    pub fn new(mut strip: L, time_source: &'t T) -> Self {
        clear(&mut strip);

        Self {
            strip,
            time_source,
            state: AnimatorState::Idle,
            effect: None,
            restart_pending: false,
        }
    }

    fn set_state(&mut self, state: AnimatorState) {
        if self.state != state {
            debug!("animator: {} -> {}", self.state, state);
        }
        self.state = state;
    }

    /// Handles an animator action by dispatching to the appropriate method.
    ///
    /// # Returns
    /// * `Ok(TickOutcome)` - Outcome of the frame rendered by start/restart
    /// * `Ok(TickOutcome::Complete)` - For actions that don't render
    /// * `Err` - Operation failed (invalid state, etc.)
    pub fn handle_action(
        &mut self,
        action: crate::command::AnimatorAction<N>,
    ) -> Result<TickOutcome, AnimatorError> {
        use crate::command::AnimatorAction;

        match action {
            AnimatorAction::Load(effect) => {
                self.load(effect);
                Ok(TickOutcome::Complete)
            }
            AnimatorAction::Start => self.start(),
            AnimatorAction::Stop => {
                self.stop()?;
                Ok(TickOutcome::Complete)
            }
            AnimatorAction::Restart => self.restart(),
            AnimatorAction::Clear => {
                self.clear();
                Ok(TickOutcome::Complete)
            }
        }
    }

    /// Loads an effect. Can be called from any state.
    ///
    /// Replaces any running effect and transitions to `Loaded`. The strip is
    /// left as it is, so a fade-out can pick up whatever was displayed.
    pub fn load(&mut self, effect: Effect<N>) {
        debug!("animator: loaded {}", effect.name());
        self.effect = Some(effect);
        self.restart_pending = true;
        self.set_state(AnimatorState::Loaded);
    }

    /// Starts the loaded effect and renders its first frame.
    ///
    /// Must be called from `Loaded` state.
    pub fn start(&mut self) -> Result<TickOutcome, AnimatorError> {
        if self.state != AnimatorState::Loaded {
            return Err(AnimatorError::InvalidState {
                expected: "Loaded",
                actual: self.state,
            });
        }

        if self.effect.is_none() {
            return Err(AnimatorError::NoAnimationLoaded);
        }

        self.restart_pending = true;
        self.set_state(AnimatorState::Running);
        self.service()
    }

    /// Restarts the effect from the beginning and renders its first frame.
    ///
    /// Can be called from `Running` or `Complete` states.
    pub fn restart(&mut self) -> Result<TickOutcome, AnimatorError> {
        match self.state {
            AnimatorState::Running | AnimatorState::Complete => {
                if self.effect.is_none() {
                    return Err(AnimatorError::NoAnimationLoaded);
                }

                self.restart_pending = true;
                self.set_state(AnimatorState::Running);
                self.service()
            }
            _ => Err(AnimatorError::InvalidState {
                expected: "Running or Complete",
                actual: self.state,
            }),
        }
    }

    /// Renders one frame of the running effect.
    ///
    /// Must be called from `Running` state.
    ///
    /// # Returns
    /// - `Ok(TickOutcome::Running)` - Frame rendered, keep servicing
    /// - `Ok(TickOutcome::Complete)` - Final frame rendered, transitions to `Complete`
    /// - `Err` - Invalid state
    pub fn service(&mut self) -> Result<TickOutcome, AnimatorError> {
        if self.state != AnimatorState::Running {
            return Err(AnimatorError::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        let now = self.time_source.now();
        let restart = self.restart_pending;
        let effect = self.effect.as_mut().ok_or(AnimatorError::NoAnimationLoaded)?;

        let finished = effect.tick(now, restart, &mut self.strip);
        self.restart_pending = false;

        if finished {
            trace!("animator: {} finished", effect.name());
            self.set_state(AnimatorState::Complete);
            Ok(TickOutcome::Complete)
        } else {
            Ok(TickOutcome::Running)
        }
    }

    /// Stops the effect and blanks the strip.
    ///
    /// Effect remains loaded and transitions to `Loaded`.
    /// Can be called from `Running` or `Complete`.
    pub fn stop(&mut self) -> Result<(), AnimatorError> {
        match self.state {
            AnimatorState::Running | AnimatorState::Complete => {
                self.restart_pending = true;
                self.set_state(AnimatorState::Loaded);
                clear(&mut self.strip);
                Ok(())
            }
            _ => Err(AnimatorError::InvalidState {
                expected: "Running or Complete",
                actual: self.state,
            }),
        }
    }

    /// Removes the effect and blanks the strip. Can be called from any state.
    pub fn clear(&mut self) {
        self.effect = None;
        self.restart_pending = false;
        self.set_state(AnimatorState::Idle);
        clear(&mut self.strip);
    }

    /// Returns the current state of the animator.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Returns true if an effect is rendering.
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Returns a reference to the loaded effect, if any.
    pub fn current_effect(&self) -> Option<&Effect<N>> {
        self.effect.as_ref()
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }

    /// Mutable strip access, e.g. to call `show` after servicing.
    pub fn strip_mut(&mut self) -> &mut L {
        &mut self.strip
    }

    /// Releases the strip.
    pub fn into_strip(self) -> L {
        self.strip
    }
}
