use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Tween, TweenTiming};

/// Frames moving the pointer less than this are not repainted.
pub const FRAME_SKIP_EPSILON: f64 = 1e-4;

/// Outcome of advancing one pointer by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// No transition running.
    Idle,
    /// Progress changed by less than the skip epsilon.
    Skipped,
    Painted(f64),
    /// Terminal frame; always painted, always exactly at the target.
    Finished(f64),
}

impl FrameStep {
    #[must_use]
    pub fn painted_percentage(self) -> Option<f64> {
        match self {
            Self::Painted(percentage) | Self::Finished(percentage) => Some(percentage),
            Self::Idle | Self::Skipped => None,
        }
    }
}

/// Animation state of one pointer, in range percentages.
///
/// Idle -> Animating on `start_transition`, back to Idle on the terminal frame
/// or on `jump_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub previous_percentage: f64,
    pub current_percentage: f64,
    pub target_percentage: f64,
    pub in_progress: bool,
    /// Last painted percentage.
    pub last_progress: f64,
    #[serde(skip)]
    tween: Option<Tween>,
}

impl AnimationState {
    #[must_use]
    pub fn at(percentage: f64) -> Self {
        Self {
            previous_percentage: percentage,
            current_percentage: percentage,
            target_percentage: percentage,
            in_progress: false,
            last_progress: percentage,
            tween: None,
        }
    }

    /// Starts a transition from the current percentage, replacing any running one.
    ///
    /// Returns `true` when the pointer must be repainted immediately, which is
    /// the case for instant transitions.
    pub fn start_transition(&mut self, target: f64, timing: TweenTiming) -> bool {
        if timing.is_instant() {
            self.jump_to(target);
            return true;
        }
        if !self.in_progress && target == self.current_percentage {
            self.target_percentage = target;
            return false;
        }
        self.previous_percentage = self.current_percentage;
        self.target_percentage = target;
        self.tween = Some(Tween::new(self.current_percentage, target, timing));
        self.in_progress = true;
        false
    }

    /// Cancels any running tween and settles on `target`.
    pub fn jump_to(&mut self, target: f64) {
        *self = Self::at(target);
    }

    /// Samples the running tween at `now_ms`.
    pub fn step(&mut self, now_ms: f64) -> FrameStep {
        let Some(tween) = self.tween.as_mut() else {
            return FrameStep::Idle;
        };
        let sample = tween.sample(now_ms);
        if sample.finished {
            let target = self.target_percentage;
            *self = Self::at(target);
            return FrameStep::Finished(target);
        }
        if (sample.value - self.last_progress).abs() < FRAME_SKIP_EPSILON
            && tween.started_at_ms() != Some(now_ms)
        {
            trace!(
                percentage = sample.value,
                last = self.last_progress,
                "skipping redundant pointer frame"
            );
            return FrameStep::Skipped;
        }
        self.current_percentage = sample.value;
        self.last_progress = sample.value;
        FrameStep::Painted(sample.value)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_progress
    }
}

/// One animation state per pointer index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerAnimations {
    states: Vec<AnimationState>,
}

impl PointerAnimations {
    /// Matches the number of states to `count`. Removed indices are dropped,
    /// new ones start at zero so their first transition animates from the start.
    pub fn resize(&mut self, count: usize) {
        self.states.truncate(count);
        while self.states.len() < count {
            self.states.push(AnimationState::at(0.0));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnimationState> {
        self.states.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnimationState> {
        self.states.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationState> {
        self.states.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AnimationState> {
        self.states.iter_mut()
    }

    #[must_use]
    pub fn any_animating(&self) -> bool {
        self.states.iter().any(AnimationState::is_animating)
    }

    /// Current percentages, in index order.
    #[must_use]
    pub fn current_percentages(&self) -> Vec<f64> {
        self.states
            .iter()
            .map(|state| state.current_percentage)
            .collect()
    }

    #[must_use]
    pub fn states(&self) -> &[AnimationState] {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationState, FrameStep, PointerAnimations};
    use crate::core::{Easing, TweenTiming};

    fn timing() -> TweenTiming {
        TweenTiming {
            delay_ms: 0.0,
            duration_ms: 1000.0,
            easing: Easing::ExpOut,
        }
    }

    #[test]
    fn terminal_frame_lands_exactly_on_target() {
        let mut state = AnimationState::at(0.2);
        state.start_transition(0.8, timing());
        assert_eq!(state.step(0.0), FrameStep::Painted(0.2));
        assert!(matches!(state.step(500.0), FrameStep::Painted(_)));
        assert_eq!(state.step(1000.0), FrameStep::Finished(0.8));
        assert!(!state.is_animating());
        assert_eq!(state.previous_percentage, 0.8);
        assert_eq!(state.step(1016.0), FrameStep::Idle);
    }

    #[test]
    fn tiny_progress_is_skipped() {
        let mut state = AnimationState::at(0.0);
        state.start_transition(1.0, timing());
        state.step(0.0);
        state.step(990.0);
        assert_eq!(state.step(990.5), FrameStep::Skipped);
    }

    #[test]
    fn new_transition_starts_from_current_position() {
        let mut state = AnimationState::at(0.0);
        state.start_transition(1.0, timing());
        state.step(0.0);
        state.step(100.0);
        let mid = state.current_percentage;
        state.start_transition(0.5, timing());
        assert_eq!(state.previous_percentage, mid);
        assert_eq!(state.step(200.0), FrameStep::Painted(mid));
    }

    #[test]
    fn removing_pointers_keeps_remaining_indices() {
        let mut animations = PointerAnimations::default();
        animations.resize(3);
        for (index, state) in animations.iter_mut().enumerate() {
            state.jump_to(index as f64 / 10.0);
        }
        animations.resize(2);
        assert_eq!(animations.current_percentages(), vec![0.0, 0.1]);
        animations.resize(3);
        assert_eq!(animations.current_percentages(), vec![0.0, 0.1, 0.0]);
    }
}
