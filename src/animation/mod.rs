//! Bubble transition animator
//!
//! Scales the bubble container in with a cubic ease-out and out linearly.
//! Sampled once per tick; a transition must finish (or be stopped) before
//! the next one starts.

use crate::surface::BubbleContainer;
use crate::timing::{Progress, sanitize_dt};

pub mod easing;

pub use easing::{ease_out_cubic, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transition {
    Show,
    Hide { from: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    transition: Transition,
    duration: f32,
    elapsed: f32,
}

/// Drives show/hide transitions of a [`BubbleContainer`]
#[derive(Debug, Default)]
pub struct BubbleAnimator {
    tween: Option<Tween>,
}

impl BubbleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the container visible at scale 0 and start scaling it in
    ///
    /// Finishes immediately when there is no container.
    pub fn show<C>(&mut self, container: Option<&mut C>, duration: f32) -> Progress
    where
        C: BubbleContainer + ?Sized,
    {
        let Some(container) = container else {
            self.tween = None;
            return Progress::Finished;
        };
        container.set_visible(true);
        container.set_scale(0.0);
        self.tween = Some(Tween {
            transition: Transition::Show,
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
        Progress::Running
    }

    /// Start scaling the container from its current scale down to 0
    ///
    /// Finishes immediately when there is no container.
    pub fn hide<C>(&mut self, container: Option<&mut C>, duration: f32) -> Progress
    where
        C: BubbleContainer + ?Sized,
    {
        let Some(container) = container else {
            self.tween = None;
            return Progress::Finished;
        };
        self.tween = Some(Tween {
            transition: Transition::Hide {
                from: container.scale(),
            },
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
        Progress::Running
    }

    /// Advance the running transition by `dt` seconds
    pub fn tick<C>(&mut self, dt: f32, container: Option<&mut C>) -> Progress
    where
        C: BubbleContainer + ?Sized,
    {
        let Some(tween) = self.tween.as_mut() else {
            return Progress::Finished;
        };
        let Some(container) = container else {
            self.tween = None;
            return Progress::Finished;
        };

        tween.elapsed += sanitize_dt(dt);
        let t = if tween.duration > 0.0 {
            tween.elapsed / tween.duration
        } else {
            1.0
        };

        if t >= 1.0 {
            match tween.transition {
                Transition::Show => container.set_scale(1.0),
                Transition::Hide { .. } => {
                    container.set_scale(0.0);
                    container.set_visible(false);
                }
            }
            self.tween = None;
            return Progress::Finished;
        }

        let scale = match tween.transition {
            Transition::Show => ease_out_cubic(t),
            Transition::Hide { from } => lerp(from, 0.0, t),
        };
        container.set_scale(scale);
        Progress::Running
    }

    /// Drop the running transition, leaving the container as it is
    pub fn stop(&mut self) {
        self.tween = None;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Bubble {
        visible: bool,
        scale: f32,
        samples: Vec<f32>,
    }

    impl BubbleContainer for Bubble {
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_scale(&mut self, scale: f32) {
            self.scale = scale;
            self.samples.push(scale);
        }

        fn scale(&self) -> f32 {
            self.scale
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn show_eases_in_and_lands_on_one() {
        let mut bubble = Bubble::default();
        let mut animator = BubbleAnimator::new();

        assert_eq!(animator.show(Some(&mut bubble), 0.4), Progress::Running);
        assert!(bubble.visible);
        assert_eq!(bubble.scale, 0.0);

        assert_eq!(animator.tick(0.2, Some(&mut bubble)), Progress::Running);
        assert!(approx(bubble.scale, 0.875));

        assert_eq!(animator.tick(0.3, Some(&mut bubble)), Progress::Finished);
        assert_eq!(bubble.scale, 1.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn show_samples_increase_monotonically() {
        let mut bubble = Bubble::default();
        let mut animator = BubbleAnimator::new();
        animator.show(Some(&mut bubble), 0.3);
        while animator.tick(1.0 / 60.0, Some(&mut bubble)) == Progress::Running {}

        assert!(bubble.samples.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(bubble.samples.last(), Some(&1.0));
    }

    #[test]
    fn hide_is_linear_from_current_scale() {
        let mut bubble = Bubble {
            visible: true,
            scale: 0.8,
            samples: vec![],
        };
        let mut animator = BubbleAnimator::new();

        assert_eq!(animator.hide(Some(&mut bubble), 0.2), Progress::Running);
        assert_eq!(animator.tick(0.05, Some(&mut bubble)), Progress::Running);
        assert!(approx(bubble.scale, 0.6));
        assert!(bubble.visible);

        assert_eq!(animator.tick(0.2, Some(&mut bubble)), Progress::Finished);
        assert_eq!(bubble.scale, 0.0);
        assert!(!bubble.visible);
    }

    #[test]
    fn missing_container_finishes_immediately() {
        let mut animator = BubbleAnimator::new();
        assert_eq!(
            animator.show(None::<&mut Bubble>, 0.3),
            Progress::Finished
        );
        assert_eq!(
            animator.hide(None::<&mut Bubble>, 0.2),
            Progress::Finished
        );
        assert!(!animator.is_animating());
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut bubble = Bubble::default();
        let mut animator = BubbleAnimator::new();
        animator.show(Some(&mut bubble), 0.0);
        assert_eq!(animator.tick(0.0, Some(&mut bubble)), Progress::Finished);
        assert_eq!(bubble.scale, 1.0);
    }
}
