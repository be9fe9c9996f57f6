//! Time source and per-frame interpolation of in-flight slice moves.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec3;

use crate::cube::Cube;
use crate::geometry::Axis;

/// How long a single quarter turn takes to animate.
pub const DEFAULT_MOVE_DURATION: Duration = Duration::from_millis(500);

/// Source of timestamps for newly armed animations.
///
/// Timestamps are offsets from the clock's own epoch, in the same unit as
/// [`Animation::duration`].
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a caller can keep a handle while the cube
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
    pub fn set(&self, now: Duration) {
        self.0.set(now);
    }

    pub fn advance(&self, delta: Duration) {
        self.0.set(self.0.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

/// An in-flight quarter turn of one cubie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Orientation when the move was issued.
    pub start_rotation: Vec3,
    /// Orientation the cubie settles at.
    pub target_rotation: Vec3,
    pub start_time: Duration,
    pub duration: Duration,
    /// Axis of the slice move that armed this animation.
    pub axis: Axis,
}

impl Animation {
    /// Fraction of the move completed at `now`, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated orientation at `progress`, or `None` once finished.
    pub fn sample(&self, progress: f32) -> Option<Vec3> {
        (progress < 1.0).then(|| {
            self.start_rotation + (self.target_rotation - self.start_rotation) * progress
        })
    }
}

impl<C: Clock> Cube<C> {
    /// Advances every in-flight animation to `now`.
    ///
    /// Call once per rendered frame. Finished animations snap exactly to
    /// their target and are retired; when the last one retires the cube
    /// accepts moves again. Returns true if a new state was published, which
    /// happens while anything is still moving and on the frame it all settles.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.is_animating {
            return false;
        }

        let mut still_animating = false;
        let mut next = (*self.cubies).clone();
        for cubie in next.values_mut() {
            let Some(animation) = cubie.animation else {
                continue;
            };
            match animation.sample(animation.progress(now)) {
                Some(orientation) => {
                    cubie.orientation = orientation;
                    still_animating = true;
                }
                None => {
                    cubie.orientation = animation.target_rotation;
                    cubie.animation = None;
                }
            }
        }

        if self.is_animating != still_animating || still_animating {
            if !still_animating {
                log::debug!("slice move settled at {now:?}");
            }
            self.cubies = Arc::new(next);
            self.is_animating = still_animating;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn quarter_turn_about_x() -> Animation {
        Animation {
            start_rotation: Vec3::ZERO,
            target_rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            start_time: Duration::from_millis(1000),
            duration: DEFAULT_MOVE_DURATION,
            axis: Axis::X,
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        let animation = quarter_turn_about_x();
        assert_eq!(animation.progress(Duration::ZERO), 0.0);
        assert_eq!(animation.progress(Duration::from_millis(1000)), 0.0);
        assert_eq!(animation.progress(Duration::from_millis(1250)), 0.5);
        assert_eq!(animation.progress(Duration::from_millis(1500)), 1.0);
        assert_eq!(animation.progress(Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let animation = Animation {
            duration: Duration::ZERO,
            ..quarter_turn_about_x()
        };
        assert_eq!(animation.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_sample_interpolates_linearly() {
        let animation = quarter_turn_about_x();
        let halfway = animation.sample(0.5).unwrap();
        assert!((halfway.x + FRAC_PI_2 / 2.0).abs() < 1e-6);
        assert_eq!(halfway.y, 0.0);
        assert_eq!(halfway.z, 0.0);
        assert_eq!(animation.sample(0.0), Some(Vec3::ZERO));
        assert_eq!(animation.sample(1.0), None);
    }

    #[test]
    fn test_tick_on_idle_cube_publishes_nothing() {
        let (mut cube, _clock) = Cube::manual();
        let before = cube.snapshot();
        assert!(!cube.tick(Duration::from_secs(5)));
        assert!(Arc::ptr_eq(&before, &cube.snapshot()));
    }

    #[test]
    fn test_tick_interpolates_then_snaps_to_target() {
        let (mut cube, clock) = Cube::manual();
        clock.set(Duration::from_millis(1000));
        cube.rotate_slice(Axis::X, 1, true);

        // before the start time nothing has moved yet
        assert!(cube.tick(Duration::from_millis(900)));
        assert_eq!(cube.cubie((1, 0, 0)).unwrap().orientation, Vec3::ZERO);

        assert!(cube.tick(Duration::from_millis(1250)));
        assert!(cube.is_animating());
        let halfway = cube.cubie((1, 0, 0)).unwrap();
        assert!((halfway.orientation.x + FRAC_PI_2 / 2.0).abs() < 1e-6);
        let residual = halfway.residual_rotation();
        assert!((residual.angle_between(glam::Quat::IDENTITY) - FRAC_PI_2 / 2.0).abs() < 1e-5);

        // untouched slices stay put
        assert!(!cube.cubie((-1, 0, 0)).unwrap().is_animating());

        assert!(cube.tick(Duration::from_millis(1500)));
        assert!(!cube.is_animating());
        for cubie in cube.snapshot().values() {
            assert!(cubie.animation.is_none());
            let expected = if cubie.home.0 == 1 { -FRAC_PI_2 } else { 0.0 };
            assert_eq!(cubie.orientation, Vec3::new(expected, 0.0, 0.0));
        }

        // settled frames are no-ops
        let settled = cube.snapshot();
        assert!(!cube.tick(Duration::from_millis(1600)));
        assert!(Arc::ptr_eq(&settled, &cube.snapshot()));
    }

    #[test]
    fn test_late_first_tick_settles_at_once() {
        let (mut cube, _clock) = Cube::manual();
        cube.rotate_slice(Axis::Z, 0, false);
        assert!(cube.tick(Duration::from_secs(10)));
        assert!(!cube.is_animating());
        let edge = cube.cubie((1, 0, 0)).unwrap();
        assert_eq!(edge.orientation, Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert_eq!(edge.position, (0, 1, 0));
    }

    #[test]
    fn test_zero_duration_cube_settles_on_first_tick() {
        let (cube, clock) = Cube::manual();
        let mut cube = cube.with_move_duration(Duration::ZERO);
        cube.rotate_slice(Axis::Y, 1, true);
        assert!(cube.is_animating());
        assert!(cube.tick(clock.now()));
        assert!(!cube.is_animating());
    }

    #[test]
    fn test_manual_clock_is_shared_between_clones() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(40));
        handle.advance(Duration::from_millis(2));
        assert_eq!(clock.now(), Duration::from_millis(42));
        clock.set(Duration::from_secs(1));
        assert_eq!(handle.now(), Duration::from_secs(1));
    }
}
