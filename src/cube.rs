//! The cube's logical state: 27 cubies plus the move gate.
//!
//! Every transition builds a fresh cubie map and swaps it in, so a reader
//! holding an older [`Cube::snapshot`] never sees a half-applied move, and
//! [`Arc::ptr_eq`] tells a renderer whether anything changed.

use std::sync::Arc;
use std::time::Duration;

use glam::{Quat, Vec3};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::animation::{Animation, Clock, ManualClock, MonotonicClock, DEFAULT_MOVE_DURATION};
use crate::colors::{initial_colors, Face, FaceColor, FaceColors};
use crate::geometry::{all_cells, is_cell, Coord};
use crate::view::ViewAngles;

/// Cubies keyed by their home slot on the solved cube.
pub type CubieMap = FxHashMap<Coord, Cubie>;

/// One of the 27 sub-cubes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    /// Slot this cubie occupies on the solved cube. Never changes.
    pub home: Coord,
    /// Slot this cubie currently occupies.
    pub position: Coord,
    /// Euler angles in radians; whole quarter turns when settled.
    pub orientation: Vec3,
    pub face_colors: FaceColors,
    /// Present while this cubie is mid-move.
    pub animation: Option<Animation>,
}

impl Cubie {
    /// A cubie resting at its home slot with solved colors.
    pub fn solved(home: Coord) -> Self {
        Self {
            home,
            position: home,
            orientation: Vec3::ZERO,
            face_colors: initial_colors(home),
            animation: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Rotation that still separates the drawn cubie from its new slot.
    ///
    /// `position` and `face_colors` jump to their post-move values when a move
    /// is issued, so a renderer applies this rotation (about the cube center)
    /// to show the slice swinging into place. Identity when settled.
    pub fn residual_rotation(&self) -> Quat {
        match self.animation {
            Some(animation) => {
                let axis = animation.axis;
                let remaining = (self.orientation - animation.target_rotation)[axis.index()];
                Quat::from_axis_angle(axis.unit(), remaining)
            }
            None => Quat::IDENTITY,
        }
    }
}

/// The whole puzzle: cubies, view angles, and the one-move-at-a-time gate.
#[derive(Debug, Clone)]
pub struct Cube<C = MonotonicClock> {
    pub(crate) cubies: Arc<CubieMap>,
    pub(crate) is_animating: bool,
    pub(crate) move_duration: Duration,
    pub(crate) clock: C,
    view: ViewAngles,
}

impl Cube<MonotonicClock> {
    /// A solved cube timed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::default())
    }
}

impl Default for Cube<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube<ManualClock> {
    /// A solved cube whose time only moves when the returned handle is advanced.
    pub fn manual() -> (Self, ManualClock) {
        let clock = ManualClock::default();
        (Self::with_clock(clock.clone()), clock)
    }
}

impl<C: Clock> Cube<C> {
    /// A solved cube stamping moves with `clock`.
    pub fn with_clock(clock: C) -> Self {
        let cubies: CubieMap = all_cells()
            .map(|home| (home, Cubie::solved(home)))
            .collect();
        Self {
            cubies: Arc::new(cubies),
            is_animating: false,
            move_duration: DEFAULT_MOVE_DURATION,
            clock,
            view: ViewAngles::default(),
        }
    }

    /// Sets how long each subsequent slice move animates.
    pub fn with_move_duration(mut self, duration: Duration) -> Self {
        self.move_duration = duration;
        self
    }

    pub fn move_duration(&self) -> Duration {
        self.move_duration
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// True while a slice move is still animating; new moves are dropped.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Read-only state for the renderer.
    pub fn snapshot(&self) -> Arc<CubieMap> {
        Arc::clone(&self.cubies)
    }

    /// The cubie whose home slot is `home`.
    pub fn cubie(&self, home: Coord) -> Option<&Cubie> {
        self.cubies.get(&home)
    }

    /// The cubie currently sitting in `position`.
    pub fn cubie_at(&self, position: Coord) -> Option<&Cubie> {
        self.cubies.values().find(|cubie| cubie.position == position)
    }

    /// Indexes cubies by where they currently sit.
    pub fn by_position(&self) -> FxHashMap<Coord, &Cubie> {
        self.cubies
            .values()
            .map(|cubie| (cubie.position, cubie))
            .collect()
    }

    /// Checks that the 27 cubies occupy the 27 slots exactly once each.
    pub fn positions_are_bijective(&self) -> bool {
        let occupied: FxHashSet<Coord> = self.cubies.values().map(|c| c.position).collect();
        self.cubies.len() == 27 && occupied.len() == 27 && occupied.iter().all(|&p| is_cell(p))
    }

    /// Checks that every cubie shows colors exactly on its outward faces.
    pub fn colors_match_positions(&self) -> bool {
        self.cubies.values().all(|cubie| {
            Face::ALL.iter().all(|face| {
                let visible = cubie.face_colors[face.index()] != FaceColor::Inner;
                visible == face.is_exposed_at(cubie.position)
            })
        })
    }

    pub fn view(&self) -> ViewAngles {
        self.view
    }

    pub fn rotate_left(&mut self) {
        self.view.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.view.rotate_right();
    }

    pub fn rotate_up(&mut self) {
        self.view.rotate_up();
    }

    pub fn rotate_down(&mut self) {
        self.view.rotate_down();
    }

    pub fn reset_view(&mut self) {
        self.view = ViewAngles::default();
    }
}
