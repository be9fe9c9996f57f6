//! Slice moves: selecting a layer and arming its quarter turn.

use std::sync::Arc;

use crate::animation::{Animation, Clock};
use crate::colors::permute_face_colors;
use crate::cube::{Cube, Cubie};
use crate::geometry::{quarter_turn_angle, rotate_quarter_turn, Axis};

/// Returns true if `cubie` currently sits in `layer` along `axis`.
#[inline]
pub fn in_layer(cubie: &Cubie, axis: Axis, layer: i32) -> bool {
    axis.component(cubie.position) == layer
}

impl<C: Clock> Cube<C> {
    /// Turns the 9 cubies in `layer` along `axis` by a quarter turn.
    ///
    /// Positions and colors change immediately; orientations catch up over
    /// the following [`tick`](Cube::tick) calls. Ignored while another move
    /// is still animating. Returns whether the move was accepted.
    pub fn rotate_slice(&mut self, axis: Axis, layer: i32, clockwise: bool) -> bool {
        debug_assert!((-1..=1).contains(&layer), "layer {layer} out of range");

        if self.is_animating {
            log::debug!("dropping {axis}{layer} (cw={clockwise}): a move is in flight");
            return false;
        }

        let start_time = self.clock.now();
        let mut next = (*self.cubies).clone();
        let mut moved = 0;
        for cubie in next.values_mut().filter(|cubie| in_layer(cubie, axis, layer)) {
            let start_rotation = cubie.orientation;
            let mut target_rotation = start_rotation;
            target_rotation[axis.index()] += quarter_turn_angle(clockwise);

            cubie.position = rotate_quarter_turn(cubie.position, axis, clockwise);
            cubie.face_colors = permute_face_colors(cubie.face_colors, axis, clockwise);
            cubie.animation = Some(Animation {
                start_rotation,
                target_rotation,
                start_time,
                duration: self.move_duration,
                axis,
            });
            moved += 1;
        }
        debug_assert_eq!(moved, 9, "a slice always holds 9 cubies");

        log::debug!("turning {axis}{layer} (cw={clockwise}) at {start_time:?}");
        self.cubies = Arc::new(next);
        self.is_animating = true;
        true
    }
}
