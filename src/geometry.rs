//! Quarter-turn rotations on the discrete 3x3x3 lattice.
//!
//! Cubie slots are integer triples in `{-1, 0, 1}^3`, centered on the origin.
//! Rotations go through a floating-point quaternion and are rounded back onto
//! the lattice, so repeated turns never drift off it.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use glam::{Quat, Vec3};

/// A discrete cubie slot, each component in `-1..=1`.
pub type Coord = (i32, i32, i32);

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis in a coordinate or Euler-angle triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector pointing along the positive direction of this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Returns the component of `coord` along this axis.
    #[inline]
    pub const fn component(self, coord: Coord) -> i32 {
        match self {
            Axis::X => coord.0,
            Axis::Y => coord.1,
            Axis::Z => coord.2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Signed angle of one quarter turn.
///
/// Clockwise (looking down the axis toward the origin from the positive side)
/// is negative, counter-clockwise is positive.
#[inline]
pub fn quarter_turn_angle(clockwise: bool) -> f32 {
    if clockwise {
        -FRAC_PI_2
    } else {
        FRAC_PI_2
    }
}

/// Rotates a continuous point about `axis` through the origin by `angle` radians.
pub fn rotate_about(point: Vec3, axis: Axis, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis.unit(), angle) * point
}

/// Rotates a cubie slot by exactly one quarter turn about `axis`.
///
/// The rotated vector is rounded per component; without the rounding, four
/// turns would not land back on the starting slot bit-for-bit.
pub fn rotate_quarter_turn(position: Coord, axis: Axis, clockwise: bool) -> Coord {
    let (x, y, z) = position;
    let point = Vec3::new(x as f32, y as f32, z as f32);
    let rotated = rotate_about(point, axis, quarter_turn_angle(clockwise)).round();
    (rotated.x as i32, rotated.y as i32, rotated.z as i32)
}

/// Returns true if `coord` is one of the 27 lattice slots.
#[inline]
pub fn is_cell(coord: Coord) -> bool {
    let (x, y, z) = coord;
    (-1..=1).contains(&x) && (-1..=1).contains(&y) && (-1..=1).contains(&z)
}

/// All 27 slots in x-major order.
pub fn all_cells() -> impl Iterator<Item = Coord> {
    (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| (x, y, z))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cells_are_distinct_and_in_range() {
        let cells: Vec<Coord> = all_cells().collect();
        assert_eq!(cells.len(), 27);
        let mut sorted = cells.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 27);
        assert!(cells.iter().all(|&cell| is_cell(cell)));
    }

    #[test]
    fn test_quarter_turn_stays_on_lattice() {
        for cell in all_cells() {
            for axis in Axis::ALL {
                for clockwise in [true, false] {
                    let rotated = rotate_quarter_turn(cell, axis, clockwise);
                    assert!(
                        is_cell(rotated),
                        "{cell:?} about {axis} (cw={clockwise}) left the lattice: {rotated:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for cell in all_cells() {
            for axis in Axis::ALL {
                for clockwise in [true, false] {
                    let mut position = cell;
                    for _ in 0..4 {
                        position = rotate_quarter_turn(position, axis, clockwise);
                    }
                    assert_eq!(position, cell, "axis {axis}, cw={clockwise}");
                }
            }
        }
    }

    #[test]
    fn test_opposite_directions_cancel() {
        for cell in all_cells() {
            for axis in Axis::ALL {
                let there = rotate_quarter_turn(cell, axis, true);
                assert_eq!(rotate_quarter_turn(there, axis, false), cell);
            }
        }
    }

    #[test]
    fn test_quarter_turn_preserves_layer_on_axis() {
        for cell in all_cells() {
            for axis in Axis::ALL {
                let rotated = rotate_quarter_turn(cell, axis, true);
                assert_eq!(axis.component(rotated), axis.component(cell));
            }
        }
    }

    #[test]
    fn test_known_clockwise_turns() {
        assert_eq!(rotate_quarter_turn((1, 1, 1), Axis::X, true), (1, 1, -1));
        assert_eq!(rotate_quarter_turn((1, 0, 0), Axis::Y, true), (0, 0, 1));
        assert_eq!(rotate_quarter_turn((0, 1, 0), Axis::Z, true), (1, 0, 0));
        assert_eq!(rotate_quarter_turn((0, 1, 0), Axis::Z, false), (-1, 0, 0));
    }
}
