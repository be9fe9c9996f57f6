//! Face slots, sticker colors, and how colors move under a quarter turn.

use crate::geometry::{Axis, Coord};

/// A sticker color. `Inner` is the dark plastic facing the cube's interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceColor {
    Green,
    Blue,
    White,
    Yellow,
    Red,
    Orange,
    Inner,
}

impl FaceColor {
    /// Single-letter name used by the facelet net.
    pub const fn letter(self) -> char {
        match self {
            FaceColor::Green => 'G',
            FaceColor::Blue => 'B',
            FaceColor::White => 'W',
            FaceColor::Yellow => 'Y',
            FaceColor::Red => 'R',
            FaceColor::Orange => 'O',
            FaceColor::Inner => '.',
        }
    }

    /// Linear RGB components in `0.0..=1.0`.
    pub fn rgb(self) -> [f32; 3] {
        let hex: u32 = match self {
            FaceColor::Green => 0x00ff00,
            FaceColor::Blue => 0x0000ff,
            FaceColor::White => 0xffffff,
            FaceColor::Yellow => 0xffff00,
            FaceColor::Red => 0xff0000,
            FaceColor::Orange => 0xff8c00,
            FaceColor::Inner => 0x1a1a1a,
        };
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

/// The six face slots of a cubie, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Index of this slot in a [`FaceColors`] array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis this face is perpendicular to.
    pub const fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// +1 for the face on the positive side of its axis, -1 otherwise.
    pub const fn sign(self) -> i32 {
        match self {
            Face::Right | Face::Top | Face::Front => 1,
            Face::Left | Face::Bottom | Face::Back => -1,
        }
    }

    /// Outward unit normal as a lattice vector.
    pub const fn normal(self) -> Coord {
        match self {
            Face::Right => (1, 0, 0),
            Face::Left => (-1, 0, 0),
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
        }
    }

    /// Color this face shows on a solved cube.
    pub const fn solved_color(self) -> FaceColor {
        match self {
            Face::Right => FaceColor::Green,
            Face::Left => FaceColor::Blue,
            Face::Top => FaceColor::White,
            Face::Bottom => FaceColor::Yellow,
            Face::Front => FaceColor::Red,
            Face::Back => FaceColor::Orange,
        }
    }

    /// Returns true if a cubie at `position` has this face on the outside.
    #[inline]
    pub const fn is_exposed_at(self, position: Coord) -> bool {
        self.axis().component(position) == self.sign()
    }
}

/// One color per face slot, indexed by [`Face::index`].
pub type FaceColors = [FaceColor; 6];

/// Colors of the cubie that sits at `home` on a solved cube.
pub fn initial_colors(home: Coord) -> FaceColors {
    Face::ALL.map(|face| {
        if face.is_exposed_at(home) {
            face.solved_color()
        } else {
            FaceColor::Inner
        }
    })
}

/// The four side slots that trade colors during a turn about `axis`.
///
/// A clockwise turn carries each slot's color to the next slot in the cycle.
/// Each cycle follows where the face normals go under
/// [`rotate_quarter_turn`](crate::geometry::rotate_quarter_turn).
pub const fn side_cycle(axis: Axis) -> [Face; 4] {
    match axis {
        Axis::X => [Face::Top, Face::Back, Face::Bottom, Face::Front],
        Axis::Y => [Face::Front, Face::Left, Face::Back, Face::Right],
        Axis::Z => [Face::Top, Face::Right, Face::Bottom, Face::Left],
    }
}

/// Redistributes a cubie's colors for one quarter turn about `axis`.
///
/// The two faces on `axis` itself pass through unchanged.
pub fn permute_face_colors(colors: FaceColors, axis: Axis, clockwise: bool) -> FaceColors {
    let cycle = side_cycle(axis);
    let mut permuted = colors;
    for (i, &from) in cycle.iter().enumerate() {
        let to = if clockwise {
            cycle[(i + 1) % 4]
        } else {
            cycle[(i + 3) % 4]
        };
        permuted[to.index()] = colors[from.index()];
    }
    permuted
}
