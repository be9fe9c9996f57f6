//! Reading the cube's outer stickers as six 3x3 faces.
//!
//! Each face is read as seen from outside the cube: `U` with `B` at its top
//! edge, `D` with `F` at its top edge, and the four side faces with `U` at
//! their top edge.

use crate::animation::Clock;
use crate::colors::{Face, FaceColor};
use crate::cube::Cube;
use crate::geometry::Coord;

/// Faces in net order: up, left, front, right, back, down.
pub const NET_ORDER: [Face; 6] = [
    Face::Top,
    Face::Left,
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Bottom,
];

/// A face read row by row from its top-left sticker.
pub type FaceGrid = [[FaceColor; 3]; 3];

/// Short label used in the net header.
pub const fn face_label(face: Face) -> char {
    match face {
        Face::Top => 'U',
        Face::Bottom => 'D',
        Face::Left => 'L',
        Face::Right => 'R',
        Face::Front => 'F',
        Face::Back => 'B',
    }
}

/// The cubie slot showing the sticker at (`row`, `col`) of `face`.
pub const fn facelet_cell(face: Face, row: usize, col: usize) -> Coord {
    let down = row as i32 - 1;
    let right = col as i32 - 1;
    match face {
        Face::Top => (right, 1, down),
        Face::Bottom => (right, -1, -down),
        Face::Front => (right, -down, 1),
        Face::Back => (-right, -down, -1),
        Face::Right => (1, -down, -right),
        Face::Left => (-1, -down, right),
    }
}

/// Reads the nine stickers of `face`.
pub fn face_grid<C: Clock>(cube: &Cube<C>, face: Face) -> FaceGrid {
    let by_position = cube.by_position();
    let mut grid = [[FaceColor::Inner; 3]; 3];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            if let Some(cubie) = by_position.get(&facelet_cell(face, row, col)) {
                *cell = cubie.face_colors[face.index()];
            }
        }
    }
    grid
}

/// True if every face shows a single color.
///
/// Center cubies spinning in place do not count as unsolved.
pub fn is_solved<C: Clock>(cube: &Cube<C>) -> bool {
    Face::ALL.into_iter().all(|face| {
        let grid = face_grid(cube, face);
        let center = grid[1][1];
        center != FaceColor::Inner && grid.iter().flatten().all(|&color| color == center)
    })
}

/// Formats the six faces side by side as color letters.
pub fn format_net<C: Clock>(cube: &Cube<C>) -> String {
    let grids = NET_ORDER.map(|face| face_grid(cube, face));

    let mut header = String::new();
    for (i, &face) in NET_ORDER.iter().enumerate() {
        if i > 0 {
            header.push_str("  ");
        }
        header.push_str(&format!("{:<3}", face_label(face)));
    }
    let mut output = header.trim_end().to_string();
    output.push('\n');

    for row in 0..3 {
        for (i, grid) in grids.iter().enumerate() {
            if i > 0 {
                output.push_str("  ");
            }
            output.extend(grid[row].iter().map(|color| color.letter()));
        }
        output.push('\n');
    }

    output
}
