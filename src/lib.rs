//! Rubik's Cube Library
//!
//! Logical state and slice-move engine for an animated 3x3x3 cube. A move
//! updates cubie positions and colors at once and arms a short animation;
//! the render loop calls [`Cube::tick`] every frame until it settles, and
//! only then is the next move accepted.

pub mod animation;
pub mod colors;
pub mod cube;
pub mod facelets;
pub mod geometry;
pub mod notation;
pub mod slice;
pub mod view;

pub use animation::{Animation, Clock, ManualClock, MonotonicClock, DEFAULT_MOVE_DURATION};
pub use colors::{Face, FaceColor, FaceColors};
pub use cube::{Cube, Cubie, CubieMap};
pub use geometry::{Axis, Coord};
pub use notation::{Move, MoveParseError};
pub use view::ViewAngles;
