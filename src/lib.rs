//! N×N×N Twisty Cube Library
//!
//! Tracks the position and orientation of every cubie of a cube puzzle under
//! slice twists and whole-puzzle rotations, with bounded undo/redo history,
//! scrambling, and three levels of solved detection. Rendering and input
//! handling are left to the caller.

pub mod cube;
pub mod cubie;
pub mod error;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod history;
pub mod layers;
pub mod net;
pub mod notation;

pub use cube::Cube;
pub use cubie::Cubie;
pub use error::{CubeError, Result};
pub use game::{Game, Solved};
pub use geometry::{Axis, Direction, Face, Sign};
pub use history::{History, Twist};
pub use layers::LayerMask;
pub use notation::Turn;
