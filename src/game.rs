//! A play session around one cube: layer selection, scrambling and
//! detecting when a scrambled cube has been solved.

use log::info;

use crate::cube::{default_scramble_len, Cube};
use crate::error::{CubeError, Result};
use crate::geometry::{Direction, Face};
use crate::layers::LayerMask;
use crate::notation::Turn;

/// Reported once when a scrambled cube is brought back to solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solved {
    /// Move count at the moment the cube was solved.
    pub moves: usize,
}

/// A cube plus the state an interactive front end needs around it.
#[derive(Debug, Clone)]
pub struct Game {
    cube: Cube,
    /// Layers turned by [`Game::turn`], counted from the turned side.
    layers: LayerMask,
    /// Set by scrambling, cleared once the cube is solved again.
    in_progress: bool,
}

impl Game {
    /// Starts a session with a solved cube of `size`.
    pub fn new(size: usize) -> Result<Self> {
        let cube = Cube::new(size)?;
        Ok(Self {
            layers: LayerMask::single(size, 0)?,
            cube,
            in_progress: false,
        })
    }

    #[inline]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[inline]
    pub fn selected_layers(&self) -> LayerMask {
        self.layers
    }

    /// Returns `true` between a scramble and the next solve.
    #[inline]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Replaces the layer selection.
    ///
    /// The mask must cover every layer of the cube.
    pub fn select_layers(&mut self, layers: LayerMask) -> Result<()> {
        if layers.layer_count() != self.cube.size() {
            return Err(CubeError::LayerMaskLength {
                expected: self.cube.size(),
                got: layers.layer_count(),
            });
        }
        self.layers = layers;
        Ok(())
    }

    /// Moves the selection one layer deeper into the cube.
    pub fn select_deeper(&mut self) {
        self.layers.shift_deeper();
    }

    /// Moves the selection one layer back toward the turned side.
    pub fn select_shallower(&mut self) {
        self.layers.shift_shallower();
    }

    /// Scrambles with the default number of twists and starts the game.
    pub fn scramble(&mut self) -> Result<()> {
        let moves = default_scramble_len(self.cube.size());
        self.cube.scramble(moves)?;
        self.in_progress = true;
        Ok(())
    }

    /// Turns the selected layers of the side facing `face`.
    pub fn turn(&mut self, face: Face, direction: Direction) -> Result<Option<Solved>> {
        self.cube
            .twist_relative_to_face(face, self.layers, direction)?;
        Ok(self.check_solved())
    }

    /// Applies a notation turn.
    pub fn apply(&mut self, turn: &Turn) -> Result<Option<Solved>> {
        turn.apply(&mut self.cube)?;
        Ok(self.check_solved())
    }

    /// Rotates the whole puzzle about the side facing `face`.
    pub fn rotate(&mut self, face: Face, direction: Direction) {
        self.cube.rotate_whole_relative_to_face(face, direction);
    }

    pub fn undo(&mut self) -> Option<Solved> {
        if self.cube.undo() {
            self.check_solved()
        } else {
            None
        }
    }

    pub fn redo(&mut self) -> Option<Solved> {
        if self.cube.redo() {
            self.check_solved()
        } else {
            None
        }
    }

    /// Gives up: resets the cube to solved and ends the game.
    pub fn solve(&mut self) {
        self.cube.reset();
        self.in_progress = false;
    }

    /// Starts over with a cube of a different size.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        let layers = LayerMask::single(size, 0)?;
        self.cube.resize(size)?;
        self.layers = layers;
        self.in_progress = false;
        Ok(())
    }

    fn check_solved(&mut self) -> Option<Solved> {
        if !self.in_progress || !self.cube.is_solved() {
            return None;
        }
        self.in_progress = false;
        let moves = self.cube.move_count();
        info!("cube solved in {moves} moves");
        Some(Solved { moves })
    }
}
