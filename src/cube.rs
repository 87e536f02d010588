//! The N×N×N puzzle: move engine, history, scrambling and solved checks.
//!
//! Coordinate conventions:
//! - Grid axis 0, 1, 2 are world x, y, z (right, up, front).
//! - Layer 0 along an axis is the slice at the positive end of that axis, so
//!   the layer mask of a twist on the right, up or front side counts inward
//!   from that side. Grid indices are therefore the world position mirrored
//!   through the center, which commutes with every rotation.
//! - A twist moves each selected cubie both to its rotated position and
//!   rotates its frame by the same matrix.

use log::{debug, info, trace};
use rand::Rng;

use crate::cubie::Cubie;
use crate::error::{CubeError, Result};
use crate::geometry::{rotation_matrix, Axis, Direction, Face, Sign};
use crate::grid::{idx_to_coord, Coord, Grid};
use crate::history::{History, Twist, DEFAULT_HISTORY_CAPACITY};
use crate::layers::LayerMask;

/// Smallest supported cube.
pub const MIN_SIZE: usize = 2;
/// Largest supported cube.
pub const MAX_SIZE: usize = 100;

/// Number of scramble twists used by default for a cube of `size`.
pub const fn default_scramble_len(size: usize) -> usize {
    size * size * size
}

/// An N×N×N twisty cube.
#[derive(Debug, Clone)]
pub struct Cube {
    grid: Grid<Cubie>,
    /// How the whole puzzle is currently held; only used to resolve face
    /// names.
    orientation: Cubie,
    move_count: usize,
    history: History,
}

impl Cube {
    /// Creates a solved cube of `size` with the default history capacity.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_history_capacity(size, DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a solved cube of `size` remembering up to `capacity` twists.
    pub fn with_history_capacity(size: usize, capacity: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(CubeError::InvalidSize(size));
        }
        Ok(Self {
            grid: Grid::new(size, Cubie::new()),
            orientation: Cubie::new(),
            move_count: 0,
            history: History::new(capacity),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of twists made by the player, adjusted by undo and redo.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// How the whole puzzle is currently held.
    #[inline]
    pub fn orientation(&self) -> &Cubie {
        &self.orientation
    }

    /// Returns the cubie at `(i, j, k)`.
    pub fn cubie(&self, i: usize, j: usize, k: usize) -> Result<&Cubie> {
        self.grid.get([i, j, k]).ok_or(CubeError::OutOfBounds {
            i,
            j,
            k,
            size: self.size(),
        })
    }

    /// All cubies in x-major index order.
    #[inline]
    pub fn cubies(&self) -> &[Cubie] {
        self.grid.cells()
    }

    /// Iterates over every cubie with its grid coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cubie)> + '_ {
        self.grid.iter()
    }

    /// Discards all state and returns to a solved, unrotated cube.
    pub fn reset(&mut self) {
        debug!("resetting {0}x{0}x{0} cube", self.size());
        self.grid = Grid::new(self.size(), Cubie::new());
        self.orientation = Cubie::new();
        self.move_count = 0;
        self.history.clear();
    }

    /// Recreates the cube at a new size, keeping the history capacity.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        *self = Self::with_history_capacity(size, self.history.capacity())?;
        debug!("resized cube to {size}");
        Ok(())
    }

    /// Twists the selected layers along `axis` and records the twist.
    pub fn twist(&mut self, axis: Axis, layers: LayerMask, direction: Direction) -> Result<()> {
        let twist = self.checked_twist(axis, layers, direction)?;
        self.apply(&twist);
        self.move_count += 1;
        self.history.record(twist);
        Ok(())
    }

    /// Twists the selected layers without touching history or move count.
    pub fn twist_unrecorded(
        &mut self,
        axis: Axis,
        layers: LayerMask,
        direction: Direction,
    ) -> Result<()> {
        let twist = self.checked_twist(axis, layers, direction)?;
        self.apply(&twist);
        Ok(())
    }

    /// Twists layers counted inward from the side currently facing `face`.
    ///
    /// `direction` is seen from outside that side.
    pub fn twist_relative_to_face(
        &mut self,
        face: Face,
        layers: LayerMask,
        direction: Direction,
    ) -> Result<()> {
        let (axis, sign) = self.resolve_face(face);
        match sign {
            Sign::Positive => self.twist(axis, layers, direction),
            Sign::Negative => self.twist(axis, layers.reversed(), direction.inverse()),
        }
    }

    /// Turns the entire puzzle a quarter turn about `axis`.
    ///
    /// This only changes how the puzzle is held, so it is not recorded.
    pub fn rotate_whole(&mut self, axis: Axis, direction: Direction) {
        debug!("rotating whole cube about {axis} ({direction:?})");
        let rotation = rotation_matrix(axis, direction);
        self.grid.rotate_all(&rotation);
        for cubie in self.grid.cells_mut() {
            cubie.compose_with(&rotation);
        }
        self.orientation.compose_with(&rotation);
    }

    /// Turns the entire puzzle about the axis through the side currently
    /// facing `face`, with `direction` seen from outside that side.
    pub fn rotate_whole_relative_to_face(&mut self, face: Face, direction: Direction) {
        let (axis, sign) = self.resolve_face(face);
        let direction = match sign {
            Sign::Positive => direction,
            Sign::Negative => direction.inverse(),
        };
        self.rotate_whole(axis, direction);
    }

    /// Finds the physical axis and end that `face` currently corresponds to,
    /// given how the puzzle is held.
    pub fn resolve_face(&self, face: Face) -> (Axis, Sign) {
        self.orientation.resolve_face(face)
    }

    /// Finds which original face of `cubie` shows toward the side `face`.
    pub fn get_face(&self, face: Face, cubie: &Cubie) -> Face {
        cubie.face_showing(face)
    }

    /// For every cubie on the side currently facing `face`, returns which of
    /// its original faces shows there.
    ///
    /// Each sticker is read along the outward normal of that physical layer,
    /// so the result stays correct after whole-puzzle rotations. Results are
    /// row-major over the two remaining axes in ascending order.
    pub fn facelets(&self, face: Face) -> Vec<Face> {
        let (axis, sign) = self.resolve_face(face);
        let layer = match sign {
            Sign::Positive => 0,
            Sign::Negative => self.size() - 1,
        };
        let outward = Face::from_axis_sign(axis, sign);
        self.grid
            .slice_indices(axis, layer)
            .map(|idx| self.grid.cells()[idx].face_showing(outward))
            .collect()
    }

    /// Undoes the most recent recorded twist. Returns `false` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(twist) = self.history.step_back() else {
            return false;
        };
        self.apply(&twist.inverse());
        self.move_count = self.move_count.saturating_sub(1);
        true
    }

    /// Replays the most recently undone twist. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(twist) = self.history.step_forward() else {
            return false;
        };
        self.apply(&twist);
        self.move_count += 1;
        true
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Scrambles with `moves` random twists from the thread-local RNG.
    pub fn scramble(&mut self, moves: usize) -> Result<Vec<Twist>> {
        self.scramble_with_rng(&mut rand::rng(), moves)
    }

    /// Scrambles with `moves` random twists drawn from `rng`.
    ///
    /// History is cleared first and the twists are not recorded, so undo
    /// cannot reach back through a scramble. Each twist picks a uniformly
    /// random axis and direction and a layer mask that is neither empty nor
    /// complete. The applied twists are returned in order.
    pub fn scramble_with_rng<R: Rng>(&mut self, rng: &mut R, moves: usize) -> Result<Vec<Twist>> {
        info!("scrambling {0}x{0}x{0} cube with {moves} twists", self.size());
        self.history.clear();

        let size = self.size();
        let mut twists = Vec::with_capacity(moves);
        for _ in 0..moves {
            let axis = Axis::ALL[rng.random_range(0..3)];
            let mut layers = LayerMask::empty(size)?;
            while layers.is_none() || layers.is_all() {
                layers = LayerMask::from_fn(size, |_| rng.random_bool(0.5))?;
            }
            let direction = if rng.random_bool(0.5) {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };

            let twist = Twist {
                axis,
                layers,
                direction,
            };
            self.apply(&twist);
            twists.push(twist);
        }
        Ok(twists)
    }

    /// Checks that every side shows a single color.
    ///
    /// For each world axis, finds the local axis of the reference cubie that
    /// lies along it, and requires every cubie on both outer layers across
    /// that axis to have the same local axis pointing the same way. This
    /// holds however the whole puzzle is held.
    pub fn is_solved(&self) -> bool {
        let reference = self.reference();
        let last = self.size() - 1;

        Axis::ALL.into_iter().all(|world| {
            let local = reference.local_axis_along(world);
            let expected = reference.axis_vector(local);
            [0, last].into_iter().all(|layer| {
                self.grid
                    .slice_indices(world, layer)
                    .all(|idx| self.grid.cells()[idx].axis_vector(local) == expected)
            })
        })
    }

    /// Checks that every center cubie (not on an edge or corner) has the
    /// same orientation as the reference cubie.
    ///
    /// A size-2 cube has no centers, so this is always true for it.
    pub fn is_center_solved(&self) -> bool {
        let reference = self.reference();
        let size = self.size();
        let last = size - 1;
        let is_interior = |c: usize| c > 0 && c < last;

        Axis::ALL.into_iter().all(|axis| {
            let (a, b) = axis.others();
            [0, last].into_iter().all(|layer| {
                self.grid
                    .slice_indices(axis, layer)
                    .map(|idx| (idx_to_coord(size, idx), idx))
                    .filter(|(coord, _)| {
                        is_interior(coord[a.index()]) && is_interior(coord[b.index()])
                    })
                    .all(|(_, idx)| self.grid.cells()[idx] == *reference)
            })
        })
    }

    /// Checks that every cubie in the whole volume, including hidden inner
    /// ones, shares one orientation.
    pub fn is_super_solved(&self) -> bool {
        let reference = self.reference();
        self.grid.cells().iter().all(|cubie| cubie == reference)
    }

    fn reference(&self) -> &Cubie {
        &self.grid.cells()[0]
    }

    fn checked_twist(&self, axis: Axis, layers: LayerMask, direction: Direction) -> Result<Twist> {
        if layers.layer_count() != self.size() {
            return Err(CubeError::LayerMaskLength {
                expected: self.size(),
                got: layers.layer_count(),
            });
        }
        Ok(Twist {
            axis,
            layers,
            direction,
        })
    }

    /// Applies a validated twist.
    fn apply(&mut self, twist: &Twist) {
        trace!("applying twist {twist}");
        let rotation = rotation_matrix(twist.axis, twist.direction);
        for layer in twist.layers.iter() {
            self.grid.rotate_slice(twist.axis, layer, &rotation);
            let indices: Vec<usize> = self.grid.slice_indices(twist.axis, layer).collect();
            let cells = self.grid.cells_mut();
            for idx in indices {
                cells[idx].compose_with(&rotation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::geometry::{axis_sign_of, mul_vec, transpose};

    fn mask(flags: &[bool]) -> LayerMask {
        LayerMask::from_bools(flags).unwrap()
    }

    fn scrambled(size: usize, seed: u64) -> Cube {
        let mut cube = Cube::new(size).unwrap();
        cube.scramble_with_rng(&mut ChaCha8Rng::seed_from_u64(seed), 30)
            .unwrap();
        cube
    }

    #[test]
    fn test_new_cube_is_solved() {
        for size in [2, 3, 4, 5] {
            let cube = Cube::new(size).unwrap();
            assert!(cube.is_solved(), "size {size}");
            assert!(cube.is_center_solved(), "size {size}");
            assert!(cube.is_super_solved(), "size {size}");
            assert_eq!(cube.move_count(), 0);
            assert!(cube.history().is_empty());
        }
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(Cube::new(1).unwrap_err(), CubeError::InvalidSize(1));
        assert_eq!(Cube::new(0).unwrap_err(), CubeError::InvalidSize(0));
        assert_eq!(
            Cube::new(MAX_SIZE + 1).unwrap_err(),
            CubeError::InvalidSize(MAX_SIZE + 1)
        );
        assert!(Cube::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn test_single_twist_and_inverse() {
        let mut cube = Cube::new(3).unwrap();
        let fresh = cube.clone();
        let layers = mask(&[true, false, false]);

        cube.twist(Axis::X, layers, Direction::CounterClockwise).unwrap();
        assert!(!cube.is_solved());
        assert!(!cube.is_super_solved());

        cube.twist(Axis::X, layers, Direction::Clockwise).unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.cubies(), fresh.cubies());
        assert_eq!(cube.move_count(), 2);
    }

    #[test]
    fn test_twist_moves_corner_and_rotates_it() {
        let mut cube = Cube::new(3).unwrap();
        let mut marked = Cubie::new();
        marked.rotate(Axis::Z, Direction::Clockwise);
        cube.grid.cells_mut()[crate::grid::coord_to_idx(3, [0, 2, 2])] = marked;

        // (0, 2, 2) is centered (-1, 1, 1); a positive turn about x sends
        // it to (-1, -1, 1), which is (0, 0, 2)
        cube.twist(Axis::X, mask(&[true, false, false]), Direction::CounterClockwise)
            .unwrap();

        let mut expected = marked;
        expected.rotate(Axis::X, Direction::CounterClockwise);
        assert_eq!(cube.cubie(0, 0, 2).unwrap(), &expected);
    }

    #[test]
    fn test_layer_mask_length_is_checked() {
        let mut cube = Cube::new(3).unwrap();
        let result = cube.twist(Axis::Y, mask(&[true, false]), Direction::Clockwise);
        assert_eq!(
            result,
            Err(CubeError::LayerMaskLength {
                expected: 3,
                got: 2
            })
        );
        assert!(cube.is_super_solved());
        assert_eq!(cube.move_count(), 0);
        assert!(cube.history().is_empty());
    }

    #[test]
    fn test_cubie_out_of_bounds() {
        let cube = Cube::new(3).unwrap();
        assert!(cube.cubie(2, 2, 2).is_ok());
        assert_eq!(
            cube.cubie(0, 3, 0),
            Err(CubeError::OutOfBounds {
                i: 0,
                j: 3,
                k: 0,
                size: 3
            })
        );
    }

    #[test]
    fn test_undo_restores_and_redo_reapplies() {
        let mut cube = scrambled(4, 7);
        let before = cube.cubies().to_vec();

        cube.twist(Axis::Z, mask(&[false, true, true, false]), Direction::Clockwise)
            .unwrap();
        let after = cube.cubies().to_vec();
        assert_ne!(before, after);

        assert!(cube.undo());
        assert_eq!(cube.cubies(), before.as_slice());
        assert_eq!(cube.move_count(), 0);

        assert!(cube.redo());
        assert_eq!(cube.cubies(), after.as_slice());
        assert_eq!(cube.move_count(), 1);
    }

    #[test]
    fn test_undo_and_redo_at_ends_are_noops() {
        let mut cube = Cube::new(3).unwrap();
        assert!(!cube.undo());
        assert!(!cube.redo());
        assert!(cube.is_super_solved());

        cube.twist(Axis::Y, mask(&[false, false, true]), Direction::Clockwise)
            .unwrap();
        assert!(!cube.redo());
        assert_eq!(cube.move_count(), 1);
    }

    #[test]
    fn test_history_bound() {
        let mut cube = Cube::new(3).unwrap();
        for i in 0..DEFAULT_HISTORY_CAPACITY + 5 {
            let axis = Axis::ALL[i % 3];
            cube.twist(axis, mask(&[true, false, false]), Direction::Clockwise)
                .unwrap();
        }

        let mut undone = 0;
        while cube.undo() {
            undone += 1;
        }
        assert_eq!(undone, DEFAULT_HISTORY_CAPACITY);
        // the counter keeps the twists that fell out of history
        assert_eq!(cube.move_count(), 5);
    }

    #[test]
    fn test_new_twist_after_undo_discards_redo() {
        let mut cube = Cube::new(3).unwrap();
        let outer = mask(&[true, false, false]);
        cube.twist(Axis::X, outer, Direction::Clockwise).unwrap();
        cube.twist(Axis::Y, outer, Direction::Clockwise).unwrap();
        assert!(cube.undo());
        assert!(cube.can_redo());

        cube.twist(Axis::Z, outer, Direction::CounterClockwise).unwrap();
        let state = cube.cubies().to_vec();
        assert!(!cube.redo());
        assert_eq!(cube.cubies(), state.as_slice());
        assert_eq!(cube.history().len(), 2);
    }

    #[test]
    fn test_orientation_invariant_after_scramble() {
        for size in [2, 3, 5] {
            let cube = scrambled(size, 42);
            assert!(cube.cubies().iter().all(Cubie::is_proper_rotation));
        }
    }

    #[test]
    fn test_whole_rotation_is_solved_neutral() {
        for axis in Axis::ALL {
            for direction in [Direction::CounterClockwise, Direction::Clockwise] {
                let mut cube = Cube::new(3).unwrap();
                cube.rotate_whole(axis, direction);
                assert!(cube.is_solved());
                assert!(cube.is_center_solved());
                assert!(cube.is_super_solved());
                assert_eq!(cube.move_count(), 0);
                assert!(cube.history().is_empty());
            }
        }
    }

    #[test]
    fn test_whole_rotation_matches_all_layer_twist() {
        let mut rotated = scrambled(4, 11);
        let mut twisted = rotated.clone();

        rotated.rotate_whole(Axis::Y, Direction::Clockwise);
        twisted
            .twist_unrecorded(Axis::Y, LayerMask::all(4).unwrap(), Direction::Clockwise)
            .unwrap();
        assert_eq!(rotated.cubies(), twisted.cubies());
        assert_ne!(rotated.orientation(), twisted.orientation());
    }

    #[test]
    fn test_solved_after_rotating_and_twisting_back() {
        let mut cube = Cube::new(3).unwrap();
        cube.rotate_whole(Axis::X, Direction::Clockwise);
        cube.rotate_whole(Axis::Z, Direction::CounterClockwise);
        let layers = mask(&[false, false, true]);
        cube.twist(Axis::Y, layers, Direction::Clockwise).unwrap();
        assert!(!cube.is_solved());
        cube.twist(Axis::Y, layers, Direction::CounterClockwise).unwrap();
        assert!(cube.is_solved());
        assert!(cube.is_super_solved());
    }

    #[test]
    fn test_middle_slice_breaks_every_check() {
        let mut cube = Cube::new(3).unwrap();
        let middle = mask(&[false, true, false]);
        cube.twist(Axis::X, middle, Direction::Clockwise).unwrap();
        assert!(!cube.is_solved());
        assert!(!cube.is_center_solved());
        assert!(!cube.is_super_solved());
    }

    #[test]
    fn test_inner_twist_on_4_cube_moves_centers() {
        let mut cube = Cube::new(4).unwrap();
        let inner = mask(&[false, true, false, false]);
        cube.twist(Axis::Z, inner, Direction::Clockwise).unwrap();
        assert!(!cube.is_center_solved());
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_resolve_face_tracks_orientation() {
        let mut cube = Cube::new(3).unwrap();
        for face in Face::ALL {
            assert_eq!(cube.resolve_face(face), face.axis_sign());
        }

        // face names resolve through the transpose of the orientation
        cube.rotate_whole(Axis::X, Direction::CounterClockwise);
        assert_eq!(cube.resolve_face(Face::Right), (Axis::X, Sign::Positive));
        assert_eq!(cube.resolve_face(Face::Up), (Axis::Z, Sign::Negative));
        assert_eq!(cube.resolve_face(Face::Front), (Axis::Y, Sign::Positive));
    }

    #[test]
    fn test_get_face_per_cubie() {
        let mut cube = Cube::new(3).unwrap();
        cube.twist(Axis::Y, mask(&[true, false, false]), Direction::CounterClockwise)
            .unwrap();
        // a positive turn about y brings the left stickers of the up layer
        // round to the front
        let cubie = *cube.cubie(1, 0, 2).unwrap();
        assert_eq!(cube.get_face(Face::Front, &cubie), Face::Left);
        assert_eq!(cube.get_face(Face::Up, &cubie), Face::Up);
        let untouched = *cube.cubie(1, 2, 2).unwrap();
        assert_eq!(cube.get_face(Face::Front, &untouched), Face::Front);
    }

    #[test]
    fn test_relative_twist_flips_for_negative_side() {
        let layers = mask(&[true, true, false]);

        let mut relative = Cube::new(3).unwrap();
        relative
            .twist_relative_to_face(Face::Left, layers, Direction::CounterClockwise)
            .unwrap();

        let mut raw = Cube::new(3).unwrap();
        raw.twist(Axis::X, layers.reversed(), Direction::Clockwise)
            .unwrap();

        assert_eq!(relative.cubies(), raw.cubies());
        assert_eq!(relative.history().iter().next(), raw.history().iter().next());
    }

    #[test]
    fn test_relative_twist_after_inverting_orientation() {
        let layers = mask(&[true, false, false]);

        // half turn about the front axis swaps left and right
        let mut relative = Cube::new(3).unwrap();
        relative.rotate_whole_relative_to_face(Face::Front, Direction::Clockwise);
        relative.rotate_whole_relative_to_face(Face::Front, Direction::Clockwise);
        assert_eq!(relative.resolve_face(Face::Left), (Axis::X, Sign::Positive));

        let mut raw = relative.clone();
        relative
            .twist_relative_to_face(Face::Left, layers, Direction::CounterClockwise)
            .unwrap();
        raw.twist(Axis::X, layers, Direction::CounterClockwise).unwrap();
        assert_eq!(relative.cubies(), raw.cubies());

        // on an unrotated cube the same call flips both direction and layers
        let mut plain = Cube::new(3).unwrap();
        let mut plain_raw = plain.clone();
        plain
            .twist_relative_to_face(Face::Left, layers, Direction::CounterClockwise)
            .unwrap();
        plain_raw
            .twist(Axis::X, layers.reversed(), Direction::Clockwise)
            .unwrap();
        assert_eq!(plain.cubies(), plain_raw.cubies());
    }

    #[test]
    fn test_rotate_whole_relative_to_negative_face() {
        let mut from_back = Cube::new(3).unwrap();
        let mut from_front = Cube::new(3).unwrap();
        from_back.rotate_whole_relative_to_face(Face::Back, Direction::Clockwise);
        from_front.rotate_whole_relative_to_face(Face::Front, Direction::CounterClockwise);
        assert_eq!(from_back.cubies(), from_front.cubies());
        assert_eq!(from_back.orientation(), from_front.orientation());
    }

    #[test]
    fn test_scramble_clears_history_and_is_not_undoable() {
        let mut cube = Cube::new(3).unwrap();
        cube.twist(Axis::X, mask(&[true, false, false]), Direction::Clockwise)
            .unwrap();
        let twists = cube
            .scramble_with_rng(&mut ChaCha8Rng::seed_from_u64(1), 27)
            .unwrap();
        assert_eq!(twists.len(), 27);
        assert!(cube.history().is_empty());
        assert_eq!(cube.move_count(), 1);

        let state = cube.cubies().to_vec();
        for _ in 0..27 {
            assert!(!cube.undo());
        }
        assert_eq!(cube.cubies(), state.as_slice());
    }

    #[test]
    fn test_scramble_twists_replayed_backwards_restore_cube() {
        let mut cube = Cube::new(3).unwrap();
        let twists = cube
            .scramble_with_rng(&mut ChaCha8Rng::seed_from_u64(27), 27)
            .unwrap();
        assert!(!cube.is_super_solved());

        for twist in twists.iter().rev() {
            let inverse = twist.inverse();
            cube.twist_unrecorded(inverse.axis, inverse.layers, inverse.direction)
                .unwrap();
        }
        assert!(cube.is_super_solved());
        assert_eq!(cube.cubies(), Cube::new(3).unwrap().cubies());
        assert_eq!(cube.move_count(), 0);
        assert!(cube.history().is_empty());
    }

    #[test]
    fn test_scramble_masks_are_partial() {
        let mut cube = Cube::new(2).unwrap();
        let twists = cube
            .scramble_with_rng(&mut ChaCha8Rng::seed_from_u64(5), 200)
            .unwrap();
        for twist in twists {
            assert!(!twist.layers.is_none());
            assert!(!twist.layers.is_all());
            assert_eq!(twist.layers.layer_count(), 2);
        }
    }

    #[test]
    fn test_scramble_zero_only_resets_history() {
        let mut cube = Cube::new(3).unwrap();
        cube.twist(Axis::X, mask(&[true, false, false]), Direction::Clockwise)
            .unwrap();
        let state = cube.cubies().to_vec();
        assert!(cube.scramble(0).unwrap().is_empty());
        assert!(cube.history().is_empty());
        assert_eq!(cube.cubies(), state.as_slice());
    }

    #[test]
    fn test_seeded_scrambles_are_reproducible() {
        let a = scrambled(5, 99);
        let b = scrambled(5, 99);
        assert_eq!(a.cubies(), b.cubies());
    }

    #[test]
    fn test_facelets_on_fresh_and_twisted_cube() {
        let mut cube = Cube::new(3).unwrap();
        for face in Face::ALL {
            assert_eq!(cube.facelets(face), vec![face; 9]);
        }

        cube.twist_relative_to_face(Face::Right, mask(&[true, false, false]), Direction::Clockwise)
            .unwrap();
        // turning right clockwise lifts a column of front stickers onto up
        assert_eq!(cube.facelets(Face::Right), vec![Face::Right; 9]);
        let up = cube.facelets(Face::Up);
        assert_eq!(up.iter().filter(|&&f| f == Face::Front).count(), 3);
        assert_eq!(up.iter().filter(|&&f| f == Face::Up).count(), 6);
    }

    #[test]
    fn test_facelets_follow_whole_rotation() {
        let mut cube = Cube::new(3).unwrap();
        cube.twist_relative_to_face(Face::Right, mask(&[true, false, false]), Direction::Clockwise)
            .unwrap();
        cube.twist_relative_to_face(Face::Up, mask(&[true, false, false]), Direction::Clockwise)
            .unwrap();
        let before = cube.clone();
        cube.rotate_whole(Axis::X, Direction::CounterClockwise);

        for face in Face::ALL {
            let (axis, sign) = cube.resolve_face(face);
            let layer = if sign == Sign::Positive { 0 } else { 2 };
            let outward = Face::from_axis_sign(axis, sign);

            // each sticker is the one facing out of that physical layer
            let expected: Vec<Face> = cube
                .grid
                .slice_indices(axis, layer)
                .map(|idx| {
                    let (a, s) = cube.grid.cells()[idx].resolve(outward.vector());
                    Face::from_axis_sign(a, s)
                })
                .collect();
            assert_eq!(cube.facelets(face), expected, "{face}");

            // the same stickers faced the pre-rotation side that turned onto
            // this one
            let rotation = rotation_matrix(Axis::X, Direction::CounterClockwise);
            let source = mul_vec(&transpose(&rotation), outward.vector());
            let (source_axis, source_sign) = axis_sign_of(source).unwrap();
            let source_face = Face::from_axis_sign(source_axis, source_sign);
            let mut now = cube.facelets(face);
            let mut then = before.facelets(source_face);
            now.sort();
            then.sort();
            assert_eq!(now, then, "{face} from {source_face}");
        }
    }

    #[test]
    fn test_reset_and_resize() {
        let mut cube = scrambled(3, 8);
        cube.twist(Axis::X, mask(&[true, false, false]), Direction::Clockwise)
            .unwrap();
        cube.rotate_whole(Axis::Y, Direction::Clockwise);

        cube.reset();
        assert!(cube.is_super_solved());
        assert_eq!(cube.orientation(), &Cubie::new());
        assert_eq!(cube.move_count(), 0);
        assert!(!cube.can_undo());

        cube.resize(5).unwrap();
        assert_eq!(cube.size(), 5);
        assert_eq!(cube.cubies().len(), 125);
        assert_eq!(cube.resize(1), Err(CubeError::InvalidSize(1)));
        assert_eq!(cube.size(), 5);
    }
}
