//! Orientation of a single unit cell.

use crate::geometry::{
    axis_sign_of, determinant, mul_vec, rotation_matrix, Axis, Direction, Face, Matrix, Sign,
    Vector,
};

/// The orientation of one cubie, tracked as an orthonormal frame.
///
/// `x`, `y` and `z` are where the cubie's own axes currently point in the
/// world. They start as the identity frame and are only ever changed by
/// quarter turns, so they stay a signed permutation of the basis vectors with
/// determinant +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    x: Vector,
    y: Vector,
    z: Vector,
}

impl Default for Cubie {
    fn default() -> Self {
        Self::new()
    }
}

impl Cubie {
    /// Creates a cubie in the identity orientation.
    pub const fn new() -> Self {
        Self {
            x: [1, 0, 0],
            y: [0, 1, 0],
            z: [0, 0, 1],
        }
    }

    pub fn x(&self) -> Vector {
        self.x
    }

    pub fn y(&self) -> Vector {
        self.y
    }

    pub fn z(&self) -> Vector {
        self.z
    }

    /// Returns where the cubie's local `axis` currently points.
    #[inline]
    pub fn axis_vector(&self, axis: Axis) -> Vector {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Applies a quarter turn about a world axis.
    pub fn rotate(&mut self, axis: Axis, direction: Direction) {
        self.compose_with(&rotation_matrix(axis, direction));
    }

    /// Left-multiplies every frame vector by `matrix`.
    ///
    /// `matrix` must be a signed permutation matrix with determinant +1.
    pub fn compose_with(&mut self, matrix: &Matrix) {
        self.x = mul_vec(matrix, self.x);
        self.y = mul_vec(matrix, self.y);
        self.z = mul_vec(matrix, self.z);
    }

    /// Returns the matrix whose columns are `x`, `y`, `z`, mapping local axes
    /// to world axes.
    pub fn as_matrix(&self) -> Matrix {
        let mut m = [[0; 3]; 3];
        for (row, m_row) in m.iter_mut().enumerate() {
            *m_row = [self.x[row], self.y[row], self.z[row]];
        }
        m
    }

    /// Returns the inverse orientation as a row-major 4x4 homogeneous
    /// transform with no translation.
    ///
    /// The upper 3x3 block is the transpose of [`Cubie::as_matrix`]; its rows
    /// are `x`, `y`, `z`.
    pub fn as_render_transform(&self) -> [[f32; 4]; 4] {
        let mut out = [[0.0; 4]; 4];
        for (row, v) in [self.x, self.y, self.z].iter().enumerate() {
            for col in 0..3 {
                out[row][col] = f32::from(v[col]);
            }
        }
        out[3][3] = 1.0;
        out
    }

    /// Finds which local axis (and which end of it) currently points along
    /// the world direction `v`.
    ///
    /// Computes `as_matrix()ᵀ · v`; for a signed basis vector `v` the result
    /// has exactly one nonzero component. Debug builds panic if `v` is not
    /// a signed basis vector.
    pub fn resolve(&self, v: Vector) -> (Axis, Sign) {
        let local = [dot(self.x, v), dot(self.y, v), dot(self.z, v)];
        let resolved = axis_sign_of(local);
        debug_assert!(
            resolved.is_some(),
            "{v:?} does not resolve to a single axis of {self:?}"
        );
        // only reachable for a non-basis `v`, which no caller passes
        resolved.unwrap_or((Axis::X, Sign::Positive))
    }

    /// Finds which local axis and end currently faces the world side `face`.
    pub fn resolve_face(&self, face: Face) -> (Axis, Sign) {
        self.resolve(face.vector())
    }

    /// Returns which original face of this cubie is showing toward `face`.
    pub fn face_showing(&self, face: Face) -> Face {
        let (axis, sign) = self.resolve_face(face);
        Face::from_axis_sign(axis, sign)
    }

    /// Returns the local axis that currently lies along world axis `world`.
    pub fn local_axis_along(&self, world: Axis) -> Axis {
        self.resolve(world.unit()).0
    }

    /// Checks that the frame is a signed permutation of basis vectors with
    /// determinant +1.
    pub fn is_proper_rotation(&self) -> bool {
        [self.x, self.y, self.z]
            .into_iter()
            .all(|v| axis_sign_of(v).is_some())
            && determinant(&self.as_matrix()) == 1
    }
}

#[inline]
fn dot(a: Vector, b: Vector) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
