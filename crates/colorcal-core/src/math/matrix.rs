//! 3x3 matrix and 3-vector primitives
//!
//! Used for RGB↔XYZ conversions and chromatic adaptation.
//! All operations use f64.

use std::ops::{Index, Mul};

/// A column 3-vector
pub type Vector3 = [f64; 3];

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::diagonal(1.0, 1.0, 1.0)
    }

    /// Create a diagonal matrix from three values
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Build a matrix whose columns are the given vectors
    #[inline]
    pub const fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self {
            m: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v, each output component being the dot product of a row with `v`.
    #[inline]
    pub fn multiply_vec(&self, v: Vector3) -> Vector3 {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::new([[0.0; 3]; 3]);
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Scale column `j` by `s[j]`, i.e. self × diag(s)
    #[inline]
    pub fn scale_columns(&self, s: Vector3) -> Self {
        self.multiply(&Self::diagonal(s[0], s[1], s[2]))
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Closed-form inverse via the adjugate and determinant
    ///
    /// There is no singularity check. A zero or near-zero determinant produces
    /// infinite or NaN entries, which then propagate through any product; callers
    /// must only invert well-conditioned matrices (primaries, cone responses).
    pub fn inverse(&self) -> Self {
        let inv_det = 1.0 / self.determinant();
        let m = &self.m;

        Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        }
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }

    /// Check if this matrix has only zero off-diagonal entries
    pub fn is_diagonal(&self) -> bool {
        (0..3).all(|i| (0..3).all(|j| i == j || self.m[i][j] == 0.0))
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.multiply_vec(rhs)
    }
}
