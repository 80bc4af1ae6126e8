//! Pre-defined type aliases for common shapes, and symbolic index
//! constants for coordinate access.

use crate::{Matrix, Vector};

// ── Vector aliases ─────────────────────────────────────────────────

/// 2-element vector (a point on a plane in R³).
pub type Vector2<T> = Vector<T, 2>;
/// 3-element vector (a point in R³).
pub type Vector3<T> = Vector<T, 3>;
/// 4-element vector (an R³ point in homogeneous coordinates).
pub type Vector4<T> = Vector<T, 4>;

// ── Square matrix aliases ──────────────────────────────────────────

/// 2×2 matrix (a transformation on a plane in R³).
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix (an R³ transformation).
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix (an R³ transformation in homogeneous coordinates).
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ── Symbolic index constants ───────────────────────────────────────
// Plain zero-based indices, usable wherever an index is accepted:
// Cartesian names with `W` as the homogeneous fourth coordinate, and
// the RGBA names common in rendering pipelines.

/// First Cartesian coordinate.
pub const X: usize = 0;
/// Second Cartesian coordinate.
pub const Y: usize = 1;
/// Third Cartesian coordinate.
pub const Z: usize = 2;
/// Homogeneous fourth coordinate.
pub const W: usize = 3;

/// Red channel.
pub const R: usize = 0;
/// Green channel.
pub const G: usize = 1;
/// Blue channel.
pub const B: usize = 2;
/// Alpha channel.
pub const A: usize = 3;
