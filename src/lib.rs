//! # matvec
//!
//! Fixed-size vector and matrix value types, no-std compatible. Two
//! const-generic containers plus the free operations that make them
//! behave like first-class mathematical values: element-wise operator
//! algebra, inner and cross products, shape/type conversions, and
//! comma-separated text I/O.
//!
//! ## Quick start
//!
//! ```
//! use matvec::{cross, dot, Matrix, Vector};
//!
//! let a = Matrix::new([
//!     [1.0_f64, 2.0],
//!     [3.0, 4.0],
//! ]);
//! let v = Vector::from_array([1.0, 1.0]);
//!
//! // The operator algebra is element-wise; `dot` is the product.
//! assert_eq!(a + a, a * 2.0);
//! assert_eq!(dot(&a, &v), Vector::from_array([3.0, 7.0]));
//!
//! let x = Vector::from_array([1.0, 0.0, 0.0]);
//! let y = Vector::from_array([0.0, 1.0]);
//! assert_eq!(cross(&x, &y).unwrap(), Vector::from_array([0.0, 0.0, 1.0]));
//! ```
//!
//! ## Modules
//!
//! - [`vector`](Vector) / [`matrix`](Matrix) — Stack-allocated
//!   `Vector<T, N>` and `Matrix<T, M, N>` with const-generic shapes.
//!   Matrix storage is column-major (`k = i + j * M`), the order used
//!   by pair access, by `dot`, and by text I/O. Default construction
//!   zero-fills; values are tightly packed and plain `Copy`.
//!
//! - [`products`] — The [`Dot`] trait and [`dot`] free function in four
//!   shape arities, and the [`cross`] product accepting operands of
//!   length 2, 3, or 4 (implicit R³ embedding/truncation).
//!
//! - [`io`] — `Display`-based writing as a `", "`-separated list and a
//!   whitespace/comma-tolerant streaming reader with failure-atomic
//!   rollback (`std` only).
//!
//! - [`aliases`] — `Vector2/3/4`, `Matrix2/3/4`, and the symbolic index
//!   constants `X Y Z W` / `R G B A`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all container elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by norms
//!   - [`ParseScalar`] — readable elements with a quiet-NaN failure sentinel
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Streaming text reader (`std::io`). Hardware FPU via system libm |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod aliases;
pub mod io;
pub mod matrix;
pub mod products;
pub mod traits;
pub mod vector;

pub use aliases::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
pub use aliases::{A, B, G, R, W, X, Y, Z};
pub use matrix::{eye, Matrix};
pub use products::{cross, dot, Dot, ShapeError};
pub use traits::{FloatScalar, ParseScalar, Scalar};
pub use vector::Vector;

#[cfg(feature = "std")]
pub use io::ReadError;
