use core::fmt::Debug;
use core::str::FromStr;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as container elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point container elements.
///
/// Required by operations that need `sqrt`, `abs`, or NaN
/// (norms, normalization).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Trait for elements that can be recovered from their text form.
///
/// `quiet_nan` is the value written into every element of a container
/// whose formatted read fails: quiet NaN for float types. Integer types
/// have no NaN representation and fall back to zero, so only float
/// elements carry the full failure contract.
pub trait ParseScalar: Scalar + FromStr {
    /// Failure sentinel: quiet NaN for floats, zero for integers.
    fn quiet_nan() -> Self;
}

macro_rules! impl_parse_scalar_float {
    ($($t:ty),*) => {
        $(
            impl ParseScalar for $t {
                #[inline]
                fn quiet_nan() -> $t {
                    <$t>::NAN
                }
            }
        )*
    };
}

impl_parse_scalar_float!(f32, f64);

macro_rules! impl_parse_scalar_int {
    ($($t:ty),*) => {
        $(
            impl ParseScalar for $t {
                #[inline]
                fn quiet_nan() -> $t {
                    0
                }
            }
        )*
    };
}

impl_parse_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
