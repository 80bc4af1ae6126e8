//! Comma-separated text reading and writing.
//!
//! Containers format as a flat list of their elements in linear order
//! (column-major for matrices), separated by `", "`, with no framing
//! brackets and no trailing separator. The [`core::fmt::Display`]
//! impls are the writers, so `format!` and `write!` both produce the
//! canonical form.
//!
//! Reading is the reverse: a single streaming pass that accepts any
//! amount of whitespace and at most one optional comma between
//! elements. A failed read is atomic: the stream is sought back to the
//! position it held when the read began and every element of the
//! destination is overwritten with [`ParseScalar::quiet_nan`], so the
//! stream stays re-readable and the destination never holds a partial
//! result. Reading requires the `std` feature (the writer is core-only).
//!
//! [`ParseScalar::quiet_nan`]: crate::traits::ParseScalar::quiet_nan

use core::fmt;

use crate::{Matrix, Vector};

#[cfg(feature = "std")]
use std::io::{self, BufRead, Seek, SeekFrom};

#[cfg(feature = "std")]
use crate::traits::ParseScalar;

// ── Writer ──────────────────────────────────────────────────────────

fn write_elements<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    for (k, x) in elements.iter().enumerate() {
        if k > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{x}")?;
    }
    Ok(())
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, &self.data)
    }
}

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.as_slice())
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display, const N: usize> Vector<T, N> {
    /// Write the formatted element list to a byte stream.
    pub fn write_into<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Write the formatted element list to a byte stream in
    /// column-major order.
    pub fn write_into<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }
}

// ── Reader ──────────────────────────────────────────────────────────

/// Error from a formatted read.
///
/// Either way the rollback protocol has already run by the time the
/// caller sees this: the stream is back at its pre-read position and
/// the destination is filled with the quiet-NaN sentinel.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum ReadError {
    /// The element at this position could not be obtained from the
    /// stream (end of data or an unparseable token).
    Parse {
        /// Zero-based linear position of the failed element.
        index: usize,
    },
    /// The underlying stream failed.
    Io(io::Error),
}

#[cfg(feature = "std")]
impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Parse { index } => {
                write!(f, "could not parse element {index} from the stream")
            }
            ReadError::Io(e) => write!(f, "stream failure while reading: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Parse { .. } => None,
            ReadError::Io(e) => Some(e),
        }
    }
}

#[cfg(feature = "std")]
impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Consume a run of whitespace, leaving the first non-whitespace byte
/// (if any) in the stream.
#[cfg(feature = "std")]
fn skip_whitespace<R: BufRead>(r: &mut R) -> io::Result<()> {
    loop {
        let (n, done) = {
            let buf = r.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            let n = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            (n, n < buf.len())
        };
        r.consume(n);
        if done {
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
fn peek<R: BufRead>(r: &mut R) -> io::Result<Option<u8>> {
    Ok(r.fill_buf()?.first().copied())
}

/// Read one token: bytes up to the next whitespace, comma, or end of
/// data. The terminating byte is left in the stream.
#[cfg(feature = "std")]
fn read_token<R: BufRead>(r: &mut R) -> io::Result<Vec<u8>> {
    let mut token = Vec::new();
    loop {
        let (n, done) = {
            let buf = r.fill_buf()?;
            if buf.is_empty() {
                return Ok(token);
            }
            let n = buf
                .iter()
                .take_while(|&&b| !b.is_ascii_whitespace() && b != b',')
                .count();
            token.extend_from_slice(&buf[..n]);
            (n, n < buf.len())
        };
        r.consume(n);
        if done {
            return Ok(token);
        }
    }
}

#[cfg(feature = "std")]
fn read_element<T: ParseScalar, R: BufRead>(r: &mut R, index: usize) -> Result<T, ReadError> {
    let token = read_token(r)?;
    let text = core::str::from_utf8(&token).map_err(|_| ReadError::Parse { index })?;
    if text.is_empty() {
        return Err(ReadError::Parse { index });
    }
    text.parse().map_err(|_| ReadError::Parse { index })
}

/// One pass of the separator state machine: element 0, then for each
/// further element a run of whitespace, at most one comma, more
/// whitespace, and the element itself.
#[cfg(feature = "std")]
fn read_elements<T: ParseScalar, R: BufRead>(r: &mut R, dst: &mut [T]) -> Result<(), ReadError> {
    for (i, slot) in dst.iter_mut().enumerate() {
        if i > 0 {
            skip_whitespace(r)?;
            if peek(r)? == Some(b',') {
                r.consume(1);
            }
        }
        skip_whitespace(r)?;
        *slot = read_element(r, i)?;
    }
    Ok(())
}

#[cfg(feature = "std")]
fn read_into<T: ParseScalar, R: BufRead + Seek>(
    r: &mut R,
    dst: &mut [T],
) -> Result<(), ReadError> {
    if dst.is_empty() {
        return Ok(());
    }
    let start = r.stream_position()?;
    match read_elements(r, dst) {
        Ok(()) => Ok(()),
        Err(e) => {
            for x in dst.iter_mut() {
                *x = T::quiet_nan();
            }
            r.seek(SeekFrom::Start(start))?;
            Err(e)
        }
    }
}

#[cfg(feature = "std")]
impl<T: ParseScalar, const N: usize> Vector<T, N> {
    /// Read `N` elements from a text stream.
    ///
    /// Elements may be separated by whitespace, a single comma, or
    /// both. On success the stream is left immediately after the last
    /// element; a trailing separator is not consumed. On failure the
    /// stream is sought back to its pre-read position and every element
    /// of `self` is set to the quiet-NaN sentinel.
    ///
    /// ```
    /// use std::io::Cursor;
    /// use matvec::Vector;
    ///
    /// let mut v = Vector::<f64, 3>::zeros();
    /// v.read_from(&mut Cursor::new("1.0, 2.0 3.0")).unwrap();
    /// assert_eq!(v, Vector::from_array([1.0, 2.0, 3.0]));
    /// ```
    pub fn read_from<R: BufRead + Seek>(&mut self, r: &mut R) -> Result<(), ReadError> {
        read_into(r, &mut self.data)
    }
}

#[cfg(feature = "std")]
impl<T: ParseScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Read `M * N` elements from a text stream in column-major order.
    ///
    /// Same separator tolerance and failure rollback as
    /// [`Vector::read_from`].
    pub fn read_from<R: BufRead + Seek>(&mut self, r: &mut R) -> Result<(), ReadError> {
        read_into(r, self.as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "std")]
    use std::io::Cursor;

    #[test]
    fn display_vector() {
        let v = Vector::from_array([1.5, -2.0, 3.0]);
        assert_eq!(format!("{v}"), "1.5, -2, 3");
    }

    #[test]
    fn display_matrix_column_major() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        // Column-major order: col0=[1,3], col1=[2,4]
        assert_eq!(format!("{m}"), "1, 3, 2, 4");
    }

    #[test]
    fn display_empty_containers() {
        assert_eq!(format!("{}", Vector::<f64, 0>::zeros()), "");
        assert_eq!(format!("{}", Matrix::<f64, 0, 3>::zeros()), "");
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_into_stream() {
        let v = Vector::from_array([1, 2, 3]);
        let mut out = Vec::new();
        v.write_into(&mut out).unwrap();
        assert_eq!(out, b"1, 2, 3");
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_plain_list() {
        let mut v = Vector::<f64, 3>::zeros();
        v.read_from(&mut Cursor::new("1.0, 2.0, 3.0")).unwrap();
        assert_eq!(v, Vector::from_array([1.0, 2.0, 3.0]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_separator_tolerance() {
        // Commas are optional; whitespace runs of any shape are fine.
        let cases = [
            "1 2 3 4 5 6",
            "1, 2 3 4 5 6",
            "1    2  ,       3,\t4,    5   6",
            "\n1\t,  \n2\n\n\n,\t\t\t\t3\n\n,\n\n4 5,\t\t\t6",
        ];
        for text in cases {
            let mut m = Matrix::<i32, 3, 2>::zeros();
            m.read_from(&mut Cursor::new(text))
                .unwrap_or_else(|e| panic!("{text:?}: {e}"));
            assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6], "input {text:?}");
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_float_matrix() {
        let mut m = Matrix::<f64, 2, 2>::zeros();
        m.read_from(&mut Cursor::new("1.5, 2.5, -3.0, 4e1")).unwrap();
        assert_eq!(m.as_slice(), &[1.5, 2.5, -3.0, 40.0]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_stops_after_last_element() {
        let mut cursor = Cursor::new("1 2 3 4");
        let mut v = Vector::<i32, 2>::zeros();
        v.read_from(&mut cursor).unwrap();
        assert_eq!(v, Vector::from_array([1, 2]));
        assert_eq!(cursor.stream_position().unwrap(), 3);

        // The rest of the stream is still readable.
        let mut w = Vector::<i32, 2>::zeros();
        w.read_from(&mut cursor).unwrap();
        assert_eq!(w, Vector::from_array([3, 4]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn trailing_separator_not_consumed() {
        let mut cursor = Cursor::new("1 2, ");
        let mut v = Vector::<i32, 2>::zeros();
        v.read_from(&mut cursor).unwrap();
        assert_eq!(v, Vector::from_array([1, 2]));
        assert_eq!(cursor.stream_position().unwrap(), 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_failure_rolls_back_and_fills_nan() {
        let mut cursor = Cursor::new("1.0, 2.0");
        let mut v = Vector::<f32, 4>::from_array([9.0, 9.0, 9.0, 9.0]);

        let err = v.read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, ReadError::Parse { index: 2 }));
        for i in 0..4 {
            assert!(v[i].is_nan(), "element {i} not NaN");
        }
        assert_eq!(cursor.stream_position().unwrap(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_failure_restores_mid_stream_position() {
        let mut cursor = Cursor::new("9.5 1.0, 2.0");
        let mut first = Vector::<f32, 1>::zeros();
        first.read_from(&mut cursor).unwrap();
        assert_eq!(first[0], 9.5);

        // Not enough data for four elements: fails, seeks back to
        // where this read began.
        let mut v = Vector::<f32, 4>::zeros();
        assert!(v.read_from(&mut cursor).is_err());
        assert_eq!(cursor.stream_position().unwrap(), 3);

        // The remaining two elements can still be read.
        let mut w = Vector::<f32, 2>::zeros();
        w.read_from(&mut cursor).unwrap();
        assert_eq!(w, Vector::from_array([1.0, 2.0]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_rejects_garbage_token() {
        let mut v = Vector::<f64, 2>::zeros();
        let err = v
            .read_from(&mut Cursor::new("1.0, pelican"))
            .unwrap_err();
        assert!(matches!(err, ReadError::Parse { index: 1 }));
        assert!(v[0].is_nan());
        assert!(v[1].is_nan());
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_rejects_double_comma() {
        // At most one comma may separate consecutive elements.
        let mut v = Vector::<f64, 2>::zeros();
        assert!(v.read_from(&mut Cursor::new("1.0,, 2.0")).is_err());
        assert!(v[0].is_nan());
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_failure_on_first_element() {
        let mut cursor = Cursor::new("oops");
        let mut v = Vector::<f64, 2>::zeros();
        let err = v.read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, ReadError::Parse { index: 0 }));
        assert_eq!(cursor.stream_position().unwrap(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_failure_on_last_element() {
        // A failure on the final element still rolls the whole read back.
        let mut cursor = Cursor::new("1.0 2.0 x");
        let mut v = Vector::<f32, 3>::zeros();
        assert!(v.read_from(&mut cursor).is_err());
        assert_eq!(cursor.stream_position().unwrap(), 0);
        assert!(v[0].is_nan());
        assert!(v[2].is_nan());
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_zero_length_is_a_no_op() {
        let mut cursor = Cursor::new("anything");
        let mut v = Vector::<f64, 0>::zeros();
        v.read_from(&mut cursor).unwrap();
        assert_eq!(cursor.stream_position().unwrap(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn roundtrip_matrix() {
        let m: Matrix<f64, 3, 4> = Matrix::from_fn(|i, j| (i as f64) - 2.5 * (j as f64));
        let text = format!("{m}");

        let mut back = Matrix::<f64, 3, 4>::zeros();
        back.read_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(back, m);
    }

    #[cfg(feature = "std")]
    #[test]
    fn roundtrip_integer_matrix() {
        let m: Matrix<i64, 4, 5> = Matrix::from_fn(|i, j| (i * 5 + j) as i64 - 9);
        let text = format!("{m}");

        let mut back = Matrix::<i64, 4, 5>::zeros();
        back.read_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(back, m);
    }
}
