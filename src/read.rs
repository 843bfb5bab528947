use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{uvarint, zigzag_decode, DecodeError};

/// Decodes a `u64` from the end of `buf`, returning the value and the number
/// of trailing bytes it occupied.
///
/// # Examples
/// ```
/// use rvarint::{read_uvarint, DecodeError};
///
/// assert_eq!(read_uvarint(b"abc\x02\x80"), Ok((256, 2)));
/// assert_eq!(read_uvarint(&[0x80]), Err(DecodeError::TooSmall));
/// ```
#[inline]
pub fn read_uvarint(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    let (x, n) = uvarint(buf);
    match DecodeError::from_count(n) {
        Some(e) => Err(e),
        None => Ok((x, n as usize)),
    }
}

/// Decodes a zig-zag encoded `i64` from the end of `buf`, returning the value
/// and the number of trailing bytes it occupied.
#[inline]
pub fn read_varint(buf: &[u8]) -> Result<(i64, usize), DecodeError> {
    read_uvarint(buf).map(|(ux, n)| (zigzag_decode(ux), n))
}

/// Removes a `u64` from the end of `buf`.
///
/// On error `buf` is left unchanged.
///
/// Bytes written before the first value are not distinguishable from encoded
/// values, so callers popping down to a known prefix must count the values
/// they pop.
///
/// # Examples
/// ```
/// let mut buf = Vec::new();
/// rvarint::append_uvarint(&mut buf, 1);
/// rvarint::append_uvarint(&mut buf, 300);
///
/// assert_eq!(rvarint::pop_uvarint(&mut buf), Ok(300));
/// assert_eq!(rvarint::pop_uvarint(&mut buf), Ok(1));
/// assert!(buf.is_empty());
/// ```
pub fn pop_uvarint(buf: &mut Vec<u8>) -> Result<u64, DecodeError> {
    let (x, n) = read_uvarint(buf)?;
    buf.truncate(buf.len() - n);
    Ok(x)
}

/// Removes a zig-zag encoded `i64` from the end of `buf`.
///
/// On error `buf` is left unchanged.
pub fn pop_varint(buf: &mut Vec<u8>) -> Result<i64, DecodeError> {
    pop_uvarint(buf).map(zigzag_decode)
}

/// Iterates the `u64`s packed in `buf`, last written first.
///
/// ```
/// let mut buf = Vec::new();
/// for x in [7u64, 1000, 3] {
///     rvarint::append_uvarint(&mut buf, x);
/// }
/// let values: Result<Vec<u64>, _> = rvarint::uvarints(&buf).collect();
/// assert_eq!(values, Ok(vec![3, 1000, 7]));
/// ```
#[inline]
pub fn uvarints(buf: &[u8]) -> Uvarints<'_> {
    Uvarints {
        remaining: buf,
        failed: false,
    }
}

/// Iterates the zig-zag encoded `i64`s packed in `buf`, last written first.
#[inline]
pub fn varints(buf: &[u8]) -> Varints<'_> {
    Varints {
        inner: uvarints(buf),
    }
}

/// Iterator returned by [`uvarints`].
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Uvarints<'a> {
    remaining: &'a [u8],
    failed: bool,
}

impl<'a> Uvarints<'a> {
    /// The bytes not yet consumed. After an error these are the bytes that
    /// could not be decoded.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }
}

impl Iterator for Uvarints<'_> {
    type Item = Result<u64, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining.is_empty() {
            return None;
        }
        match read_uvarint(self.remaining) {
            Ok((x, n)) => {
                self.remaining = &self.remaining[..self.remaining.len() - n];
                Some(Ok(x))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.failed || self.remaining.is_empty() {
            true => (0, Some(0)),
            false => (1, Some(self.remaining.len())),
        }
    }
}

impl FusedIterator for Uvarints<'_> {}

/// Iterator returned by [`varints`].
#[derive(Debug, Clone)]
pub struct Varints<'a> {
    inner: Uvarints<'a>,
}

impl<'a> Varints<'a> {
    /// The bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.inner.remaining()
    }
}

impl Iterator for Varints<'_> {
    type Item = Result<i64, DecodeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|r| r.map(zigzag_decode))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Varints<'_> {}
