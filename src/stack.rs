use alloc::vec::Vec;
use core::iter::FromIterator;

use crate::{
    append_uvarint, append_varint, pop_uvarint, pop_varint, read_uvarint, read_varint, uvarints,
    varints, DecodeError, Uvarints, Varints,
};

/// A byte buffer of packed reverse varints. Values are pushed onto and popped
/// off the tail, so the last value pushed is the first one popped.
///
/// Signed and unsigned values may be mixed freely, but must be popped with the
/// same signedness they were pushed with.
///
/// # Example
/// ```
/// use rvarint::Stack;
///
/// let mut stack = Stack::new();
/// stack.push_u64(300);
/// stack.push_i64(-3);
/// assert_eq!(stack.as_bytes(), &[0x02, 0xac, 0x05]);
///
/// assert_eq!(stack.pop_i64(), Ok(-3));
/// assert_eq!(stack.pop_u64(), Ok(300));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    bytes: Vec<u8>,
}

impl Stack {
    /// Creates an empty `Stack`.
    #[inline]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates an empty `Stack` with room for `capacity` bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `x` and returns the number of bytes it took.
    #[inline]
    pub fn push_u64(&mut self, x: u64) -> usize {
        append_uvarint(&mut self.bytes, x)
    }

    /// Pushes zig-zag encoded `x` and returns the number of bytes it took.
    #[inline]
    pub fn push_i64(&mut self, x: i64) -> usize {
        append_varint(&mut self.bytes, x)
    }

    /// Removes the last pushed value. On error the stack is left unchanged.
    #[inline]
    pub fn pop_u64(&mut self) -> Result<u64, DecodeError> {
        pop_uvarint(&mut self.bytes)
    }

    /// Removes the last pushed value as a signed integer. On error the stack
    /// is left unchanged.
    #[inline]
    pub fn pop_i64(&mut self) -> Result<i64, DecodeError> {
        pop_varint(&mut self.bytes)
    }

    /// Returns the last pushed value without removing it.
    #[inline]
    pub fn peek_u64(&self) -> Result<u64, DecodeError> {
        read_uvarint(&self.bytes).map(|(x, _)| x)
    }

    /// Returns the last pushed value as a signed integer without removing it.
    #[inline]
    pub fn peek_i64(&self) -> Result<i64, DecodeError> {
        read_varint(&self.bytes).map(|(x, _)| x)
    }

    /// Iterates the values from the most recently pushed to the first.
    #[inline]
    pub fn iter_u64(&self) -> Uvarints<'_> {
        uvarints(&self.bytes)
    }

    #[inline]
    pub fn iter_i64(&self) -> Varints<'_> {
        varints(&self.bytes)
    }

    /// The encoded bytes, oldest value first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the length of the encoded bytes, not the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear()
    }
}

impl From<Vec<u8>> for Stack {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<Stack> for Vec<u8> {
    fn from(stack: Stack) -> Self {
        stack.bytes
    }
}

impl AsRef<[u8]> for Stack {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Extend<u64> for Stack {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for x in iter {
            self.push_u64(x);
        }
    }
}

impl Extend<i64> for Stack {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for x in iter {
            self.push_i64(x);
        }
    }
}

impl FromIterator<u64> for Stack {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl FromIterator<i64> for Stack {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}
