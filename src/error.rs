use core::fmt;

/// Why a value could not be decoded from the end of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The buffer ends without a complete value.
    TooSmall,
    /// The value does not fit in 64 bits. `read` bytes were examined before
    /// giving up.
    Overflow { read: usize },
}

impl DecodeError {
    /// Interprets the byte count returned by [`uvarint`](crate::uvarint) or
    /// [`varint`](crate::varint). Returns `None` for a successful (positive)
    /// count.
    ///
    /// ```
    /// use rvarint::DecodeError;
    ///
    /// assert_eq!(DecodeError::from_count(2), None);
    /// assert_eq!(DecodeError::from_count(0), Some(DecodeError::TooSmall));
    /// assert_eq!(DecodeError::from_count(-11), Some(DecodeError::Overflow { read: 11 }));
    /// ```
    #[inline]
    pub const fn from_count(n: isize) -> Option<Self> {
        if n > 0 {
            None
        } else if n == 0 {
            Some(DecodeError::TooSmall)
        } else {
            Some(DecodeError::Overflow {
                read: n.unsigned_abs(),
            })
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TooSmall => f.write_str("buffer ends before a complete varint"),
            DecodeError::Overflow { read } => {
                write!(f, "varint overflows 64 bits after {} bytes", read)
            }
        }
    }
}

#[rustversion::since(1.81)]
impl core::error::Error for DecodeError {}
