use alloc::vec::Vec;

use crate::MAX_VARINT_LEN64;

/// Returns the number of bytes [`put_uvarint`] writes for `x`.
///
/// ```
/// assert_eq!(rvarint::uvarint_len(0), 1);
/// assert_eq!(rvarint::uvarint_len(127), 1);
/// assert_eq!(rvarint::uvarint_len(128), 2);
/// assert_eq!(rvarint::uvarint_len(u64::MAX), rvarint::MAX_VARINT_LEN64);
/// ```
#[inline]
pub const fn uvarint_len(x: u64) -> usize {
    // `| 1` gives zero a bit length of one.
    let bits = 64 - (x | 1).leading_zeros() as usize;
    (bits - 1) / 7 + 1
}

/// Returns the number of bytes [`put_varint`] writes for `x`.
#[inline]
pub const fn varint_len(x: i64) -> usize {
    uvarint_len(zigzag_encode(x))
}

/// Maps a signed integer onto an unsigned one so that values of small
/// magnitude stay small: `0, -1, 1, -2, 2, ...` become `0, 1, 2, 3, 4, ...`.
#[inline]
pub const fn zigzag_encode(x: i64) -> u64 {
    ((x << 1) ^ (x >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub const fn zigzag_decode(ux: u64) -> i64 {
    let x = (ux >> 1) as i64;
    if ux & 1 != 0 {
        !x
    } else {
        x
    }
}

/// Encodes `x` at the front of `buf` and returns the number of bytes written.
///
/// The most significant 7-bit group is written first with its high bit clear,
/// followed by the lower groups with their high bit set, so that the value can
/// later be decoded from the *end* of the written region by [`uvarint`].
///
/// # Panics
/// Panics if `buf` is shorter than [`uvarint_len`]`(x)`. A buffer of
/// [`MAX_VARINT_LEN64`] bytes always suffices.
///
/// # Examples
/// ```
/// let mut buf = [0u8; rvarint::MAX_VARINT_LEN64];
/// let n = rvarint::put_uvarint(&mut buf, 256);
/// assert_eq!(&buf[..n], &[0x02, 0x80]);
/// ```
#[rustversion::attr(since(1.83), const)]
#[inline]
pub fn put_uvarint(buf: &mut [u8], mut x: u64) -> usize {
    let n = uvarint_len(x);
    // Fill from the least significant group backwards; the first store hits
    // the highest index, so a short buffer faults before anything is written.
    let mut i = n - 1;
    while x >= 0x80 {
        buf[i] = x as u8 | 0x80;
        x >>= 7;
        i -= 1;
    }
    buf[i] = x as u8;
    n
}

/// Zig-zag encodes `x` at the front of `buf` and returns the number of bytes
/// written.
///
/// # Panics
/// Panics if `buf` is shorter than [`varint_len`]`(x)`.
///
/// # Examples
/// ```
/// let mut buf = [0u8; rvarint::MAX_VARINT_LEN64];
/// let n = rvarint::put_varint(&mut buf, -65);
/// assert_eq!(&buf[..n], &[0x01, 0x81]);
/// ```
#[rustversion::attr(since(1.83), const)]
#[inline]
pub fn put_varint(buf: &mut [u8], x: i64) -> usize {
    put_uvarint(buf, zigzag_encode(x))
}

/// Appends the encoding of `x` to the tail of `buf` and returns the number of
/// bytes appended.
#[inline]
pub fn append_uvarint(buf: &mut Vec<u8>, x: u64) -> usize {
    let mut scratch = [0u8; MAX_VARINT_LEN64];
    let n = put_uvarint(&mut scratch, x);
    buf.extend_from_slice(&scratch[..n]);
    n
}

/// Appends the zig-zag encoding of `x` to the tail of `buf` and returns the
/// number of bytes appended.
#[inline]
pub fn append_varint(buf: &mut Vec<u8>, x: i64) -> usize {
    append_uvarint(buf, zigzag_encode(x))
}

/// Decodes a `u64` from the end of `buf`, returning the value and the number
/// of bytes read.
///
/// On error the value is 0 and the count is not positive:
/// - `n == 0`: `buf` ends without a complete value (too small)
/// - `n < 0`: the value does not fit in 64 bits (overflow), and `-n` bytes
///   were examined
///
/// On success the value can be dropped with `buf.truncate(buf.len() - n)`.
///
/// # Examples
/// ```
/// assert_eq!(rvarint::uvarint(&[0x01, 0xff]), (255, 2));
/// assert_eq!(rvarint::uvarint(&[0xff]), (0, 0));
/// ```
pub fn uvarint(buf: &[u8]) -> (u64, isize) {
    let mut x = 0u64;
    let mut s = 0u32;
    for (read, &b) in (1..).zip(buf.iter().rev()) {
        if read > MAX_VARINT_LEN64 {
            return (0, -(read as isize));
        }
        if b < 0x80 {
            // The 10th group only has room for the 64th bit.
            if read == MAX_VARINT_LEN64 && b > 1 {
                return (0, -(read as isize));
            }
            return (x | (b as u64) << s, read as isize);
        }
        x |= ((b & 0x7f) as u64) << s;
        s += 7;
    }
    (0, 0)
}

/// Decodes a zig-zag encoded `i64` from the end of `buf`.
///
/// The count has the same meaning as for [`uvarint`]; the value must not be
/// trusted unless the count is positive.
pub fn varint(buf: &[u8]) -> (i64, isize) {
    let (ux, n) = uvarint(buf);
    (zigzag_decode(ux), n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_VARINT_LEN16, MAX_VARINT_LEN32};
    use alloc::vec;

    const SAMPLES: [u64; 16] = [
        0,
        1,
        42,
        59243,
        5,
        8,
        7,
        63,
        64,
        5892389523,
        (1 << 56) - 1,
        5892389523582389523,
        1 << 56,
        1 << 63,
        u64::MAX - 1,
        u64::MAX,
    ];

    fn encoded(x: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        append_uvarint(&mut buf, x);
        buf
    }

    fn encoded_signed(x: i64) -> Vec<u8> {
        let mut buf = Vec::new();
        append_varint(&mut buf, x);
        buf
    }

    #[test]
    fn vint_round_trip() {
        for x in SAMPLES {
            let mut b = [0u8; MAX_VARINT_LEN64];
            let wrote = put_uvarint(&mut b, x);
            assert!(wrote >= 1 && wrote <= MAX_VARINT_LEN64);
            assert_eq!(wrote, uvarint_len(x));
            let (y, read) = uvarint(&b[..wrote]);
            assert_eq!(wrote as isize, read);
            assert_eq!(x, y);
            assert_eq!(encoded(x), &b[..wrote]);
        }
    }

    #[test]
    fn signed_round_trip() {
        for x in [0, -1, 1, -64, 64, -65, i64::MIN, i64::MAX, i64::MIN + 1] {
            let b = encoded_signed(x);
            assert_eq!(b.len(), varint_len(x));
            assert_eq!(varint(&b), (x, b.len() as isize));
        }
    }

    #[test]
    fn unsigned_literals() {
        assert_eq!(encoded(1), [0x01]);
        assert_eq!(encoded(2), [0x02]);
        assert_eq!(encoded(127), [0x7f]);
        assert_eq!(encoded(128), [0x01, 0x80]);
        assert_eq!(encoded(255), [0x01, 0xff]);
        assert_eq!(encoded(256), [0x02, 0x80]);
        assert_eq!(
            encoded(u64::MAX),
            [0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn signed_literals() {
        let cases: [(i64, &[u8]); 9] = [
            (-65, &[0x01, 0x81]),
            (-64, &[0x7f]),
            (-2, &[0x03]),
            (-1, &[0x01]),
            (0, &[0x00]),
            (1, &[0x02]),
            (2, &[0x04]),
            (63, &[0x7e]),
            (64, &[0x01, 0x80]),
        ];
        for (x, bytes) in cases {
            assert_eq!(encoded_signed(x), bytes);
            assert_eq!(varint(bytes), (x, bytes.len() as isize));
        }
    }

    #[test]
    fn zigzag_order() {
        let order = [0i64, -1, 1, -2, 2, -3, 3];
        for (i, x) in order.iter().enumerate() {
            assert_eq!(zigzag_encode(*x), i as u64);
            assert_eq!(zigzag_decode(i as u64), *x);
        }
        assert_eq!(zigzag_encode(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_encode(i64::MIN), u64::MAX);
    }

    #[test]
    fn decode_ignores_head() {
        let mut buf = b"prefix".to_vec();
        append_uvarint(&mut buf, 300);
        assert_eq!(uvarint(&buf), (300, 2));
    }

    #[test]
    fn too_small() {
        assert_eq!(uvarint(&[]), (0, 0));
        assert_eq!(varint(&[]), (0, 0));
        assert_eq!(uvarint(&[0x80]), (0, 0));
        assert_eq!(uvarint(&[0xff, 0x80, 0x81]), (0, 0));
        // Ten continuation bytes never reach the overflow check.
        assert_eq!(uvarint(&[0x80; MAX_VARINT_LEN64]), (0, 0));
    }

    #[test]
    fn overflow() {
        assert_eq!(uvarint(&[0x80; 11]), (0, -11));
        assert_eq!(uvarint(&[0x80; 32]), (0, -11));
        let mut buf = vec![0x00];
        buf.extend_from_slice(&[0x80; 11]);
        assert_eq!(uvarint(&buf), (0, -11));
        assert_eq!(varint(&[0xff; 11]), (0, -11));
    }

    #[test]
    fn overflow_in_tenth_byte() {
        let mut buf = vec![0x02];
        buf.extend_from_slice(&[0xff; 9]);
        assert_eq!(uvarint(&buf), (0, -10));

        buf[0] = 0x7f;
        assert_eq!(uvarint(&buf), (0, -10));

        buf[0] = 0x01;
        assert_eq!(uvarint(&buf), (u64::MAX, 10));

        buf[0] = 0x00;
        assert_eq!(uvarint(&buf), (u64::MAX >> 1, 10));
    }

    #[test]
    fn max_lengths() {
        assert_eq!(uvarint_len(u16::MAX as u64), MAX_VARINT_LEN16);
        assert_eq!(uvarint_len(u32::MAX as u64), MAX_VARINT_LEN32);
        assert_eq!(uvarint_len(u64::MAX), MAX_VARINT_LEN64);
        assert_eq!(varint_len(i16::MIN as i64), MAX_VARINT_LEN16);
        assert_eq!(varint_len(i32::MIN as i64), MAX_VARINT_LEN32);
        assert_eq!(varint_len(i64::MIN), MAX_VARINT_LEN64);
    }

    #[test]
    fn length_boundaries() {
        for groups in 1..MAX_VARINT_LEN64 {
            let edge = 1u64 << (7 * groups);
            assert_eq!(uvarint_len(edge - 1), groups);
            assert_eq!(uvarint_len(edge), groups + 1);
        }
    }

    #[test]
    fn put_into_exact_buffer() {
        let mut b = [0u8; 2];
        assert_eq!(put_uvarint(&mut b, 300), 2);
        assert_eq!(b, [0x02, 0xac]);
    }

    #[test]
    #[should_panic]
    fn put_into_short_buffer() {
        let mut b = [0u8; 1];
        put_uvarint(&mut b, 128);
    }

    #[test]
    #[should_panic]
    fn put_signed_into_short_buffer() {
        let mut b = [0u8; 4];
        put_varint(&mut b, i64::MIN);
    }
}
