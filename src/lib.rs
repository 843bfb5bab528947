#![allow(rustdoc::bare_urls)]
#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

mod error;
mod read;
#[cfg(feature = "serde")]
mod serde_impl;
mod stack;
mod vint;

pub use crate::error::DecodeError;
pub use crate::read::{
    pop_uvarint, pop_varint, read_uvarint, read_varint, uvarints, varints, Uvarints, Varints,
};
pub use crate::stack::Stack;
pub use crate::vint::{
    append_uvarint, append_varint, put_uvarint, put_varint, uvarint, uvarint_len, varint,
    varint_len, zigzag_decode, zigzag_encode,
};

/// Maximum encoded length of a 16-bit integer.
pub const MAX_VARINT_LEN16: usize = 3;
/// Maximum encoded length of a 32-bit integer.
pub const MAX_VARINT_LEN32: usize = 5;
/// Maximum encoded length of a 64-bit integer.
pub const MAX_VARINT_LEN64: usize = 10;
