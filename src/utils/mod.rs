/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Bit vectors and debug helpers.

[`BitArray`] is a fixed-length vector of bits with MSB-at-index-0
orientation. Besides the usual single-bit and whole-vector logical
operations, it supports shifts, lexicographic comparison and
increment/decrement as a big-endian unsigned integer, which is what canonical
code construction is built on.

[`CountBitReader`] and [`CountBitWriter`] keep track of the number of bits
read or written on a [`BitRead`](crate::traits::BitRead) or
[`BitWrite`](crate::traits::BitWrite), optionally printing on standard error
the operations performed on the stream.

*/

#[cfg(feature = "alloc")]
mod bit_array;
#[cfg(feature = "alloc")]
pub use bit_array::BitArray;

mod count;
pub use count::*;
