/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for operating on streams of bytes and bits.

The byte-based traits [`ByteRead`] and [`ByteWrite`] abstract the streams the
codec consumes and produces. They are deliberately minimal: sequential
single-byte access, a rewind operation on the read side (the encoder scans its
input twice), and a flush on the write side. The implementations we provide
(see the [`impls`](crate::impls) module) are backed by memory or, with the
`std` feature, by anything implementing [`std::io::Read`] or
[`std::io::Write`].

The bit-based traits [`BitRead`] and [`BitWrite`] provide bit-granular access
layered on a byte stream. All bit streams in this crate are MSB-first: the
first bit written to a byte is its most significant bit, and multi-bit fields
are emitted starting from the most significant bit of their first byte. Both
on-disk formats of the codec fix this orientation, so it is part of the trait
contract rather than a type parameter.

All traits have an internal error type `Error`, which usually propagates the
error of the underlying backend. In some cases (e.g.,
[`MemByteReader`](crate::impls::MemByteReader)) the error type is
[`Infallible`](core::convert::Infallible), in which case the compiler is able
to perform several further optimizations.

Note that methods returning a [`Result`] will return a [`Result::Err`] variant
only if there is an error in the underlying backend: errors in the parameters
to the methods will generally result in panics. The end of a stream is not an
error, but a regular [`None`] outcome, as decoders must be able to observe it
and stop cleanly.

*/

mod bits;
pub use bits::*;

mod bytes;
pub use bytes::*;
