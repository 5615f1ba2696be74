/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;
use core::convert::Infallible;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::ByteWrite;

/// An implementation of [`ByteWrite`] appending to a [`Vec<u8>`].
///
/// The backend can be an owned vector or a mutable reference to one. Writes
/// only allocate, so the error type is [`Infallible`].
///
/// ### Example
/// ```
/// use huff_codec::prelude::*;
///
/// let mut writer = MemByteWriter::new(Vec::new());
/// writer.write_byte(0xca).unwrap();
/// writer.write_byte(0xfe).unwrap();
/// assert_eq!(writer.into_inner(), vec![0xca, 0xfe]);
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriter<B: AsMut<Vec<u8>>> {
    data: B,
}

impl<B: AsMut<Vec<u8>>> MemByteWriter<B> {
    pub fn new(data: B) -> Self {
        Self { data }
    }

    /// Return the backend.
    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<Vec<u8>>> ByteWrite for MemByteWriter<B> {
    type Error = Infallible;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.data.as_mut().push(byte);
        Ok(())
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
