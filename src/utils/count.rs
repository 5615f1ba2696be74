/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{BitRead, BitWrite};

/// Wrapping struct that keeps track of written bits. Optionally, prints to
/// standard error information about methods called.
///
/// Useful to measure the size of a compressed payload without materializing
/// it, or to compare code assignments.
#[derive(Debug)]
pub struct CountBitWriter<BW: BitWrite, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: u64,
}

impl<BW: BitWrite, const PRINT: bool> CountBitWriter<BW, PRINT> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<BW: BitWrite, const PRINT: bool> BitWrite for CountBitWriter<BW, PRINT> {
    type Error = BW::Error;

    fn write_bit(&mut self, bit: bool) -> Result<(), Self::Error> {
        self.bit_write.write_bit(bit).inspect(|_| {
            self.bits_written += 1;
            if PRINT {
                #[cfg(feature = "std")]
                eprintln!("write_bit({}) (total = {})", bit as u8, self.bits_written);
            }
        })
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.bit_write.write_byte(byte).inspect(|_| {
            self.bits_written += 8;
            if PRINT {
                #[cfg(feature = "std")]
                eprintln!("write_byte({:#04x}) (total = {})", byte, self.bits_written);
            }
        })
    }

    fn write_bits(&mut self, src: &[u8], n_bits: usize) -> Result<usize, Self::Error> {
        self.bit_write.write_bits(src, n_bits).inspect(|written| {
            self.bits_written += *written as u64;
            if PRINT {
                #[cfg(feature = "std")]
                eprintln!("write_bits({}) = {} (total = {})", n_bits, written, self.bits_written);
            }
        })
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bit_write.flush()
    }
}

/// Wrapping struct that keeps track of read bits. Optionally, prints to
/// standard error information about methods called.
#[derive(Debug)]
pub struct CountBitReader<BR: BitRead, const PRINT: bool = false> {
    bit_read: BR,
    /// The number of bits read so far from the underlying [`BitRead`].
    pub bits_read: u64,
}

impl<BR: BitRead, const PRINT: bool> CountBitReader<BR, PRINT> {
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<BR: BitRead, const PRINT: bool> BitRead for CountBitReader<BR, PRINT> {
    type Error = BR::Error;

    fn read_bit(&mut self) -> Result<Option<bool>, Self::Error> {
        self.bit_read.read_bit().inspect(|bit| {
            if bit.is_some() {
                self.bits_read += 1;
            }
            if PRINT {
                #[cfg(feature = "std")]
                eprintln!("read_bit() = {:?} (total = {})", bit, self.bits_read);
            }
        })
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        self.bit_read.read_byte().inspect(|byte| {
            if byte.is_some() {
                self.bits_read += 8;
            }
            if PRINT {
                #[cfg(feature = "std")]
                eprintln!("read_byte() = {:?} (total = {})", byte, self.bits_read);
            }
        })
    }

    fn read_bits(&mut self, dest: &mut [u8], n_bits: usize) -> Result<usize, Self::Error> {
        self.bit_read.read_bits(dest, n_bits).inspect(|read| {
            self.bits_read += *read as u64;
            if PRINT {
                #[cfg(feature = "std")]
                eprintln!("read_bits({}) = {} (total = {})", n_bits, read, self.bits_read);
            }
        })
    }
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod test {
    use super::*;
    use crate::prelude::*;
    use alloc::vec::Vec;

    #[test]
    fn test_count() {
        let bit_write = BitWriter::new(MemByteWriter::new(Vec::new()));
        let mut count_bit_write = CountBitWriter::<_, false>::new(bit_write);

        count_bit_write.write_bit(true).unwrap();
        assert_eq!(count_bit_write.bits_written, 1);
        count_bit_write.write_byte(0xab).unwrap();
        assert_eq!(count_bit_write.bits_written, 9);
        count_bit_write.write_bits(&[0xff, 0xff], 11).unwrap();
        assert_eq!(count_bit_write.bits_written, 20);
        count_bit_write.flush().unwrap();

        let data = count_bit_write
            .into_inner()
            .into_inner()
            .unwrap()
            .into_inner();
        assert_eq!(data.len(), 3);

        let bit_read = BitReader::new(MemByteReader::new(&data[..]));
        let mut count_bit_read = CountBitReader::<_, false>::new(bit_read);

        assert_eq!(count_bit_read.read_bit().unwrap(), Some(true));
        assert_eq!(count_bit_read.read_byte().unwrap(), Some(0xab));
        assert_eq!(count_bit_read.bits_read, 9);
        let mut dest = [0u8; 2];
        assert_eq!(count_bit_read.read_bits(&mut dest, 11).unwrap(), 11);
        assert_eq!(count_bit_read.bits_read, 20);
    }
}
