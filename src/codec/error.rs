/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;
use core::fmt::{Display, Formatter};

/// The error returned by the encode/decode drivers.
///
/// It can wrap a read or a write error, depending on which backend stream
/// (source or destination) failed, or report one of the format failures. No
/// failure is recovered locally: drivers release their resources by scope
/// and surface the error to the caller, and partial output is not guaranteed
/// to be usable.
#[derive(Debug, Clone)]
pub enum CodecError<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> {
    /// The source byte stream failed.
    Read(RE),
    /// The destination byte stream failed.
    Write(WE),
    /// A symbol occurred more than [`u32::MAX`] times in the input.
    InputTooLarge,
    /// The stream ended in the middle of the header.
    MalformedHeader,
    /// The stream ended before the payload was complete: before the
    /// end-of-stream code in the traditional variant, before the framed
    /// number of bytes in the canonical one.
    TruncatedStream,
    /// The canonical decoding register outgrew the longest possible code
    /// without matching any.
    InvalidCode,
}

impl<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> Display
    for CodecError<RE, WE>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::Read(error) => write!(f, "Read error: {}", error),
            CodecError::Write(error) => write!(f, "Write error: {}", error),
            CodecError::InputTooLarge => {
                write!(f, "A symbol count exceeds {}", u32::MAX)
            }
            CodecError::MalformedHeader => {
                write!(f, "Stream ended in the middle of the header")
            }
            CodecError::TruncatedStream => {
                write!(f, "Stream ended before the payload was complete")
            }
            CodecError::InvalidCode => {
                write!(f, "No code matches the bits read")
            }
        }
    }
}

impl<RE: Error + Send + Sync + 'static, WE: Error + Send + Sync + 'static> Error
    for CodecError<RE, WE>
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CodecError::Read(error) => Some(error),
            CodecError::Write(error) => Some(error),
            _ => None,
        }
    }
}
