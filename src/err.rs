/*
 * // Copyright (c) Radzivon Bartoshyk 9/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::{KernelStrategy, Precision};
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FftError {
    OutOfMemory(usize),
    ZeroSizedFft,
    SourceTooSmall(usize, usize),
    DestinationTooSmall(usize, usize),
    ScratchBufferIsTooSmall(usize, usize),
    UnsupportedSize(usize),
    NoCodeletsRegistered(Precision),
    StrategyUnavailable(usize, KernelStrategy),
    CodeletRejected(&'static str),
    InvalidStride(usize),
}

impl Error for FftError {}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector",))
            }
            FftError::ZeroSizedFft => f.write_str("Cannot plan FFT on zero-sized buffers"),
            FftError::SourceTooSmall(required, actual) => f.write_fmt(format_args!(
                "Source buffer must hold at least {required} elements, but it holds {actual}"
            )),
            FftError::DestinationTooSmall(required, actual) => f.write_fmt(format_args!(
                "Destination buffer must hold at least {required} elements, but it holds {actual}"
            )),
            FftError::ScratchBufferIsTooSmall(current, required) => f.write_fmt(format_args!(
                "Scratch buffer size must be at least {required} but it is {current}"
            )),
            FftError::UnsupportedSize(n) => f.write_fmt(format_args!(
                "Size {n} has neither a registered codelet nor a decomposition into registered sizes"
            )),
            FftError::NoCodeletsRegistered(precision) => f.write_fmt(format_args!(
                "No codelets are registered for {precision} precision"
            )),
            FftError::StrategyUnavailable(n, strategy) => f.write_fmt(format_args!(
                "Strategy {strategy} cannot serve size {n}"
            )),
            FftError::CodeletRejected(signature) => f.write_fmt(format_args!(
                "Codelet {signature} rejected its buffers"
            )),
            FftError::InvalidStride(stride) => f.write_fmt(format_args!(
                "Stride {stride} is zero or overflows the index range"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::FftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_sizes() {
        let msg = FftError::SourceTooSmall(16, 8).to_string();
        assert!(msg.contains("16") && msg.contains('8'), "{msg}");
        let msg = FftError::StrategyUnavailable(17, KernelStrategy::SixStep).to_string();
        assert!(msg.contains("17") && msg.contains("six-step"), "{msg}");
        let msg = FftError::NoCodeletsRegistered(Precision::Double).to_string();
        assert!(msg.contains("double"), "{msg}");
        let msg = FftError::InvalidStride(0).to_string();
        assert!(msg.contains("Stride 0"), "{msg}");
    }

    #[test]
    fn test_try_vec_allocates() {
        fn make(n: usize) -> Result<Vec<u8>, FftError> {
            Ok(try_vec![7u8; n])
        }
        let v = make(5).unwrap();
        assert_eq!(v, vec![7u8; 5]);
        assert!(matches!(make(usize::MAX), Err(FftError::OutOfMemory(_))));
    }
}
