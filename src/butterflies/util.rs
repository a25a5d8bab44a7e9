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
/// Emits a leaf codelet `$fn_name::<T, INVERSE>` around `$run`, which transforms one
/// `[Complex<T>; $size]` chunk in place given the prepared twiddle table and the direction.
macro_rules! boring_scalar_butterfly {
    ($fn_name: ident, $size: expr, $twiddles: expr, $run: ident) => {
        pub(crate) fn $fn_name<T: FftSample, const INVERSE: bool>(
            dst: &mut [Complex<T>],
            src: &[Complex<T>],
            twiddles: &[Complex<T>],
            _: &mut [Complex<T>],
            _: Option<&[usize]>,
        ) -> bool
        where
            f64: AsPrimitive<T>,
        {
            if dst.len() < $size || src.len() < $size || twiddles.len() < $twiddles {
                return false;
            }
            let direction = if INVERSE {
                FftDirection::Inverse
            } else {
                FftDirection::Forward
            };

            let mut chunk = [Complex::<T>::default(); $size];
            chunk.copy_from_slice(&src[..$size]);
            $run(&mut chunk, twiddles, direction);
            dst[..$size].copy_from_slice(&chunk);

            if INVERSE {
                crate::util::scale_by_length(&mut dst[..$size], $size);
            }
            true
        }
    };
}

pub(crate) use boring_scalar_butterfly;
