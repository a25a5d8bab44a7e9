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
use crate::complex_fma::c_mul_add_fast;
use crate::util::scale_by_length;
use crate::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Direct O(N^2) transform reading `W_N^k` from a plain table.
///
/// Serves every size up to the largest registered one and is the fallback all other leaf
/// families outrank.
pub(crate) fn dft<T: FftSample, const N: usize, const INVERSE: bool>(
    dst: &mut [Complex<T>],
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    _: &mut [Complex<T>],
    _: Option<&[usize]>,
) -> bool
where
    f64: AsPrimitive<T>,
{
    if dst.len() < N || src.len() < N || twiddles.len() < N {
        return false;
    }
    let twiddles = &twiddles[..N];
    let src = &src[..N];

    for (k, dst) in dst[..N].iter_mut().enumerate() {
        let mut sum = Complex::<T>::new(0f64.as_(), 0f64.as_());
        let mut twiddle_idx = 0usize;
        for src in src.iter() {
            sum = c_mul_add_fast(*src, twiddles[twiddle_idx], sum);
            twiddle_idx += k;
            if twiddle_idx >= N {
                twiddle_idx -= N;
            }
        }
        *dst = sum;
    }

    if INVERSE {
        scale_by_length(&mut dst[..N], N);
    }
    true
}
