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
use crate::butterflies::rotate_90;
use crate::complex_fma::c_mul_fast;
use crate::permutation::gather;
use crate::util::scale_by_length;
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Iterative radix-4 decimation in time over a base-4 digit-reversed gather of `src`.
pub(crate) fn dit_radix4<T: FftSample, const N: usize, const INVERSE: bool>(
    dst: &mut [Complex<T>],
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    _: &mut [Complex<T>],
    permutation: Option<&[usize]>,
) -> bool
where
    f64: AsPrimitive<T>,
{
    let Some(permutation) = permutation else {
        return false;
    };
    if dst.len() < N || src.len() < N || permutation.len() < N || twiddles.len() + 1 < N {
        return false;
    }
    let direction = if INVERSE {
        FftDirection::Inverse
    } else {
        FftDirection::Forward
    };
    let dst = &mut dst[..N];
    gather(dst, &src[..N], &permutation[..N]);

    let mut len = 4;
    let mut m_twiddles = twiddles;
    while len <= N {
        let quarter = len / 4;
        let (stage, rest) = m_twiddles.split_at(quarter * 3);
        for data in dst.chunks_exact_mut(len) {
            for j in 0..quarter {
                let a = data[j];
                let b = c_mul_fast(data[j + quarter], stage[3 * j]);
                let c = c_mul_fast(data[j + 2 * quarter], stage[3 * j + 1]);
                let d = c_mul_fast(data[j + 3 * quarter], stage[3 * j + 2]);

                // radix-4 butterfly
                let t0 = a + c;
                let t1 = a - c;
                let t2 = b + d;
                let t3 = rotate_90(b - d, direction);

                data[j] = t0 + t2;
                data[j + quarter] = t1 + t3;
                data[j + 2 * quarter] = t0 - t2;
                data[j + 3 * quarter] = t1 - t3;
            }
        }
        m_twiddles = rest;
        len *= 4;
    }

    if INVERSE {
        scale_by_length(dst, N);
    }
    true
}
