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
use crate::butterflies::bf4::butterfly4;
use crate::butterflies::util::boring_scalar_butterfly;
use crate::complex_fma::c_mul_fast;
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

// 4x4 split: columns of stride 4, twiddle W_16^(j2 * k1), then rows.
#[inline(always)]
fn run<T: FftSample>(
    chunk: &mut [Complex<T>; 16],
    twiddles: &[Complex<T>],
    direction: FftDirection,
) {
    let mut columns = [Complex::<T>::default(); 16];
    for j2 in 0..4 {
        let (y0, y1, y2, y3) = butterfly4(
            chunk[j2],
            chunk[j2 + 4],
            chunk[j2 + 8],
            chunk[j2 + 12],
            direction,
        );
        columns[j2 * 4] = y0;
        columns[j2 * 4 + 1] = c_mul_fast(y1, twiddles[j2]);
        columns[j2 * 4 + 2] = c_mul_fast(y2, twiddles[2 * j2]);
        columns[j2 * 4 + 3] = c_mul_fast(y3, twiddles[3 * j2]);
    }
    for k1 in 0..4 {
        let (y0, y1, y2, y3) = butterfly4(
            columns[k1],
            columns[k1 + 4],
            columns[k1 + 8],
            columns[k1 + 12],
            direction,
        );
        chunk[k1] = y0;
        chunk[k1 + 4] = y1;
        chunk[k1 + 8] = y2;
        chunk[k1 + 12] = y3;
    }
}

boring_scalar_butterfly!(butterfly16, 16, 16, run);
