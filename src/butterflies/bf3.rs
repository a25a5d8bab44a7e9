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
use crate::butterflies::util::boring_scalar_butterfly;
use crate::complex_fma::fmla;
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

// The plain table already carries the direction, so only W_3^1 is read.
#[inline(always)]
fn run<T: FftSample>(chunk: &mut [Complex<T>; 3], twiddles: &[Complex<T>], _: FftDirection) {
    let twiddle = twiddles[1];
    let u0 = chunk[0];
    let u1 = chunk[1];
    let u2 = chunk[2];

    let xp = u1 + u2;
    let xn = u1 - u2;
    let sum = u0 + xp;

    let w_1 = Complex {
        re: fmla(twiddle.re, xp.re, u0.re),
        im: fmla(twiddle.re, xp.im, u0.im),
    };

    chunk[0] = sum;
    chunk[1] = Complex {
        re: fmla(-twiddle.im, xn.im, w_1.re),
        im: fmla(twiddle.im, xn.re, w_1.im),
    };
    chunk[2] = Complex {
        re: fmla(twiddle.im, xn.im, w_1.re),
        im: fmla(-twiddle.im, xn.re, w_1.im),
    };
}

boring_scalar_butterfly!(butterfly3, 3, 3, run);
