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

#[inline(always)]
fn run<T: FftSample>(chunk: &mut [Complex<T>; 5], twiddles: &[Complex<T>], _: FftDirection) {
    let twiddle1 = twiddles[1];
    let twiddle2 = twiddles[2];

    let u0 = chunk[0];
    let u1 = chunk[1];
    let u2 = chunk[2];
    let u3 = chunk[3];
    let u4 = chunk[4];

    // Radix-5 butterfly

    let x14p = u1 + u4;
    let x14n = u1 - u4;
    let x23p = u2 + u3;
    let x23n = u2 - u3;
    let y0 = u0 + x14p + x23p;

    let b14re_a = fmla(twiddle2.re, x23p.re, fmla(twiddle1.re, x14p.re, u0.re));
    let b14re_b = fmla(twiddle1.im, x14n.im, twiddle2.im * x23n.im);
    let b23re_a = fmla(twiddle1.re, x23p.re, fmla(twiddle2.re, x14p.re, u0.re));
    let b23re_b = fmla(twiddle2.im, x14n.im, -twiddle1.im * x23n.im);

    let b14im_a = fmla(twiddle2.re, x23p.im, fmla(twiddle1.re, x14p.im, u0.im));
    let b14im_b = fmla(twiddle1.im, x14n.re, twiddle2.im * x23n.re);
    let b23im_a = fmla(twiddle1.re, x23p.im, fmla(twiddle2.re, x14p.im, u0.im));
    let b23im_b = fmla(twiddle2.im, x14n.re, -twiddle1.im * x23n.re);

    chunk[0] = y0;
    chunk[1] = Complex {
        re: b14re_a - b14re_b,
        im: b14im_a + b14im_b,
    };
    chunk[2] = Complex {
        re: b23re_a - b23re_b,
        im: b23im_a + b23im_b,
    };
    chunk[3] = Complex {
        re: b23re_a + b23re_b,
        im: b23im_a - b23im_b,
    };
    chunk[4] = Complex {
        re: b14re_a + b14re_b,
        im: b14im_a - b14im_b,
    };
}

boring_scalar_butterfly!(butterfly5, 5, 5, run);
