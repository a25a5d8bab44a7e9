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
use crate::butterflies::bf2::butterfly2;
use crate::butterflies::bf4::butterfly4;
use crate::butterflies::rotate_90;
use crate::butterflies::util::boring_scalar_butterfly;
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

#[inline(always)]
fn run<T: FftSample>(chunk: &mut [Complex<T>; 8], _: &[Complex<T>], direction: FftDirection)
where
    f64: AsPrimitive<T>,
{
    let root2: T = 0.5f64.sqrt().as_();

    // Radix-8 butterfly
    let (u0, u2, u4, u6) = butterfly4(chunk[0], chunk[2], chunk[4], chunk[6], direction);
    let (u1, mut u3, mut u5, mut u7) =
        butterfly4(chunk[1], chunk[3], chunk[5], chunk[7], direction);

    u3 = (rotate_90(u3, direction) + u3) * root2;
    u5 = rotate_90(u5, direction);
    u7 = (rotate_90(u7, direction) - u7) * root2;

    let (u0, u1) = butterfly2(u0, u1);
    let (u2, u3) = butterfly2(u2, u3);
    let (u4, u5) = butterfly2(u4, u5);
    let (u6, u7) = butterfly2(u6, u7);

    chunk[0] = u0;
    chunk[1] = u2;
    chunk[2] = u4;
    chunk[3] = u6;
    chunk[4] = u1;
    chunk[5] = u3;
    chunk[6] = u5;
    chunk[7] = u7;
}

boring_scalar_butterfly!(butterfly8, 8, 0, run);
