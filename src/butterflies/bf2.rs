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
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

#[inline(always)]
pub(crate) fn butterfly2<T: FftSample>(
    u0: Complex<T>,
    u1: Complex<T>,
) -> (Complex<T>, Complex<T>) {
    (u0 + u1, u0 - u1)
}

#[inline(always)]
fn run<T: FftSample>(chunk: &mut [Complex<T>; 2], _: &[Complex<T>], _: FftDirection) {
    let (y0, y1) = butterfly2(chunk[0], chunk[1]);
    chunk[0] = y0;
    chunk[1] = y1;
}

boring_scalar_butterfly!(butterfly2_codelet, 2, 0, run);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_butterfly2() {
        let src = [Complex::new(1.0f64, 2.0), Complex::new(-3.0, 0.5)];
        let mut dst = [Complex::default(); 2];
        assert!(butterfly2_codelet::<f64, false>(&mut dst, &src, &[], &mut [], None));
        assert_eq!(dst[0], Complex::new(-2.0, 2.5));
        assert_eq!(dst[1], Complex::new(4.0, 1.5));
        let spectrum = dst;
        assert!(butterfly2_codelet::<f64, true>(&mut dst, &spectrum, &[], &mut [], None));
        assert_eq!(dst, src);
        assert!(!butterfly2_codelet::<f64, false>(&mut dst[..1], &src, &[], &mut [], None));
    }
}
