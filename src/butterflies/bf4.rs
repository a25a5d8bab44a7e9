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
use crate::butterflies::util::boring_scalar_butterfly;
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

#[inline(always)]
pub(crate) fn butterfly4<T: FftSample>(
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
    d: Complex<T>,
    direction: FftDirection,
) -> (Complex<T>, Complex<T>, Complex<T>, Complex<T>) {
    let t0 = a + c;
    let t1 = a - c;
    let t2 = b + d;
    let t3 = rotate_90(b - d, direction);
    (t0 + t2, t1 + t3, t0 - t2, t1 - t3)
}

#[inline(always)]
fn run<T: FftSample>(chunk: &mut [Complex<T>; 4], _: &[Complex<T>], direction: FftDirection) {
    let (y0, y1, y2, y3) = butterfly4(chunk[0], chunk[1], chunk[2], chunk[3], direction);
    chunk[0] = y0;
    chunk[1] = y1;
    chunk[2] = y2;
    chunk[3] = y3;
}

boring_scalar_butterfly!(butterfly4_codelet, 4, 0, run);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_butterfly4() {
        for _ in 0..8 {
            let mut input = [Complex::<f32>::default(); 4];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let mut spectrum = [Complex::<f32>::default(); 4];
            let mut restored = [Complex::<f32>::default(); 4];
            assert!(butterfly4_codelet::<f32, false>(
                &mut spectrum,
                &input,
                &[],
                &mut [],
                None
            ));
            assert!(butterfly4_codelet::<f32, true>(
                &mut restored,
                &spectrum,
                &[],
                &mut [],
                None
            ));

            restored.iter().zip(input.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < 1e-5,
                    "a_re {} != b_re {} for size 4",
                    a.re,
                    b.re,
                );
                assert!(
                    (a.im - b.im).abs() < 1e-5,
                    "a_im {} != b_im {} for size 4",
                    a.im,
                    b.im,
                );
            });
        }
    }
}
