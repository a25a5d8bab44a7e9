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
use crate::FftSample;
use crate::complex_fma::c_mul_fast;
use num_complex::Complex;
use num_traits::AsPrimitive;

pub(crate) trait TransposeExecutor<T>: Send + Sync {
    // output[y + x * height] = input[x + y * width]
    fn transpose(&self, input: &[Complex<T>], output: &mut [Complex<T>], width: usize, height: usize);

    // output[y + x * height] = input[x + y * width] * twiddles[y + x * height]
    fn transpose_twiddled(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
        twiddles: &[Complex<T>],
    );
}

const BLOCK: usize = 16;

pub(crate) fn transpose_strategy<T: FftSample>(
    width: usize,
    height: usize,
) -> &'static dyn TransposeExecutor<T>
where
    f64: AsPrimitive<T>,
{
    if width > BLOCK && height > BLOCK {
        &TransposeBlocked
    } else {
        &TransposeTiny
    }
}

struct TransposeTiny;

impl<T: FftSample> TransposeExecutor<T> for TransposeTiny
where
    f64: AsPrimitive<T>,
{
    fn transpose(&self, input: &[Complex<T>], output: &mut [Complex<T>], width: usize, height: usize) {
        for x in 0..width {
            for y in 0..height {
                output[y + x * height] = input[x + y * width];
            }
        }
    }

    fn transpose_twiddled(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
        twiddles: &[Complex<T>],
    ) {
        for x in 0..width {
            for y in 0..height {
                let output_index = y + x * height;
                output[output_index] = c_mul_fast(input[x + y * width], twiddles[output_index]);
            }
        }
    }
}

/// Walks `BLOCK x BLOCK` tiles so both sides stay cache resident.
struct TransposeBlocked;

impl<T: FftSample> TransposeExecutor<T> for TransposeBlocked
where
    f64: AsPrimitive<T>,
{
    fn transpose(&self, input: &[Complex<T>], output: &mut [Complex<T>], width: usize, height: usize) {
        for y0 in (0..height).step_by(BLOCK) {
            let y1 = (y0 + BLOCK).min(height);
            for x0 in (0..width).step_by(BLOCK) {
                let x1 = (x0 + BLOCK).min(width);
                for x in x0..x1 {
                    let column = &mut output[x * height..(x + 1) * height];
                    for y in y0..y1 {
                        column[y] = input[x + y * width];
                    }
                }
            }
        }
    }

    fn transpose_twiddled(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
        twiddles: &[Complex<T>],
    ) {
        for y0 in (0..height).step_by(BLOCK) {
            let y1 = (y0 + BLOCK).min(height);
            for x0 in (0..width).step_by(BLOCK) {
                let x1 = (x0 + BLOCK).min(width);
                for x in x0..x1 {
                    let column = &mut output[x * height..(x + 1) * height];
                    let weights = &twiddles[x * height..(x + 1) * height];
                    for y in y0..y1 {
                        column[y] = c_mul_fast(input[x + y * width], weights[y]);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_support::random_signal;

    #[test]
    fn test_strategies_agree() {
        for (width, height) in [(3usize, 5usize), (16, 16), (17, 40), (64, 128)] {
            let input = random_signal::<f64>(width * height, (width * height) as u64);
            let twiddles = random_signal::<f64>(width * height, 3);
            let mut tiny = vec![Complex::default(); width * height];
            let mut blocked = vec![Complex::default(); width * height];
            TransposeExecutor::<f64>::transpose(&TransposeTiny, &input, &mut tiny, width, height);
            TransposeExecutor::<f64>::transpose(&TransposeBlocked, &input, &mut blocked, width, height);
            assert_eq!(tiny, blocked);
            for x in 0..width {
                for y in 0..height {
                    assert_eq!(tiny[y + x * height], input[x + y * width]);
                }
            }

            let strategy = transpose_strategy::<f64>(width, height);
            strategy.transpose_twiddled(&input, &mut blocked, width, height, &twiddles);
            TransposeTiny.transpose_twiddled(&input, &mut tiny, width, height, &twiddles);
            assert_eq!(tiny, blocked);
        }
    }
}
