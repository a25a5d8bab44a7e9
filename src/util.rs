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
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// `exp(-2πi * index / fft_len)` for forward, its conjugate for inverse.
pub(crate) fn compute_twiddle<T: FftSample>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let index = index % fft_len;
    let angle = -2. * std::f64::consts::PI * index as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();

    let result = Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

// computes `n` such that `radix ^ n == value`. Returns `None` if `value` is not a perfect power of `radix`
pub(crate) fn compute_logarithm(value: usize, radix: usize) -> Option<u32> {
    if value == 0 || radix < 2 {
        return None;
    }

    let mut current_exponent = 0;
    let mut current_value = value;

    while current_value % radix == 0 {
        current_exponent += 1;
        current_value /= radix;
    }

    if current_value == 1 {
        Some(current_exponent)
    } else {
        None
    }
}

// Repeatedly divide `value` by `radix`, `digits` times, and apply the remainders to a new value.
// When radix is 2 this is exactly a bit reversal.
pub(crate) fn reverse_digits(value: usize, radix: usize, digits: u32) -> usize {
    let mut result: usize = 0;
    let mut value = value;
    for _ in 0..digits {
        result = (result * radix) + (value % radix);
        value /= radix;
    }
    result
}

/// Multiplies every element by `1 / n`.
pub(crate) fn scale_by_length<T: FftSample>(data: &mut [Complex<T>], n: usize)
where
    f64: AsPrimitive<T>,
{
    let scale: T = (1f64 / n as f64).as_();
    for v in data.iter_mut() {
        *v = *v * scale;
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::{FftDirection, FftSample};
    use num_complex::Complex;
    use num_traits::AsPrimitive;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// O(n^2) transform evaluated in f64, inverse unnormalized.
    pub(crate) fn naive_dft<T: FftSample>(
        src: &[Complex<T>],
        direction: FftDirection,
    ) -> Vec<Complex<T>>
    where
        f64: AsPrimitive<T>,
    {
        let n = src.len();
        let sign = match direction {
            FftDirection::Forward => -1f64,
            FftDirection::Inverse => 1f64,
        };
        (0..n)
            .map(|k| {
                let mut sum = Complex::new(0f64, 0f64);
                for (j, v) in src.iter().enumerate() {
                    let angle = sign * 2. * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                    let (s, c) = angle.sin_cos();
                    let v: Complex<f64> = Complex::new(v.re.as_(), v.im.as_());
                    sum += v * Complex::new(c, s);
                }
                Complex::<T>::new(sum.re.as_(), sum.im.as_())
            })
            .collect()
    }

    pub(crate) fn random_signal<T: FftSample>(n: usize, seed: u64) -> Vec<Complex<T>>
    where
        f64: AsPrimitive<T>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let re: f64 = rng.random_range(-1.0..1.0);
                let im: f64 = rng.random_range(-1.0..1.0);
                Complex::<T>::new(re.as_(), im.as_())
            })
            .collect()
    }

    /// Asserts that `actual` is within `tolerance` of `expected`, relative to the largest
    /// magnitude in `expected` (floored at one).
    pub(crate) fn assert_close<T: FftSample>(
        actual: &[Complex<T>],
        expected: &[Complex<T>],
        tolerance: f64,
        size: usize,
    ) {
        assert_eq!(actual.len(), expected.len());
        let peak = expected
            .iter()
            .map(|v| -> f64 { v.norm().as_() })
            .fold(1f64, f64::max);
        for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
            let diff: f64 = (*a - *b).norm().as_();
            assert!(
                diff <= tolerance * peak,
                "a {} != b {} at index {} for size {}, diff {}",
                a,
                b,
                i,
                size,
                diff
            );
        }
    }
}
