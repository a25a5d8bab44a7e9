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
use std::arch::x86_64::*;

/// Complex product of two interleaved `f64` pairs with a twiddle given as broadcast real
/// parts `[re0, re0, re1, re1]` and broadcast imaginary parts `[im0, im0, im1, im1]`.
#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) fn _mm256_mul_packed_pd(a: __m256d, tw_re: __m256d, tw_im: __m256d) -> __m256d {
    // Swap real and imaginary parts of 'a' for FMA
    let a_yx = _mm256_permute_pd::<0b0101>(a);
    // Compute (a_re*b_re - a_im*b_im) + i(a_re*b_im + a_im*b_re)
    _mm256_fmaddsub_pd(a, tw_re, _mm256_mul_pd(a_yx, tw_im))
}

/// Same as [`_mm256_mul_packed_pd`] for four interleaved `f32` pairs.
#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) fn _mm256_mul_packed_ps(a: __m256, tw_re: __m256, tw_im: __m256) -> __m256 {
    let a_yx = _mm256_permute_ps::<0b10110001>(a);
    _mm256_fmaddsub_ps(a, tw_re, _mm256_mul_ps(a_yx, tw_im))
}

#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) fn _mm256_fcmul_pd(a: __m256d, b: __m256d) -> __m256d {
    let a_yx = _mm256_permute_pd::<0b0101>(a); // [a_im, a_re, b_im, b_re]

    // Duplicate real and imaginary parts of 'b'
    let b_xx = _mm256_permute_pd::<0b0000>(b); // [c_re, c_re, d_re, d_re]
    let b_yy = _mm256_permute_pd::<0b1111>(b); // [c_im, c_im, d_im, d_im]

    _mm256_fmaddsub_pd(a, b_xx, _mm256_mul_pd(a_yx, b_yy))
}

#[inline]
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) fn _mm256_fcmul_ps(a: __m256, b: __m256) -> __m256 {
    let ar = _mm256_moveldup_ps(a); // duplicate even lanes (re parts)
    let ai = _mm256_movehdup_ps(a); // duplicate odd lanes (im parts)

    // Swap real/imag of b for cross terms
    let bswap = _mm256_permute_ps::<0b10110001>(b);

    // re = ar*br - ai*bi
    // im = ar*bi + ai*br
    _mm256_fmaddsub_ps(ar, b, _mm256_mul_ps(ai, bswap))
}

#[inline]
pub(crate) fn has_avx2_fma() -> bool {
    std::arch::is_x86_feature_detected!("avx2") && std::arch::is_x86_feature_detected!("fma")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_packed_products() {
        if !has_avx2_fma() {
            return;
        }
        let a = [Complex::new(1.5f64, -2.0), Complex::new(0.25, 4.0)];
        let w = [Complex::new(0.5f64, 0.75), Complex::new(-1.0, 0.125)];
        let re = [w[0].re, w[0].re, w[1].re, w[1].re];
        let im = [w[0].im, w[0].im, w[1].im, w[1].im];
        let mut out = [Complex::<f64>::default(); 2];
        unsafe {
            let v = _mm256_loadu_pd(a.as_ptr().cast());
            let r = _mm256_mul_packed_pd(
                v,
                _mm256_loadu_pd(re.as_ptr()),
                _mm256_loadu_pd(im.as_ptr()),
            );
            _mm256_storeu_pd(out.as_mut_ptr().cast(), r);
        }
        for i in 0..2 {
            let expected = a[i] * w[i];
            assert!((out[i] - expected).norm() < 1e-14, "lane {i}");
        }

        let a = [
            Complex::new(1.5f32, -2.0),
            Complex::new(0.25, 4.0),
            Complex::new(-3.0, 0.5),
            Complex::new(2.0, 2.0),
        ];
        let w = [
            Complex::new(0.5f32, 0.75),
            Complex::new(-1.0, 0.125),
            Complex::new(0.0, 1.0),
            Complex::new(0.7, -0.7),
        ];
        let re: Vec<f32> = w.iter().flat_map(|w| [w.re, w.re]).collect();
        let im: Vec<f32> = w.iter().flat_map(|w| [w.im, w.im]).collect();
        let mut out = [Complex::<f32>::default(); 4];
        unsafe {
            let v = _mm256_loadu_ps(a.as_ptr().cast());
            let r = _mm256_mul_packed_ps(
                v,
                _mm256_loadu_ps(re.as_ptr()),
                _mm256_loadu_ps(im.as_ptr()),
            );
            _mm256_storeu_ps(out.as_mut_ptr().cast(), r);
        }
        for i in 0..4 {
            let expected = a[i] * w[i];
            assert!((out[i] - expected).norm() < 1e-5, "lane {i}");
        }
    }
}
