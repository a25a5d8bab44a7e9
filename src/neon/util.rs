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
use std::arch::aarch64::*;

#[inline(always)]
pub(crate) unsafe fn mul_complex_f32(lhs: float32x4_t, rhs: float32x4_t) -> float32x4_t {
    unsafe {
        let temp1 = vtrn1q_f32(rhs, rhs);
        let temp2 = vtrn2q_f32(rhs, vnegq_f32(rhs));
        let temp3 = vmulq_f32(temp2, lhs);
        let temp4 = vrev64q_f32(temp3);
        vfmaq_f32(temp4, temp1, lhs)
    }
}

#[inline(always)]
pub(crate) unsafe fn mulh_complex_f32(lhs: float32x2_t, rhs: float32x2_t) -> float32x2_t {
    unsafe {
        let temp1 = vtrn1_f32(rhs, rhs);
        let temp2 = vtrn2_f32(rhs, vneg_f32(rhs));
        let temp3 = vmul_f32(temp2, lhs);
        let temp4 = vrev64_f32(temp3);
        vfma_f32(temp4, temp1, lhs)
    }
}

#[inline(always)]
pub(crate) unsafe fn mul_complex_f64(lhs: float64x2_t, rhs: float64x2_t) -> float64x2_t {
    unsafe {
        let temp = vcombine_f64(vneg_f64(vget_high_f64(lhs)), vget_low_f64(lhs));
        let sum = vmulq_laneq_f64::<0>(lhs, rhs);
        vfmaq_laneq_f64::<1>(sum, temp, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_neon_products() {
        let a = Complex::new(1.5f64, -2.0);
        let w = Complex::new(0.5f64, 0.75);
        let mut out = Complex::<f64>::default();
        unsafe {
            let r = mul_complex_f64(
                vld1q_f64([a.re, a.im].as_ptr()),
                vld1q_f64([w.re, w.im].as_ptr()),
            );
            vst1q_f64((&mut out as *mut Complex<f64>).cast(), r);
        }
        assert!((out - a * w).norm() < 1e-14);

        let a = [Complex::new(1.5f32, -2.0), Complex::new(0.25, 4.0)];
        let w = [Complex::new(0.5f32, 0.75), Complex::new(-1.0, 0.125)];
        let mut out = [Complex::<f32>::default(); 2];
        unsafe {
            let r = mul_complex_f32(vld1q_f32(a.as_ptr().cast()), vld1q_f32(w.as_ptr().cast()));
            vst1q_f32(out.as_mut_ptr().cast(), r);
            let h = mulh_complex_f32(vld1_f32(a.as_ptr().cast()), vld1_f32(w.as_ptr().cast()));
            let mut single = Complex::<f32>::default();
            vst1_f32((&mut single as *mut Complex<f32>).cast(), h);
            assert!((single - a[0] * w[0]).norm() < 1e-5);
        }
        for i in 0..2 {
            assert!((out[i] - a[i] * w[i]).norm() < 1e-5, "lane {i}");
        }
    }
}
