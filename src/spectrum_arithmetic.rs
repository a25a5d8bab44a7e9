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
use crate::complex_fma::c_mul_fast;
use crate::{Capabilities, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

pub trait ComplexArith<T>: Send + Sync {
    // dst = dst * b
    fn mul_in_place(&self, dst: &mut [Complex<T>], b: &[Complex<T>]);
}

/// Picks the pointwise multiply kernel for a capability set.
pub trait ComplexArithFactory: Sized + 'static {
    fn complex_arith(capabilities: Capabilities) -> &'static dyn ComplexArith<Self>;
}

macro_rules! default_arith_module {
    ($capabilities: expr) => {{
        let _capabilities: Capabilities = $capabilities;
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        {
            if _capabilities.has(crate::SimdLevel::Avx2.required()) && crate::avx::has_avx2_fma() {
                return &crate::avx::AvxSpectrumArithmetic;
            }
        }
        #[cfg(all(target_arch = "aarch64", feature = "neon"))]
        {
            if _capabilities.has(crate::SimdLevel::Neon.required()) {
                return &crate::neon::NeonSpectrumArithmetic;
            }
        }
        &ScalarSpectrumArithmetic
    }};
}

impl ComplexArithFactory for f32 {
    fn complex_arith(capabilities: Capabilities) -> &'static dyn ComplexArith<f32> {
        default_arith_module!(capabilities)
    }
}

impl ComplexArithFactory for f64 {
    fn complex_arith(capabilities: Capabilities) -> &'static dyn ComplexArith<f64> {
        default_arith_module!(capabilities)
    }
}

pub(crate) struct ScalarSpectrumArithmetic;

impl<T: FftSample> ComplexArith<T> for ScalarSpectrumArithmetic
where
    f64: AsPrimitive<T>,
{
    fn mul_in_place(&self, dst: &mut [Complex<T>], b: &[Complex<T>]) {
        for (dst, &twiddle) in dst.iter_mut().zip(b.iter()) {
            *dst = c_mul_fast(*dst, twiddle);
        }
    }
}
