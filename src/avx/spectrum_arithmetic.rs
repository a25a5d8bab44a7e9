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
use crate::avx::util::{_mm256_fcmul_pd, _mm256_fcmul_ps};
use crate::complex_fma::c_mul_fast;
use crate::spectrum_arithmetic::ComplexArith;
use num_complex::Complex;
use std::arch::x86_64::*;

/// Only handed out after AVX2 and FMA were confirmed on the running CPU.
pub(crate) struct AvxSpectrumArithmetic;

impl ComplexArith<f64> for AvxSpectrumArithmetic {
    fn mul_in_place(&self, dst: &mut [Complex<f64>], b: &[Complex<f64>]) {
        unsafe { mul_in_place_f64(dst, b) }
    }
}

impl ComplexArith<f32> for AvxSpectrumArithmetic {
    fn mul_in_place(&self, dst: &mut [Complex<f32>], b: &[Complex<f32>]) {
        unsafe { mul_in_place_f32(dst, b) }
    }
}

#[target_feature(enable = "avx2", enable = "fma")]
fn mul_in_place_f64(dst: &mut [Complex<f64>], b: &[Complex<f64>]) {
    let length = dst.len().min(b.len());
    let (dst, b) = (&mut dst[..length], &b[..length]);
    let mut dst_chunks = dst.chunks_exact_mut(2);
    let mut b_chunks = b.chunks_exact(2);
    for (dst, b) in (&mut dst_chunks).zip(&mut b_chunks) {
        unsafe {
            let a = _mm256_loadu_pd(dst.as_ptr().cast());
            let tw = _mm256_loadu_pd(b.as_ptr().cast());
            _mm256_storeu_pd(dst.as_mut_ptr().cast(), _mm256_fcmul_pd(a, tw));
        }
    }
    for (dst, &b) in dst_chunks
        .into_remainder()
        .iter_mut()
        .zip(b_chunks.remainder())
    {
        *dst = c_mul_fast(*dst, b);
    }
}

#[target_feature(enable = "avx2", enable = "fma")]
fn mul_in_place_f32(dst: &mut [Complex<f32>], b: &[Complex<f32>]) {
    let length = dst.len().min(b.len());
    let (dst, b) = (&mut dst[..length], &b[..length]);
    let mut dst_chunks = dst.chunks_exact_mut(4);
    let mut b_chunks = b.chunks_exact(4);
    for (dst, b) in (&mut dst_chunks).zip(&mut b_chunks) {
        unsafe {
            let a = _mm256_loadu_ps(dst.as_ptr().cast());
            let tw = _mm256_loadu_ps(b.as_ptr().cast());
            _mm256_storeu_ps(dst.as_mut_ptr().cast(), _mm256_fcmul_ps(a, tw));
        }
    }
    for (dst, &b) in dst_chunks
        .into_remainder()
        .iter_mut()
        .zip(b_chunks.remainder())
    {
        *dst = c_mul_fast(*dst, b);
    }
}
