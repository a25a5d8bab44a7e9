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
use crate::avx::util::{_mm256_mul_packed_pd, _mm256_mul_packed_ps, has_avx2_fma};
use crate::codelet::TwiddleLayout;
use crate::complex_fma::c_mul_fast;
use crate::permutation::gather;
use crate::util::scale_by_length;
use num_complex::Complex;
use std::arch::x86_64::*;

const F64_LANES: usize = 2;
const F32_LANES: usize = 4;

macro_rules! avx_radix2_codelet {
    ($fn_name: ident, $ty: ty, $lanes: expr, $passes: ident) => {
        /// Radix-2 decimation in time consuming the packed twiddle layout.
        ///
        /// Returns `false` on a CPU without AVX2 and FMA.
        pub(crate) fn $fn_name<const N: usize, const INVERSE: bool>(
            dst: &mut [Complex<$ty>],
            src: &[Complex<$ty>],
            twiddles: &[Complex<$ty>],
            _: &mut [Complex<$ty>],
            permutation: Option<&[usize]>,
        ) -> bool {
            let Some(permutation) = permutation else {
                return false;
            };
            if dst.len() < N
                || src.len() < N
                || permutation.len() < N
                || twiddles.len() < (TwiddleLayout::Radix2Packed { lanes: $lanes }).len(N)
                || !has_avx2_fma()
            {
                return false;
            }
            let dst = &mut dst[..N];
            gather(dst, &src[..N], &permutation[..N]);
            unsafe {
                $passes(dst, twiddles);
            }
            if INVERSE {
                scale_by_length(dst, N);
            }
            true
        }
    };
}

avx_radix2_codelet!(avx_dit_radix2_f64, f64, F64_LANES, radix2_passes_f64);
avx_radix2_codelet!(avx_dit_radix2_f32, f32, F32_LANES, radix2_passes_f32);

#[target_feature(enable = "avx2", enable = "fma")]
fn radix2_passes_f64(data: &mut [Complex<f64>], twiddles: &[Complex<f64>]) {
    let mut len = 2;
    let mut m_twiddles = twiddles;
    while len <= data.len() {
        let half = len / 2;
        if half < F64_LANES {
            let (stage, rest) = m_twiddles.split_at(half);
            scalar_pass(data, len, stage);
            m_twiddles = rest;
        } else {
            let (stage, rest) = m_twiddles.split_at(half * 2);
            for chunk in data.chunks_exact_mut(len) {
                let (lo, hi) = chunk.split_at_mut(half);
                for ((u, v), tw) in lo
                    .chunks_exact_mut(F64_LANES)
                    .zip(hi.chunks_exact_mut(F64_LANES))
                    .zip(stage.chunks_exact(F64_LANES * 2))
                {
                    unsafe {
                        let u0 = _mm256_loadu_pd(u.as_ptr().cast());
                        let u1 = _mm256_loadu_pd(v.as_ptr().cast());
                        let tw_re = _mm256_loadu_pd(tw.as_ptr().cast());
                        let tw_im = _mm256_loadu_pd(tw[F64_LANES..].as_ptr().cast());

                        let t = _mm256_mul_packed_pd(u1, tw_re, tw_im);
                        let y0 = _mm256_add_pd(u0, t);
                        let y1 = _mm256_sub_pd(u0, t);

                        _mm256_storeu_pd(u.as_mut_ptr().cast(), y0);
                        _mm256_storeu_pd(v.as_mut_ptr().cast(), y1);
                    }
                }
            }
            m_twiddles = rest;
        }
        len *= 2;
    }
}

#[target_feature(enable = "avx2", enable = "fma")]
fn radix2_passes_f32(data: &mut [Complex<f32>], twiddles: &[Complex<f32>]) {
    let mut len = 2;
    let mut m_twiddles = twiddles;
    while len <= data.len() {
        let half = len / 2;
        if half < F32_LANES {
            let (stage, rest) = m_twiddles.split_at(half);
            scalar_pass(data, len, stage);
            m_twiddles = rest;
        } else {
            let (stage, rest) = m_twiddles.split_at(half * 2);
            for chunk in data.chunks_exact_mut(len) {
                let (lo, hi) = chunk.split_at_mut(half);
                for ((u, v), tw) in lo
                    .chunks_exact_mut(F32_LANES)
                    .zip(hi.chunks_exact_mut(F32_LANES))
                    .zip(stage.chunks_exact(F32_LANES * 2))
                {
                    unsafe {
                        let u0 = _mm256_loadu_ps(u.as_ptr().cast());
                        let u1 = _mm256_loadu_ps(v.as_ptr().cast());
                        let tw_re = _mm256_loadu_ps(tw.as_ptr().cast());
                        let tw_im = _mm256_loadu_ps(tw[F32_LANES..].as_ptr().cast());

                        let t = _mm256_mul_packed_ps(u1, tw_re, tw_im);
                        let y0 = _mm256_add_ps(u0, t);
                        let y1 = _mm256_sub_ps(u0, t);

                        _mm256_storeu_ps(u.as_mut_ptr().cast(), y0);
                        _mm256_storeu_ps(v.as_mut_ptr().cast(), y1);
                    }
                }
            }
            m_twiddles = rest;
        }
        len *= 2;
    }
}

// Stages narrower than a register keep plain twiddles.
#[inline(always)]
fn scalar_pass<T: crate::FftSample>(data: &mut [Complex<T>], len: usize, stage: &[Complex<T>]) {
    let half = len / 2;
    for chunk in data.chunks_exact_mut(len) {
        let (lo, hi) = chunk.split_at_mut(half);
        for ((u, v), &tw) in lo.iter_mut().zip(hi.iter_mut()).zip(stage.iter()) {
            let t = c_mul_fast(*v, tw);
            let a = *u;
            *u = a + t;
            *v = a - t;
        }
    }
}
