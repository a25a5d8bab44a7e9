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
use crate::neon::util::{mul_complex_f32, mul_complex_f64, mulh_complex_f32};
use crate::permutation::gather;
use crate::util::scale_by_length;
use num_complex::Complex;
use std::arch::aarch64::*;

/// Radix-2 decimation in time over the plain stage tables, one `f64` complex per register.
pub(crate) fn neon_dit_radix2_f64<const N: usize, const INVERSE: bool>(
    dst: &mut [Complex<f64>],
    src: &[Complex<f64>],
    twiddles: &[Complex<f64>],
    _: &mut [Complex<f64>],
    permutation: Option<&[usize]>,
) -> bool {
    let Some(permutation) = permutation else {
        return false;
    };
    if dst.len() < N || src.len() < N || permutation.len() < N || twiddles.len() + 1 < N {
        return false;
    }
    let dst = &mut dst[..N];
    gather(dst, &src[..N], &permutation[..N]);

    let mut len = 2;
    let mut m_twiddles = twiddles;
    while len <= N {
        let half = len / 2;
        let (stage, rest) = m_twiddles.split_at(half);
        for chunk in dst.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(half);
            for ((u, v), tw) in lo.iter_mut().zip(hi.iter_mut()).zip(stage.iter()) {
                let pu: *mut Complex<f64> = u;
                let pv: *mut Complex<f64> = v;
                let pw: *const Complex<f64> = tw;
                unsafe {
                    let u0 = vld1q_f64(pu.cast::<f64>());
                    let u1 = vld1q_f64(pv.cast::<f64>());
                    let t = mul_complex_f64(u1, vld1q_f64(pw.cast()));
                    vst1q_f64(pu.cast(), vaddq_f64(u0, t));
                    vst1q_f64(pv.cast(), vsubq_f64(u0, t));
                }
            }
        }
        m_twiddles = rest;
        len *= 2;
    }

    if INVERSE {
        scale_by_length(dst, N);
    }
    true
}

/// Radix-2 decimation in time over the plain stage tables, two `f32` complexes per register.
pub(crate) fn neon_dit_radix2_f32<const N: usize, const INVERSE: bool>(
    dst: &mut [Complex<f32>],
    src: &[Complex<f32>],
    twiddles: &[Complex<f32>],
    _: &mut [Complex<f32>],
    permutation: Option<&[usize]>,
) -> bool {
    let Some(permutation) = permutation else {
        return false;
    };
    if dst.len() < N || src.len() < N || permutation.len() < N || twiddles.len() + 1 < N {
        return false;
    }
    let dst = &mut dst[..N];
    gather(dst, &src[..N], &permutation[..N]);

    let mut len = 2;
    let mut m_twiddles = twiddles;
    while len <= N {
        let half = len / 2;
        let (stage, rest) = m_twiddles.split_at(half);
        for chunk in dst.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(half);
            if half == 1 {
                unsafe {
                    let u0 = vld1_f32(lo.as_ptr().cast());
                    let u1 = vld1_f32(hi.as_ptr().cast());
                    let t = mulh_complex_f32(u1, vld1_f32(stage.as_ptr().cast()));
                    vst1_f32(lo.as_mut_ptr().cast(), vadd_f32(u0, t));
                    vst1_f32(hi.as_mut_ptr().cast(), vsub_f32(u0, t));
                }
                continue;
            }
            for ((u, v), tw) in lo
                .chunks_exact_mut(2)
                .zip(hi.chunks_exact_mut(2))
                .zip(stage.chunks_exact(2))
            {
                unsafe {
                    let u0 = vld1q_f32(u.as_ptr().cast());
                    let u1 = vld1q_f32(v.as_ptr().cast());
                    let t = mul_complex_f32(u1, vld1q_f32(tw.as_ptr().cast()));
                    vst1q_f32(u.as_mut_ptr().cast(), vaddq_f32(u0, t));
                    vst1q_f32(v.as_mut_ptr().cast(), vsubq_f32(u0, t));
                }
            }
        }
        m_twiddles = rest;
        len *= 2;
    }

    if INVERSE {
        scale_by_length(dst, N);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FftDirection;
    use crate::codelet::TwiddleLayout;
    use crate::permutation::PermutationKind;
    use crate::util::test_support::{assert_close, naive_dft, random_signal};

    #[test]
    fn test_neon_radix2() {
        fn check<const N: usize>() {
            let permutation = PermutationKind::Radix2.generate(N).unwrap();
            let input = random_signal::<f64>(N, 31 + N as u64);
            let fwd = TwiddleLayout::Radix2Stages.prepare::<f64>(N, FftDirection::Forward).unwrap();
            let mut spectrum = vec![Complex::default(); N];
            assert!(neon_dit_radix2_f64::<N, false>(
                &mut spectrum,
                &input,
                &fwd,
                &mut [],
                Some(&permutation)
            ));
            assert_close(&spectrum, &naive_dft(&input, FftDirection::Forward), 1e-12, N);

            let input = random_signal::<f32>(N, 32 + N as u64);
            let fwd = TwiddleLayout::Radix2Stages.prepare::<f32>(N, FftDirection::Forward).unwrap();
            let inv = TwiddleLayout::Radix2Stages.prepare::<f32>(N, FftDirection::Inverse).unwrap();
            let mut spectrum = vec![Complex::default(); N];
            assert!(neon_dit_radix2_f32::<N, false>(
                &mut spectrum,
                &input,
                &fwd,
                &mut [],
                Some(&permutation)
            ));
            assert_close(&spectrum, &naive_dft(&input, FftDirection::Forward), 1e-5, N);
            let mut restored = vec![Complex::default(); N];
            assert!(neon_dit_radix2_f32::<N, true>(
                &mut restored,
                &spectrum,
                &inv,
                &mut [],
                Some(&permutation)
            ));
            assert_close(&restored, &input, 1e-5, N);
        }
        check::<2>();
        check::<4>();
        check::<128>();
    }
}
