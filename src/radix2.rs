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
use crate::permutation::gather;
use crate::util::scale_by_length;
use crate::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Iterative radix-2 decimation in time over a bit-reversed gather of `src`.
///
/// Twiddles are the concatenated stage tables (`N - 1` entries), already conjugated for
/// the inverse direction.
pub(crate) fn dit_radix2<T: FftSample, const N: usize, const INVERSE: bool>(
    dst: &mut [Complex<T>],
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    _: &mut [Complex<T>],
    permutation: Option<&[usize]>,
) -> bool
where
    f64: AsPrimitive<T>,
{
    let Some(permutation) = permutation else {
        return false;
    };
    if dst.len() < N || src.len() < N || permutation.len() < N || twiddles.len() + 1 < N {
        return false;
    }
    let dst = &mut dst[..N];
    gather(dst, &src[..N], &permutation[..N]);
    radix2_passes(dst, twiddles);

    if INVERSE {
        scale_by_length(dst, N);
    }
    true
}

#[inline]
pub(crate) fn radix2_passes<T: FftSample>(data: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let mut len = 2;
    let mut m_twiddles = twiddles;
    while len <= data.len() {
        let half = len / 2;
        let (stage, rest) = m_twiddles.split_at(half);
        for chunk in data.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(half);
            for ((u, v), &tw) in lo.iter_mut().zip(hi.iter_mut()).zip(stage.iter()) {
                let t = c_mul_fast(*v, tw);
                let a = *u;
                *u = a + t;
                *v = a - t;
            }
        }
        m_twiddles = rest;
        len *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codelet::TwiddleLayout;
    use crate::permutation::PermutationKind;
    use crate::util::test_support::{assert_close, naive_dft, random_signal};
    use crate::FftDirection;

    fn check<const N: usize>() {
        let input = random_signal::<f64>(N, N as u64);
        let permutation = PermutationKind::Radix2.generate(N).unwrap();
        let fwd = TwiddleLayout::Radix2Stages.prepare::<f64>(N, FftDirection::Forward).unwrap();
        let inv = TwiddleLayout::Radix2Stages.prepare::<f64>(N, FftDirection::Inverse).unwrap();

        let mut spectrum = vec![Complex::default(); N];
        assert!(dit_radix2::<f64, N, false>(
            &mut spectrum,
            &input,
            &fwd,
            &mut [],
            Some(&permutation)
        ));
        assert_close(&spectrum, &naive_dft(&input, FftDirection::Forward), 1e-12, N);

        let mut restored = vec![Complex::default(); N];
        assert!(dit_radix2::<f64, N, true>(
            &mut restored,
            &spectrum,
            &inv,
            &mut [],
            Some(&permutation)
        ));
        assert_close(&restored, &input, 1e-12, N);
    }

    #[test]
    fn test_radix2_sizes() {
        check::<2>();
        check::<8>();
        check::<32>();
        check::<256>();
    }

    #[test]
    fn test_radix2_requires_permutation() {
        let input = vec![Complex::<f32>::default(); 8];
        let tw = TwiddleLayout::Radix2Stages.prepare::<f32>(8, FftDirection::Forward).unwrap();
        let mut dst = vec![Complex::default(); 8];
        assert!(!dit_radix2::<f32, 8, false>(&mut dst, &input, &tw, &mut [], None));
        let short = [0usize, 1, 2, 3];
        assert!(!dit_radix2::<f32, 8, false>(&mut dst, &input, &tw, &mut [], Some(&short)));
    }
}
