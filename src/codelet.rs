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
use crate::permutation::PermutationKind;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftError, FftSample, SimdLevel};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::fmt::{Display, Formatter};

/// Leaf transform contract.
///
/// Arguments are destination, source, prepared twiddle table, scratch and an optional
/// permutation table. Every buffer must hold at least the codelet size. A codelet returns
/// `false` instead of panicking when a buffer is too short or when a permutation it relies
/// on is missing.
pub type CodeletFn<T> = fn(
    dst: &mut [Complex<T>],
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    scratch: &mut [Complex<T>],
    permutation: Option<&[usize]>,
) -> bool;

/// Algorithm family of a codelet or of a composed plan node.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum KernelAlgorithm {
    Dft,
    Butterfly,
    Dit,
    MixedRadix,
    SixStep,
}

impl Display for KernelAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelAlgorithm::Dft => f.write_str("dft"),
            KernelAlgorithm::Butterfly => f.write_str("butterfly"),
            KernelAlgorithm::Dit => f.write_str("dit"),
            KernelAlgorithm::MixedRadix => f.write_str("mixed-radix"),
            KernelAlgorithm::SixStep => f.write_str("six-step"),
        }
    }
}

/// Priority convention: generic fallback lowest, then size specialised scalar kernels,
/// then every vector tier.
pub mod priority {
    pub const DFT: i32 = 0;
    pub const DIT_RADIX2: i32 = 5;
    pub const DIT_RADIX4: i32 = 6;
    pub const BUTTERFLY: i32 = 10;
    pub const AVX2: i32 = 20;
    pub const NEON: i32 = 20;
}

/// Shape of the coefficient table a codelet or glue step consumes.
///
/// `prepare` is a pure function of `(layout, n, direction)`, which is what makes the twiddle
/// cache safe to populate redundantly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TwiddleLayout {
    None,
    /// `W_n^k` for `k < n`.
    Plain,
    /// Concatenated radix-2 stage tables, `W_len^k` for `k < len / 2`, `len = 2, 4, .., n`.
    Radix2Stages,
    /// Concatenated radix-4 stage tables, triples `W_len^k, W_len^2k, W_len^3k` for
    /// `k < len / 4`, `len = 4, 16, .., n`.
    Radix4Stages,
    /// Radix-2 stage tables where every stage of at least `lanes` butterflies stores blocks of
    /// `lanes` broadcast real parts `(re, re)` followed by `lanes` broadcast imaginary parts
    /// `(im, im)`. Shorter stages stay plain.
    Radix2Packed { lanes: usize },
    /// Glue table of a two-factor pass, indexed `j2 * n1 + k1`.
    MixedRadix { n1: usize, n2: usize },
    /// Glue table of a six-step pass, indexed `k1 * n2 + j2`.
    SixStep { n1: usize, n2: usize },
}

impl TwiddleLayout {
    /// Number of elements `prepare` produces for size `n`.
    pub fn len(&self, n: usize) -> usize {
        match *self {
            TwiddleLayout::None => 0,
            TwiddleLayout::Plain => n,
            TwiddleLayout::Radix2Stages | TwiddleLayout::Radix4Stages => n.saturating_sub(1),
            TwiddleLayout::Radix2Packed { lanes } => {
                let mut total = 0usize;
                let mut half = 1usize;
                while half < n {
                    total += if half >= lanes { half * 2 } else { half };
                    half *= 2;
                }
                total
            }
            TwiddleLayout::MixedRadix { n1, n2 } | TwiddleLayout::SixStep { n1, n2 } => n1 * n2,
        }
    }

    pub fn is_empty(&self, n: usize) -> bool {
        self.len(n) == 0
    }

    /// Computes the table for size `n` in `direction`.
    ///
    /// Inverse tables are the conjugates of the forward ones; codelets never conjugate on
    /// their own.
    pub fn prepare<T: FftSample>(
        &self,
        n: usize,
        direction: FftDirection,
    ) -> Result<Vec<Complex<T>>, FftError>
    where
        f64: AsPrimitive<T>,
    {
        let required = self.len(n);
        let mut twiddles = Vec::new();
        twiddles
            .try_reserve_exact(required)
            .map_err(|_| FftError::OutOfMemory(required))?;
        match *self {
            TwiddleLayout::None => {}
            TwiddleLayout::Plain => {
                for k in 0..n {
                    twiddles.push(compute_twiddle(k, n, direction));
                }
            }
            TwiddleLayout::Radix2Stages => {
                let mut len = 2;
                while len <= n {
                    for k in 0..len / 2 {
                        twiddles.push(compute_twiddle(k, len, direction));
                    }
                    len *= 2;
                }
            }
            TwiddleLayout::Radix4Stages => {
                let mut len = 4;
                while len <= n {
                    for k in 0..len / 4 {
                        twiddles.push(compute_twiddle(k, len, direction));
                        twiddles.push(compute_twiddle(2 * k, len, direction));
                        twiddles.push(compute_twiddle(3 * k, len, direction));
                    }
                    len *= 4;
                }
            }
            TwiddleLayout::Radix2Packed { lanes } => {
                let mut len = 2;
                while len <= n {
                    let half = len / 2;
                    if half >= lanes {
                        for block in (0..half).step_by(lanes) {
                            for k in block..block + lanes {
                                let w: Complex<T> = compute_twiddle(k, len, direction);
                                twiddles.push(Complex::new(w.re, w.re));
                            }
                            for k in block..block + lanes {
                                let w: Complex<T> = compute_twiddle(k, len, direction);
                                twiddles.push(Complex::new(w.im, w.im));
                            }
                        }
                    } else {
                        for k in 0..half {
                            twiddles.push(compute_twiddle(k, len, direction));
                        }
                    }
                    len *= 2;
                }
            }
            TwiddleLayout::MixedRadix { n1, n2 } => {
                let len = n1 * n2;
                for j2 in 0..n2 {
                    for k1 in 0..n1 {
                        twiddles.push(compute_twiddle(j2 * k1, len, direction));
                    }
                }
            }
            TwiddleLayout::SixStep { n1, n2 } => {
                let len = n1 * n2;
                for k1 in 0..n1 {
                    for j2 in 0..n2 {
                        twiddles.push(compute_twiddle(k1 * j2, len, direction));
                    }
                }
            }
        }
        Ok(twiddles)
    }
}

/// One registered implementation of a fixed-size transform.
#[derive(Clone, Copy)]
pub struct CodeletEntry<T> {
    pub size: usize,
    pub forward: CodeletFn<T>,
    pub inverse: CodeletFn<T>,
    pub algorithm: KernelAlgorithm,
    pub simd: SimdLevel,
    /// Input reordering the codelet expects the caller to supply, `None` when it needs none.
    pub permutation: Option<PermutationKind>,
    /// Higher wins.
    pub priority: i32,
    /// Unique per size, doubles as the twiddle cache key.
    pub signature: &'static str,
    pub twiddles: TwiddleLayout,
}

impl<T> CodeletEntry<T> {
    pub fn function(&self, direction: FftDirection) -> CodeletFn<T> {
        match direction {
            FftDirection::Forward => self.forward,
            FftDirection::Inverse => self.inverse,
        }
    }

    pub fn twiddle_len(&self) -> usize {
        self.twiddles.len(self.size)
    }
}

impl<T> std::fmt::Debug for CodeletEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeletEntry")
            .field("size", &self.size)
            .field("algorithm", &self.algorithm)
            .field("simd", &self.simd)
            .field("permutation", &self.permutation)
            .field("priority", &self.priority)
            .field("signature", &self.signature)
            .field("twiddles", &self.twiddles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_lengths_match_prepared() {
        let layouts = [
            TwiddleLayout::None,
            TwiddleLayout::Plain,
            TwiddleLayout::Radix2Stages,
            TwiddleLayout::Radix2Packed { lanes: 2 },
            TwiddleLayout::Radix2Packed { lanes: 4 },
        ];
        for layout in layouts {
            for n in [1usize, 2, 4, 8, 64, 512] {
                let table: Vec<Complex<f64>> = layout.prepare(n, FftDirection::Forward).unwrap();
                assert_eq!(table.len(), layout.len(n), "{layout:?} size {n}");
            }
        }
        for n in [1usize, 4, 16, 256] {
            let table: Vec<Complex<f32>> =
                TwiddleLayout::Radix4Stages.prepare(n, FftDirection::Inverse).unwrap();
            assert_eq!(table.len(), n - 1);
        }
        let glue = TwiddleLayout::MixedRadix { n1: 4, n2: 8 };
        let table: Vec<Complex<f64>> = glue.prepare(32, FftDirection::Forward).unwrap();
        assert_eq!(table.len(), 32);
    }

    #[test]
    fn test_inverse_is_conjugate() {
        let fwd: Vec<Complex<f64>> = TwiddleLayout::Plain.prepare(12, FftDirection::Forward).unwrap();
        let inv: Vec<Complex<f64>> = TwiddleLayout::Plain.prepare(12, FftDirection::Inverse).unwrap();
        for (a, b) in fwd.iter().zip(inv.iter()) {
            assert_eq!(a.conj(), *b);
        }
    }

    #[test]
    fn test_glue_layout_orders() {
        let mixed: Vec<Complex<f64>> =
            TwiddleLayout::MixedRadix { n1: 4, n2: 8 }.prepare(32, FftDirection::Forward).unwrap();
        let six: Vec<Complex<f64>> =
            TwiddleLayout::SixStep { n1: 4, n2: 8 }.prepare(32, FftDirection::Forward).unwrap();
        for k1 in 0..4 {
            for j2 in 0..8 {
                assert_eq!(mixed[j2 * 4 + k1], six[k1 * 8 + j2]);
            }
        }
    }

    #[test]
    fn test_packed_layout_broadcasts() {
        let packed: Vec<Complex<f64>> =
            TwiddleLayout::Radix2Packed { lanes: 2 }.prepare(8, FftDirection::Forward).unwrap();
        let plain: Vec<Complex<f64>> = TwiddleLayout::Radix2Stages.prepare(8, FftDirection::Forward).unwrap();
        // stage len 2 is plain, len 4 and len 8 are packed in blocks of two
        assert_eq!(packed[0], plain[0]);
        assert_eq!(packed[1], Complex::new(plain[1].re, plain[1].re));
        assert_eq!(packed[3], Complex::new(plain[1].im, plain[1].im));
        assert_eq!(packed[4], Complex::new(plain[2].im, plain[2].im));
        assert_eq!(packed[5], Complex::new(plain[3].re, plain[3].re));
        assert_eq!(packed.len(), 1 + 4 + 8);
    }
}
