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
//! Decomposition of transform lengths into registered codelet sizes.
//!
//! Planning runs in two stages. [`decompose`] is a pure search over the registry producing a
//! [`Decomposition`] tree; materialization then resolves every node against the twiddle cache
//! into an executable plan node owned by an [`FftPlan`](crate::FftPlan).

use crate::codelet::{CodeletEntry, KernelAlgorithm, TwiddleLayout};
use crate::mixed_radix::MixedRadixStep;
use crate::prime_factors::{divisors, prime_factors};
use crate::registry::CodeletRegistry;
use crate::selector::select_matching;
use crate::six_step::SixStepStep;
use crate::transpose::transpose_strategy;
use crate::twiddle_cache::TwiddleCache;
use crate::{Capabilities, FftDirection, FftError, FftSample, KernelStrategy};
use num_complex::Complex;
use num_integer::Roots;
use num_traits::AsPrimitive;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Sizes at or above this use the six-step ordering when the shape is not forced.
pub const SIX_STEP_THRESHOLD: usize = 4096;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SplitShape {
    MixedRadix,
    SixStep,
}

impl SplitShape {
    fn for_size(n: usize) -> SplitShape {
        if n >= SIX_STEP_THRESHOLD {
            SplitShape::SixStep
        } else {
            SplitShape::MixedRadix
        }
    }

    fn layout(self, n1: usize, n2: usize) -> TwiddleLayout {
        match self {
            SplitShape::MixedRadix => TwiddleLayout::MixedRadix { n1, n2 },
            SplitShape::SixStep => TwiddleLayout::SixStep { n1, n2 },
        }
    }

    /// Twiddle cache signature of the glue table.
    fn signature(self, n1: usize, n2: usize) -> String {
        match self {
            SplitShape::MixedRadix => format!("mixedradix({n1}x{n2})"),
            SplitShape::SixStep => format!("sixstep({n1}x{n2})"),
        }
    }
}

/// Result of the decomposition search for one length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// A single registered codelet.
    Direct {
        size: usize,
        signature: &'static str,
        algorithm: KernelAlgorithm,
    },
    /// `size = n1 * n2`, `first` runs the `n1` transforms, `second` the `n2` ones.
    Split {
        shape: SplitShape,
        n1: usize,
        n2: usize,
        first: Box<Decomposition>,
        second: Box<Decomposition>,
    },
}

impl Decomposition {
    pub fn size(&self) -> usize {
        match self {
            Decomposition::Direct { size, .. } => *size,
            Decomposition::Split { n1, n2, .. } => n1 * n2,
        }
    }

    pub fn algorithm(&self) -> KernelAlgorithm {
        match self {
            Decomposition::Direct { algorithm, .. } => *algorithm,
            Decomposition::Split {
                shape: SplitShape::MixedRadix,
                ..
            } => KernelAlgorithm::MixedRadix,
            Decomposition::Split {
                shape: SplitShape::SixStep,
                ..
            } => KernelAlgorithm::SixStep,
        }
    }

    /// Sizes of the leaves in execution order.
    pub fn leaf_sizes(&self) -> Vec<usize> {
        match self {
            Decomposition::Direct { size, .. } => vec![*size],
            Decomposition::Split { first, second, .. } => {
                let mut sizes = first.leaf_sizes();
                sizes.extend(second.leaf_sizes());
                sizes
            }
        }
    }

    /// Product of the inverse normalization denominators met along any input to output path.
    ///
    /// Every leaf divides by its own length and glue never rescales, so a path through a split
    /// meets one leaf of each child.
    pub fn inverse_scale_denominator(&self) -> usize {
        match self {
            Decomposition::Direct { size, .. } => *size,
            Decomposition::Split { first, second, .. } => {
                first.inverse_scale_denominator() * second.inverse_scale_denominator()
            }
        }
    }

    /// Overall factor the inverse transform applies, `1 / n` for a sound decomposition.
    pub fn inverse_scale(&self) -> f64 {
        1f64 / self.inverse_scale_denominator() as f64
    }

    pub fn depth(&self) -> usize {
        match self {
            Decomposition::Direct { .. } => 0,
            Decomposition::Split { first, second, .. } => 1 + first.depth().max(second.depth()),
        }
    }
}

impl Display for Decomposition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Decomposition::Direct {
                size, signature, ..
            } => f.write_fmt(format_args!("{signature}({size})")),
            Decomposition::Split {
                shape,
                n1,
                n2,
                first,
                second,
            } => {
                let name = match shape {
                    SplitShape::MixedRadix => "mixedradix",
                    SplitShape::SixStep => "sixstep",
                };
                f.write_fmt(format_args!("{name}({n1}x{n2})[{first}, {second}]"))
            }
        }
    }
}

/// Candidate splits `n = n1 * n2` with `1 < n1, n2 < n`, most balanced first, then mirrored.
pub(crate) fn candidate_splits(n: usize) -> Vec<(usize, usize)> {
    let root = n.sqrt();
    let lower = divisors(n)
        .into_iter()
        .filter(|&d| d > 1 && d <= root && d < n)
        .rev()
        .collect::<Vec<_>>();
    let mut pairs = lower.iter().map(|&d| (d, n / d)).collect::<Vec<_>>();
    pairs.extend(
        lower
            .iter()
            .filter(|&&d| d * d != n)
            .map(|&d| (n / d, d)),
    );
    pairs
}

fn accepts<T>(strategy: KernelStrategy, entry: &CodeletEntry<T>) -> bool {
    match strategy {
        KernelStrategy::Dft => entry.algorithm == KernelAlgorithm::Dft,
        KernelStrategy::Butterfly => entry.algorithm == KernelAlgorithm::Butterfly,
        KernelStrategy::Dit => entry.algorithm == KernelAlgorithm::Dit,
        KernelStrategy::Auto | KernelStrategy::MixedRadix | KernelStrategy::SixStep => true,
    }
}

struct Search<'a, T> {
    registry: &'a CodeletRegistry<T>,
    capabilities: Capabilities,
    strategy: KernelStrategy,
    // sizes already searched, `None` marks unsupported ones
    memo: HashMap<usize, Option<Decomposition>>,
}

impl<T: FftSample> Search<'_, T>
where
    f64: AsPrimitive<T>,
{
    fn direct(&self, n: usize) -> Option<Decomposition> {
        let strategy = self.strategy;
        select_matching(self.registry, n, self.capabilities, |entry| {
            accepts(strategy, entry)
        })
        .map(|entry| Decomposition::Direct {
            size: n,
            signature: entry.signature,
            algorithm: entry.algorithm,
        })
    }

    // Every prime factor of `n` must divide at least one usable leaf size.
    fn coverable(&self, n: usize) -> bool {
        let sizes = self
            .registry
            .sizes()
            .into_iter()
            .filter(|&size| self.direct(size).is_some())
            .collect::<Vec<_>>();
        let mut primes = prime_factors(n);
        primes.dedup();
        primes
            .iter()
            .all(|&p| sizes.iter().any(|&size| size % p == 0))
    }

    fn search(&mut self, n: usize) -> Option<Decomposition> {
        if let Some(found) = self.direct(n) {
            return Some(found);
        }
        if let Some(known) = self.memo.get(&n) {
            return known.clone();
        }
        let result = self.split(n, SplitShape::for_size(n));
        self.memo.insert(n, result.clone());
        result
    }

    fn split(&mut self, n: usize, shape: SplitShape) -> Option<Decomposition> {
        let candidates = candidate_splits(n);

        for &(n1, n2) in candidates.iter() {
            if let (Some(first), Some(second)) = (self.direct(n1), self.direct(n2)) {
                return Some(self.make_split(shape, n1, n2, first, second));
            }
        }

        for &(n1, n2) in candidates.iter() {
            let Some(first) = self.search(n1) else {
                continue;
            };
            if let Some(second) = self.search(n2) {
                return Some(self.make_split(shape, n1, n2, first, second));
            }
        }
        None
    }

    fn make_split(
        &self,
        shape: SplitShape,
        n1: usize,
        n2: usize,
        first: Decomposition,
        second: Decomposition,
    ) -> Decomposition {
        log::debug!("Splitting {} as {shape:?} {n1}x{n2}", n1 * n2);
        Decomposition::Split {
            shape,
            n1,
            n2,
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

/// Finds how to compute a transform of length `n` from the codelets in `registry` usable
/// with `capabilities`.
///
/// `Auto` prefers a direct codelet and splits otherwise; the family strategies restrict every
/// leaf to that family; `MixedRadix` and `SixStep` force the root split shape.
///
/// # Panics
/// When the found decomposition does not normalize the inverse by exactly `1 / n`.
pub fn decompose<T: FftSample>(
    registry: &CodeletRegistry<T>,
    n: usize,
    capabilities: Capabilities,
    strategy: KernelStrategy,
) -> Result<Decomposition, FftError>
where
    f64: AsPrimitive<T>,
{
    if n == 0 {
        return Err(FftError::ZeroSizedFft);
    }
    if registry.is_empty() {
        return Err(FftError::NoCodeletsRegistered(T::PRECISION));
    }

    let mut search = Search {
        registry,
        capabilities,
        strategy,
        memo: HashMap::new(),
    };

    let found = if !search.coverable(n) {
        log::debug!("Size {n} has a prime factor no usable codelet covers");
        None
    } else {
        match strategy {
            KernelStrategy::MixedRadix => search.split(n, SplitShape::MixedRadix),
            KernelStrategy::SixStep => search.split(n, SplitShape::SixStep),
            _ => search.search(n),
        }
    };

    let Some(decomposition) = found else {
        return Err(match strategy {
            KernelStrategy::Auto => FftError::UnsupportedSize(n),
            other => FftError::StrategyUnavailable(n, other),
        });
    };

    assert_eq!(
        decomposition.inverse_scale_denominator(),
        n,
        "decomposition {decomposition} does not normalize the inverse of {n} by 1/{n}"
    );
    Ok(decomposition)
}

/// Executable counterpart of a [`Decomposition`] node.
pub(crate) enum PlanNode<T: 'static> {
    Leaf(LeafStep<T>),
    MixedRadix(Box<MixedRadixStep<T>>),
    SixStep(Box<SixStepStep<T>>),
}

pub(crate) struct LeafStep<T> {
    entry: CodeletEntry<T>,
    forward_twiddles: Arc<[Complex<T>]>,
    inverse_twiddles: Arc<[Complex<T>]>,
    permutation: Option<Arc<[usize]>>,
}

impl<T: FftSample> LeafStep<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(
        &self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let twiddles = match direction {
            FftDirection::Forward => &self.forward_twiddles,
            FftDirection::Inverse => &self.inverse_twiddles,
        };
        let codelet = self.entry.function(direction);
        if codelet(dst, src, twiddles, scratch, self.permutation.as_deref()) {
            Ok(())
        } else {
            Err(FftError::CodeletRejected(self.entry.signature))
        }
    }
}

impl<T: FftSample> PlanNode<T>
where
    f64: AsPrimitive<T>,
{
    /// Resolves `decomposition` against `registry`, taking every table from `cache`.
    pub(crate) fn materialize(
        decomposition: &Decomposition,
        registry: &CodeletRegistry<T>,
        cache: &TwiddleCache<T>,
        capabilities: Capabilities,
    ) -> Result<PlanNode<T>, FftError> {
        match decomposition {
            Decomposition::Direct {
                size, signature, ..
            } => {
                let entry = *registry
                    .find(*size, signature)
                    .ok_or(FftError::UnsupportedSize(*size))?;
                let permutation = match entry.permutation {
                    Some(kind) => Some(cache.permutation(*size, kind)?),
                    None => None,
                };
                Ok(PlanNode::Leaf(LeafStep {
                    forward_twiddles: cache.get(
                        *size,
                        FftDirection::Forward,
                        entry.signature,
                        entry.twiddles,
                    )?,
                    inverse_twiddles: cache.get(
                        *size,
                        FftDirection::Inverse,
                        entry.signature,
                        entry.twiddles,
                    )?,
                    entry,
                    permutation,
                }))
            }
            Decomposition::Split {
                shape,
                n1,
                n2,
                first,
                second,
            } => {
                let (n1, n2) = (*n1, *n2);
                let n = n1 * n2;
                let first = Self::materialize(first, registry, cache, capabilities)?;
                let second = Self::materialize(second, registry, cache, capabilities)?;
                let layout = shape.layout(n1, n2);
                let signature = shape.signature(n1, n2);
                let forward_twiddles =
                    cache.get(n, FftDirection::Forward, signature.clone(), layout)?;
                let inverse_twiddles = cache.get(n, FftDirection::Inverse, signature, layout)?;
                Ok(match shape {
                    SplitShape::MixedRadix => PlanNode::MixedRadix(Box::new(MixedRadixStep {
                        n1,
                        n2,
                        first,
                        second,
                        forward_twiddles,
                        inverse_twiddles,
                        arith: T::complex_arith(capabilities),
                    })),
                    SplitShape::SixStep => PlanNode::SixStep(Box::new(SixStepStep {
                        n1,
                        n2,
                        first,
                        second,
                        forward_twiddles,
                        inverse_twiddles,
                        columns_executor: transpose_strategy(n2, n1),
                        rows_executor: transpose_strategy(n1, n2),
                    })),
                })
            }
        }
    }

    pub(crate) fn length(&self) -> usize {
        match self {
            PlanNode::Leaf(leaf) => leaf.entry.size,
            PlanNode::MixedRadix(step) => step.length(),
            PlanNode::SixStep(step) => step.length(),
        }
    }

    pub(crate) fn scratch_length(&self) -> usize {
        match self {
            PlanNode::Leaf(leaf) => leaf.entry.size,
            PlanNode::MixedRadix(step) => step.scratch_length(),
            PlanNode::SixStep(step) => step.scratch_length(),
        }
    }

    /// Writes the transform of `src[..length]` into `dst[..length]`.
    pub(crate) fn execute(
        &self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        match self {
            PlanNode::Leaf(leaf) => leaf.execute(dst, src, scratch, direction),
            PlanNode::MixedRadix(step) => step.execute(dst, src, scratch, direction),
            PlanNode::SixStep(step) => step.execute(dst, src, scratch, direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeletFactory;
    use crate::util::test_support::{assert_close, naive_dft, random_signal};

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            candidate_splits(24),
            vec![(4, 6), (3, 8), (2, 12), (6, 4), (8, 3), (12, 2)]
        );
        assert_eq!(candidate_splits(16), vec![(4, 4), (2, 8), (8, 2)]);
        assert!(candidate_splits(17).is_empty());
        assert!(candidate_splits(1).is_empty());
    }

    #[test]
    fn test_direct_sizes_stay_direct() {
        let registry = f64::default_registry();
        let d = decompose(registry, 16, Capabilities::NONE, KernelStrategy::Auto).unwrap();
        assert_eq!(d.to_string(), "bf16_scalar(16)");
        assert_eq!(d.depth(), 0);
    }

    #[test]
    fn test_split_shapes() {
        let registry = f64::default_registry();
        let d = decompose(registry, 1024, Capabilities::NONE, KernelStrategy::Auto).unwrap();
        assert_eq!(d.algorithm(), KernelAlgorithm::MixedRadix);
        assert_eq!(d.to_string(), "mixedradix(32x32)[dit_radix2_scalar(32), dit_radix2_scalar(32)]");

        let d = decompose(registry, 8192, Capabilities::NONE, KernelStrategy::Auto).unwrap();
        assert_eq!(d.algorithm(), KernelAlgorithm::SixStep);
        assert_eq!(d.leaf_sizes(), vec![64, 128]);

        let d = decompose(registry, 1024, Capabilities::NONE, KernelStrategy::SixStep).unwrap();
        assert_eq!(d.algorithm(), KernelAlgorithm::SixStep);

        let d = decompose(registry, 16, Capabilities::NONE, KernelStrategy::MixedRadix).unwrap();
        assert_eq!(d.to_string(), "mixedradix(4x4)[bf4_scalar(4), bf4_scalar(4)]");
    }

    #[test]
    fn test_scale_denominator_matches_length() {
        let registry = f32::default_registry();
        for n in [6usize, 15, 24, 100, 360, 1000, 1 << 12, 1 << 15, 3 * 5 * 7 * 16] {
            let d = decompose(registry, n, Capabilities::NONE, KernelStrategy::Auto).unwrap();
            assert_eq!(d.inverse_scale_denominator(), n, "{d}");
            assert_eq!(d.leaf_sizes().iter().product::<usize>(), n, "{d}");
            assert!((d.inverse_scale() * n as f64 - 1.).abs() < 1e-15);
        }
    }

    #[test]
    fn test_failures() {
        let registry = f64::default_registry();
        assert_eq!(
            decompose(registry, 17, Capabilities::NONE, KernelStrategy::Auto),
            Err(FftError::UnsupportedSize(17))
        );
        assert_eq!(
            decompose(registry, 0, Capabilities::NONE, KernelStrategy::Auto),
            Err(FftError::ZeroSizedFft)
        );
        assert_eq!(
            decompose(registry, 13, Capabilities::NONE, KernelStrategy::SixStep),
            Err(FftError::StrategyUnavailable(13, KernelStrategy::SixStep))
        );
        assert_eq!(
            decompose(registry, 7, Capabilities::NONE, KernelStrategy::Dit),
            Err(FftError::StrategyUnavailable(7, KernelStrategy::Dit))
        );
        let empty = CodeletRegistry::<f64>::new();
        assert_eq!(
            decompose(&empty, 8, Capabilities::NONE, KernelStrategy::Auto),
            Err(FftError::NoCodeletsRegistered(crate::Precision::Double))
        );
    }

    #[test]
    fn test_family_restricts_every_leaf() {
        let registry = f64::default_registry();
        let d = decompose(registry, 4096, Capabilities::NONE, KernelStrategy::Dft).unwrap();
        assert!(d.to_string().matches("dft_generic").count() >= 2, "{d}");
        assert!(!d.to_string().contains("bf"), "{d}");
    }

    fn run_node<T: FftSample>(n: usize, strategy: KernelStrategy, tolerance: f64)
    where
        f64: AsPrimitive<T>,
    {
        let registry = T::default_registry();
        let cache = TwiddleCache::<T>::new();
        let caps = Capabilities::detect();
        let d = decompose(registry, n, caps, strategy).unwrap();
        let node = PlanNode::materialize(&d, registry, &cache, caps).unwrap();
        assert_eq!(node.length(), n);
        let input = random_signal::<T>(n, n as u64);
        let mut output = vec![Complex::<T>::default(); n];
        let mut scratch = vec![Complex::<T>::default(); node.scratch_length()];
        node.execute(&mut output, &input, &mut scratch, FftDirection::Forward)
            .unwrap();
        assert_close(&output, &naive_dft(&input, FftDirection::Forward), tolerance, n);

        let mut short = vec![Complex::<T>::default(); node.scratch_length() - 1];
        if !matches!(node, PlanNode::Leaf(_)) {
            assert!(matches!(
                node.execute(&mut output, &input, &mut short, FftDirection::Forward),
                Err(FftError::ScratchBufferIsTooSmall(_, _))
            ));
        }
    }

    #[test]
    fn test_composed_nodes_match_naive() {
        run_node::<f64>(12, KernelStrategy::MixedRadix, 1e-12);
        run_node::<f64>(60, KernelStrategy::Auto, 1e-12);
        run_node::<f64>(64, KernelStrategy::SixStep, 1e-12);
        run_node::<f64>(9 * 25, KernelStrategy::Auto, 1e-11);
        run_node::<f32>(48, KernelStrategy::SixStep, 1e-4);
        run_node::<f32>(2048, KernelStrategy::Auto, 1e-4);
    }
}
