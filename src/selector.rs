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
//! Capability-gated choice of a single codelet per size.
//!
//! Selection is a pure function of the registry, the size and the capability set: the
//! qualifying entry with the highest priority wins, ties go to the lexicographically smaller
//! signature.

use crate::codelet::CodeletEntry;
use crate::registry::CodeletRegistry;
use crate::{Capabilities, FftSample};
use num_traits::AsPrimitive;
use std::cmp::Ordering;

/// Best entry for `size` whose tier is supported by `capabilities`.
pub fn select<T: FftSample>(
    registry: &CodeletRegistry<T>,
    size: usize,
    capabilities: Capabilities,
) -> Option<&CodeletEntry<T>>
where
    f64: AsPrimitive<T>,
{
    select_matching(registry, size, capabilities, |_| true)
}

/// Same as [`select`], restricted to entries accepted by `filter`.
pub fn select_matching<T: FftSample>(
    registry: &CodeletRegistry<T>,
    size: usize,
    capabilities: Capabilities,
    filter: impl Fn(&CodeletEntry<T>) -> bool,
) -> Option<&CodeletEntry<T>>
where
    f64: AsPrimitive<T>,
{
    let chosen = registry
        .get_all(size)
        .iter()
        .filter(|entry| capabilities.has(entry.simd.required()))
        .filter(|entry| filter(*entry))
        .max_by(|a, b| rank(a, b));
    match chosen {
        Some(entry) => log::trace!(
            "Selected {} (priority {}) for size {size} with {capabilities}",
            entry.signature,
            entry.priority
        ),
        None => log::trace!("No codelet qualifies for size {size} with {capabilities}"),
    }
    chosen
}

fn rank<T>(a: &CodeletEntry<T>, b: &CodeletEntry<T>) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| b.signature.cmp(a.signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codelet::{KernelAlgorithm, TwiddleLayout};
    use crate::dft::dft;
    use crate::SimdLevel;

    fn entry(signature: &'static str, priority: i32, simd: SimdLevel) -> CodeletEntry<f64> {
        CodeletEntry {
            size: 8,
            forward: dft::<f64, 8, false>,
            inverse: dft::<f64, 8, true>,
            algorithm: KernelAlgorithm::Dft,
            simd,
            permutation: None,
            priority,
            signature,
            twiddles: TwiddleLayout::Plain,
        }
    }

    fn registry() -> CodeletRegistry<f64> {
        let mut registry = CodeletRegistry::new();
        registry.register(entry("scalar_low", 1, SimdLevel::Scalar));
        registry.register(entry("scalar_tie_b", 5, SimdLevel::Scalar));
        registry.register(entry("scalar_tie_a", 5, SimdLevel::Scalar));
        registry.register(entry("avx2", 20, SimdLevel::Avx2));
        registry.register(entry("neon", 30, SimdLevel::Neon));
        registry
    }

    #[test]
    fn test_selection_respects_capabilities() {
        let registry = registry();
        let scalar = select(&registry, 8, Capabilities::NONE).unwrap();
        assert_eq!(scalar.signature, "scalar_tie_a");
        let x86 = Capabilities::SSE2
            .union(Capabilities::AVX2)
            .union(Capabilities::FMA);
        assert_eq!(select(&registry, 8, x86).unwrap().signature, "avx2");
        // AVX2 without FMA does not satisfy the tier
        assert_eq!(
            select(&registry, 8, Capabilities::AVX2).unwrap().signature,
            "scalar_tie_a"
        );
        assert_eq!(
            select(&registry, 8, Capabilities::NEON).unwrap().signature,
            "neon"
        );
        assert!(select(&registry, 16, x86).is_none());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let registry = registry();
        let caps = Capabilities::AVX2.union(Capabilities::FMA);
        let first = select(&registry, 8, caps).map(|e| e.signature);
        for _ in 0..32 {
            assert_eq!(select(&registry, 8, caps).map(|e| e.signature), first);
        }
    }

    #[test]
    fn test_adding_capabilities_never_lowers_priority() {
        let registry = CodeletRegistry::<f64>::build();
        let ladder = [
            Capabilities::NONE,
            Capabilities::SSE2,
            Capabilities::SSE2.union(Capabilities::AVX),
            Capabilities::SSE2
                .union(Capabilities::AVX)
                .union(Capabilities::AVX2),
            Capabilities::SSE2
                .union(Capabilities::AVX)
                .union(Capabilities::AVX2)
                .union(Capabilities::FMA),
            Capabilities::NEON,
            Capabilities::NEON.union(Capabilities::FCMA),
        ];
        for size in registry.sizes() {
            for pair in ladder.windows(2) {
                if !pair[1].has(pair[0]) {
                    continue;
                }
                let before = select(&registry, size, pair[0]).map(|e| e.priority);
                let after = select(&registry, size, pair[1]).map(|e| e.priority);
                assert!(after >= before, "size {size}: {before:?} -> {after:?}");
            }
        }
    }

    #[test]
    fn test_family_filter() {
        let registry = CodeletRegistry::<f32>::build();
        let dft = select_matching(&registry, 16, Capabilities::NONE, |e| {
            e.algorithm == KernelAlgorithm::Dft
        })
        .unwrap();
        assert_eq!(dft.signature, "dft_generic");
        let best = select(&registry, 16, Capabilities::NONE).unwrap();
        assert_eq!(best.signature, "bf16_scalar");
    }
}
