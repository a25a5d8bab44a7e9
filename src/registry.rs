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
use crate::codelet::CodeletEntry;
use crate::{FftSample, Precision};
use num_traits::AsPrimitive;
use std::collections::BTreeMap;

/// Every leaf codelet of one precision, indexed by transform size.
///
/// Populated once by [`CodeletRegistry::build`] (or by hand in tests) and read-only after
/// that; selection never mutates it.
#[derive(Clone, Debug)]
pub struct CodeletRegistry<T> {
    entries: BTreeMap<usize, Vec<CodeletEntry<T>>>,
    count: usize,
}

impl<T> Default for CodeletRegistry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            count: 0,
        }
    }
}

impl<T: FftSample> CodeletRegistry<T>
where
    f64: AsPrimitive<T>,
{
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in codelet of `T` compiled into this build.
    pub fn build() -> Self {
        let mut registry = Self::new();
        T::register_codelets(&mut registry);
        log::debug!(
            "Built {} precision codelet registry: {} entries over sizes {:?}",
            T::PRECISION,
            registry.len(),
            registry.sizes()
        );
        registry
    }

    /// Appends `entry`.
    ///
    /// # Panics
    /// When an entry with the same signature already exists for the size, or when the
    /// entry declares a zero size.
    pub fn register(&mut self, entry: CodeletEntry<T>) {
        assert_ne!(entry.size, 0, "codelet {} declares size 0", entry.signature);
        let bucket = self.entries.entry(entry.size).or_default();
        assert!(
            bucket.iter().all(|e| e.signature != entry.signature),
            "codelet {} registered twice for size {}",
            entry.signature,
            entry.size
        );
        bucket.push(entry);
        self.count += 1;
    }

    /// Every entry registered for `size`, empty when there are none.
    pub fn get_all(&self, size: usize) -> &[CodeletEntry<T>] {
        self.entries.get(&size).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Entry of `size` carrying `signature`.
    pub fn find(&self, size: usize, signature: &str) -> Option<&CodeletEntry<T>> {
        self.get_all(size).iter().find(|e| e.signature == signature)
    }

    /// Sizes with at least one entry, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn precision(&self) -> Precision {
        T::PRECISION
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeletEntry<T>> {
        self.entries.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codelet::{KernelAlgorithm, TwiddleLayout};
    use crate::dft::dft;
    use crate::SimdLevel;

    fn dft_entry(signature: &'static str, priority: i32) -> CodeletEntry<f64> {
        CodeletEntry {
            size: 4,
            forward: dft::<f64, 4, false>,
            inverse: dft::<f64, 4, true>,
            algorithm: KernelAlgorithm::Dft,
            simd: SimdLevel::Scalar,
            permutation: None,
            priority,
            signature,
            twiddles: TwiddleLayout::Plain,
        }
    }

    #[test]
    fn test_register_and_query() {
        let mut registry = CodeletRegistry::<f64>::new();
        assert!(registry.is_empty());
        registry.register(dft_entry("a", 1));
        registry.register(dft_entry("b", 2));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_all(4).len(), 2);
        assert!(registry.get_all(8).is_empty());
        assert_eq!(registry.sizes(), vec![4]);
        assert_eq!(registry.find(4, "b").map(|e| e.priority), Some(2));
        assert_eq!(registry.precision(), Precision::Double);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_signature_panics() {
        let mut registry = CodeletRegistry::<f64>::new();
        registry.register(dft_entry("a", 1));
        registry.register(dft_entry("a", 3));
    }

    #[test]
    fn test_built_registry_signatures_are_unique() {
        let registry = CodeletRegistry::<f32>::build();
        assert!(!registry.is_empty());
        for size in registry.sizes() {
            let entries = registry.get_all(size);
            for (i, a) in entries.iter().enumerate() {
                assert_eq!(a.size, size);
                for b in entries[i + 1..].iter() {
                    assert_ne!(a.signature, b.signature, "size {size}");
                }
            }
        }
        assert_eq!(registry.iter().count(), registry.len());
    }
}
