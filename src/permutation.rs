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
use crate::util::{compute_logarithm, reverse_digits};
use std::fmt::{Display, Formatter};

/// Input reordering a decimation-in-time codelet expects.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PermutationKind {
    Identity,
    Radix2,
    Radix4,
}

impl PermutationKind {
    pub fn radix(self) -> Option<usize> {
        match self {
            PermutationKind::Identity => None,
            PermutationKind::Radix2 => Some(2),
            PermutationKind::Radix4 => Some(4),
        }
    }

    /// Produces the gather table `dst[i] = src[table[i]]` for size `n`.
    ///
    /// Returns `None` when `n` is zero or not a power of the radix.
    pub fn generate(self, n: usize) -> Option<Vec<usize>> {
        if n == 0 {
            return None;
        }
        match self.radix() {
            None => Some((0..n).collect()),
            Some(2) => {
                if !n.is_power_of_two() {
                    return None;
                }
                let bits = n.trailing_zeros();
                if bits == 0 {
                    return Some(vec![0]);
                }
                Some(
                    (0..n)
                        .map(|i| i.reverse_bits() >> (usize::BITS - bits))
                        .collect(),
                )
            }
            Some(radix) => {
                let digits = compute_logarithm(n, radix)?;
                Some((0..n).map(|i| reverse_digits(i, radix, digits)).collect())
            }
        }
    }
}

impl Display for PermutationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PermutationKind::Identity => f.write_str("identity"),
            PermutationKind::Radix2 => f.write_str("radix2"),
            PermutationKind::Radix4 => f.write_str("radix4"),
        }
    }
}

/// Checks that `table` is a permutation of `[0, table.len())`.
pub fn is_bijection(table: &[usize]) -> bool {
    let mut seen = vec![false; table.len()];
    for &idx in table {
        if idx >= table.len() || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

/// Writes `dst[i] = src[table[i]]`.
#[inline]
pub(crate) fn gather<T: Copy>(dst: &mut [T], src: &[T], table: &[usize]) {
    for (dst, &idx) in dst.iter_mut().zip(table.iter()) {
        *dst = src[idx];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix4_sixteen() {
        let table = PermutationKind::Radix4.generate(16).unwrap();
        assert_eq!(
            table,
            vec![0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]
        );
        assert_eq!(PermutationKind::Radix4.generate(4).unwrap(), vec![0, 1, 2, 3]);
        assert!(PermutationKind::Radix4.generate(8).is_none());
    }

    #[test]
    fn test_radix2_eight() {
        let table = PermutationKind::Radix2.generate(8).unwrap();
        assert_eq!(table, vec![0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(PermutationKind::Radix2.generate(1).unwrap(), vec![0]);
        assert!(PermutationKind::Radix2.generate(12).is_none());
        assert!(PermutationKind::Radix2.generate(0).is_none());
    }

    #[test]
    fn test_generated_tables_are_involutive_bijections() {
        for kind in [
            PermutationKind::Identity,
            PermutationKind::Radix2,
            PermutationKind::Radix4,
        ] {
            for exp in 0..13u32 {
                let n = 1usize << exp;
                let Some(table) = kind.generate(n) else {
                    assert_eq!(kind, PermutationKind::Radix4);
                    assert_eq!(exp % 2, 1, "radix4 must accept 2^{exp}");
                    continue;
                };
                assert_eq!(table.len(), n);
                assert!(is_bijection(&table), "{kind} table of {n} is not a bijection");
                for (i, &j) in table.iter().enumerate() {
                    assert_eq!(table[j], i, "{kind} applied twice must restore index {i} for {n}");
                }
            }
        }
    }

    #[test]
    fn test_bijection_rejects() {
        assert!(is_bijection(&[]));
        assert!(is_bijection(&[2, 0, 1]));
        assert!(!is_bijection(&[0, 0, 1]));
        assert!(!is_bijection(&[0, 3, 1]));
    }

    #[test]
    fn test_gather() {
        let src = [10, 11, 12, 13];
        let mut dst = [0; 4];
        gather(&mut dst, &src, &[0, 2, 1, 3]);
        assert_eq!(dst, [10, 12, 11, 13]);
    }
}
