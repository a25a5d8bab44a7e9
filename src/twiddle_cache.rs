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
use crate::codelet::TwiddleLayout;
use crate::permutation::{PermutationKind, is_bijection};
use crate::{FftDirection, FftError, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

const SHARDS: usize = 16;

/// Identity of a prepared coefficient table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TwiddleKey {
    pub size: usize,
    pub direction: FftDirection,
    /// Signature of the codelet or glue step that consumes the table.
    pub signature: Cow<'static, str>,
}

impl Display for TwiddleKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}({}, {})",
            self.signature, self.size, self.direction
        ))
    }
}

type TwiddleShard<T> = RwLock<HashMap<TwiddleKey, Arc<[Complex<T>]>>>;

/// Process-lifetime memo of twiddle and permutation tables.
///
/// Lookups take a shard read lock only. On a miss the table is computed outside any lock
/// and inserted if absent, so concurrent callers racing on one key may compute it twice
/// but always observe the same data afterwards.
pub struct TwiddleCache<T> {
    shards: [TwiddleShard<T>; SHARDS],
    permutations: RwLock<HashMap<(usize, PermutationKind), Arc<[usize]>>>,
}

impl<T> Default for TwiddleCache<T> {
    fn default() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(HashMap::new())),
            permutations: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> std::fmt::Debug for TwiddleCache<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwiddleCache")
            .field("twiddles", &self.len())
            .field("permutations", &self.permutation_count())
            .finish()
    }
}

impl<T> TwiddleCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached coefficient tables.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cached permutation tables.
    pub fn permutation_count(&self) -> usize {
        self.permutations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn shard(&self, key: &TwiddleKey) -> &TwiddleShard<T> {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) % SHARDS]
    }

    /// Permutation table of `kind` for size `n`, generated on first request.
    ///
    /// # Panics
    /// When the generator produces a table that is not a bijection of `[0, n)`.
    pub fn permutation(&self, n: usize, kind: PermutationKind) -> Result<Arc<[usize]>, FftError> {
        if let Some(found) = self
            .permutations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(n, kind))
        {
            return Ok(found.clone());
        }

        log::trace!("Permutation cache miss for {kind} of size {n}");
        let table = kind.generate(n).ok_or(FftError::UnsupportedSize(n))?;
        assert!(
            table.len() == n && is_bijection(&table),
            "{kind} permutation of size {n} is not a bijection"
        );
        let table: Arc<[usize]> = Arc::from(table);

        let mut guard = self
            .permutations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.entry((n, kind)).or_insert(table).clone())
    }
}

impl<T: FftSample> TwiddleCache<T>
where
    f64: AsPrimitive<T>,
{
    /// Table for `(size, direction, signature)`, prepared from `layout` on first request.
    ///
    /// `layout` must be the one `signature` always uses; the key does not include it.
    pub fn get(
        &self,
        size: usize,
        direction: FftDirection,
        signature: impl Into<Cow<'static, str>>,
        layout: TwiddleLayout,
    ) -> Result<Arc<[Complex<T>]>, FftError> {
        let key = TwiddleKey {
            size,
            direction,
            signature: signature.into(),
        };
        let shard = self.shard(&key);
        if let Some(found) = shard
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(found.clone());
        }

        log::trace!("Twiddle cache miss for {key}, preparing {layout:?}");
        let prepared: Arc<[Complex<T>]> = Arc::from(layout.prepare::<T>(size, direction)?);

        let mut guard = shard.write().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.entry(key).or_insert(prepared).clone())
    }
}
