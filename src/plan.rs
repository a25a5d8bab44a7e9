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
use crate::codelet::KernelAlgorithm;
use crate::err::try_vec;
use crate::planner::{Decomposition, PlanNode, decompose};
use crate::registry::CodeletRegistry;
use crate::twiddle_cache::TwiddleCache;
use crate::{Capabilities, FftDirection, FftError, FftSample, Precision};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::fmt::{Display, Formatter};

/// Preferred algorithm family of a plan.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum KernelStrategy {
    /// Best direct codelet, decomposition when there is none.
    #[default]
    Auto,
    /// Only generic DFT leaves.
    Dft,
    /// Only hand-unrolled butterfly leaves.
    Butterfly,
    /// Only decimation-in-time leaves.
    Dit,
    /// Two-factor split at the root even when a direct codelet exists.
    MixedRadix,
    /// Six-step split at the root even when a direct codelet exists.
    SixStep,
}

impl Display for KernelStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelStrategy::Auto => f.write_str("auto"),
            KernelStrategy::Dft => f.write_str("dft"),
            KernelStrategy::Butterfly => f.write_str("butterfly"),
            KernelStrategy::Dit => f.write_str("dit"),
            KernelStrategy::MixedRadix => f.write_str("mixed-radix"),
            KernelStrategy::SixStep => f.write_str("six-step"),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PlanOptions {
    pub strategy: KernelStrategy,
    /// Overrides the capability set of the planner context for this plan.
    pub capabilities: Option<Capabilities>,
}

/// Registry, capability set and twiddle cache a plan is built against.
#[derive(Debug)]
pub struct PlannerContext<'a, T> {
    pub registry: &'a CodeletRegistry<T>,
    pub capabilities: Capabilities,
    pub cache: &'a TwiddleCache<T>,
}

impl<T: FftSample> PlannerContext<'static, T>
where
    f64: AsPrimitive<T>,
{
    /// Process-wide registry and cache with the detected capabilities.
    pub fn process_default() -> Self {
        PlannerContext {
            registry: T::default_registry(),
            capabilities: Capabilities::detect(),
            cache: T::default_twiddle_cache(),
        }
    }
}

impl<T> Clone for PlannerContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PlannerContext<'_, T> {}

/// Consumer contract shared by host plans and alternate backends.
pub trait TransformPlan<T> {
    fn length(&self) -> usize;

    fn precision(&self) -> Precision;

    /// Writes the forward transform of `src[..length]` into `dst[..length]`.
    fn forward(&mut self, dst: &mut [Complex<T>], src: &[Complex<T>]) -> Result<(), FftError>;

    /// Writes the `1 / length` normalized inverse transform of `src[..length]` into
    /// `dst[..length]`.
    fn inverse(&mut self, dst: &mut [Complex<T>], src: &[Complex<T>]) -> Result<(), FftError>;
}

/// Transform of one fixed length.
///
/// All storage is allocated on construction; execution never allocates. A plan is not meant
/// to be shared between concurrent callers, which `&mut self` on every execution method
/// enforces. Build one plan per thread instead: the expensive tables live in the shared
/// twiddle cache.
pub struct FftPlan<T: 'static> {
    length: usize,
    root: PlanNode<T>,
    decomposition: Decomposition,
    capabilities: Capabilities,
    strategy: KernelStrategy,
    scratch: Vec<Complex<T>>,
    staging: Vec<Complex<T>>,
}

impl<T: FftSample> FftPlan<T>
where
    f64: AsPrimitive<T>,
{
    /// Plan for `length` with default options against the process-wide registry.
    pub fn new(length: usize) -> Result<Self, FftError> {
        Self::with_options(length, PlanOptions::default())
    }

    pub fn with_options(length: usize, options: PlanOptions) -> Result<Self, FftError> {
        Self::with_context(length, options, PlannerContext::process_default())
    }

    pub fn with_context(
        length: usize,
        options: PlanOptions,
        context: PlannerContext<'_, T>,
    ) -> Result<Self, FftError> {
        let capabilities = options.capabilities.unwrap_or(context.capabilities);
        let decomposition = decompose(context.registry, length, capabilities, options.strategy)?;
        let root = PlanNode::materialize(
            &decomposition,
            context.registry,
            context.cache,
            capabilities,
        )?;
        let scratch = try_vec![Complex::<T>::default(); root.scratch_length()];
        // input half for in-place and strided calls, output half for strided calls
        let staging = try_vec![Complex::<T>::default(); 2 * length];
        log::debug!(
            "Planned {} precision FFT of size {length} with {} strategy on {capabilities}: {decomposition}, scratch {}",
            T::PRECISION,
            options.strategy,
            scratch.len()
        );
        Ok(FftPlan {
            length,
            root,
            decomposition,
            capabilities,
            strategy: options.strategy,
            scratch,
            staging,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn precision(&self) -> Precision {
        T::PRECISION
    }

    pub fn scratch_length(&self) -> usize {
        self.scratch.len()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn strategy(&self) -> KernelStrategy {
        self.strategy
    }

    /// Human readable plan tree, e.g. `mixedradix(32x32)[dit_radix2_avx2(32), dit_radix2_avx2(32)]`.
    pub fn description(&self) -> String {
        self.decomposition.to_string()
    }

    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Family of the root node.
    pub fn algorithm(&self) -> KernelAlgorithm {
        self.decomposition.algorithm()
    }

    /// Factor the inverse applies overall, `1 / length`.
    pub fn inverse_scale(&self) -> f64 {
        self.decomposition.inverse_scale()
    }

    fn run(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let n = self.length;
        if src.len() < n {
            return Err(FftError::SourceTooSmall(n, src.len()));
        }
        if dst.len() < n {
            return Err(FftError::DestinationTooSmall(n, dst.len()));
        }
        self.root
            .execute(&mut dst[..n], &src[..n], &mut self.scratch, direction)
    }

    fn run_in_place(
        &mut self,
        data: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let n = self.length;
        if data.len() < n {
            return Err(FftError::SourceTooSmall(n, data.len()));
        }
        let input = &mut self.staging[..n];
        input.copy_from_slice(&data[..n]);
        self.root
            .execute(&mut data[..n], input, &mut self.scratch, direction)
    }

    fn run_strided(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        stride: usize,
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let n = self.length;
        if stride == 0 {
            return Err(FftError::InvalidStride(stride));
        }
        let required = (n - 1)
            .checked_mul(stride)
            .and_then(|last| last.checked_add(1))
            .ok_or(FftError::InvalidStride(stride))?;
        if src.len() < required {
            return Err(FftError::SourceTooSmall(required, src.len()));
        }
        if dst.len() < required {
            return Err(FftError::DestinationTooSmall(required, dst.len()));
        }
        if stride == 1 {
            return self
                .root
                .execute(&mut dst[..n], &src[..n], &mut self.scratch, direction);
        }

        let (input, output) = self.staging.split_at_mut(n);
        for (slot, value) in input.iter_mut().zip(src.iter().step_by(stride)) {
            *slot = *value;
        }
        self.root.execute(output, input, &mut self.scratch, direction)?;
        for (slot, value) in dst.iter_mut().step_by(stride).zip(output.iter()) {
            *slot = *value;
        }
        Ok(())
    }

    fn run_batch(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        count: usize,
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let n = self.length;
        let required = count.saturating_mul(n);
        if src.len() < required {
            return Err(FftError::SourceTooSmall(required, src.len()));
        }
        if dst.len() < required {
            return Err(FftError::DestinationTooSmall(required, dst.len()));
        }
        for (dst, src) in dst[..required]
            .chunks_exact_mut(n)
            .zip(src[..required].chunks_exact(n))
        {
            self.root.execute(dst, src, &mut self.scratch, direction)?;
        }
        Ok(())
    }

    pub fn forward(&mut self, dst: &mut [Complex<T>], src: &[Complex<T>]) -> Result<(), FftError> {
        self.run(dst, src, FftDirection::Forward)
    }

    pub fn inverse(&mut self, dst: &mut [Complex<T>], src: &[Complex<T>]) -> Result<(), FftError> {
        self.run(dst, src, FftDirection::Inverse)
    }

    /// Forward transform of `data[..length]` in place, bit-identical to [`Self::forward`].
    pub fn forward_in_place(&mut self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        self.run_in_place(data, FftDirection::Forward)
    }

    /// Inverse transform of `data[..length]` in place, bit-identical to [`Self::inverse`].
    pub fn inverse_in_place(&mut self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        self.run_in_place(data, FftDirection::Inverse)
    }

    /// Forward transform of the `length` elements at `src[0], src[stride], ..` into the same
    /// positions of `dst`, e.g. one column of a row-major matrix with `stride` columns.
    ///
    /// Elements between the strided positions are left untouched. A zero stride, or one whose
    /// last index overflows, is [`FftError::InvalidStride`].
    pub fn forward_strided(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        stride: usize,
    ) -> Result<(), FftError> {
        self.run_strided(dst, src, stride, FftDirection::Forward)
    }

    pub fn inverse_strided(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        stride: usize,
    ) -> Result<(), FftError> {
        self.run_strided(dst, src, stride, FftDirection::Inverse)
    }

    /// Forward transforms of `count` contiguous chunks of `length` elements.
    pub fn forward_batch(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        count: usize,
    ) -> Result<(), FftError> {
        self.run_batch(dst, src, count, FftDirection::Forward)
    }

    pub fn inverse_batch(
        &mut self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        count: usize,
    ) -> Result<(), FftError> {
        self.run_batch(dst, src, count, FftDirection::Inverse)
    }
}

impl<T: FftSample> TransformPlan<T> for FftPlan<T>
where
    f64: AsPrimitive<T>,
{
    fn length(&self) -> usize {
        self.length
    }

    fn precision(&self) -> Precision {
        T::PRECISION
    }

    fn forward(&mut self, dst: &mut [Complex<T>], src: &[Complex<T>]) -> Result<(), FftError> {
        FftPlan::forward(self, dst, src)
    }

    fn inverse(&mut self, dst: &mut [Complex<T>], src: &[Complex<T>]) -> Result<(), FftError> {
        FftPlan::inverse(self, dst, src)
    }
}

impl<T: 'static> std::fmt::Debug for FftPlan<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftPlan")
            .field("length", &self.length)
            .field("decomposition", &self.decomposition.to_string())
            .field("capabilities", &self.capabilities)
            .field("strategy", &self.strategy)
            .field("scratch", &self.scratch.len())
            .finish()
    }
}
