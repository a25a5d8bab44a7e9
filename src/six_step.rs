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
use crate::planner::PlanNode;
use crate::transpose::TransposeExecutor;
use crate::{FftDirection, FftError, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

/// Same factorization as the mixed radix pass, reordered so every sub-transform reads and
/// writes a contiguous row: transpose, `n1` rows, twiddled transpose, `n2` rows, transpose.
pub(crate) struct SixStepStep<T: 'static> {
    pub(crate) n1: usize,
    pub(crate) n2: usize,
    pub(crate) first: PlanNode<T>,
    pub(crate) second: PlanNode<T>,
    /// Indexed `k1 * n2 + j2`.
    pub(crate) forward_twiddles: Arc<[Complex<T>]>,
    pub(crate) inverse_twiddles: Arc<[Complex<T>]>,
    pub(crate) columns_executor: &'static dyn TransposeExecutor<T>,
    pub(crate) rows_executor: &'static dyn TransposeExecutor<T>,
}

impl<T: FftSample> SixStepStep<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn length(&self) -> usize {
        self.n1 * self.n2
    }

    pub(crate) fn scratch_length(&self) -> usize {
        2 * self.length()
            + self
                .first
                .scratch_length()
                .max(self.second.scratch_length())
    }

    pub(crate) fn execute(
        &self,
        dst: &mut [Complex<T>],
        src: &[Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let (n1, n2) = (self.n1, self.n2);
        let n = self.length();
        if scratch.len() < self.scratch_length() {
            return Err(FftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.scratch_length(),
            ));
        }
        let (work1, rest) = scratch.split_at_mut(n);
        let (work2, child_scratch) = rest.split_at_mut(n);

        // STEP 1: transpose, rows of n1 indexed by j2
        self.columns_executor
            .transpose(&src[..n], work1, n2, n1);

        // STEP 2: size n1 transforms
        for (input, output) in work1.chunks_exact(n1).zip(work2.chunks_exact_mut(n1)) {
            self.first
                .execute(output, input, child_scratch, direction)?;
        }

        // STEP 3: transpose with twiddles, rows of n2 indexed by k1
        let twiddles = match direction {
            FftDirection::Forward => &self.forward_twiddles,
            FftDirection::Inverse => &self.inverse_twiddles,
        };
        self.rows_executor
            .transpose_twiddled(work2, work1, n1, n2, twiddles);

        // STEP 4: size n2 transforms
        for (input, output) in work1.chunks_exact(n2).zip(work2.chunks_exact_mut(n2)) {
            self.second
                .execute(output, input, child_scratch, direction)?;
        }

        // STEP 5: transpose into natural order
        self.columns_executor
            .transpose(work2, &mut dst[..n], n2, n1);
        Ok(())
    }
}
