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
use crate::spectrum_arithmetic::ComplexArith;
use crate::{FftDirection, FftError, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

/// Two-factor Cooley-Tukey pass, `n = n1 * n2`.
///
/// Input index `n2 * j1 + j2`, output index `k1 + n1 * k2`. Columns of stride `n2` are
/// gathered into contiguous scratch, transformed with the size `n1` child, multiplied by
/// `W_n^(j2 * k1)` and transformed again with the size `n2` child.
pub(crate) struct MixedRadixStep<T: 'static> {
    pub(crate) n1: usize,
    pub(crate) n2: usize,
    pub(crate) first: PlanNode<T>,
    pub(crate) second: PlanNode<T>,
    pub(crate) forward_twiddles: Arc<[Complex<T>]>,
    pub(crate) inverse_twiddles: Arc<[Complex<T>]>,
    pub(crate) arith: &'static dyn ComplexArith<T>,
}

impl<T: FftSample> MixedRadixStep<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn length(&self) -> usize {
        self.n1 * self.n2
    }

    pub(crate) fn scratch_length(&self) -> usize {
        let columns = self.n1.max(self.n2);
        self.length()
            + 2 * columns
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

        let columns = n1.max(n2);
        let (work, rest) = scratch.split_at_mut(n);
        let (column, rest) = rest.split_at_mut(columns);
        let (column_out, child_scratch) = rest.split_at_mut(columns);

        // STEP 1: size n1 transforms over the strided columns
        for (j2, row) in work.chunks_exact_mut(n1).enumerate() {
            for (j1, dst) in column[..n1].iter_mut().enumerate() {
                *dst = src[n2 * j1 + j2];
            }
            self.first
                .execute(row, &column[..n1], child_scratch, direction)?;
        }

        // STEP 2: twiddles
        let twiddles = match direction {
            FftDirection::Forward => &self.forward_twiddles,
            FftDirection::Inverse => &self.inverse_twiddles,
        };
        self.arith.mul_in_place(work, twiddles);

        // STEP 3: size n2 transforms, scattered into natural order
        for k1 in 0..n1 {
            for (j2, dst) in column[..n2].iter_mut().enumerate() {
                *dst = work[j2 * n1 + k1];
            }
            self.second.execute(
                &mut column_out[..n2],
                &column[..n2],
                child_scratch,
                direction,
            )?;
            for (k2, &v) in column_out[..n2].iter().enumerate() {
                dst[k1 + n1 * k2] = v;
            }
        }
        Ok(())
    }
}
