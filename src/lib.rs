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
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Fixed-size FFT plans assembled from a registry of interchangeable codelets.
//!
//! A [`FftPlan`] is built for one transform length and precision: the [`selector`] picks the
//! highest-priority codelet the running CPU supports, and sizes without a direct codelet are
//! synthesized by the [`planner`] from smaller registered sizes, glued together with twiddle
//! multiplication and transposes. Twiddle and permutation tables are memoized process-wide in
//! a [`TwiddleCache`].
//!
//! ```
//! use codelet_fft::FftPlan;
//! use num_complex::Complex;
//!
//! let mut plan = FftPlan::<f64>::new(16).unwrap();
//! let mut src = vec![Complex::new(0.0, 0.0); 16];
//! src[0] = Complex::new(1.0, 0.0);
//! let mut spectrum = vec![Complex::new(0.0, 0.0); 16];
//! plan.forward(&mut spectrum, &src).unwrap();
//! assert!(spectrum.iter().all(|v| (v.re - 1.0).abs() < 1e-12 && v.im.abs() < 1e-12));
//! ```
#[cfg(all(target_arch = "x86_64", feature = "avx"))]
mod avx;
pub mod backend;
mod butterflies;
mod caps;
mod codelet;
mod complex_fma;
mod dft;
mod err;
mod factory;
mod mixed_radix;
#[cfg(all(target_arch = "aarch64", feature = "neon"))]
mod neon;
mod permutation;
mod plan;
pub mod planner;
mod prime_factors;
mod radix2;
mod radix4;
mod registry;
pub mod selector;
mod six_step;
mod spectrum_arithmetic;
mod transpose;
mod twiddle_cache;
mod util;

pub use caps::{Capabilities, SimdLevel};
pub use codelet::{CodeletEntry, CodeletFn, KernelAlgorithm, TwiddleLayout, priority};
pub use err::FftError;
pub use factory::CodeletFactory;
pub use permutation::{PermutationKind, is_bijection};
pub use plan::{FftPlan, KernelStrategy, PlanOptions, PlannerContext, TransformPlan};
pub use registry::CodeletRegistry;
pub use twiddle_cache::{TwiddleCache, TwiddleKey};

use spectrum_arithmetic::ComplexArithFactory;

use num_traits::{AsPrimitive, Float, FloatConst, MulAdd};
use std::fmt::{Debug, Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

impl Display for FftDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("FftDirection::Forward"),
            FftDirection::Inverse => f.write_str("FftDirection::Inverse"),
        }
    }
}

/// Numeric precision of a registry, cache or plan.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Precision {
    Single,
    Double,
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Single => f.write_str("single"),
            Precision::Double => f.write_str("double"),
        }
    }
}

/// Floating point type a transform can run on, implemented for `f32` and `f64`.
pub trait FftSample:
    Float
    + FloatConst
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + MulAdd<Self, Output = Self>
    + AsPrimitive<f64>
    + CodeletFactory
    + ComplexArithFactory
{
    const PRECISION: Precision;
}

impl FftSample for f32 {
    const PRECISION: Precision = Precision::Single;
}

impl FftSample for f64 {
    const PRECISION: Precision = Precision::Double;
}
