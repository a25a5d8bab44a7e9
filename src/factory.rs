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
use crate::butterflies::{
    butterfly1, butterfly2_codelet, butterfly3, butterfly4_codelet, butterfly5, butterfly8,
    butterfly16,
};
use crate::codelet::{CodeletEntry, CodeletFn, KernelAlgorithm, TwiddleLayout, priority};
use crate::dft::dft;
use crate::permutation::PermutationKind;
use crate::radix2::dit_radix2;
use crate::radix4::dit_radix4;
use crate::registry::CodeletRegistry;
use crate::twiddle_cache::TwiddleCache;
use crate::{FftSample, SimdLevel};
use num_traits::AsPrimitive;
use std::sync::OnceLock;

/// Per-precision source of the built-in codelets and of the process-wide defaults.
pub trait CodeletFactory: Sized {
    /// Appends every built-in codelet of this precision compiled into the build.
    fn register_codelets(registry: &mut CodeletRegistry<Self>);

    /// Registry built once on first use.
    fn default_registry() -> &'static CodeletRegistry<Self>;

    /// Twiddle cache shared by plans that do not bring their own.
    fn default_twiddle_cache() -> &'static TwiddleCache<Self>;
}

#[allow(clippy::too_many_arguments)]
fn scalar_entry<T>(
    size: usize,
    forward: CodeletFn<T>,
    inverse: CodeletFn<T>,
    algorithm: KernelAlgorithm,
    signature: &'static str,
    priority: i32,
    twiddles: TwiddleLayout,
    permutation: Option<PermutationKind>,
) -> CodeletEntry<T> {
    CodeletEntry {
        size,
        forward,
        inverse,
        algorithm,
        simd: SimdLevel::Scalar,
        permutation,
        priority,
        signature,
        twiddles,
    }
}

macro_rules! register_dft {
    ($registry: expr, $($size: literal),+) => {
        $(
            $registry.register(scalar_entry(
                $size,
                dft::<T, $size, false>,
                dft::<T, $size, true>,
                KernelAlgorithm::Dft,
                "dft_generic",
                priority::DFT,
                TwiddleLayout::Plain,
                None,
            ));
        )+
    };
}

macro_rules! register_butterfly {
    ($registry: expr, $size: literal, $func: ident, $signature: literal, $twiddles: expr) => {
        $registry.register(scalar_entry(
            $size,
            $func::<T, false>,
            $func::<T, true>,
            KernelAlgorithm::Butterfly,
            $signature,
            priority::BUTTERFLY,
            $twiddles,
            None,
        ));
    };
}

macro_rules! register_dit {
    ($registry: expr, $func: ident, $signature: literal, $priority: expr, $twiddles: expr, $permutation: expr, $($size: literal),+) => {
        $(
            $registry.register(scalar_entry(
                $size,
                $func::<T, $size, false>,
                $func::<T, $size, true>,
                KernelAlgorithm::Dit,
                $signature,
                $priority,
                $twiddles,
                Some($permutation),
            ));
        )+
    };
}

fn register_scalar_codelets<T: FftSample>(registry: &mut CodeletRegistry<T>)
where
    f64: AsPrimitive<T>,
{
    register_dft!(registry, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);

    register_butterfly!(registry, 1, butterfly1, "bf1_scalar", TwiddleLayout::None);
    register_butterfly!(registry, 2, butterfly2_codelet, "bf2_scalar", TwiddleLayout::None);
    register_butterfly!(registry, 3, butterfly3, "bf3_scalar", TwiddleLayout::Plain);
    register_butterfly!(registry, 4, butterfly4_codelet, "bf4_scalar", TwiddleLayout::None);
    register_butterfly!(registry, 5, butterfly5, "bf5_scalar", TwiddleLayout::Plain);
    register_butterfly!(registry, 8, butterfly8, "bf8_scalar", TwiddleLayout::None);
    register_butterfly!(registry, 16, butterfly16, "bf16_scalar", TwiddleLayout::Plain);

    register_dit!(
        registry,
        dit_radix2,
        "dit_radix2_scalar",
        priority::DIT_RADIX2,
        TwiddleLayout::Radix2Stages,
        PermutationKind::Radix2,
        2, 4, 8, 16, 32, 64, 128, 256, 512
    );
    register_dit!(
        registry,
        dit_radix4,
        "dit_radix4_scalar",
        priority::DIT_RADIX4,
        TwiddleLayout::Radix4Stages,
        PermutationKind::Radix4,
        4, 16, 64, 256
    );
}

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
macro_rules! register_avx_radix2 {
    ($registry: expr, $func: ident, $lanes: expr, $($size: literal),+) => {
        $(
            $registry.register(CodeletEntry {
                size: $size,
                forward: $func::<$size, false>,
                inverse: $func::<$size, true>,
                algorithm: KernelAlgorithm::Dit,
                simd: SimdLevel::Avx2,
                permutation: Some(PermutationKind::Radix2),
                priority: priority::AVX2,
                signature: "dit_radix2_avx2",
                twiddles: TwiddleLayout::Radix2Packed { lanes: $lanes },
            });
        )+
    };
}

#[cfg(all(target_arch = "aarch64", feature = "neon"))]
macro_rules! register_neon_radix2 {
    ($registry: expr, $func: ident, $($size: literal),+) => {
        $(
            $registry.register(CodeletEntry {
                size: $size,
                forward: $func::<$size, false>,
                inverse: $func::<$size, true>,
                algorithm: KernelAlgorithm::Dit,
                simd: SimdLevel::Neon,
                permutation: Some(PermutationKind::Radix2),
                priority: priority::NEON,
                signature: "dit_radix2_neon",
                twiddles: TwiddleLayout::Radix2Stages,
            });
        )+
    };
}

impl CodeletFactory for f32 {
    fn register_codelets(registry: &mut CodeletRegistry<f32>) {
        register_scalar_codelets(registry);
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        {
            use crate::avx::avx_dit_radix2_f32;
            register_avx_radix2!(
                registry,
                avx_dit_radix2_f32,
                4,
                2, 4, 8, 16, 32, 64, 128, 256, 512
            );
        }
        #[cfg(all(target_arch = "aarch64", feature = "neon"))]
        {
            use crate::neon::neon_dit_radix2_f32;
            register_neon_radix2!(
                registry,
                neon_dit_radix2_f32,
                2, 4, 8, 16, 32, 64, 128, 256, 512
            );
        }
    }

    fn default_registry() -> &'static CodeletRegistry<f32> {
        static REGISTRY_SINGLE: OnceLock<CodeletRegistry<f32>> = OnceLock::new();
        REGISTRY_SINGLE.get_or_init(CodeletRegistry::build)
    }

    fn default_twiddle_cache() -> &'static TwiddleCache<f32> {
        static CACHE_SINGLE: OnceLock<TwiddleCache<f32>> = OnceLock::new();
        CACHE_SINGLE.get_or_init(TwiddleCache::new)
    }
}

impl CodeletFactory for f64 {
    fn register_codelets(registry: &mut CodeletRegistry<f64>) {
        register_scalar_codelets(registry);
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        {
            use crate::avx::avx_dit_radix2_f64;
            register_avx_radix2!(
                registry,
                avx_dit_radix2_f64,
                2,
                2, 4, 8, 16, 32, 64, 128, 256, 512
            );
        }
        #[cfg(all(target_arch = "aarch64", feature = "neon"))]
        {
            use crate::neon::neon_dit_radix2_f64;
            register_neon_radix2!(
                registry,
                neon_dit_radix2_f64,
                2, 4, 8, 16, 32, 64, 128, 256, 512
            );
        }
    }

    fn default_registry() -> &'static CodeletRegistry<f64> {
        static REGISTRY_DOUBLE: OnceLock<CodeletRegistry<f64>> = OnceLock::new();
        REGISTRY_DOUBLE.get_or_init(CodeletRegistry::build)
    }

    fn default_twiddle_cache() -> &'static TwiddleCache<f64> {
        static CACHE_DOUBLE: OnceLock<TwiddleCache<f64>> = OnceLock::new();
        CACHE_DOUBLE.get_or_init(TwiddleCache::new)
    }
}
