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
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Environment variable that caps the vector tiers detection may report.
pub(crate) const MAX_SIMD_ENV: &str = "CODELET_FFT_MAX_SIMD";

/// Set of hardware features usable by the running process.
///
/// Detection runs once per process through [`Capabilities::detect`]; the value is `Copy`
/// and is threaded explicitly into selection instead of being queried at call sites.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capabilities(u32);

static NAMES: [(Capabilities, &str); 7] = [
    (Capabilities::SSE2, "sse2"),
    (Capabilities::AVX, "avx"),
    (Capabilities::AVX2, "avx2"),
    (Capabilities::FMA, "fma"),
    (Capabilities::AVX512F, "avx512f"),
    (Capabilities::NEON, "neon"),
    (Capabilities::FCMA, "fcma"),
];

impl Capabilities {
    pub const NONE: Self = Self(0);
    pub const SSE2: Self = Self(1 << 0);
    pub const AVX: Self = Self(1 << 1);
    pub const AVX2: Self = Self(1 << 2);
    pub const FMA: Self = Self(1 << 3);
    pub const AVX512F: Self = Self(1 << 4);
    pub const NEON: Self = Self(1 << 16);
    pub const FCMA: Self = Self(1 << 17);

    const X86_MASK: u32 = 0xffff;
    const ARM_MASK: u32 = 0xffff_0000;

    /// Checks that every feature in `required` is present.
    #[inline]
    #[must_use]
    pub const fn has(self, required: Self) -> bool {
        self.0 & required.0 == required.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter_names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .iter()
            .filter(move |(flag, _)| self.has(*flag))
            .map(|(_, name)| *name)
    }

    /// Capabilities of the running process, detected once and cached.
    pub fn detect() -> Capabilities {
        static DETECTED: OnceLock<Capabilities> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let raw = detect_raw();
            let limited = match std::env::var(MAX_SIMD_ENV) {
                Ok(value) => apply_simd_limit(raw, &value),
                Err(_) => raw,
            };
            log::info!("Detected CPU capabilities: {limited}");
            limited
        })
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter_names()).finish()
    }
}

impl Display for Capabilities {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("scalar");
        }
        let names = self.iter_names().collect::<Vec<_>>();
        f.write_str(&names.join("+"))
    }
}

fn apply_simd_limit(raw: Capabilities, value: &str) -> Capabilities {
    match value.trim().to_ascii_lowercase().as_str() {
        "scalar" | "none" | "generic" => Capabilities::NONE,
        "avx2" => raw.intersection(Capabilities(Capabilities::X86_MASK)),
        "neon" => raw.intersection(Capabilities(Capabilities::ARM_MASK)),
        other => {
            log::warn!("Ignoring unknown {MAX_SIMD_ENV} value \"{other}\"");
            raw
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn detect_raw() -> Capabilities {
    let mut caps = Capabilities::NONE;
    if std::arch::is_x86_feature_detected!("sse2") {
        caps = caps.union(Capabilities::SSE2);
    }
    if std::arch::is_x86_feature_detected!("avx") {
        caps = caps.union(Capabilities::AVX);
    }
    if std::arch::is_x86_feature_detected!("avx2") {
        caps = caps.union(Capabilities::AVX2);
    }
    if std::arch::is_x86_feature_detected!("fma") {
        caps = caps.union(Capabilities::FMA);
    }
    if std::arch::is_x86_feature_detected!("avx512f") {
        caps = caps.union(Capabilities::AVX512F);
    }
    caps
}

#[cfg(target_arch = "aarch64")]
fn detect_raw() -> Capabilities {
    let mut caps = Capabilities::NONE;
    if std::arch::is_aarch64_feature_detected!("neon") {
        caps = caps.union(Capabilities::NEON);
    }
    if std::arch::is_aarch64_feature_detected!("fcma") {
        caps = caps.union(Capabilities::FCMA);
    }
    caps
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_raw() -> Capabilities {
    Capabilities::NONE
}

/// Acceleration tier a codelet is written for.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SimdLevel {
    Scalar,
    Avx2,
    Neon,
}

impl SimdLevel {
    /// Features that must be present for a codelet of this tier to run.
    pub const fn required(self) -> Capabilities {
        match self {
            SimdLevel::Scalar => Capabilities::NONE,
            SimdLevel::Avx2 => Capabilities::AVX2.union(Capabilities::FMA),
            SimdLevel::Neon => Capabilities::NEON,
        }
    }
}

impl Display for SimdLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdLevel::Scalar => f.write_str("scalar"),
            SimdLevel::Avx2 => f.write_str("avx2"),
            SimdLevel::Neon => f.write_str("neon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_checks() {
        let caps = Capabilities::SSE2
            .union(Capabilities::AVX2)
            .union(Capabilities::FMA);
        assert!(caps.has(SimdLevel::Scalar.required()));
        assert!(caps.has(SimdLevel::Avx2.required()));
        assert!(!caps.has(SimdLevel::Neon.required()));
        assert!(!Capabilities::AVX2.has(SimdLevel::Avx2.required()));
        assert!(Capabilities::NONE.has(Capabilities::NONE));
    }

    #[test]
    fn test_display() {
        assert_eq!(Capabilities::NONE.to_string(), "scalar");
        let caps = Capabilities::AVX2.union(Capabilities::FMA);
        assert_eq!(caps.to_string(), "avx2+fma");
        assert_eq!(format!("{caps:?}"), "[\"avx2\", \"fma\"]");
    }

    #[test]
    fn test_simd_limit() {
        let raw = Capabilities::SSE2
            .union(Capabilities::AVX2)
            .union(Capabilities::FMA);
        assert_eq!(apply_simd_limit(raw, "scalar"), Capabilities::NONE);
        assert_eq!(apply_simd_limit(raw, " AVX2 "), raw);
        assert_eq!(apply_simd_limit(raw, "neon"), Capabilities::NONE);
        assert_eq!(apply_simd_limit(raw, "bogus"), raw);
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(Capabilities::detect(), Capabilities::detect());
    }
}
