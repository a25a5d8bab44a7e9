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
#![no_main]

use codelet_fft::{FftPlan, KernelStrategy, PlanOptions};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    strategy: u8,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size == 0
        || data.size > 15100
        || !data.re.is_finite()
        || !data.im.is_finite()
        || data.re.abs() > 1e12
        || data.im.abs() > 1e12
    {
        return;
    }
    let n = data.size as usize;
    let strategy = match data.strategy % 6 {
        0 => KernelStrategy::Auto,
        1 => KernelStrategy::Dft,
        2 => KernelStrategy::Butterfly,
        3 => KernelStrategy::Dit,
        4 => KernelStrategy::MixedRadix,
        _ => KernelStrategy::SixStep,
    };
    let options = PlanOptions {
        strategy,
        capabilities: None,
    };
    // unsupported sizes must be reported, never panic
    let Ok(mut plan) = FftPlan::<f64>::with_options(n, options) else {
        return;
    };
    let src = vec![Complex::new(data.re, data.im); n];
    let mut spectrum = vec![Complex::default(); n];
    plan.forward(&mut spectrum, &src).unwrap();
    let mut restored = vec![Complex::default(); n];
    plan.inverse(&mut restored, &spectrum).unwrap();
    let peak = data.re.hypot(data.im).max(1.);
    for (i, (a, b)) in restored.iter().zip(src.iter()).enumerate() {
        let diff = (*a - *b).norm();
        assert!(
            diff <= 1e-9 * peak,
            "round trip of size {n} with {strategy} drifted by {diff} at {i}"
        );
    }

    let mut in_place = src.clone();
    plan.forward_in_place(&mut in_place).unwrap();
    for (a, b) in in_place.iter().zip(spectrum.iter()) {
        assert_eq!(a.re.to_bits(), b.re.to_bits());
        assert_eq!(a.im.to_bits(), b.im.to_bits());
    }

    let short = vec![Complex::default(); n - 1];
    assert!(plan.forward(&mut spectrum, &short).is_err());
});
