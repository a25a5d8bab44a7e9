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
use codelet_fft::{Capabilities, FftPlan, KernelStrategy, PlanOptions};
use num_complex::Complex;
use std::time::Instant;

// Prints the plan chosen for a few lengths and a rough timing of each.
fn main() {
    env_logger::init();
    println!("capabilities: {}", Capabilities::detect());
    for n in [16usize, 60, 512, 1024, 4096, 8192, 3 * 4096, 17] {
        for strategy in [KernelStrategy::Auto, KernelStrategy::MixedRadix] {
            let options = PlanOptions {
                strategy,
                capabilities: None,
            };
            let mut plan = match FftPlan::<f64>::with_options(n, options) {
                Ok(plan) => plan,
                Err(err) => {
                    println!("{n:>6} {strategy:<12} {err}");
                    continue;
                }
            };
            let src = (0..n)
                .map(|i| Complex::new(i as f64, 0.0))
                .collect::<Vec<_>>();
            let mut dst = vec![Complex::default(); n];
            let start = Instant::now();
            for _ in 0..100 {
                if let Err(err) = plan.forward(&mut dst, &src) {
                    println!("{n:>6} {strategy:<12} {err}");
                    break;
                }
            }
            println!(
                "{n:>6} {strategy:<12} {:?} per call, {}",
                start.elapsed() / 100,
                plan.description()
            );
        }
    }
}
