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
use criterion::{Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;

fn random_input(n: usize) -> Vec<Complex<f64>> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| Complex::new(rng.random(), rng.random()))
        .collect()
}

fn check_size_group(c: &mut Criterion, n: usize, group: &str) {
    let input = random_input(n);

    c.bench_function(format!("rustfft {group}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(n);
        let mut working = input.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("codelet {group}").as_str(), |b| {
        let mut plan = FftPlan::<f64>::new(n).unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.forward(&mut output, &input).unwrap();
        })
    });

    c.bench_function(format!("codelet scalar {group}").as_str(), |b| {
        let options = PlanOptions {
            strategy: KernelStrategy::Auto,
            capabilities: Some(Capabilities::NONE),
        };
        let mut plan = FftPlan::<f64>::with_options(n, options).unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.forward(&mut output, &input).unwrap();
        })
    });
}

fn check_strategies(c: &mut Criterion, n: usize) {
    let input = random_input(n);
    for strategy in [KernelStrategy::MixedRadix, KernelStrategy::SixStep] {
        c.bench_function(format!("codelet {strategy} {n}").as_str(), |b| {
            let options = PlanOptions {
                strategy,
                capabilities: None,
            };
            let mut plan = FftPlan::<f64>::with_options(n, options).unwrap();
            let mut output = vec![Complex::default(); n];
            b.iter(|| {
                plan.forward(&mut output, &input).unwrap();
            })
        });
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    check_size_group(c, 16, "size 16");
    check_size_group(c, 512, "size 512");
    check_size_group(c, 1024, "size 1024");
    check_size_group(c, 8192, "size 8192");
    check_size_group(c, 360, "size 360");
    check_strategies(c, 4096);

    c.bench_function("codelet f32 8192", |b| {
        let n = 8192;
        let input = random_input(n)
            .iter()
            .map(|v| Complex::new(v.re as f32, v.im as f32))
            .collect::<Vec<_>>();
        let mut plan = FftPlan::<f32>::new(n).unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.forward(&mut output, &input).unwrap();
        })
    });

    c.bench_function("codelet plan 1024", |b| {
        b.iter(|| FftPlan::<f64>::new(1024).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
