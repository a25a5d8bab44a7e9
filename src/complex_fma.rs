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
use num_complex::Complex;
use num_traits::MulAdd;
use std::ops::{Add, Mul, Neg};

/// `a * b + c`, fused where the target has hardware FMA.
#[inline(always)]
pub(crate) fn fmla<T: Copy + Mul<T, Output = T> + Add<T, Output = T> + MulAdd<T, Output = T>>(
    a: T,
    b: T,
    c: T,
) -> T {
    #[cfg(any(
        all(target_arch = "x86_64", target_feature = "fma"),
        target_arch = "aarch64"
    ))]
    {
        MulAdd::mul_add(a, b, c)
    }
    #[cfg(not(any(
        all(target_arch = "x86_64", target_feature = "fma"),
        target_arch = "aarch64"
    )))]
    {
        a * b + c
    }
}

#[inline(always)]
pub(crate) fn c_mul_fast<
    T: Copy + Mul<T, Output = T> + Add<T, Output = T> + MulAdd<T, Output = T> + Neg<Output = T>,
>(
    a: Complex<T>,
    b: Complex<T>,
) -> Complex<T> {
    Complex {
        re: fmla(a.re, b.re, -(a.im * b.im)),
        im: fmla(a.re, b.im, a.im * b.re),
    }
}

#[inline(always)]
pub(crate) fn c_mul_add_fast<
    T: Copy + Mul<T, Output = T> + Add<T, Output = T> + MulAdd<T, Output = T> + Neg<Output = T>,
>(
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
) -> Complex<T> {
    Complex {
        re: fmla(a.re, b.re, fmla(-a.im, b.im, c.re)),
        im: fmla(a.re, b.im, fmla(a.im, b.re, c.im)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_products() {
        let a = Complex::new(1.5f64, -2.0);
        let b = Complex::new(0.25f64, 3.0);
        let c = Complex::new(-1.0f64, 0.5);
        let p = c_mul_fast(a, b);
        let r = a * b;
        assert!((p.re - r.re).abs() < 1e-14 && (p.im - r.im).abs() < 1e-14);
        let s = c_mul_add_fast(a, b, c);
        let r = a * b + c;
        assert!((s.re - r.re).abs() < 1e-14 && (s.im - r.im).abs() < 1e-14);
    }
}
