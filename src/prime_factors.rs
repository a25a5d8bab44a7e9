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
/// Prime factors of `n` with multiplicity, ascending.
///
/// `prime_factors(360) -> [2, 2, 2, 3, 3, 5]`; `0` and `1` have none.
pub(crate) fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut res = Vec::new();
    if n < 2 {
        return res;
    }

    while (n & 1) == 0 {
        res.push(2);
        n >>= 1;
    }

    while n % 3 == 0 {
        res.push(3);
        n /= 3;
    }

    // trial divide by 6k - 1 and 6k + 1
    let mut p: usize = 5;
    while (p as u128) * (p as u128) <= n as u128 {
        while n % p == 0 {
            res.push(p);
            n /= p;
        }
        let q = p + 2;
        while n % q == 0 {
            res.push(q);
            n /= q;
        }
        p += 6;
    }

    if n > 1 {
        res.push(n);
    }
    res
}

/// `(prime, exponent)` pairs, `prime_factorization(360) -> [(2, 3), (3, 2), (5, 1)]`.
pub(crate) fn prime_factorization(n: usize) -> Vec<(usize, u32)> {
    let mut out: Vec<(usize, u32)> = Vec::new();
    for f in prime_factors(n) {
        match out.last_mut() {
            Some((prime, count)) if *prime == f => *count += 1,
            _ => out.push((f, 1)),
        }
    }
    out
}

/// Every divisor of `n`, ascending. Empty for zero.
pub(crate) fn divisors(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mut out = vec![1usize];
    for (prime, exponent) in prime_factorization(n) {
        let existing = out.len();
        let mut power = 1usize;
        for _ in 0..exponent {
            power *= prime;
            for i in 0..existing {
                out.push(out[i] * power);
            }
        }
    }
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small() {
        assert_eq!(prime_factors(1), Vec::<usize>::new());
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(4), vec![2, 2]);
        assert_eq!(prime_factors(18), vec![2, 3, 3]);
        assert_eq!(prime_factorization(1296), vec![(2, 4), (3, 4)]);
        assert_eq!(prime_factorization(360), vec![(2, 3), (3, 2), (5, 1)]);
        assert_eq!(prime_factorization(97), vec![(97, 1)]);
        assert_eq!(prime_factorization(2028), vec![(2, 2), (3, 1), (13, 2)]);
        assert_eq!(prime_factorization(1295), vec![(5, 1), (7, 1), (37, 1)]);
    }

    #[test]
    fn test_large_prime() {
        let p = 4_294_967_291usize; // this is prime
        assert_eq!(prime_factors(p), vec![p]);
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(0), Vec::<usize>::new());
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(97), vec![1, 97]);
        let d = divisors(8192);
        assert_eq!(d.len(), 14);
        assert!(d.iter().all(|&x| 8192 % x == 0));
    }
}
