// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-subsets enumeration with the combinatorial number system.

/// Largest set size.
const MAX_N: usize = 52;

/// Largest subset size.
pub(crate) const MAX_K: usize = 7;

/// Creates the binomials table nck(n, k) for n <= 52 and k <= 7.
const fn make_binomials() -> [[u64; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u64; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        t[n][0] = 1;

        // nck(n, k) = nck(n-1, k-1) + nck(n-1, k), entries with k > n stay 0.
        let mut k = 1;
        while k <= MAX_K && k <= n {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const BINOMIALS: [[u64; MAX_K + 1]; MAX_N + 1] = make_binomials();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub(crate) fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    BINOMIALS[n][k] as usize
}

/// Converts a colex rank to its k-subset, see Theorem L pg. 260 Knuth 4a.
///
/// The subset is stored in ascending order in the first k positions.
pub(crate) fn nth_ksubset(mut rank: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for i in (0..k).rev() {
        // Largest c such that nck(c, i + 1) <= rank.
        let mut c = i;
        while nck(c + 1, i + 1) <= rank {
            c += 1;
        }

        out[i] = c;
        rank -= nck(c, i + 1);
    }

    out
}

/// Calls `f` for `count` k-subsets of 0..n in colex order starting from the
/// subset with rank `start`.
pub(crate) fn for_each_ksubset<F>(n: usize, k: usize, start: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n || count == 0 || start >= nck(n, k) {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] holds the subset, c[k + 1] and
    // c[k + 2] are the sentinels.
    let mut c = [0usize; MAX_K + 3];
    c[1..=k].copy_from_slice(&nth_ksubset(start, k)[..k]);
    c[k + 1] = n;

    let mut visited = 0;
    loop {
        f(&c[1..=k]);

        visited += 1;
        if visited == count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
