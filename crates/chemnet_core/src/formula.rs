//! Formula algebra: random generation, canonicalization, compose and decompose.

use rand::seq::SliceRandom;
use rand::Rng;

/// Draws a formula of uniform length in `[min_len, max_len]` over `alphabet`.
pub fn random_formula<R: Rng>(
    alphabet: &[char],
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> String {
    let len = rng.gen_range(min_len..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Identity key of a formula. Under aggregation the characters are sorted.
#[must_use]
pub fn canonicalize(formula: &str, aggregation: bool) -> String {
    if aggregation {
        let mut chars: Vec<char> = formula.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    } else {
        formula.to_string()
    }
}

#[must_use]
pub fn compose(formulas: &[&str]) -> String {
    formulas.concat()
}

/// Splits a formula into two non-empty parts, each at most `max_len` long.
///
/// Under aggregation the characters are shuffled first so the split point
/// does not follow input order. Returns `None` for formulas that cannot be
/// split within the bounds, including single-character formulas.
pub fn decompose<R: Rng>(
    formula: &str,
    max_len: usize,
    aggregation: bool,
    rng: &mut R,
) -> Option<[String; 2]> {
    let mut chars: Vec<char> = formula.chars().collect();
    let len = chars.len();
    if len < 2 {
        return None;
    }
    if aggregation {
        chars.shuffle(rng);
    }
    let lo = len.saturating_sub(max_len).max(1);
    let hi = len.min(max_len + 1);
    if lo >= hi {
        return None;
    }
    let split = rng.gen_range(lo..hi);
    Some([
        chars[..split].iter().collect(),
        chars[split..].iter().collect(),
    ])
}

/// Number of distinct canonical formulas with length in `[min_len, max_len]`.
#[must_use]
pub fn distinct_formulas(
    alphabet_len: usize,
    min_len: usize,
    max_len: usize,
    aggregation: bool,
) -> usize {
    let k = alphabet_len as u128;
    let mut total: u128 = 0;
    for len in min_len..=max_len {
        let count = if aggregation {
            multisets(k, len as u128)
        } else {
            k.checked_pow(len as u32).unwrap_or(u128::MAX)
        };
        total = total.saturating_add(count);
    }
    usize::try_from(total).unwrap_or(usize::MAX)
}

/// `C(len + k - 1, k - 1)`: multisets of size `len` over `k` symbols.
fn multisets(k: u128, len: u128) -> u128 {
    if k == 0 {
        return u128::from(len == 0);
    }
    let r = (k - 1).min(len);
    let n = len + k - 1;
    let mut acc: u128 = 1;
    for i in 0..r {
        acc = acc.saturating_mul(n - i) / (i + 1);
    }
    acc
}
