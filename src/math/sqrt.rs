//! Integer square root.

/// Floor square root of a `u128`, by Newton iteration.
///
/// The result `r` satisfies `r² ≤ n < (r + 1)²`.  Starting from an
/// over-estimate, each step strictly decreases the estimate until it
/// reaches the floor root, so the loop terminates.  The result always fits
/// in `u64`.
///
/// # Examples
///
/// ```
/// use duet_amm::math::isqrt;
///
/// assert_eq!(isqrt(2_000_000_000_000), 1_414_213);
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        // x + n / x <= n / 2 + 3 for every x reached here.
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_floor_root(n: u128, r: u128) -> bool {
        let lower_ok = r.checked_mul(r).is_some_and(|sq| sq <= n);
        let upper_ok = (r + 1).checked_mul(r + 1).is_none_or(|sq| sq > n);
        lower_ok && upper_ok
    }

    #[test]
    fn small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3];
        for (n, r) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u128), *r, "isqrt({n})");
        }
    }

    #[test]
    fn perfect_squares() {
        for r in [10u128, 1_000, 1_000_000, u128::from(u32::MAX)] {
            assert_eq!(isqrt(r * r), r);
            assert_eq!(isqrt(r * r - 1), r - 1);
        }
    }

    #[test]
    fn initial_share_scenario() {
        assert_eq!(isqrt(1_000_000u128 * 2_000_000), 1_414_213);
    }

    #[test]
    fn extremes() {
        assert_eq!(isqrt(u128::MAX), u128::from(u64::MAX));
        let max_product = u128::from(u64::MAX) * u128::from(u64::MAX);
        assert_eq!(isqrt(max_product), u128::from(u64::MAX));
        assert!(is_floor_root(u128::MAX, isqrt(u128::MAX)));
    }

    #[test]
    fn floor_property_sweep() {
        let mut n: u128 = 3;
        while n < u128::MAX / 3 {
            assert!(is_floor_root(n, isqrt(n)), "n = {n}");
            n = n * 3 + 1;
        }
    }
}
