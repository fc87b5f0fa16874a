//! Floating-point helpers.

/// Returns the correctly rounded sum of `values`.
///
/// The result is the exact mathematical sum of the inputs rounded once to the
/// nearest `f64`, so it does not depend on the order of the terms. Naive
/// left-to-right addition of `0.781109 + 0.209548 + 0.009343` yields
/// `1.0000000000000002`, while the exact sum rounds to `1.0`.
///
/// Uses Shewchuk's non-overlapping partials with a final half-way correction.
/// Inputs must be finite.
///
/// ```
/// use vdi4670::support::numeric::exact_sum;
///
/// assert_eq!(exact_sum([0.781109, 0.209548, 0.009343]), 1.0);
/// assert_eq!(exact_sum([0.1; 10]), 1.0);
/// assert_ne!(exact_sum([0.5, 0.5 - 1e-7]), 1.0);
/// ```
#[must_use]
pub fn exact_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut partials: Vec<f64> = Vec::new();

    for mut x in values {
        let mut kept = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }

    let Some((&top, rest)) = partials.split_last() else {
        return 0.0;
    };

    let mut hi = top;
    let mut lo = 0.0;
    let mut n = rest.len();
    while n > 0 {
        n -= 1;
        let x = hi;
        let y = rest[n];
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }

    // Round half-even ties correctly when more partials remain below `lo`.
    if n > 0 && ((lo < 0.0 && rest[n - 1] < 0.0) || (lo > 0.0 && rest[n - 1] > 0.0)) {
        let y = lo * 2.0;
        let x = hi + y;
        if y == x - hi {
            hi = x;
        }
    }

    hi
}
