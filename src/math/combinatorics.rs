//! Counting and enumeration helpers for edge subsets and one-way assignments

/// Binomial coefficient `n choose k`, saturating on overflow
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Integer power saturating at `usize::MAX`
pub fn saturating_power(base: usize, exponent: usize) -> usize {
    let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
    base.saturating_pow(exponent)
}

/// Every `k`-element subset of `0..n` in lexicographic order
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(binomial(n, k));
    let mut current: Vec<usize> = (0..k).collect();

    loop {
        result.push(current.clone());

        // Rightmost position that can still be advanced
        let Some(position) = (0..k).rev().find(|&i| current.get(i).is_some_and(|&v| v < n - k + i))
        else {
            break;
        };
        let mut next = current.get(position).copied().unwrap_or(0) + 1;
        for slot in current.iter_mut().skip(position) {
            *slot = next;
            next += 1;
        }
    }
    result
}

/// Every assignment of `options` choices to `slots` positions
///
/// Assignments are produced in counting order with the last slot varying fastest.
pub fn assignments(slots: usize, options: usize) -> Vec<Vec<usize>> {
    if options == 0 {
        return if slots == 0 { vec![Vec::new()] } else { Vec::new() };
    }
    let total = saturating_power(options, slots);
    let mut result = Vec::with_capacity(total);
    let mut current = vec![0; slots];

    loop {
        result.push(current.clone());

        let mut carried = true;
        for slot in current.iter_mut().rev() {
            *slot += 1;
            if *slot < options {
                carried = false;
                break;
            }
            *slot = 0;
        }
        if carried {
            break;
        }
    }
    result
}
