/// Random `u64` whose encoding takes exactly `len` bytes.
pub fn random_u64(len: usize) -> u64 {
    debug_assert!((1..=10).contains(&len));
    let bits = (7 * len as u32).min(64);
    let low = 7 * (len as u32 - 1);
    let x = fastrand::u64(..);
    let x = if bits == 64 { x } else { x & ((1 << bits) - 1) };
    x | (1 << low)
}

pub fn random_values(count: usize, min_len: usize, max_len: usize) -> Vec<u64> {
    (0..count)
        .map(|_| random_u64(fastrand::usize(min_len..=max_len)))
        .collect()
}
