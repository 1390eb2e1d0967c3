/// Ordered-splice selection without replacement.
///
/// Each float addresses a slot of the live pool; the chosen element is
/// removed in place so the remaining elements keep their relative order.
/// The splice semantics are observable: a swap-with-last variant would
/// emit different sequences for the same float stream.
pub fn draw(floats: &[f64], pool_size: usize, count: usize) -> Vec<u8> {
    let mut pool: Vec<u8> = (0..pool_size as u8).collect();
    let mut out = Vec::with_capacity(count);
    for &f in floats.iter().take(count.min(pool_size)) {
        let idx = ((f * pool.len() as f64) as usize).min(pool.len() - 1);
        out.push(pool.remove(idx));
    }
    out
}
