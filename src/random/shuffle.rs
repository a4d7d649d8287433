use super::source::RandomSource;

/// Shuffles `items` in place.
///
/// For every position `i`, from first to last, swaps `items[i]` with
/// `items[floor(r * len)]` where `r` is the next draw. The swap index always
/// spans the whole slice rather than a shrinking tail, so this is not a
/// textbook Fisher–Yates; training runs depend on this exact sequence.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let len = items.len();
    if len == 0 {
        return;
    }
    for i in 0..len {
        let j = ((rng.next_f64() * len as f64).floor() as usize).min(len - 1);
        items.swap(i, j);
    }
}
