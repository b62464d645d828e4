/// Source of uniform draws in `[0, 1)` used for feed shuffling.
///
/// Every `rand::Rng` is a `RandomSource`, so callers can pass `rand::rng()`
/// in production and a seeded `StdRng` in tests.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// In-place Fisher-Yates shuffle of the first `n` items; the tail keeps its order
pub fn shuffle_head<T, R: RandomSource + ?Sized>(items: &mut [T], n: usize, rng: &mut R) {
    let head = n.min(items.len());
    for i in (1..head).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}
