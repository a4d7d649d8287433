use rand::Rng;

/// A stream of uniform reals in `[0, 1)`.
///
/// Weight initialization and dataset shuffling both draw from one of these;
/// passing the same instance through a whole training run keeps the run
/// reproducible.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any `rand` generator, e.g. `StdRng::seed_from_u64(..)` or
/// `thread_rng()`, to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
