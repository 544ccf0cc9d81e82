/// Source of uniform floats in `[0, 1)` used by the position generator.
///
/// Every [`rand::Rng`] is a random source, so callers normally pass the thread
/// RNG for a fresh layout per session or a seeded `StdRng` for reproducible runs.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[low, high)`. A collapsed range yields `low`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low).max(0.0)
    }
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed sequence of values, cycling when exhausted.
    pub struct Scripted {
        values: Vec<f64>,
        cursor: usize,
    }

    impl Scripted {
        pub fn new(values: Vec<f64>) -> Self {
            Self { values, cursor: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }
    }
}
