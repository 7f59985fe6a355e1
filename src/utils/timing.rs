use std::time::{Duration, Instant};

/// The result of an algorithm run together with the time the run took
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Applies `f` to the value, keeping the measured duration
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    /// Returns the duration in (fractional) milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Moves the error out so that `?` can be applied to a timed fallible run
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// Runs `f` and measures its duration with a monotonic clock.
/// Only the body of `f` is measured.
///
/// # Examples
/// ```
/// use wgraphs::utils::timed;
///
/// let run = timed(|| (1..=10).sum::<u32>());
/// assert_eq!(run.value, 55);
/// ```
pub fn timed<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}
