/// Source of the per-item tie-break jitter.
pub trait IJitterSource {
    /// Draw a value in `[0, max)`. Must return `0.0` unless `max` is finite and positive.
    fn sample(&mut self, max: f64) -> f64;
}
