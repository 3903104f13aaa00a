use rand::Rng;

/// Returns `true` with probability `percent / 100`.
///
/// Values at or below 0 never fire, values at or above 100 always do.
pub(crate) fn percent_chance<R: Rng + ?Sized>(rng: &mut R, percent: f64) -> bool {
	rng.random::<f64>() < percent / 100.0
}
