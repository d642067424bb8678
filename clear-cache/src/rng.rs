//! Random number generation

// Imports
use {
	anyhow::Context,
	rand::{rngs::StdRng, SeedableRng},
	std::time::{SystemTime, UNIX_EPOCH},
};

/// Returns a seed from the current time, in whole seconds since the unix epoch.
///
/// Two calls within the same second return the same seed.
pub fn time_seed() -> Result<u64, anyhow::Error> {
	let elapsed = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.context("System time is before the unix epoch")?;
	Ok(elapsed.as_secs())
}

/// Creates a generator seeded with [`time_seed`]
pub fn from_time() -> Result<StdRng, anyhow::Error> {
	let seed = self::time_seed().context("Unable to get seed")?;
	tracing::debug!(seed, "Seeding generator");
	Ok(StdRng::seed_from_u64(seed))
}
