//! Statistics

// Imports
use {
	itertools::Itertools,
	std::{fmt, time::Duration},
};

/// Per-pass timing statistics
#[derive(Clone, Debug, Default)]
pub struct PassStatistics {
	/// Duration of each pass, in order
	durations: Vec<Duration>,
}

impl PassStatistics {
	/// Creates new, empty, statistics
	#[must_use]
	pub fn new() -> Self {
		Self { durations: vec![] }
	}

	/// Creates new, empty, statistics with room for `passes` passes
	#[must_use]
	pub fn with_capacity(passes: usize) -> Self {
		Self {
			durations: Vec::with_capacity(passes),
		}
	}

	/// Registers the duration of a pass
	pub fn register_pass(&mut self, duration: Duration) {
		self.durations.push(duration);
	}

	/// Returns the duration of every pass
	#[must_use]
	pub fn durations(&self) -> &[Duration] {
		&self.durations
	}

	/// Returns the number of registered passes
	#[must_use]
	pub fn len(&self) -> usize {
		self.durations.len()
	}

	/// Returns if no passes were registered
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.durations.is_empty()
	}

	/// Returns the mean, standard error and sample variance, in seconds
	#[must_use]
	pub fn variance(&self) -> average::Variance {
		self.durations.iter().map(Duration::as_secs_f64).collect()
	}

	/// Returns the median pass duration
	#[must_use]
	pub fn median(&self) -> Option<Duration> {
		let sorted = self.durations.iter().copied().sorted().collect::<Vec<_>>();
		let mid = sorted.len() / 2;
		match sorted.len() {
			0 => None,
			len if len % 2 == 1 => Some(sorted[mid]),
			_ => Some((sorted[mid - 1] + sorted[mid]) / 2),
		}
	}

	/// Returns the shortest and longest pass durations
	#[must_use]
	pub fn min_max(&self) -> Option<(Duration, Duration)> {
		self.durations.iter().copied().minmax().into_option()
	}
}

impl fmt::Display for PassStatistics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (Some(median), Some((min, max))) = (self.median(), self.min_max()) else {
			return write!(f, "No passes");
		};

		let variance = self.variance();
		write!(
			f,
			"{} passes, {:.6}s ± {:.6}s (σ {:.6}s), median {:.6}s ({:.6}s..{:.6}s)",
			self.len(),
			variance.mean(),
			variance.error(),
			variance.sample_variance().sqrt(),
			median.as_secs_f64(),
			min.as_secs_f64(),
			max.as_secs_f64(),
		)
	}
}
