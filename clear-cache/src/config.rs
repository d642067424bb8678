//! Configuration

// Imports
use {crate::buffer::Element, std::time::Duration};

/// Benchmark configuration
#[derive(Clone, Debug)]
pub struct Config {
	/// Number of passes over the whole buffer
	pub passes: usize,

	/// Exclusive upper bound of the random factor each element is scaled by
	pub max_factor: Element,

	/// Debug output period
	///
	/// Minimum interval between progress messages
	pub debug_output_period: Duration,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			passes:              500,
			max_factor:          50,
			debug_output_period: Duration::from_secs(1),
		}
	}
}
