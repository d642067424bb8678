//! Benchmark

// Imports
use {
	crate::{
		buffer::{Buffer, Element},
		config::Config,
		statistics::PassStatistics,
	},
	rand::{
		distributions::{Distribution, Uniform},
		Rng,
	},
	std::{
		hint,
		time::{Duration, Instant},
	},
};

/// Benchmark.
///
/// Repeatedly overwrites a buffer, with every element of pass `pass`
/// at index `idx` becoming `(pass + idx) * factor`, for a random `factor`
/// drawn separately for each element.
#[derive(Debug)]
pub struct Bench {
	/// Number of passes
	passes: usize,

	/// Factor distribution
	factors: Uniform<Element>,

	/// Debug output period
	debug_output_period: Duration,
}

impl Bench {
	/// Creates a new benchmark
	///
	/// # Errors
	/// Returns an error if `config.max_factor` isn't positive.
	pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
		anyhow::ensure!(
			config.max_factor > 0,
			"Maximum factor must be positive, found {}",
			config.max_factor
		);

		Ok(Self {
			passes:              config.passes,
			factors:             Uniform::new(0, config.max_factor),
			debug_output_period: config.debug_output_period,
		})
	}

	/// Runs all passes over `buffer`, drawing factors from `rng`
	pub fn run<R: Rng + ?Sized>(&self, buffer: &mut Buffer, rng: &mut R) -> RunOutput {
		let mut statistics = PassStatistics::with_capacity(self.passes);
		let mut writes = 0;
		let mut last_debug_time = None;

		for pass in 0..self.passes {
			let pass_start = Instant::now();

			// Note: Like a C `int`, values wrap on overflow.
			let pass_value = pass as Element;
			let factors = &self.factors;
			buffer.fill_with(|idx| {
				let factor = factors.sample(rng);
				pass_value.wrapping_add(idx as Element).wrapping_mul(factor)
			});

			// Note: The buffer is never read, so make sure the writes aren't elided
			hint::black_box(buffer.as_uninit());

			writes += buffer.len() as u64;
			statistics.register_pass(pass_start.elapsed());

			// Then show debug output, if it's been long enough
			let cur_time = Instant::now();
			let should_output = last_debug_time.map_or(true, |last_debug_time| {
				cur_time.duration_since(last_debug_time) >= self.debug_output_period
			});
			if should_output {
				let passes_done_percentage = 100.0 * ((pass + 1) as f64 / self.passes as f64);
				tracing::debug!("[{passes_done_percentage:.2}%] {statistics}");
				last_debug_time = Some(cur_time);
			}
		}

		tracing::debug!(passes = self.passes, writes, "Finished: {statistics}");

		RunOutput {
			passes: self.passes,
			writes,
			statistics,
		}
	}
}

/// Output for [`Bench::run`]
#[derive(Clone, Debug)]
pub struct RunOutput {
	/// Passes executed
	pub passes: usize,

	/// Total element writes
	pub writes: u64,

	/// Statistics
	pub statistics: PassStatistics,
}
