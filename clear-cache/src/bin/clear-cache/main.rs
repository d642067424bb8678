//! Cache-clearing memory benchmark (`clear-cache`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	clear_cache::{Bench, Buffer, Config, WorkingSetSize},
	clear_cache_util::logger,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Seed the generator before anything else
	let mut rng = clear_cache::rng::from_time().context("Unable to create random number generator")?;

	// Get the working set and allocate the buffer for it
	let working_set = WorkingSetSize::from_arg(args.working_set_kib.as_deref());
	let element_count = working_set
		.element_count()
		.context("Unable to get buffer element count")?;
	tracing::debug!(%working_set, %element_count, "Allocating buffer");
	let mut buffer = Buffer::alloc(element_count).context("Unable to create buffer")?;

	// Then run the benchmark
	let config = Config::default();
	let bench = Bench::new(&config).context("Unable to create benchmark")?;
	let output = bench.run(&mut buffer, &mut rng);
	tracing::trace!(?output, "Benchmark output");

	Ok(())
}
