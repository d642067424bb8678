//! Cache-clearing memory benchmark (`clear-cache`)
//!
//! Allocates a buffer sized after a working set, in KiB, and repeatedly
//! overwrites every element of it with pseudo-random values, generating
//! memory traffic proportional to the working set.

// Modules
pub mod bench;
pub mod buffer;
pub mod config;
pub mod rng;
pub mod size;
pub mod statistics;

// Exports
pub use self::{
	bench::{Bench, RunOutput},
	buffer::{Buffer, Element},
	config::Config,
	size::{ElementCount, WorkingSetSize},
	statistics::PassStatistics,
};
