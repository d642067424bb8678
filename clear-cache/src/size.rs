//! Working-set sizes

// Imports
use {
	crate::buffer::Element,
	anyhow::Context,
	std::{fmt, mem, str::FromStr},
};

/// Working-set size, in KiB
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct WorkingSetSize {
	/// Size in KiB
	kib: u32,
}

impl WorkingSetSize {
	/// Default working-set size, `8 MiB`
	pub const DEFAULT: Self = Self::from_kib(8192);
	/// Number of elements per KiB of working set
	pub const ELEMENTS_PER_KIB: usize = 1024;

	/// Creates a working-set size from `kib` KiB
	#[must_use]
	pub const fn from_kib(kib: u32) -> Self {
		Self { kib }
	}

	/// Returns this size in KiB
	#[must_use]
	pub const fn kib(self) -> u32 {
		self.kib
	}

	/// Gets the working-set size from an optional command-line argument.
	///
	/// Uses [`Self::DEFAULT`] if there's no argument, else [`Self::parse_lossy`].
	#[must_use]
	pub fn from_arg(arg: Option<&str>) -> Self {
		arg.map_or(Self::DEFAULT, Self::parse_lossy)
	}

	/// Parses a working-set size the way C's `atoi` would.
	///
	/// Skips leading whitespace and an optional `+`, then reads the longest
	/// run of decimal digits, ignoring anything after it (`"12abc"` is 12).
	/// When no digits are found, or they don't fit a `u32`, the size is 0.
	/// A leading `-` also yields 0, since the size is unsigned.
	#[must_use]
	pub fn parse_lossy(s: &str) -> Self {
		let digits = s.trim_start_matches(|ch: char| matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'));
		let digits = digits.strip_prefix('+').unwrap_or(digits);
		let digits_len = digits.bytes().take_while(u8::is_ascii_digit).count();

		let kib = match digits[..digits_len].parse() {
			Ok(kib) => kib,
			Err(err) => {
				tracing::debug!(?s, %err, "Unable to parse working set size, using 0");
				0
			},
		};

		Self::from_kib(kib)
	}

	/// Returns the number of elements a buffer for this working set holds.
	///
	/// # Errors
	/// Returns an error if the element count doesn't fit a `usize`.
	pub fn element_count(self) -> Result<ElementCount, anyhow::Error> {
		usize::try_from(self.kib)
			.ok()
			.and_then(|kib| kib.checked_mul(Self::ELEMENTS_PER_KIB))
			.map(ElementCount::new)
			.with_context(|| format!("Element count for {self} overflowed"))
	}
}

impl Default for WorkingSetSize {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Strict parsing, rejecting anything that isn't exactly a `u32`
impl FromStr for WorkingSetSize {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let kib = s
			.parse()
			.with_context(|| format!("Invalid working set size: {s:?}"))?;
		Ok(Self::from_kib(kib))
	}
}

impl fmt::Display for WorkingSetSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}KiB", self.kib)
	}
}

/// Element count
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct ElementCount(usize);

impl ElementCount {
	/// Creates an element count
	#[must_use]
	pub const fn new(count: usize) -> Self {
		Self(count)
	}

	/// Returns this count as a `usize`
	#[must_use]
	pub const fn to_usize(self) -> usize {
		self.0
	}

	/// Returns the size, in bytes, of this many elements
	#[must_use]
	pub const fn byte_size(self) -> Option<usize> {
		self.0.checked_mul(mem::size_of::<Element>())
	}
}

impl fmt::Display for ElementCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} elements", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_when_absent() {
		let size = WorkingSetSize::from_arg(None);
		assert_eq!(size.kib(), 8192);
		assert_eq!(
			size.element_count().expect("Unable to get element count").to_usize(),
			8192 * 1024
		);
	}

	#[test]
	fn element_count_scales_by_1024() {
		for kib in [1, 2, 3, 64, 512, 8192, 32768] {
			let count = WorkingSetSize::from_kib(kib)
				.element_count()
				.expect("Unable to get element count");
			assert_eq!(count.to_usize(), kib as usize * 1024);
		}
	}

	#[test]
	fn one_kib() {
		let count = WorkingSetSize::from_arg(Some("1"))
			.element_count()
			.expect("Unable to get element count");
		assert_eq!(count, ElementCount::new(1024));
		assert_eq!(count.byte_size(), Some(4096));
	}

	#[test]
	fn zero_is_empty() {
		let count = WorkingSetSize::from_arg(Some("0"))
			.element_count()
			.expect("Unable to get element count");
		assert_eq!(count.to_usize(), 0);
	}

	#[test]
	fn lossy_parse_coerces_garbage_to_zero() {
		for s in ["abc", "", "   ", "-5", "+", "-", "x12", "99999999999999"] {
			assert_eq!(WorkingSetSize::parse_lossy(s).kib(), 0, "Parsing {s:?}");
		}
	}

	#[test]
	fn lossy_parse_reads_leading_digits() {
		assert_eq!(WorkingSetSize::parse_lossy("12abc").kib(), 12);
		assert_eq!(WorkingSetSize::parse_lossy("  \t42").kib(), 42);
		assert_eq!(WorkingSetSize::parse_lossy("+7").kib(), 7);
		assert_eq!(WorkingSetSize::parse_lossy("0010").kib(), 10);
		assert_eq!(WorkingSetSize::parse_lossy("4294967295").kib(), u32::MAX);
	}

	#[test]
	fn strict_parse() {
		assert_eq!("16".parse::<WorkingSetSize>().expect("Unable to parse").kib(), 16);
		assert!("abc".parse::<WorkingSetSize>().is_err());
		assert!("12abc".parse::<WorkingSetSize>().is_err());
		assert!("-1".parse::<WorkingSetSize>().is_err());
	}

	#[test]
	fn display() {
		assert_eq!(WorkingSetSize::from_kib(8192).to_string(), "8192KiB");
		assert_eq!(ElementCount::new(1024).to_string(), "1024 elements");
	}
}
