//! Utilities

// Modules
pub mod logger;

// Imports
use std::{collections::TryReserveError, mem::MaybeUninit};

/// Extension trait for `Vec<MaybeUninit<T>>` to grow without initializing
#[extend::ext(name = TryResizeUninit)]
pub impl<T> Vec<MaybeUninit<T>> {
	/// Resizes this vector to `len` uninitialized elements.
	///
	/// Unlike [`Vec::resize_with`], this reports allocation failure instead of aborting.
	/// Shrinking never fails.
	fn try_resize_uninit(&mut self, len: usize) -> Result<(), TryReserveError> {
		if let Some(additional) = len.checked_sub(self.len()) {
			self.try_reserve_exact(additional)?;
		}

		// Note: Writing `uninit` values never touches the allocation.
		self.resize_with(len, MaybeUninit::uninit);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resize_uninit_grows_and_shrinks() {
		let mut v = Vec::<MaybeUninit<u32>>::new();
		v.try_resize_uninit(16).expect("Unable to grow");
		assert_eq!(v.len(), 16);
		assert!(v.capacity() >= 16);

		v.try_resize_uninit(4).expect("Unable to shrink");
		assert_eq!(v.len(), 4);
	}

	#[test]
	fn resize_uninit_zero() {
		let mut v = Vec::<MaybeUninit<u32>>::new();
		v.try_resize_uninit(0).expect("Unable to resize to 0");
		assert!(v.is_empty());
	}

	#[test]
	fn resize_uninit_reports_overflow() {
		let mut v = Vec::<MaybeUninit<u64>>::new();
		assert!(v.try_resize_uninit(usize::MAX).is_err());
		assert!(v.is_empty());
	}
}
