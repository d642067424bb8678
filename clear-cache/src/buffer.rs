//! Element buffer

// Imports
use {
	crate::size::ElementCount,
	anyhow::Context,
	clear_cache_util::TryResizeUninit,
	std::mem::MaybeUninit,
};

/// Buffer element, a native C `int`
pub type Element = i32;

/// Element buffer.
///
/// Starts out uninitialized, and only exposes its elements once
/// every one of them has been written at least once.
#[derive(Debug)]
pub struct Buffer {
	/// Elements
	elements: Vec<MaybeUninit<Element>>,

	/// Whether every element has been written
	filled: bool,
}

impl Buffer {
	/// Allocates an uninitialized buffer of `count` elements.
	///
	/// # Errors
	/// Returns an error if unable to allocate the buffer.
	pub fn alloc(count: ElementCount) -> Result<Self, anyhow::Error> {
		let mut elements = Vec::<MaybeUninit<Element>>::new();
		elements.try_resize_uninit(count.to_usize()).with_context(|| {
			let bytes = count.byte_size().map_or_else(|| "?".to_owned(), |bytes| bytes.to_string());
			format!("Unable to allocate buffer of {count} ({bytes} bytes)")
		})?;

		// Note: An empty buffer has all of its (zero) elements written.
		let filled = elements.is_empty();

		Ok(Self { elements, filled })
	}

	/// Returns the number of elements
	#[must_use]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Returns if the buffer has no elements
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Overwrites every element with `f(idx)`, in order
	pub fn fill_with(&mut self, mut f: impl FnMut(usize) -> Element) {
		for (idx, element) in self.elements.iter_mut().enumerate() {
			element.write(f(idx));
		}
		self.filled = true;
	}

	/// Returns all elements, if they've all been written
	#[must_use]
	pub fn filled(&self) -> Option<&[Element]> {
		if !self.filled {
			return None;
		}

		// SAFETY: `filled` is only set once every element was written,
		//         and `MaybeUninit<T>` has the same layout as `T`.
		let elements = unsafe { &*(self.elements.as_slice() as *const [MaybeUninit<Element>] as *const [Element]) };
		Some(elements)
	}

	/// Returns the raw elements, which may be uninitialized.
	///
	/// Used to keep the writes observable without reading them.
	#[must_use]
	pub fn as_uninit(&self) -> &[MaybeUninit<Element>] {
		&self.elements
	}
}
