use std::cell::Cell;
use std::rc::Rc;

/// The loading overlay, shared by every in-flight request. It is visible while at least one `LoadingGuard` is alive.
#[derive(Clone)]
pub struct LoadingIndicator {
	inner: Rc<LoadingIndicatorInner>,
}

struct LoadingIndicatorInner {
	active: Cell<usize>,
	visible: Cell<bool>,
	set_visible: Box<dyn Fn(bool)>,
}

/// Dropping the last live guard hides the indicator.
#[must_use]
pub struct LoadingGuard {
	inner: Rc<LoadingIndicatorInner>,
}

impl LoadingIndicator {
	pub fn new(set_visible: impl Fn(bool) + 'static) -> LoadingIndicator {
		LoadingIndicator {
			inner: Rc::new(LoadingIndicatorInner {
				active: Cell::new(0),
				visible: Cell::new(false),
				set_visible: Box::new(set_visible),
			}),
		}
	}

	pub fn show(&self) -> LoadingGuard {
		let active = self.inner.active.get() + 1;
		self.inner.active.set(active);
		if active == 1 {
			self.inner.set(true);
		}
		LoadingGuard {
			inner: self.inner.clone(),
		}
	}

	pub fn is_visible(&self) -> bool {
		self.inner.visible.get()
	}

	pub fn active(&self) -> usize {
		self.inner.active.get()
	}

	/// Hide the indicator again if nothing holds it, in case the overlay's own animation left it on screen.
	pub fn settle(&self) {
		if self.inner.active.get() == 0 {
			self.inner.set(false);
		}
	}
}

impl LoadingIndicatorInner {
	fn set(&self, visible: bool) {
		self.visible.set(visible);
		(self.set_visible)(visible);
	}
}

impl Drop for LoadingGuard {
	fn drop(&mut self) {
		let active = self.inner.active.get().saturating_sub(1);
		self.inner.active.set(active);
		if active == 0 {
			self.inner.set(false);
		}
	}
}
