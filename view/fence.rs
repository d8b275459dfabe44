use std::cell::Cell;

/// Orders responses to requests of one kind. Only the response to the most recently issued ticket is applied.
#[derive(Debug, Default)]
pub struct RequestFence {
	latest: Cell<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestFence {
	pub fn issue(&self) -> Ticket {
		let ticket = self.latest.get() + 1;
		self.latest.set(ticket);
		Ticket(ticket)
	}

	/// Make every outstanding ticket stale.
	pub fn invalidate(&self) {
		self.latest.set(self.latest.get() + 1);
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.latest.get() == ticket.0
	}
}

#[test]
fn test_request_fence() {
	let fence = RequestFence::default();
	let first = fence.issue();
	assert!(fence.is_current(first));
	let second = fence.issue();
	assert!(!fence.is_current(first));
	assert!(fence.is_current(second));
	fence.invalidate();
	assert!(!fence.is_current(second));
}
