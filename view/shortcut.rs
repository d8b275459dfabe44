/// Keyboard shortcuts handled anywhere on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
	/// Ctrl+Enter
	Submit,
	/// Escape
	Clear,
}

impl Shortcut {
	pub fn from_key(key: &str, ctrl_key: bool) -> Option<Shortcut> {
		match key {
			"Enter" if ctrl_key => Some(Shortcut::Submit),
			"Escape" => Some(Shortcut::Clear),
			_ => None,
		}
	}
}

#[test]
fn test_from_key() {
	assert_eq!(Shortcut::from_key("Enter", true), Some(Shortcut::Submit));
	assert_eq!(Shortcut::from_key("Enter", false), None);
	assert_eq!(Shortcut::from_key("Escape", false), Some(Shortcut::Clear));
	assert_eq!(Shortcut::from_key("Escape", true), Some(Shortcut::Clear));
	assert_eq!(Shortcut::from_key("a", true), None);
}
