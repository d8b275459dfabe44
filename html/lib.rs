use derive_more::From;
use std::borrow::Cow;

pub use html_macro::{component, html};

#[derive(From)]
pub enum Node {
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	Vec(Vec<Node>),
}

pub struct EscapedTextNode(pub Cow<'static, str>);

pub struct FragmentNode {
	pub children: Vec<Node>,
}

pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub struct ComponentNode {
	pub component: Box<dyn Component>,
	pub children: Vec<Node>,
}

/// A component renders itself, along with the children passed to it, into a node. Implementations are generated by `#[component]`.
pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn empty() -> Node {
		Node::Fragment(FragmentNode {
			children: Vec::new(),
		})
	}

	pub fn render_to_string(self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(self, output: &mut String) {
		match self {
			Node::EscapedText(node) => escape_into(output, &node.0),
			Node::Fragment(node) => {
				for child in node.children {
					child.render_into(output);
				}
			}
			Node::Host(node) => node.render_into(output),
			Node::Component(node) => {
				let ComponentNode {
					component,
					children,
				} = node;
				component.render(children).render_into(output);
			}
			Node::Vec(nodes) => {
				for node in nodes {
					node.render_into(output);
				}
			}
		}
	}
}

impl HostNode {
	fn render_into(self, output: &mut String) {
		output.push('<');
		output.push_str(self.name);
		for (key, value) in self.attributes {
			match value {
				AttributeValue::Bool(Some(true)) => {
					output.push(' ');
					output.push_str(key);
				}
				AttributeValue::String(Some(value)) => {
					output.push(' ');
					output.push_str(key);
					output.push_str("=\"");
					escape_into(output, &value);
					output.push('"');
				}
				_ => {}
			}
		}
		if self.self_closing {
			output.push_str(" />");
			return;
		}
		output.push('>');
		for child in self.children {
			child.render_into(output);
		}
		output.push_str("</");
		output.push_str(self.name);
		output.push('>');
	}
}

fn escape_into(output: &mut String, value: &str) {
	for c in value.chars() {
		match c {
			'>' => output.push_str("&gt;"),
			'<' => output.push_str("&lt;"),
			'"' => output.push_str("&quot;"),
			'&' => output.push_str("&amp;"),
			'\'' => output.push_str("&apos;"),
			c => output.push(c),
		}
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<bool>> for AttributeValue {
	fn from(value: Option<bool>) -> AttributeValue {
		AttributeValue::Bool(value)
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		value.map(Into::into).unwrap_or_else(Node::empty)
	}
}

/// Values accepted on the right hand side of `style!`. `None` omits the declaration.
pub trait StyleValue {
	fn into_style_value(self) -> Option<String>;
}

impl StyleValue for String {
	fn into_style_value(self) -> Option<String> {
		Some(self)
	}
}

impl StyleValue for &str {
	fn into_style_value(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl<T> StyleValue for Option<T>
where
	T: StyleValue,
{
	fn into_style_value(self) -> Option<String> {
		self.and_then(StyleValue::into_style_value)
	}
}

#[macro_export]
macro_rules! style {
	($($key:expr => $value:expr),* $(,)?) => {{
		let mut style = String::new();
		$(
			if let Some(value) = $crate::StyleValue::into_style_value($value) {
				style.push_str($key);
				style.push_str(": ");
				style.push_str(&value);
				style.push(';');
			}
		)*
		style
	}};
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_escape() {
		let node: Node = r#"<b class="x">Tom & Jerry's</b>"#.into();
		assert_eq!(
			node.render_to_string(),
			"&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/b&gt;"
		);
	}

	#[test]
	fn test_host_attributes() {
		let node = Node::Host(HostNode {
			name: "input",
			attributes: vec![
				("disabled", false.into()),
				("readonly", true.into()),
				("value", "a \"quoted\" value".into()),
				("placeholder", AttributeValue::String(None)),
			],
			children: Vec::new(),
			self_closing: true,
		});
		assert_eq!(
			node.render_to_string(),
			r#"<input readonly value="a &quot;quoted&quot; value" />"#
		);
	}

	#[test]
	fn test_style() {
		let color: Option<String> = None;
		let style = style! {
			"width" => format!("{}%", 42.5),
			"background-color" => color,
			"display" => "none",
		};
		assert_eq!(style, "width: 42.5%;display: none;");
	}
}
