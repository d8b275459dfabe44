use html::{component, html};

#[component]
fn Greeting(name: String) {
	html! {
		<div class="greeting">{format!("Hello {}", name)}</div>
	}
}

#[component]
fn Card(title: Option<String>) {
	html! {
		<div class="card">
			{title.map(|title| html! { <h5 class="card-title">{title}</h5> })}
			{children}
		</div>
	}
}

#[test]
fn test_component() {
	let html = html!(<Greeting name={"World".to_owned()} />).render_to_string();
	assert_eq!(html, r#"<div class="greeting">Hello World</div>"#);
}

#[test]
fn test_component_children() {
	let html = html! {
		<Card title={Some("Results".to_owned())}>
			<p>{"first"}</p>
			<p>{"second"}</p>
		</Card>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div class="card"><h5 class="card-title">Results</h5><p>first</p><p>second</p></div>"#
	);
	let html = html!(<Card title={None}>{"empty"}</Card>).render_to_string();
	assert_eq!(html, r#"<div class="card">empty</div>"#);
}

#[test]
fn test_hyphenated_attributes() {
	let html = html! {
		<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>"#
	);
}

#[test]
fn test_escaping() {
	let message = "<script>alert('x')</script>".to_owned();
	let options = r#"{"label":"a&b"}"#.to_owned();
	let html = html!(<div data-options={options}>{message}</div>).render_to_string();
	assert_eq!(
		html,
		"<div data-options=\"{&quot;label&quot;:&quot;a&amp;b&quot;}\">&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;</div>"
	);
}

#[test]
fn test_lists_and_style() {
	let rows = vec!["lights", "watch"]
		.into_iter()
		.map(|label| html! { <li>{label}</li> })
		.collect::<Vec<_>>();
	let style = html::style! { "width" => "50%" };
	let html = html! {
		<>
			<ul style={style}>{rows}</ul>
			<input hidden={true} value={None::<String>} />
		</>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<ul style="width: 50%;"><li>lights</li><li>watch</li></ul><input hidden />"#
	);
}
