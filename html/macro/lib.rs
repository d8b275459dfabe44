use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse_macro_input;

enum Node {
	String(syn::LitStr),
	Block(syn::Block),
	Fragment(Fragment),
	Element(Element),
}

struct Fragment {
	children: Vec<Node>,
}

struct Element {
	name: syn::Path,
	attributes: Vec<Attribute>,
	children: Vec<Node>,
	self_closing: bool,
}

struct Attribute {
	key: AttributeKey,
	value: Option<AttributeValue>,
}

type AttributeKey = syn::punctuated::Punctuated<syn::Ident, syn::Token![-]>;

enum AttributeValue {
	String(syn::LitStr),
	Block(syn::Block),
}

impl syn::parse::Parse for Node {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		if input.peek(syn::LitStr) {
			input.parse().map(Node::String)
		} else if input.peek(syn::token::Brace) {
			input.parse().map(Node::Block)
		} else if input.peek(syn::Token![<]) && input.peek2(syn::Token![>]) {
			input.parse().map(Node::Fragment)
		} else if input.peek(syn::Token![<]) {
			input.parse().map(Node::Element)
		} else {
			Err(input.error("expected a string literal, a block, or an element"))
		}
	}
}

fn parse_children(input: syn::parse::ParseStream) -> syn::parse::Result<Vec<Node>> {
	let mut children = Vec::new();
	while !(input.peek(syn::Token![<]) && input.peek2(syn::Token![/])) {
		if input.is_empty() {
			return Err(input.error("unclosed element"));
		}
		children.push(input.parse()?);
	}
	input.parse::<syn::Token![<]>()?;
	input.parse::<syn::Token![/]>()?;
	Ok(children)
}

impl syn::parse::Parse for Fragment {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![>]>()?;
		let children = parse_children(input)?;
		input.parse::<syn::Token![>]>()?;
		Ok(Fragment { children })
	}
}

impl syn::parse::Parse for Element {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		let name = input.parse::<syn::Path>()?;
		let mut attributes = Vec::new();
		while !(input.peek(syn::Token![>]) || input.peek(syn::Token![/])) {
			let key = AttributeKey::parse_separated_nonempty_with(input, syn::Ident::parse_any)?;
			let value = if input.peek(syn::Token![=]) {
				input.parse::<syn::Token![=]>()?;
				let value = if input.peek(syn::LitStr) {
					AttributeValue::String(input.parse()?)
				} else {
					AttributeValue::Block(input.parse()?)
				};
				Some(value)
			} else {
				None
			};
			attributes.push(Attribute { key, value });
		}
		let self_closing = input.peek(syn::Token![/]);
		if self_closing {
			input.parse::<syn::Token![/]>()?;
		}
		input.parse::<syn::Token![>]>()?;
		let children = if self_closing {
			Vec::new()
		} else {
			let children = parse_children(input)?;
			let close_name = input.parse::<syn::Path>()?;
			if quote!(#close_name).to_string() != quote!(#name).to_string() {
				return Err(syn::Error::new_spanned(
					close_name,
					"closing tag does not match opening tag",
				));
			}
			input.parse::<syn::Token![>]>()?;
			children
		};
		Ok(Element {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl Attribute {
	/// Host attribute names keep their hyphens, so `data-options` stays `data-options`.
	fn host_name(&self) -> String {
		self.key
			.iter()
			.map(|ident| ident.unraw().to_string())
			.collect::<Vec<_>>()
			.join("-")
	}

	fn value_tokens(&self) -> proc_macro2::TokenStream {
		let key = &self.key;
		match &self.value {
			None => quote! { #key },
			Some(AttributeValue::String(string)) => quote! { #string },
			Some(AttributeValue::Block(block)) => quote! { #block },
		}
	}
}

fn children_tokens(children: &[Node]) -> proc_macro2::TokenStream {
	let children = children.iter();
	quote! { vec![#(::std::convert::Into::<::html::Node>::into(#children)),*] }
}

impl Element {
	fn host_name(&self) -> Option<String> {
		self.name
			.get_ident()
			.map(|ident| ident.to_string())
			.filter(|name| name.starts_with(|c: char| c.is_ascii_lowercase()))
	}

	fn host_tokens(&self, name: String) -> proc_macro2::TokenStream {
		let attributes = self.attributes.iter().map(|attribute| {
			let key = attribute.host_name();
			let value = attribute.value_tokens();
			quote! { (#key, ::std::convert::Into::<::html::AttributeValue>::into(#value)) }
		});
		let children = children_tokens(&self.children);
		let self_closing = self.self_closing;
		quote! {
			::html::Node::Host(::html::HostNode {
				name: #name,
				attributes: vec![#(#attributes),*],
				children: #children,
				self_closing: #self_closing,
			})
		}
	}

	fn component_tokens(&self) -> proc_macro2::TokenStream {
		let name = &self.name;
		let fields = self.attributes.iter().map(|attribute| {
			let key = &attribute.key;
			let value = attribute.value_tokens();
			quote! { #key: #value }
		});
		let children = children_tokens(&self.children);
		quote! {
			::html::Node::Component(::html::ComponentNode {
				component: Box::new(#name { #(#fields),* }),
				children: #children,
			})
		}
	}
}

impl quote::ToTokens for Node {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let code = match self {
			Node::String(string) => quote! { #string },
			Node::Block(block) => quote! { #block },
			Node::Fragment(fragment) => {
				let children = children_tokens(&fragment.children);
				quote! {
					::html::Node::Fragment(::html::FragmentNode {
						children: #children,
					})
				}
			}
			Node::Element(element) => match element.host_name() {
				Some(name) => element.host_tokens(name),
				None => element.component_tokens(),
			},
		};
		code.to_tokens(tokens);
	}
}

/// Turn `fn Name(prop: Type, ..) { .. }` into a props struct named `Name` implementing `html::Component`. The body may refer to `children`.
fn component_transform(item: syn::ItemFn) -> TokenStream {
	let visibility = item.vis;
	let struct_name = item.sig.ident;
	let (impl_generics, ty_generics, where_clause) = item.sig.generics.split_for_impl();
	let fields: Vec<_> = item
		.sig
		.inputs
		.iter()
		.filter_map(|argument| match argument {
			syn::FnArg::Typed(typed) => Some(typed),
			syn::FnArg::Receiver(_) => None,
		})
		.collect();
	let field_patterns = fields.iter().map(|field| &field.pat);
	let fields = fields.iter().map(|field| quote! { #visibility #field });
	let block = item.block;
	let code = quote! {
		#visibility struct #struct_name #impl_generics { #(#fields),* }
		impl #impl_generics ::html::Component for #struct_name #ty_generics #where_clause {
			#[allow(unused_variables)]
			fn render(self: Box<Self>, children: Vec<::html::Node>) -> ::html::Node {
				let #struct_name { #(#field_patterns),* } = *self;
				#block
			}
		}
	};
	code.into()
}

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let node = parse_macro_input!(input as Node);
	quote!(#node).into()
}

#[proc_macro_attribute]
pub fn component(_attr: TokenStream, input: TokenStream) -> TokenStream {
	component_transform(parse_macro_input!(input as syn::ItemFn))
}
