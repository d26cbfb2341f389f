use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
	pub value: AttrValue,
	pub on_change: Callback<String>,
}

#[function_component]
pub fn SearchBar(props: &SearchBarProps) -> Html {
	let oninput = props.on_change.reform(|ev: InputEvent| {
		let input: web_sys::HtmlInputElement = ev.target_unchecked_into();
		input.value()
	});
	html! {
		<input
			class="form-control form-control-sm search"
			type="search"
			placeholder="Search by Name"
			value={props.value.clone()}
			{oninput}
		/>
	}
}
