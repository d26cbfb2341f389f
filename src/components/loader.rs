use yew::prelude::*;

#[function_component]
pub fn Loader() -> Html {
	html! {
		<div class="loader-overlay d-flex justify-content-center align-items-center">
			<div class="spinner-border text-primary" role="status">
				<span class="visually-hidden">{"Loading..."}</span>
			</div>
		</div>
	}
}
