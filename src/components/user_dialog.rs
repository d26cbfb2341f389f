use crate::data::{Dialog, Field};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserDialogProps {
	pub dialog: Dialog,
	pub disabled: bool,
	pub on_input: Callback<(Field, String)>,
	pub on_cancel: Callback<()>,
	pub on_save: Callback<()>,
}

#[function_component]
pub fn UserDialog(props: &UserDialogProps) -> Html {
	let Some(form) = props.dialog.form() else {
		return html! {
			<div class="modal" id="users::UserDialog" />
		};
	};
	// Inputs are named after their field, so one handler serves them all.
	let oninput = {
		let on_input = props.on_input.clone();
		Callback::from(move |ev: InputEvent| {
			let input: web_sys::HtmlInputElement = ev.target_unchecked_into();
			match input.name().parse::<Field>() {
				Ok(field) => on_input.emit((field, input.value())),
				Err(err) => log::warn!(target: "users", "{err}"),
			}
		})
	};
	let fields = Field::all().into_iter().map(|field| {
		html! {
			<div class="mb-2">
				<label class="form-label" for={field.id()}>{field.label()}</label>
				<input
					class="form-control"
					id={field.id()}
					name={field.id()}
					value={form.get(field).to_owned()}
					disabled={props.disabled}
					oninput={oninput.clone()}
				/>
			</div>
		}
	});
	html! {
		<div class="modal d-block" id="users::UserDialog" tabindex="-1">
			<div class="modal-dialog">
				<div class="modal-content rounded-4">
					<div class="modal-header bg-primary text-white justify-content-center rounded-4">
						<h5 class="modal-title">{props.dialog.title()}</h5>
					</div>
					<div class="modal-body">
						{for fields}
					</div>
					<div class="modal-footer">
						<button class="btn btn-secondary" onclick={props.on_cancel.reform(|_: MouseEvent| ())} disabled={props.disabled}>
							{"Cancel"}
						</button>
						<button class="btn btn-primary" onclick={props.on_save.reform(|_: MouseEvent| ())} disabled={props.disabled}>
							{"Save"}
						</button>
					</div>
				</div>
			</div>
		</div>
	}
}
