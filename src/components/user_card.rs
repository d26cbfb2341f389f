use crate::data::{UserId, UserRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
	pub user: UserRecord,
	pub disabled: bool,
	pub on_edit: Callback<UserRecord>,
	pub on_delete: Callback<UserId>,
}

#[function_component]
pub fn UserCard(props: &UserCardProps) -> Html {
	let user = &props.user;
	let edit = {
		let user = user.clone();
		props.on_edit.reform(move |_: MouseEvent| user.clone())
	};
	let delete = {
		let id = user.id;
		props.on_delete.reform(move |_: MouseEvent| id)
	};
	html! {
		<div class="col-12 col-sm-6 col-md-4">
			<div class="card user shadow-sm p-3">
				<h5 class="card-title fw-bold">{&user.name}</h5>
				<p class="mb-2"><strong>{"Username: "}</strong>{&user.username}</p>
				<p class="mb-2"><strong>{"Email: "}</strong>{&user.email}</p>
				<p class="mb-2"><strong>{"Street: "}</strong>{user.street()}</p>
				<p class="mb-2"><strong>{"City: "}</strong>{user.city()}</p>
				<p class="mb-2"><strong>{"Zipcode: "}</strong>{user.zipcode()}</p>
				<div class="card-footer d-flex gap-2 bg-transparent border-0 px-0">
					<button class="btn btn-outline-primary btn-sm" onclick={edit} disabled={props.disabled}>
						{"Edit"}
					</button>
					<button class="btn btn-outline-secondary btn-sm" onclick={delete} disabled={props.disabled}>
						{"Delete"}
					</button>
				</div>
			</div>
		</div>
	}
}
