use crate::{hooks::use_auto_dismiss, store::Notification};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationAlertProps {
	pub notification: Option<Notification>,
}

#[function_component]
pub fn NotificationAlert(props: &NotificationAlertProps) -> Html {
	use_auto_dismiss(props.notification.clone());
	let Some(notification) = &props.notification else {
		return html!();
	};
	html! {
		<div class={classes!("alert", notification.severity.css_class(), "rounded-3")} role="alert">
			{&notification.message}
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
	pub message: Option<String>,
}

/// Persistent error text, shown until the store clears it.
#[function_component]
pub fn Banner(props: &BannerProps) -> Html {
	match &props.message {
		Some(message) => html!(<div class="alert alert-danger" role="alert">{message}</div>),
		None => html!(),
	}
}
