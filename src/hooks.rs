use crate::{
	api::RestUserApi,
	store::{DismissPolicy, Notification, Snapshot, UserListStore},
};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

pub type Dashboard = UserListStore<RestUserApi>;

/// Latest store snapshot, mirrored into yewdux so components re-render on change.
#[derive(Default, Clone, PartialEq, Store)]
pub struct DashboardState(pub Rc<Snapshot>);

/// Pushes every store change into the global `DashboardState`.
pub fn connect(store: &Dashboard) {
	#[cfg(target_arch = "wasm32")]
	let dispatch = Dispatch::<DashboardState>::global();
	// yewdux only has a global context on wasm; native builds never render the dashboard
	#[cfg(not(target_arch = "wasm32"))]
	let dispatch = Dispatch::<DashboardState>::new(&yewdux::Context::default());
	dispatch.set(DashboardState(Rc::new(store.snapshot())));
	store.subscribe(move |snapshot| {
		dispatch.set(DashboardState(Rc::new(snapshot.clone())));
	});
}

#[hook]
pub fn use_dashboard() -> Dashboard {
	use_context::<Dashboard>().unwrap()
}

/// Clears `notification` once the configured delay elapses, unless a newer one replaced it first.
#[hook]
pub fn use_auto_dismiss(notification: Option<Notification>) {
	let store = use_dashboard();
	let policy = store.config().dismiss;
	use_effect_with(notification, move |notification| {
		let timeout = match (policy, notification) {
			(DismissPolicy::After(delay), Some(notification)) => {
				let id = notification.id;
				let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
				Some(gloo_timers::callback::Timeout::new(millis, move || {
					store.dismiss_notification(id);
				}))
			}
			_ => None,
		};
		// dropping the timeout cancels it
		move || drop(timeout)
	});
}
