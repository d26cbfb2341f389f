use crate::{
	api::RestUserApi,
	components::{Banner, Loader, NotificationAlert, SearchBar, UserCard, UserDialog},
	config::Config,
	data::{Dialog, Field, UserId, UserRecord},
	hooks::{connect, use_dashboard, Dashboard, DashboardState},
};
use yew::prelude::*;
use yew_hooks::use_mount;
use yewdux::prelude::use_store_value;

fn open_dashboard() -> anyhow::Result<Dashboard> {
	let config = Config::load()?;
	log::info!(target: "users", "Loading users from {}", config.endpoint);
	let api = RestUserApi::new(config.endpoint.clone())?;
	let store = Dashboard::new(api, config);
	connect(&store);
	Ok(store)
}

fn fetch_next_page(store: &Dashboard) {
	let store = store.clone();
	crate::util::spawn_local("users", async move { store.fetch_next_page().await.map(|_| ()) });
}

#[function_component]
pub fn App() -> Html {
	let dashboard = use_memo((), |_| match open_dashboard() {
		Ok(store) => Some(store),
		Err(err) => {
			log::error!(target: "users", "Failed to open dashboard: {err:?}");
			None
		}
	});
	let Some(store) = (*dashboard).clone() else {
		return html! {
			<div class="alert alert-danger m-3">{"The dashboard could not start, see the console for details."}</div>
		};
	};
	html! {
		<ContextProvider<Dashboard> context={store}>
			<UserDashboard />
		</ContextProvider<Dashboard>>
	}
}

#[function_component]
fn UserDashboard() -> Html {
	let store = use_dashboard();
	let state = use_store_value::<DashboardState>();
	let search = use_state_eq(String::new);
	let dialog = use_state_eq(Dialog::default);

	// First page on mount, following pages when the grid is scrolled to the bottom.
	use_mount({
		let store = store.clone();
		move || fetch_next_page(&store)
	});
	let onscroll = {
		let store = store.clone();
		Callback::from(move |ev: Event| {
			let Some(grid) = ev.target_dyn_into::<web_sys::Element>() else {
				return;
			};
			let at_bottom = grid.scroll_height() - grid.scroll_top() <= grid.client_height() + 1;
			if at_bottom && !store.is_loading() {
				fetch_next_page(&store);
			}
		})
	};

	let on_search = {
		let search = search.clone();
		Callback::from(move |term: String| search.set(term))
	};
	let open_create = {
		let dialog = dialog.clone();
		Callback::from(move |_: MouseEvent| dialog.set(Dialog::open_create()))
	};
	let on_edit = {
		let dialog = dialog.clone();
		Callback::from(move |user: UserRecord| dialog.set(Dialog::open_edit(&user)))
	};
	let on_delete = {
		let store = store.clone();
		Callback::from(move |id: UserId| {
			let store = store.clone();
			crate::util::spawn_local("users", async move { store.delete(id).await });
		})
	};
	let on_input = {
		let dialog = dialog.clone();
		Callback::from(move |(field, value): (Field, String)| {
			let mut next = (*dialog).clone();
			next.set_field(field, value);
			dialog.set(next);
		})
	};
	let on_cancel = {
		let dialog = dialog.clone();
		Callback::from(move |_: ()| {
			let mut next = (*dialog).clone();
			next.cancel();
			dialog.set(next);
		})
	};
	let on_save = {
		let dialog = dialog.clone();
		let store = store.clone();
		Callback::from(move |_: ()| {
			let mut current = (*dialog).clone();
			let submission = current.take_submission();
			dialog.set(current);
			let Some(submission) = submission else {
				return;
			};
			let store = store.clone();
			crate::util::spawn_local("users", async move { store.submit(submission).await.map(|_| ()) });
		})
	};

	let snapshot = &state.0;
	let loading = snapshot.loading;
	let cards = store.filtered(&search).into_iter().enumerate().map(|(idx, user)| {
		let key = format!("{idx}-{}", user.id);
		html! {
			<UserCard
				key={key}
				user={user}
				disabled={loading}
				on_edit={on_edit.clone()}
				on_delete={on_delete.clone()}
			/>
		}
	});

	html! {
		<div class="container-fluid p-3 dashboard">
			<h1 class="text-center mb-3">{"User Management Dashboard"}</h1>
			<NotificationAlert notification={snapshot.notification.clone()} />
			<Banner message={snapshot.banner.clone()} />
			<div class="d-flex justify-content-between mb-3">
				<SearchBar value={(*search).clone()} on_change={on_search} />
				<button class="btn btn-primary rounded-3" onclick={open_create} disabled={loading}>
					{"Add User"}
				</button>
			</div>
			<div class="row g-3 user-grid" style="max-height: 80vh; overflow-y: auto;" {onscroll}>
				{for cards}
			</div>
			if loading {
				<Loader />
			}
			<p class="text-muted small text-center mt-2">
				{format!("{} users loaded, page {}", snapshot.records.len(), snapshot.current_page)}
			</p>
			<UserDialog dialog={(*dialog).clone()} disabled={loading} {on_input} {on_cancel} {on_save} />
		</div>
	}
}
