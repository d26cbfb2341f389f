mod api;
mod components;
mod config;
mod data;
mod hooks;
mod index;
mod logging;
mod request;
mod store;
mod util;

#[cfg(target_family = "wasm")]
fn main() {
	logging::init(logging::Config::default().prefer_target());
	yew::Renderer::<index::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	logging::init(logging::Config::default().prefer_target());
	log::error!(
		target: "users",
		"{} renders into a browser page, build it for wasm32-unknown-unknown (e.g. with trunk).",
		env!("CARGO_PKG_NAME")
	);
}
