use crate::{
	api::UserApi,
	config::Config,
	data::{FormState, Submission, UserId, UserRecord},
	request::RequestError,
};
use derivative::Derivative;
use futures_util::future::{self, Either, LocalBoxFuture};
use std::{cell::RefCell, rc::Rc};

mod clock;
pub use clock::*;
mod notification;
pub use notification::*;

static MSG_ADDED: &str = "User added successfully! 🎉";
static MSG_UPDATED: &str = "User updated successfully! ✏️";
static MSG_DELETED: &str = "User deleted successfully! 🗑️";
static MSG_MISSING: &str = "The user being edited no longer exists! ⚠️";
static MSG_DELETE_ERROR: &str = "An error occurred while deleting the user! ⚠️";
static MSG_SAVE_ERROR: &str = "An error occurred while saving the user! ⚠️";
static BANNER_FETCH: &str = "Failed to fetch users. Please try again later.";
static BANNER_DELETE: &str = "Failed to delete user. Please try again.";
static BANNER_SAVE: &str = "Failed to save user. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
	Appended(usize),
	/// Another fetch was still outstanding, nothing was requested.
	AlreadyInFlight,
}

#[derive(thiserror::Error, Debug)]
#[error("failed to fetch page {page}")]
pub struct FetchError {
	pub page: u32,
	#[source]
	pub source: RequestError,
}

#[derive(thiserror::Error, Debug)]
#[error("failed to delete user {id}")]
pub struct DeleteError {
	pub id: UserId,
	#[source]
	pub source: RequestError,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no user with id {0}")]
pub struct NotFoundError(pub UserId);

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
	#[error(transparent)]
	NotFound(#[from] NotFoundError),
	#[error("failed to save user {id}")]
	Persist {
		id: UserId,
		#[source]
		source: RequestError,
	},
}

/// Immutable view of the store handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
	pub records: Vec<UserRecord>,
	pub current_page: u32,
	pub loading: bool,
	pub banner: Option<String>,
	pub notification: Option<Notification>,
}

#[derive(Debug)]
struct State {
	records: Vec<UserRecord>,
	current_page: u32,
	// false until the first page has been appended; `current_page` then names the last page loaded
	page_loaded: bool,
	in_flight: bool,
	pending: usize,
	banner: Option<String>,
	notification: NotificationSlot,
	last_id: u64,
}

impl Default for State {
	fn default() -> Self {
		Self {
			records: Vec::new(),
			current_page: 1,
			page_loaded: false,
			in_flight: false,
			pending: 0,
			banner: None,
			notification: NotificationSlot::default(),
			last_id: 0,
		}
	}
}

impl State {
	fn next_page(&self) -> u32 {
		match self.page_loaded {
			true => self.current_page + 1,
			false => self.current_page,
		}
	}

	fn fresh_id(&mut self, now: u64) -> UserId {
		let mut id = now.max(self.last_id + 1);
		while self.records.iter().any(|record| record.id.0 == id) {
			id += 1;
		}
		self.last_id = id;
		UserId(id)
	}

	fn save_failed(&mut self) {
		self.banner = Some(BANNER_SAVE.to_owned());
		self.notification.emit(MSG_SAVE_ERROR, Severity::Error);
	}

	fn snapshot(&self) -> Snapshot {
		Snapshot {
			records: self.records.clone(),
			current_page: self.current_page,
			loading: self.in_flight || self.pending > 0,
			banner: self.banner.clone(),
			notification: self.notification.current().cloned(),
		}
	}
}

type Subscriber = Rc<dyn Fn(&Snapshot)>;

/// Paginated, optimistically mutated list of users.
///
/// Cloning is cheap and every clone shares the same state. State is only ever
/// borrowed between suspension points, so other operations proceed while a
/// fetch or delete is waiting on the network.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct UserListStore<A> {
	#[derivative(Debug = "ignore")]
	api: Rc<A>,
	#[derivative(Debug = "ignore")]
	clock: Rc<dyn Clock>,
	config: Rc<Config>,
	state: Rc<RefCell<State>>,
	#[derivative(Debug = "ignore")]
	subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<A> Clone for UserListStore<A> {
	fn clone(&self) -> Self {
		Self {
			api: self.api.clone(),
			clock: self.clock.clone(),
			config: self.config.clone(),
			state: self.state.clone(),
			subscribers: self.subscribers.clone(),
		}
	}
}

impl<A> PartialEq for UserListStore<A> {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.state, &other.state)
	}
}

impl<A> UserListStore<A>
where
	A: UserApi,
{
	pub fn new(api: A, config: Config) -> Self {
		Self::with_clock(api, config, SystemClock)
	}

	pub fn with_clock(api: A, config: Config, clock: impl Clock + 'static) -> Self {
		Self {
			api: Rc::new(api),
			clock: Rc::new(clock),
			config: Rc::new(config),
			state: Rc::new(RefCell::new(State::default())),
			subscribers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Registers `callback` to receive a fresh snapshot after every state change.
	pub fn subscribe(&self, callback: impl Fn(&Snapshot) + 'static) {
		self.subscribers.borrow_mut().push(Rc::new(callback));
	}

	fn mutate<R>(&self, perform: impl FnOnce(&mut State) -> R) -> R {
		let (output, snapshot) = {
			let mut state = self.state.borrow_mut();
			let output = perform(&mut state);
			(output, state.snapshot())
		};
		let subscribers = self.subscribers.borrow().clone();
		for subscriber in subscribers {
			subscriber(&snapshot);
		}
		output
	}

	async fn with_timeout<T>(&self, request: LocalBoxFuture<'_, Result<T, RequestError>>) -> Result<T, RequestError> {
		let timeout = self.config.request_timeout;
		match future::select(request, Box::pin(wasm_timer::Delay::new(timeout))).await {
			Either::Left((result, _)) => result,
			Either::Right(_) => Err(RequestError::TimedOut(timeout)),
		}
	}

	pub fn snapshot(&self) -> Snapshot {
		self.state.borrow().snapshot()
	}

	pub fn is_loading(&self) -> bool {
		let state = self.state.borrow();
		state.in_flight || state.pending > 0
	}

	pub fn dismiss_notification(&self, id: NotificationId) {
		let is_current = self.state.borrow().notification.current().map(|current| current.id) == Some(id);
		if is_current {
			self.mutate(|state| state.notification.dismiss(id));
		}
	}

	/// Case-insensitive substring match against user names. An empty term matches everyone.
	pub fn filtered(&self, term: &str) -> Vec<UserRecord> {
		let state = self.state.borrow();
		state.records.iter().filter(|record| record.name_matches(term)).cloned().collect()
	}

	/// Requests the page after the last one loaded and appends it.
	///
	/// The page counter only advances once a page has actually arrived, so a
	/// failed fetch is retried on the same page.
	pub async fn fetch_next_page(&self) -> Result<FetchOutcome, FetchError> {
		if self.state.borrow().in_flight {
			log::debug!(target: "users", "Fetch already in flight, ignoring trigger.");
			return Ok(FetchOutcome::AlreadyInFlight);
		}
		let page = self.mutate(|state| {
			state.in_flight = true;
			state.next_page()
		});
		let page_size = self.config.page_size;
		let response = self.with_timeout(self.api.fetch_page(page, page_size)).await;
		let result = self.mutate(move |state| {
			state.in_flight = false;
			match response {
				Ok(users) => {
					let count = users.len();
					state.records.extend(users);
					state.current_page = page;
					state.page_loaded = true;
					state.banner = None;
					Ok(FetchOutcome::Appended(count))
				}
				Err(source) => {
					state.banner = Some(BANNER_FETCH.to_owned());
					Err(FetchError { page, source })
				}
			}
		});
		if let Ok(FetchOutcome::Appended(count)) = &result {
			log::debug!(target: "users", "Appended {count} users from page {page}");
		}
		result
	}

	/// Adds a user built from `form`. Never touches the remote api.
	pub fn create(&self, form: FormState) -> UserRecord {
		let now = self.clock.now_millis();
		let record = self.mutate(move |state| {
			let record = form.into_record(state.fresh_id(now));
			state.records.push(record.clone());
			state.notification.emit(MSG_ADDED, Severity::Success);
			record
		});
		log::info!(target: "users", "Created user {}", record.id);
		record
	}

	/// Merges `form` into every record with `id` and returns the first of them.
	/// Never touches the remote api.
	pub fn update(&self, id: UserId, form: FormState) -> Result<UserRecord, NotFoundError> {
		let result = self.mutate(move |state| {
			let mut updated = None;
			for record in state.records.iter_mut().filter(|record| record.id == id) {
				form.apply_to(record);
				updated.get_or_insert_with(|| record.clone());
			}
			match updated {
				Some(updated) => {
					state.notification.emit(MSG_UPDATED, Severity::Info);
					Ok(updated)
				}
				None => {
					state.notification.emit(MSG_MISSING, Severity::Error);
					Err(NotFoundError(id))
				}
			}
		});
		if result.is_ok() {
			log::info!(target: "users", "Updated user {id}");
		}
		result
	}

	/// Deletes the user remotely, then locally. A failed request leaves the list untouched.
	pub async fn delete(&self, id: UserId) -> Result<(), DeleteError> {
		let response = self.remote(self.api.delete(id)).await;
		let result = self.mutate(move |state| match response {
			Ok(()) => {
				let before = state.records.len();
				state.records.retain(|record| record.id != id);
				state.notification.emit(MSG_DELETED, Severity::Success);
				Ok(before - state.records.len())
			}
			Err(source) => {
				state.banner = Some(BANNER_DELETE.to_owned());
				state.notification.emit(MSG_DELETE_ERROR, Severity::Error);
				Err(DeleteError { id, source })
			}
		});
		let removed = result?;
		log::info!(target: "users", "Deleted user {id}, {removed} record(s) removed");
		Ok(())
	}

	/// Applies a dialog submission locally and, when mutations are persisted,
	/// writes it to the remote api. A failed write rolls the local change back.
	pub async fn submit(&self, submission: Submission) -> Result<UserRecord, SubmitError> {
		match submission {
			Submission::Create(form) => {
				let record = self.create(form);
				if !self.config.persist_mutations {
					return Ok(record);
				}
				if let Err(source) = self.remote(self.api.create(record.clone())).await {
					let id = record.id;
					self.mutate(move |state| {
						state.records.retain(|record| record.id != id);
						state.save_failed();
					});
					return Err(SubmitError::Persist { id, source });
				}
				Ok(record)
			}
			Submission::Update(id, form) => {
				let previous = self.with_id(id);
				let record = self.update(id, form)?;
				if !self.config.persist_mutations {
					return Ok(record);
				}
				if let Err(source) = self.remote(self.api.update(record.clone())).await {
					self.mutate(move |state| {
						let targets = state.records.iter_mut().filter(|record| record.id == id);
						for (target, original) in targets.zip(previous) {
							*target = original;
						}
						state.save_failed();
					});
					return Err(SubmitError::Persist { id, source });
				}
				Ok(record)
			}
		}
	}

	fn with_id(&self, id: UserId) -> Vec<UserRecord> {
		let state = self.state.borrow();
		state.records.iter().filter(|record| record.id == id).cloned().collect()
	}

	async fn remote(&self, request: LocalBoxFuture<'_, Result<(), RequestError>>) -> Result<(), RequestError> {
		self.mutate(|state| state.pending += 1);
		let result = self.with_timeout(request).await;
		self.mutate(|state| state.pending = state.pending.saturating_sub(1));
		result
	}
}
