use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Success,
	Info,
	Error,
}

impl Severity {
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Success => "alert-success",
			Self::Info => "alert-info",
			Self::Error => "alert-danger",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
	pub id: NotificationId,
	pub message: String,
	pub severity: Severity,
}

/// How long a notification stays visible once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissPolicy {
	/// Stays until the next emission replaces it.
	#[default]
	Never,
	After(Duration),
}

/// Single-slot channel: every emission replaces whatever was shown before.
#[derive(Debug, Default)]
pub struct NotificationSlot {
	current: Option<Notification>,
	next_id: u64,
}

impl NotificationSlot {
	pub fn emit(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
		self.next_id += 1;
		let id = NotificationId(self.next_id);
		self.current = Some(Notification {
			id,
			message: message.into(),
			severity,
		});
		id
	}

	pub fn current(&self) -> Option<&Notification> {
		self.current.as_ref()
	}

	/// Clears the slot if `id` is still the notification being shown.
	pub fn dismiss(&mut self, id: NotificationId) -> bool {
		if self.current.as_ref().map(|current| current.id) != Some(id) {
			return false;
		}
		self.current = None;
		true
	}
}
