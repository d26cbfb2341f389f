/// Source of wall-clock time for ids of locally created users.
pub trait Clock {
	fn now_millis(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_millis(&self) -> u64 {
		wasm_timer::SystemTime::now()
			.duration_since(wasm_timer::UNIX_EPOCH)
			.map(|elapsed| elapsed.as_millis() as u64)
			.unwrap_or_default()
	}
}
