use log::LevelFilter;

#[derive(Debug, Clone, Copy)]
pub struct Config {
	pub level: LevelFilter,
	/// Prefix each line with the record's target instead of its source location.
	pub prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	#[cfg_attr(target_family = "wasm", allow(dead_code))]
	fn simplelog(&self) -> simplelog::Config {
		let mut builder = simplelog::ConfigBuilder::new();
		if self.prefer_target {
			builder.set_target_level(LevelFilter::Trace);
			builder.set_location_level(LevelFilter::Off);
		}
		builder.build()
	}
}

/// Logs to the devtools console. `prefer_target` has no effect here.
#[cfg(target_family = "wasm")]
pub fn init(config: Config) {
	let Some(level) = config.level.to_level() else {
		return;
	};
	if let Err(err) = console_log::init_with_level(level) {
		log::warn!("logger already installed: {err}");
	}
}

#[cfg(not(target_family = "wasm"))]
pub fn init(config: Config) {
	if let Err(err) = simplelog::SimpleLogger::init(config.level, config.simplelog()) {
		eprintln!("logger already installed: {err}");
	}
}
