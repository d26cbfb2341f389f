mod alert;
pub use alert::*;
mod loader;
pub use loader::*;
mod search;
pub use search::*;
mod user_card;
pub use user_card::*;
mod user_dialog;
pub use user_dialog::*;
