//! Console front end: text board rendering, the human input collector, and
//! the mode menu.

mod console;
mod human;
mod menu;

pub use console::{render_board, ConsoleView};
pub use human::HumanAgent;
pub use menu::{choose_mode, GameMode};
