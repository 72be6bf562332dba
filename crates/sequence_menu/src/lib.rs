mod input;
mod session;

pub use input::{Tokens, parse_int, parse_value};
pub use session::{ALL_ACTIONS, Action, MenuError, Session};
