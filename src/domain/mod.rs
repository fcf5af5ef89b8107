//! Currency converter feature module.
//!
//! The whole application fits one reducer triple plus a projector:
//! - `state.rs` - rate table and open converter
//! - `message.rs` - everything that can happen
//! - `reducer.rs` - state transitions (pure, side effects as commands)
//! - `project.rs` - state to view tree
//! - `rates.rs` - response body parsing
//! - `command.rs` - side effects the runtime executes

mod command;
mod message;
mod project;
mod rates;
mod reducer;
mod state;

pub use command::Command;
pub use message::Message;
pub use project::project;
pub use rates::{parse_rates, RatesError};
pub use reducer::AppReducer;
pub use state::{AppState, Converter, RateTable, SelectionError};
