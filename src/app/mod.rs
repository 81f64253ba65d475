//! Application layer - error type, channel messages and the
//! coordinator that wires the detection core to the FLTK widgets.

pub mod error;
pub mod messages;
pub mod state;

pub use error::{AppError, Result};
pub use messages::Message;
pub use state::AppState;
