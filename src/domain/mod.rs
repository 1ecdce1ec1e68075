mod action;
mod error;
mod journal;
mod state;

pub use action::*;
pub use error::*;
pub use journal::*;
pub use state::*;
