mod journal;
mod transition;

pub use journal::*;
pub use transition::*;
