mod journal;
mod transition;

pub use journal::*;
