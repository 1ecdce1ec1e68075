mod boot;
pub mod console;
pub mod mock;
mod reducer;
mod script;
mod session;

pub use boot::*;
pub use reducer::*;
pub use script::*;
pub use session::*;
