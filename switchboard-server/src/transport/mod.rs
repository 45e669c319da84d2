mod sessions;
mod ws;

pub use sessions::*;
pub use ws::*;
