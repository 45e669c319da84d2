mod command;
mod output;
mod relay;

pub use command::*;
pub use output::*;
pub use relay::*;
