//! CLI subcommands.

mod cast;
mod silence;
mod util;

pub use cast::CastCommand;
pub use silence::SilenceCommand;
