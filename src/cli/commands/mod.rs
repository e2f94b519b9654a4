//! One module per subcommand.

pub mod completions;
pub mod derive;
pub mod forward;
pub mod index;
pub mod unwrap;
pub mod wrap;
