//! Project configuration loaded from `.keyratchet.toml`.

pub mod settings;

pub use settings::Settings;
