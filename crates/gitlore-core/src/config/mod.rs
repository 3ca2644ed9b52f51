pub mod settings;

pub use settings::LoreConfig;
