//! Chatbot configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wonokerso_config::{load_default, validation};
//!
//! let config = load_default().expect("failed to load config");
//! validation::validate(&config).expect("invalid config");
//! println!("{}", config.endpoint.url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ChatbotConfig;
pub use toml_loader::{load_default, load_from_path};
