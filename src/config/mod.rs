//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → routing::Router::from_config (bind handler names to code)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Handlers and validators are code; config refers to them by name

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BodyConfig, LogFormat, ObservabilityConfig, RouteConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
