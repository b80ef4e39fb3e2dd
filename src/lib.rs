//! passgen - random password generation with strength feedback
//!
//! The core is two pure functions: [`generate_password`] samples characters
//! uniformly from the enabled character classes, and [`calculate_strength`]
//! rates the result. The `ui` module is a terminal front end built on top.

pub mod config;
pub mod error;
pub mod password;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::PassgenConfig;
pub use error::{PassgenError, Result};
pub use types::{GeneratedPassword, Options};

// Re-export main functionality
pub use password::{
    calculate_strength, generate, generate_password, CharacterClass, OptionsValidator,
    StrengthLevel, StrengthResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
