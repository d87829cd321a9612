//! # SGF Preview Library
//!
//! Picks a random SGF game record, extracts its opening moves and renders
//! them as stones on a web page.
//!
//! ## Features
//!
//! - **Move Extraction**: tolerant `;B[..]` / `;W[..]` token scan with board coordinates
//! - **Record Sources**: pluggable providers (directory of `.sgf` files, in-memory)
//! - **Rendering**: stones embedded as JSON into an HTML page
//! - **Server Components**: Axum web server serving one random opening per visit
//!
//! ## Usage
//!
//! ```rust
//! use sgf_preview::sgf::{extract_moves, StoneColor};
//!
//! let moves = extract_moves("(;GM[1];B[pd];W[dp])", 5);
//! assert_eq!(moves[0].x, 15);
//! assert_eq!(moves[1].color, StoneColor::White);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Move token scanning and extraction
pub mod sgf;

/// Game record providers
pub mod source;

/// HTML page rendering
pub mod render;

/// Server components (Web UI)
pub mod servers;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use sgf::{extract_moves, MoveRecord, StoneColor};

pub use source::{DirectorySource, MemorySource, SourceProvider};

/// Server configuration and implementations
pub use servers::{WebUiConfig, WebUiServer};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the SGF preview library
#[derive(Debug, thiserror::Error)]
pub enum SgfPreviewError {
    #[error("No SGF files found in {source_name}")]
    NoInputAvailable { source_name: String },

    #[error("Invalid record id: {0:?}")]
    InvalidSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SgfPreviewError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
