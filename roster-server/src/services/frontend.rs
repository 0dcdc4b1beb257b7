//! Static Frontend Serving
//!
//! Serves the pre-built frontend bundle for every path no API route claims.
//! Unknown paths fall back to `index.html` so client-side routing works.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Fallback service for non-API routes
pub fn service(static_dir: &Path) -> ServeDir<ServeFile> {
    let index = static_dir.join("index.html");
    ServeDir::new(static_dir).not_found_service(ServeFile::new(index))
}
