// ============================================================================
// Language Module
// Language backends and their shared error type
// ============================================================================

mod errors;
pub mod vallader;

pub use errors::{RenderError, RenderResult};
pub use vallader::Vallader;
