// ============================================================================
// Domain Module
// Configuration shared by every renderer
// ============================================================================

pub mod config;

pub use config::{ConversionKind, RenderConfig};
