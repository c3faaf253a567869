pub mod models;
pub mod utils;

// Data models and money helpers used by the engine and by the rendering layer.
