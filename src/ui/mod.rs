// Module declarations
mod app;
pub mod components;
pub mod pages;
mod renderer;
pub mod splash;
pub mod state;
pub mod utils;
// Re-exports for external use
pub use app::{App, run};
