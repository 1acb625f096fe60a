//! Terminal rendering of game snapshots

pub mod renderer;

pub use renderer::Renderer;
