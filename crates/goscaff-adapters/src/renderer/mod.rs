//! Project renderers.

pub mod go;

pub use go::GoServiceRenderer;
