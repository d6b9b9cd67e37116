//! Everything that turns shell state into text: colours, fixed strings, the
//! verse list and the fractal renderer. Nothing here touches the store.

pub mod mandelbrot;
mod palette;
pub mod text;
pub mod verses;

pub use palette::Palette;
