pub mod renderer;
pub mod screen;

pub use renderer::Renderer;
pub use screen::{ScreenBuffer, ScreenLayout, ScreenProjector};
