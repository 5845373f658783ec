/// Renderer adapters for the supported output layouts
mod dot_renderer;
mod text_renderer;

pub use dot_renderer::DotRenderer;
pub use text_renderer::TextRenderer;
