/// Factories selecting adapter implementations
mod renderer_factory;

pub use renderer_factory::RendererFactory;
