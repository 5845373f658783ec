use crate::adapters::outbound::renderers::{DotRenderer, TextRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphRenderer;
use std::io::Write;

/// Factory for creating graph renderers
///
/// Keeps the choice of renderer adapter out of both the CLI and the
/// use case.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for `format` writing to `out`
    ///
    /// `verbose` only affects the text layout.
    ///
    /// # Examples
    /// ```
    /// use totool::application::dto::OutputFormat;
    /// use totool::application::factories::RendererFactory;
    ///
    /// let mut buffer = Vec::new();
    /// let renderer = RendererFactory::create(OutputFormat::Dot, false, &mut buffer);
    /// # drop(renderer);
    /// ```
    pub fn create<'a, W: Write + 'a>(
        format: OutputFormat,
        verbose: bool,
        out: W,
    ) -> Box<dyn GraphRenderer + 'a> {
        match format {
            OutputFormat::Text => Box::new(TextRenderer::new(out, verbose)),
            OutputFormat::Dot => Box::new(DotRenderer::new(out)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn render_root(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        {
            let mut renderer = RendererFactory::create(format, false, &mut buffer);
            renderer.on_begin().unwrap();
            renderer.on_root(Path::new("/bin/app")).unwrap();
            renderer.on_end().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_create_text_renderer() {
        assert_eq!(render_root(OutputFormat::Text), "/bin/app:\n");
    }

    #[test]
    fn test_create_dot_renderer() {
        assert_eq!(render_root(OutputFormat::Dot), "digraph G {\n}\n");
    }
}
