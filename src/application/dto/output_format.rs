/// Output format enumeration for the rendered dependency graph
///
/// Both the CLI/config layer and the renderer factory need this, so it
/// lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented listing in the style of `otool -L` (default)
    #[default]
    Text,
    /// Graphviz digraph
    Dot,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'dot'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}
