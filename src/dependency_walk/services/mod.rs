mod graph_walker;
mod otool_output_parser;

pub use graph_walker::GraphWalker;
pub use otool_output_parser::OtoolOutputParser;
