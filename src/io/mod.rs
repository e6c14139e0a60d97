pub mod loader;
pub mod output;

pub use loader::load_dataset;
pub use output::{create_writer, JsonWriter, MarkdownWriter, OutputWriter, TerminalWriter};
