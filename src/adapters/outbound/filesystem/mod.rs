/// Filesystem adapters for graph input, artifact lookup and output
mod file_writer;
mod graph_file_reader;
mod local_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use graph_file_reader::GraphFileReader;
pub use local_repository::LocalRepositoryResolver;
