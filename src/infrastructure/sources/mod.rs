//! Content sources backed by the local file system

mod local_file;

pub use local_file::LocalFileSource;
