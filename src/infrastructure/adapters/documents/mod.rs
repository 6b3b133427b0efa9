//! Document Adapters

mod file_library;

pub use file_library::{FileDocumentLibrary, MANIFEST_FILE};
