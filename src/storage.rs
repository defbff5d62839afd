//! Local persistence of the working copy and file export/import.

/// Document persistence, JSON export and printing.
pub mod gateway;
mod store;

pub use gateway::{
    Export, Gateway, HtmlFilePrinter, ImportError, PrintError, Printer, STATE_KEY, SaveError,
    export_file_name,
};
pub use store::{FileStore, MemoryStore, Store, StoreError};
