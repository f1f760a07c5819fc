pub mod error;
pub mod sink;
pub mod table;
pub mod time;

pub use error::{ExportError, Result};
pub use sink::{DataSink, Exporter, FileSink, MemorySink, export_filename};
pub use table::{ExportedRow, HEADER, read_rows, write_trials};
pub use time::{TimeFormat, format_elapsed, parse_elapsed};
