pub mod csv_table;

pub use csv_table::{IngestError, IngestOptions, LoadedTable, read_csv_table};
