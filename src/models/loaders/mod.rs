pub mod csv_loader;
pub mod locator;

pub use csv_loader::{load_batch, parse_batch, LoadedBatch};
pub use locator::{batch_index, compile_pattern, locate_batch_files, BatchFile};
