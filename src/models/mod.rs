pub mod dataset;
pub mod difficulty;
pub mod loaders;
pub mod record;

pub use dataset::{count_by_difficulty, Dataset, DifficultyCounts};
pub use difficulty::Difficulty;
pub use loaders::{load_batch, locate_batch_files, BatchFile, LoadedBatch};
pub use record::Record;
