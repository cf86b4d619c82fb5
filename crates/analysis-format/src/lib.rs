pub mod analysis;
pub mod errors;
pub mod load;
mod raw;

pub use analysis::Analysis;
pub use errors::LoadError;
pub use load::{load_analysis, load_analysis_file};
