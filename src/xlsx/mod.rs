pub mod writer;

pub use writer::write_analysis_to_xlsx;
