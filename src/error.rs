use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown deck: {0}")]
    UnknownDeck(String),

    #[error("Failed to read source {path}: {source}")]
    Source {
        path: String,
        #[source]
        source: Box<StatsError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

impl StatsError {
    /// Attach the name of the input source that produced this error
    pub fn in_source(self, path: impl Into<String>) -> Self {
        StatsError::Source {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
