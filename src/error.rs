use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("storage I/O error")]
    Io(#[from] std::io::Error),

    #[error("malformed document under key `{key}`")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode document for key `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
