use thiserror::Error;

/// Failures while encoding a backend call or decoding its reply
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("payload for `{command}` could not be serialized")]
    Encode {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Payloads are named argument maps, so anything but an object is rejected
    #[error("payload for `{command}` must be a JSON object, got {found}")]
    PayloadNotObject {
        command: &'static str,
        found: &'static str,
    },

    #[error("reply to `{command}` does not match its response type")]
    Response {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a reply to `{expected}`, got one for `{got}`")]
    CommandMismatch { expected: &'static str, got: String },
}

pub type Result<T> = std::result::Result<T, BackendError>;
