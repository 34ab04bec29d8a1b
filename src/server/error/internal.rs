use thiserror::Error;

/// Internal issues with the codebase or stored data indicating unexpected behavior & possible
/// bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A persisted small-integer code has no matching enum variant.
    ///
    /// Occurs when a row was written by something other than this application or the code
    /// table changed incompatibly. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Unknown code {code} in {table} code table")]
    UnknownCode {
        /// Name of the code table
        table: &'static str,
        /// The stored code that failed to decode
        code: i16,
    },

    /// A persisted string value has no matching enum variant.
    #[error("Unknown stored value '{value}' for {field}")]
    UnknownStoredValue {
        /// Column holding the value
        field: &'static str,
        /// The stored value that failed to decode
        value: String,
    },

    /// Two variants of the same code table share a code.
    ///
    /// Detected by the startup code table check.
    #[error("Code {code} is used more than once in {table} code table")]
    DuplicateCode {
        /// Name of the code table
        table: &'static str,
        /// The duplicated code
        code: i16,
    },

    /// A variant does not decode back to itself from its own code.
    #[error("Code {code} in {table} code table does not round trip")]
    CodeMismatch {
        /// Name of the code table
        table: &'static str,
        /// The offending code
        code: i16,
    },
}
