use thiserror::Error;

/// Errors that can occur while packing values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PackError {
    /// The type string is not a supported Solidity type.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// The value kind does not match the declared type.
    #[error("Expected a value of type {ty}, got {value}")]
    TypeMismatch {
        /// The declared type.
        ty: String,
        /// Kind of the supplied value.
        value: &'static str,
    },

    /// An integer does not fit the declared width.
    #[error("Value {value} does not fit in {ty}")]
    Overflow {
        /// The declared type.
        ty: String,
        /// The value, in decimal.
        value: String,
    },

    /// A fixed-size byte string or array has the wrong length.
    #[error("Expected {expected} elements for {ty}, got {actual}")]
    LengthMismatch {
        /// The declared type.
        ty: String,
        /// Length required by the type.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// The number of types and values differ.
    #[error("Got {types} types but {values} values")]
    ArgumentCount {
        /// Number of declared types.
        types: usize,
        /// Number of supplied values.
        values: usize,
    },
}
