use thiserror::Error;

pub type SliceResult<T> = Result<T, SliceError>;

/// Failures raised while validating frames, building slices or mutating the registry.
///
/// Malformed-input variants fail only the slice being built. Registry variants
/// indicate a programming error in the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliceError {
    #[error("malformed frame: matrix has no cells")]
    EmptyFrame,

    #[error("malformed frame: row {row} has {found} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("malformed frame: {0}")]
    NotAMatrix(String),

    #[error("malformed frame: cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NonBinaryCell {
        row: usize,
        col: usize,
        /// The offending cell as it appeared in the JSON.
        value: String,
    },

    #[error("invalid slice count {0}: layout needs at least one slice")]
    InvalidSliceCount(usize),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("slice {index} does not fit a {total}-slice layout")]
    SliceOutOfRange { index: usize, total: usize },

    #[error("slice {0} is already registered")]
    DuplicateSlice(usize),

    #[error("slice {0} is not registered")]
    UnknownSlice(usize),
}

impl SliceError {
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    /// True for errors caused by the loaded data rather than by the caller.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyFrame
                | Self::NonRectangular { .. }
                | Self::NotAMatrix(_)
                | Self::NonBinaryCell { .. }
                | Self::InvalidSliceCount(_)
                | Self::InvalidLayout(_)
                | Self::SliceOutOfRange { .. }
        )
    }
}
