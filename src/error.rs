use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures arising while loading the puzzle inputs.
///
/// Running out of candidate words is not one of these: the solver reports an
/// unsolvable puzzle as an ordinary `None` result.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("structure is not rectangular: row {row} is {found} cells wide, expected {expected}")]
    RaggedStructure {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("structure contains no slots of length 2 or more")]
    NoSlots,
    #[error("word list is empty")]
    EmptyWordList,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PuzzleError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<PuzzleError> for Error {
    fn from(inner: PuzzleError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        PuzzleError::from(err).into()
    }
}
