/// The two failure categories a tensor operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A shape, reshape target or operand was not acceptable.
    InvalidArgument,
    /// A multi-index had the wrong arity or fell outside the tensor.
    OutOfRange,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    #[error("index {index:?} out of range for shape {shape:?}: {reason}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
        reason: String,
    },

    #[error("shape mismatch in {op}: lhs {lhs:?}, rhs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    #[error("{op} expects a rank {expected} tensor, got rank {got}")]
    UnsupportedRank {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// Free-form invalid-argument message.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{inner}\n{backtrace}")]
    WithBacktrace {
        inner: Box<Self>,
        backtrace: Box<std::backtrace::Backtrace>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn bt(self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        match backtrace.status() {
            std::backtrace::BacktraceStatus::Disabled
            | std::backtrace::BacktraceStatus::Unsupported => self,
            _ => Self::WithBacktrace {
                inner: Box::new(self),
                backtrace: Box::new(backtrace),
            },
        }
    }

    /// Classify this error, looking through backtrace wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self.inner() {
            Self::IndexOutOfBounds { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// The error with any backtrace wrapper removed.
    pub fn inner(&self) -> &Self {
        match self {
            Self::WithBacktrace { inner, .. } => inner.inner(),
            other => other,
        }
    }
}
