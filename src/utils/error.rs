use std::collections::TryReserveError;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Could not open input file '{path}': {source}")]
    InputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not reserve memory for {pairs} node pairs: {source}")]
    Allocation {
        pairs: u64,
        #[source]
        source: TryReserveError,
    },

    #[error("Malformed pairing on line {line}: expected two node ids, found {found} field(s)")]
    MalformedLine { line: u64, found: usize },

    #[error("Invalid node id '{token}' on line {line}: {source}")]
    Parse {
        line: u64,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Could not write output file '{path}': {source}")]
    OutputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SwapError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputFile,
    DataFormat,
    Resource,
    OutputFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SwapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SwapError::Config { .. } => ErrorCategory::Configuration,
            SwapError::InputFile { .. } => ErrorCategory::InputFile,
            SwapError::Allocation { .. } => ErrorCategory::Resource,
            SwapError::MalformedLine { .. } | SwapError::Parse { .. } => ErrorCategory::DataFormat,
            SwapError::OutputFile { .. } => ErrorCategory::OutputFile,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SwapError::Config { .. } => ErrorSeverity::Medium,
            SwapError::InputFile { .. } => ErrorSeverity::High,
            SwapError::Allocation { .. } => ErrorSeverity::Critical,
            SwapError::MalformedLine { .. } | SwapError::Parse { .. } => ErrorSeverity::High,
            SwapError::OutputFile { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error kind. The codes are part of the
    /// scripting interface and stay distinct per condition:
    ///
    /// - 0: success (no error)
    /// - 1: configuration validation failure
    /// - 2: usage error, wrong argument count (reported by clap)
    /// - 3: input file open/read failure
    /// - 4: memory reservation failure
    /// - 5: malformed line (fewer than two fields)
    /// - 6: node id parse failure
    /// - 7: output file open/write failure
    pub fn exit_code(&self) -> i32 {
        match self {
            SwapError::Config { .. } => 1,
            SwapError::InputFile { .. } => 3,
            SwapError::Allocation { .. } => 4,
            SwapError::MalformedLine { .. } => 5,
            SwapError::Parse { .. } => 6,
            SwapError::OutputFile { .. } => 7,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SwapError::Config { message } => message.clone(),
            SwapError::InputFile { path, .. } => {
                format!("Cannot read '{}'. Does the case exist?", path)
            }
            SwapError::Allocation { pairs, .. } => {
                format!("Not enough memory to hold {} node pairs", pairs)
            }
            SwapError::MalformedLine { line, found } => format!(
                "Line {} does not look like a node pairing ({} field(s) instead of 2)",
                line, found
            ),
            SwapError::Parse { line, token, .. } => {
                format!("Line {} holds '{}' where a node id was expected", line, token)
            }
            SwapError::OutputFile { path, .. } => format!("Cannot write '{}'", path),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SwapError::Config { .. } => {
                "Pass a non-empty case name, e.g. `perswap channel`".to_string()
            }
            SwapError::InputFile { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            SwapError::Allocation { .. } => {
                "Free up memory or run the conversion on a machine with more RAM".to_string()
            }
            SwapError::MalformedLine { .. } => {
                "Every non-empty input line must hold exactly two space-separated node ids"
                    .to_string()
            }
            SwapError::Parse { .. } => "Node ids must be unsigned 64-bit integers".to_string(),
            SwapError::OutputFile { path, .. } => {
                format!("Check write permissions for '{}'", path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
    }

    fn reserve_error() -> TryReserveError {
        Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err()
    }

    fn parse_error() -> ParseIntError {
        "x".parse::<u64>().unwrap_err()
    }

    fn one_of_each() -> Vec<SwapError> {
        vec![
            SwapError::Config {
                message: "case name cannot be empty".to_string(),
            },
            SwapError::InputFile {
                path: "channel.per.dat".to_string(),
                source: io_error(),
            },
            SwapError::Allocation {
                pairs: 8,
                source: reserve_error(),
            },
            SwapError::MalformedLine { line: 3, found: 1 },
            SwapError::Parse {
                line: 4,
                token: "x".to_string(),
                source: parse_error(),
            },
            SwapError::OutputFile {
                path: "channel.per".to_string(),
                source: io_error(),
            },
        ]
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = one_of_each();
        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|&code| code != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_names_offending_line_and_token() {
        let err = SwapError::Parse {
            line: 7,
            token: "abc".to_string(),
            source: parse_error(),
        };
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("'abc'"));

        let err = SwapError::MalformedLine { line: 2, found: 1 };
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_data_format_errors_share_a_category() {
        let malformed = SwapError::MalformedLine { line: 1, found: 0 };
        let parse = SwapError::Parse {
            line: 1,
            token: String::new(),
            source: parse_error(),
        };
        assert_eq!(malformed.category(), ErrorCategory::DataFormat);
        assert_eq!(parse.category(), ErrorCategory::DataFormat);
        assert_ne!(malformed.exit_code(), parse.exit_code());
    }
}
