use std::fmt::Display;

use backtrace::Backtrace;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};

pub mod conf;
pub mod config_data;
pub mod errors;
pub mod values;
pub mod wallet;

pub type DcResult<T> = Result<T, ErrorInfo>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, StrumDisplay)]
pub enum ErrorCode {
    #[default]
    UnknownError,
    MissingField,
    ParseFailure,
    IoFailure,
    WalletExists,
    WalletNotFound,
    InvalidPassphrase,
    AccountNotFound,
    Cancelled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorDetails {
    pub detail_name: String,
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorInfo {
    pub code: ErrorCode,
    pub message: String,
    pub lib_message: String,
    pub details: Vec<ErrorDetails>,
    pub stacktrace: String,
    pub skip_logging: bool,
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lib_message.is_empty() {
            write!(f, "{}: {}", self.code, self.message)
        } else {
            write!(f, "{}: {} ({})", self.code, self.message, self.lib_message)
        }
    }
}

impl std::error::Error for ErrorInfo {}

impl ErrorInfo {
    pub fn error_info<S: Into<String>>(message: S) -> ErrorInfo {
        error_info(message)
    }

    pub fn with_detail(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.details.push(ErrorDetails {
            detail_name: k.into(),
            detail: v.into(),
        });
        self
    }

    pub fn is_code(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

pub trait ErrorInfoContext<T, E> {
    /// Wrap the error value with additional context.
    fn error_info<C: Into<String>>(self, context: C) -> Result<T, ErrorInfo>
        where
            C: Display + Send + Sync + 'static;
    fn error_msg<C: Into<String>>(self, code: ErrorCode, context: C) -> Result<T, ErrorInfo>
        where
            C: Display + Send + Sync + 'static;
}

impl<T, E> ErrorInfoContext<T, E> for Result<T, E>
    where
        E: std::error::Error + Send + Sync + 'static,
{
    fn error_info<C: Into<String>>(self, context: C) -> Result<T, ErrorInfo>
        where
            C: Display + Send + Sync + 'static {
        self.map_err(|e| error_msg(ErrorCode::UnknownError, context.into(), e.to_string()))
    }

    fn error_msg<C: Into<String>>(self, code: ErrorCode, context: C) -> Result<T, ErrorInfo>
        where C: Display + Send + Sync + 'static {
        self.map_err(|e| error_msg(code, context.into(), e.to_string()))
    }
}

pub trait OptionContext<T> {
    fn ok_msg(self, err: impl Into<String>) -> DcResult<T>;
    fn ok_code(self, code: ErrorCode, err: impl Into<String>) -> DcResult<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn ok_msg(self, err: impl Into<String>) -> DcResult<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(error_info(err.into())),
        }
    }

    fn ok_code(self, code: ErrorCode, err: impl Into<String>) -> DcResult<T> {
        self.ok_or_else(|| error_message(code, err.into()))
    }
}

pub fn error_info<S: Into<String>>(message: S) -> ErrorInfo {
    error_message(ErrorCode::UnknownError, message.into())
}

pub fn error_message<S: Into<String>>(code: ErrorCode, message: S) -> ErrorInfo {
    error_msg(code, message, "".to_string())
}

pub fn error_msg<S: Into<String>, P: Into<String>>(code: ErrorCode, message: S, lib_message: P) -> ErrorInfo {
    let stacktrace = format!("{:?}", Backtrace::new());
    // First frames are the backtrace machinery itself.
    let stack = stacktrace.split('\n').take(50).join("\n");
    ErrorInfo {
        code,
        message: message.into(),
        lib_message: lib_message.into(),
        details: vec![],
        stacktrace: stack,
        skip_logging: false,
    }
}

pub fn json<T: Serialize>(t: &T) -> Result<String, ErrorInfo> {
    serde_json::to_string(&t).map_err(|e| ErrorInfo::error_info(format!("serde json ser error: {:?}", e)))
}

pub fn json_or<T: Serialize>(t: &T) -> String {
    json(t).unwrap_or("json ser failure of error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_context_carries_code() {
        let missing: Option<u32> = None;
        let err = missing.ok_code(ErrorCode::WalletNotFound, "no wallet 3").unwrap_err();
        assert!(err.is_code(ErrorCode::WalletNotFound));
        assert_eq!(err.message, "no wallet 3");
        assert_eq!(Some(4).ok_msg("unused").unwrap(), 4);
    }

    #[test]
    fn foreign_errors_keep_lib_message() {
        let parsed: Result<i32, _> = "abc".parse::<i32>();
        let err = parsed.error_info("parse account number").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownError);
        assert_eq!(err.message, "parse account number");
        assert!(!err.lib_message.is_empty());
        assert!(err.to_string().starts_with("UnknownError: parse account number"));
    }

    #[test]
    fn json_rendering_of_error() {
        let err = error_message(ErrorCode::WalletExists, "exists").with_detail("name", "w1");
        let rendered = json_or(&err);
        assert!(rendered.contains("WalletExists"));
        assert!(rendered.contains("\"detail\":\"w1\""));
    }
}
