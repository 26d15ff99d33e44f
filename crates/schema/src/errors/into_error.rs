use crate::{error_info, error_message, DcResult, ErrorCode};


pub trait ToErrorInfo {
    fn to_error<T>(&self) -> DcResult<T>;
    fn to_error_code<T>(&self, code: ErrorCode) -> DcResult<T>;
}

impl ToErrorInfo for String {
    fn to_error<T>(&self) -> DcResult<T> {
        Err(error_info(self))
    }

    fn to_error_code<T>(&self, code: ErrorCode) -> DcResult<T> {
        Err(error_message(code, self))
    }
}

impl ToErrorInfo for &str {
    fn to_error<T>(&self) -> DcResult<T> {
        Err(error_info(self.to_string()))
    }

    fn to_error_code<T>(&self, code: ErrorCode) -> DcResult<T> {
        Err(error_message(code, self.to_string()))
    }
}
