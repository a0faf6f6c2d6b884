use crate::error::NotecycleError;

pub type NotecycleResult<T> = Result<T, NotecycleError>;
