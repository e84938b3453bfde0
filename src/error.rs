use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("Unknown sort column `{0}`")]
    InvalidColumn(String),
    #[error("Invalid sort direction `{0}`, expected `asc` or `desc`")]
    InvalidDirection(String),
    #[error("Malformed sort token `{0}`, expected `<column>,<asc|desc>`")]
    MalformedToken(String),
}
