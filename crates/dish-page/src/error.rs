use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("DOM operation failed: {0}")]
    Host(String),

    #[error("Element #{0} cannot hold a value")]
    NotAnInput(String),

    #[error("Element #{0} is not a form")]
    NotAForm(String),

    #[error("Invalid page config: {0}")]
    Config(String),

    #[error("No document object available")]
    NoDocument,
}
