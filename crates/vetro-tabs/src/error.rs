//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab index out of range: {index} (session has {len} tabs)")]
    IndexOutOfRange { index: usize, len: usize },
}
