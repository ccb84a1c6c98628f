use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid zone reference")]
    InvalidZone,
}

pub type Result<T> = core::result::Result<T, GameError>;
