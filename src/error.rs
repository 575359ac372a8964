use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board configuration")]
    InvalidConfiguration,
    #[error("coordinates out of bounds")]
    OutOfBounds,
    #[error("game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, GameError>;
