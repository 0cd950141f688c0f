//! Error types for the Sim solver

use thiserror::Error;

use crate::common::{Color, Edge};

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: edge {edge} is already claimed")]
    EdgeUnavailable { edge: Edge },

    #[error("game already over")]
    GameOver,

    #[error("search found no move for {color}")]
    NoMoveFound { color: Color },
}

pub type Result<T> = std::result::Result<T, Error>;
