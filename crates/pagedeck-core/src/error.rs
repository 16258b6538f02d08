use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a deck must contain at least one page")]
    EmptyDeck,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Deck parsing error: {0}")]
    DeckParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
