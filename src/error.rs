use thiserror::Error;

#[derive(Error, Debug)]
pub enum PizzaCoError {
    #[error(transparent)]
    Common(#[from] pizza_co_common::Error),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for PizzaCoError {
    fn from(e: dialoguer::Error) -> Self {
        PizzaCoError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PizzaCoError>;
