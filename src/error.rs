use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Macro calculation produced a non-finite value: {0}")]
    NonFiniteResult(String),

    #[error("Food '{food}' fills the {role} role but has zero {role} content")]
    DegenerateFood { food: String, role: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
