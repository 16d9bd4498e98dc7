use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("incomplete answers; missing: {}", .missing.join(", "))]
    IncompleteAnswers { missing: Vec<String> },

    #[error("unknown question id: {0}")]
    InvalidQuestionId(String),

    #[error("unknown dimension: {0}")]
    InvalidDimension(String),

    #[error("answer for {question} declares dimension {declared}, catalog assigns {expected}")]
    DimensionMismatch {
        question: String,
        declared: String,
        expected: String,
    },

    #[error("value {value} is not an option for question {question}")]
    ValueOutOfRange { question: String, value: u8 },

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
