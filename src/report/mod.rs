pub mod json;
pub mod md;

use crate::catalog::Catalog;
use crate::error::QuizError;
use crate::types::result::QuizResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    result: &QuizResult,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result, catalog)),
    }
}
