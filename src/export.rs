use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::handoff::FlatRecord;
use crate::types::answer::Answer;
use crate::types::result::QuizResult;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// What the persistence collaborator receives for one completed quiz: the
/// flattened record, the raw answers, and a deterministic session key.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    pub version: String,
    pub generated_at: String,
    pub fingerprint: String,
    pub record: FlatRecord,
    pub answers: Vec<Answer>,
}

impl ResultEnvelope {
    pub fn new(catalog: &Catalog, result: &QuizResult, answers: Vec<Answer>) -> Self {
        ResultEnvelope {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            fingerprint: fingerprint(catalog, &answers),
            record: FlatRecord::from_result(result),
            answers,
        }
    }
}

/// SHA-256 over the deduplicated `id=value` pairs in catalog order. The same
/// effective submission always keys to the same record.
pub fn fingerprint(catalog: &Catalog, answers: &[Answer]) -> String {
    let mut latest: BTreeMap<&str, u8> = BTreeMap::new();
    for answer in answers {
        latest.insert(answer.question.as_str(), answer.value);
    }

    let mut canonical = String::new();
    for question in catalog.questions() {
        if let Some(value) = latest.get(question.id) {
            canonical.push_str(question.id);
            canonical.push('=');
            canonical.push_str(&value.to_string());
            canonical.push(';');
        }
    }
    sha256_hex(canonical.as_bytes())
}

pub fn write_result(dir: &Path, envelope: &ResultEnvelope) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(QuizError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let out_path = dir.join(format!("resultado-{stamp}.json"));
    let json = serde_json::to_string_pretty(envelope)?;
    fs::write(&out_path, json).map_err(QuizError::Io)?;
    Ok(out_path)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimension, Variant};
    use tempfile::TempDir;

    fn answer(question: &str, dimension: Dimension, value: u8) -> Answer {
        Answer {
            question: question.to_string(),
            dimension,
            value,
        }
    }

    #[test]
    fn fingerprint_ignores_answer_order() {
        let catalog = Catalog::new(Variant::Compact);
        let forward = vec![
            answer("terra_1", Dimension::Terra, 2),
            answer("agua_1", Dimension::Agua, 3),
        ];
        let backward = vec![
            answer("agua_1", Dimension::Agua, 3),
            answer("terra_1", Dimension::Terra, 2),
        ];
        assert_eq!(
            fingerprint(&catalog, &forward),
            fingerprint(&catalog, &backward)
        );
    }

    #[test]
    fn fingerprint_uses_the_latest_answer_per_question() {
        let catalog = Catalog::new(Variant::Compact);
        let original = vec![answer("terra_1", Dimension::Terra, 2)];
        let revised = vec![
            answer("terra_1", Dimension::Terra, 1),
            answer("terra_1", Dimension::Terra, 2),
        ];
        assert_eq!(
            fingerprint(&catalog, &original),
            fingerprint(&catalog, &revised)
        );
        let changed = vec![answer("terra_1", Dimension::Terra, 4)];
        assert_ne!(
            fingerprint(&catalog, &original),
            fingerprint(&catalog, &changed)
        );
    }

    #[test]
    fn write_result_creates_a_stamped_json_file() {
        let catalog = Catalog::new(Variant::Compact);
        let answers: Vec<Answer> = catalog
            .questions()
            .iter()
            .map(|question| answer(question.id, question.dimension, 2))
            .collect();
        let result = crate::engine::build(
            &catalog,
            &crate::types::config::Thresholds::for_variant(Variant::Compact),
            &answers,
        )
        .expect("submission should build");
        let envelope = ResultEnvelope::new(&catalog, &result, answers);

        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_result(&dir.path().join("resultados"), &envelope)
            .expect("result should write");
        assert!(path.exists());
        let contents = fs::read_to_string(&path).expect("result file should read");
        assert!(contents.contains("\"fingerprint\""));
        assert!(contents.contains("\"lowest\""));
    }
}
