use crate::catalog::{Dimension, Disaster};
use serde::ser::Serializer;
use serde::Serialize;

/// Per-dimension totals, stored flat. The field layout mirrors the column
/// layout the persistence collaborator consumes downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreSet {
    pub terra: u32,
    pub agua: u32,
    pub ar: u32,
    pub fogo: u32,
    pub eter: u32,
}

impl ScoreSet {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Terra => self.terra,
            Dimension::Agua => self.agua,
            Dimension::Ar => self.ar,
            Dimension::Fogo => self.fogo,
            Dimension::Eter => self.eter,
        }
    }

    pub fn add(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Terra => self.terra += value,
            Dimension::Agua => self.agua += value,
            Dimension::Ar => self.ar += value,
            Dimension::Fogo => self.fogo += value,
            Dimension::Eter => self.eter += value,
        }
    }

    /// Totals in canonical catalog order.
    pub fn entries(&self) -> [(Dimension, u32); 5] {
        [
            (Dimension::Terra, self.terra),
            (Dimension::Agua, self.agua),
            (Dimension::Ar, self.ar),
            (Dimension::Fogo, self.fogo),
            (Dimension::Eter, self.eter),
        ]
    }

    pub fn min(&self) -> u32 {
        self.entries()
            .iter()
            .map(|(_, score)| *score)
            .min()
            .unwrap_or(0)
    }

    pub fn max(&self) -> u32 {
        self.entries()
            .iter()
            .map(|(_, score)| *score)
            .max()
            .unwrap_or(0)
    }

    pub fn spread(&self) -> u32 {
        self.max() - self.min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecondLowest {
    pub dimension: Dimension,
    pub score: u32,
}

/// Lowest-scoring dimension plus, when its own score clears the low
/// threshold, the second lowest. A healthy second dimension is never
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    pub lowest: Dimension,
    pub lowest_score: u32,
    pub second: Option<SecondLowest>,
}

/// A named two-dimension weakness from the fixed pairwise table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairPattern {
    pub pair: (Dimension, Dimension),
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    AlertaVermelho,
    EquilibrioPerfeito,
    EquilibrioGeral,
    RelacaoMorna,
    DuplaFragil(&'static PairPattern),
}

impl Pattern {
    pub fn slug(&self) -> &'static str {
        match self {
            Pattern::AlertaVermelho => "alerta_vermelho",
            Pattern::EquilibrioPerfeito => "equilibrio_perfeito",
            Pattern::EquilibrioGeral => "equilibrio_geral",
            Pattern::RelacaoMorna => "relacao_morna",
            Pattern::DuplaFragil(pair) => pair.slug,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Pattern::AlertaVermelho => "Alerta Vermelho",
            Pattern::EquilibrioPerfeito => "Equilíbrio Perfeito",
            Pattern::EquilibrioGeral => "Equilíbrio Geral",
            Pattern::RelacaoMorna => "Relação Morna",
            Pattern::DuplaFragil(pair) => pair.title,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Pattern::AlertaVermelho => {
                "Todos os elementos em nível crítico: a relação pede atenção imediata em todas as frentes."
            }
            Pattern::EquilibrioPerfeito => {
                "Todos os elementos no máximo: uma relação em plena harmonia."
            }
            Pattern::EquilibrioGeral => {
                "Todos os elementos altos e próximos: a relação está sólida e bem distribuída."
            }
            Pattern::RelacaoMorna => {
                "Nenhum elemento em crise, nenhum brilhando: estabilidade sem entusiasmo."
            }
            Pattern::DuplaFragil(pair) => pair.summary,
        }
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

/// Urgency tier of the single weakest dimension, orthogonal to Pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    #[serde(rename = "critica")]
    Critical,
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "moderada")]
    Moderate,
    #[serde(rename = "leve")]
    Mild,
}

impl Severity {
    pub fn slug(self) -> &'static str {
        match self {
            Severity::Critical => "critica",
            Severity::High => "alta",
            Severity::Moderate => "moderada",
            Severity::Mild => "leve",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Severity::Critical => "Crítica",
            Severity::High => "Alta",
            Severity::Moderate => "Moderada",
            Severity::Mild => "Leve",
        }
    }
}

/// The final record of one completed submission. Built once, read-only
/// after; consumed as data by the narrative and persistence collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub scores: ScoreSet,
    pub ranked: RankedResult,
    pub pattern: Option<Pattern>,
    pub severity: Severity,
    pub disaster: Disaster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_catalog_order() {
        let scores = ScoreSet {
            terra: 1,
            agua: 2,
            ar: 3,
            fogo: 4,
            eter: 5,
        };
        let dimensions: Vec<Dimension> =
            scores.entries().iter().map(|(dimension, _)| *dimension).collect();
        assert_eq!(dimensions, Dimension::ORDER.to_vec());
        assert_eq!(scores.min(), 1);
        assert_eq!(scores.max(), 5);
        assert_eq!(scores.spread(), 4);
    }

    #[test]
    fn pattern_serializes_as_slug() {
        let json =
            serde_json::to_string(&Pattern::AlertaVermelho).expect("pattern should serialize");
        assert_eq!(json, "\"alerta_vermelho\"");
    }

    #[test]
    fn severity_serializes_with_portuguese_slug() {
        let json = serde_json::to_string(&Severity::Critical).expect("severity should serialize");
        assert_eq!(json, "\"critica\"");
    }
}
