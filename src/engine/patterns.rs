use crate::catalog::Dimension;
use crate::types::config::Thresholds;
use crate::types::result::{PairPattern, Pattern, RankedResult, ScoreSet};

/// Every unordered dimension pair, keyed in canonical catalog order. The
/// table is total: any gated pair of weak dimensions resolves to a name.
pub static PAIR_PATTERNS: [PairPattern; 10] = [
    PairPattern {
        pair: (Dimension::Terra, Dimension::Agua),
        slug: "fundacao_rachada",
        title: "Fundação Rachada",
        summary: "Confiança e conexão emocional abaladas ao mesmo tempo: a base e o vínculo pedem cuidado.",
    },
    PairPattern {
        pair: (Dimension::Terra, Dimension::Ar),
        slug: "muro_de_vidro",
        title: "Muro de Vidro",
        summary: "Vocês se veem, mas não se alcançam: falta segurança para conversar de verdade.",
    },
    PairPattern {
        pair: (Dimension::Terra, Dimension::Fogo),
        slug: "brasa_sob_cinzas",
        title: "Brasa sob Cinzas",
        summary: "Sem chão firme o desejo se esconde: segurança e paixão caminham juntas.",
    },
    PairPattern {
        pair: (Dimension::Terra, Dimension::Eter),
        slug: "raizes_soltas",
        title: "Raízes Soltas",
        summary: "A relação perdeu o chão e o norte: falta base e falta direção.",
    },
    PairPattern {
        pair: (Dimension::Agua, Dimension::Ar),
        slug: "dialogo_de_surdos",
        title: "Diálogo de Surdos",
        summary: "Sentimentos não ditos e conversas que não escutam: o vínculo esfria em silêncio.",
    },
    PairPattern {
        pair: (Dimension::Agua, Dimension::Fogo),
        slug: "mar_sem_ondas",
        title: "Mar sem Ondas",
        summary: "Pouca emoção e pouco desejo: a relação funciona, mas não vibra.",
    },
    PairPattern {
        pair: (Dimension::Agua, Dimension::Eter),
        slug: "nevoeiro",
        title: "Nevoeiro",
        summary: "Emoções distantes e propósito embaçado: difícil enxergar para onde vocês vão.",
    },
    PairPattern {
        pair: (Dimension::Ar, Dimension::Fogo),
        slug: "fogueira_abafada",
        title: "Fogueira Abafada",
        summary: "Sem diálogo o desejo não respira: a falta de conversa apaga a chama.",
    },
    PairPattern {
        pair: (Dimension::Ar, Dimension::Eter),
        slug: "sintonia_perdida",
        title: "Sintonia Perdida",
        summary: "Vocês falam línguas diferentes sobre o que importa: comunicação e valores desalinhados.",
    },
    PairPattern {
        pair: (Dimension::Fogo, Dimension::Eter),
        slug: "chama_sem_norte",
        title: "Chama sem Norte",
        summary: "Desejo sem direção, direção sem desejo: paixão e propósito se desencontraram.",
    },
];

/// Matches the score shape to a named pattern. Whole-set shapes are checked
/// first, in fixed priority order: a uniformly low, high or middling
/// relationship must pre-empt a pairwise name that would suggest a merely
/// localized problem.
pub fn match_pattern(
    ranked: &RankedResult,
    scores: &ScoreSet,
    thresholds: &Thresholds,
    max_total: u32,
) -> Option<Pattern> {
    let entries = scores.entries();

    if entries.iter().all(|(_, score)| *score <= thresholds.crisis) {
        return Some(Pattern::AlertaVermelho);
    }
    if entries.iter().all(|(_, score)| *score == max_total) {
        return Some(Pattern::EquilibrioPerfeito);
    }
    if scores.min() >= thresholds.balanced_high && scores.spread() <= thresholds.spread_tolerance {
        return Some(Pattern::EquilibrioGeral);
    }
    if entries
        .iter()
        .all(|(_, score)| *score >= thresholds.balanced_low && *score < thresholds.balanced_high)
        && scores.spread() <= thresholds.spread_tolerance
    {
        return Some(Pattern::RelacaoMorna);
    }

    let second = ranked.second?;
    let pair = canonical_pair(ranked.lowest, second.dimension);
    PAIR_PATTERNS
        .iter()
        .find(|pattern| pattern.pair == pair)
        .map(Pattern::DuplaFragil)
}

fn canonical_pair(a: Dimension, b: Dimension) -> (Dimension, Dimension) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
