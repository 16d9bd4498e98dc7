use crate::catalog::Catalog;
use crate::types::result::QuizResult;

pub fn to_markdown(result: &QuizResult, catalog: &Catalog) -> String {
    let max_total = catalog.max_total();
    let mut output = String::new();
    output.push_str("# Quiz dos 5 Elementos — Resultado\n\n");
    output.push_str(&format!(
        "Severidade: {}\n\n",
        result.severity.display_name()
    ));

    output.push_str("## Pontuação por Elemento\n\n");
    for (dimension, score) in result.scores.entries() {
        output.push_str(&format!(
            "- {} {} ({}): {}/{}\n",
            dimension.icon(),
            dimension.display_name(),
            dimension.meaning(),
            score,
            max_total
        ));
    }
    output.push('\n');

    output.push_str("## Ponto Mais Fraco\n\n");
    let lowest = result.ranked.lowest;
    output.push_str(&format!(
        "{} {} — {}/{}. Tipo de desastre: {} ({}).\n",
        lowest.icon(),
        lowest.display_name(),
        result.ranked.lowest_score,
        max_total,
        result.disaster.display_name(),
        result.disaster.description()
    ));
    if let Some(second) = result.ranked.second {
        output.push_str(&format!(
            "Segundo ponto de atenção: {} — {}/{}.\n",
            second.dimension.display_name(),
            second.score,
            max_total
        ));
    }
    output.push('\n');

    output.push_str("## Padrão Identificado\n\n");
    match result.pattern {
        Some(pattern) => {
            output.push_str(&format!("{}: {}\n", pattern.title(), pattern.summary()));
        }
        None => output.push_str("- nenhum padrão identificado\n"),
    }

    output
}
