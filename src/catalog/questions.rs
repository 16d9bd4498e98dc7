use super::dimension::Dimension;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Choice {
    pub label: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub dimension: Dimension,
    pub prompt: &'static str,
    pub choices: &'static [Choice],
}

const FREQUENCIA: [Choice; 5] = [
    Choice { label: "Nunca", value: 1 },
    Choice { label: "Raramente", value: 2 },
    Choice { label: "Às vezes", value: 3 },
    Choice { label: "Quase sempre", value: 4 },
    Choice { label: "Sempre", value: 5 },
];

const CONCORDANCIA: [Choice; 5] = [
    Choice { label: "Discordo totalmente", value: 1 },
    Choice { label: "Discordo", value: 2 },
    Choice { label: "Neutro", value: 3 },
    Choice { label: "Concordo", value: 4 },
    Choice { label: "Concordo totalmente", value: 5 },
];

const FREQUENCIA_CURTA: [Choice; 4] = [
    Choice { label: "Nunca", value: 1 },
    Choice { label: "Raramente", value: 2 },
    Choice { label: "Com frequência", value: 3 },
    Choice { label: "Sempre", value: 4 },
];

/// Current catalog: five questions per dimension, values 1..=5.
pub const FULL: &[Question] = &[
    Question {
        id: "terra_1",
        dimension: Dimension::Terra,
        prompt: "Eu confio plenamente no meu parceiro, mesmo quando estamos distantes.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "terra_2",
        dimension: Dimension::Terra,
        prompt: "Sinto que posso contar com meu parceiro nos momentos difíceis.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "terra_3",
        dimension: Dimension::Terra,
        prompt: "Fazemos planos de longo prazo juntos com naturalidade.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "terra_4",
        dimension: Dimension::Terra,
        prompt: "Me sinto seguro(a) sobre o futuro da relação.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "terra_5",
        dimension: Dimension::Terra,
        prompt: "Promessas feitas entre nós são cumpridas.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "agua_1",
        dimension: Dimension::Agua,
        prompt: "Consigo demonstrar minhas emoções sem medo de julgamento.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "agua_2",
        dimension: Dimension::Agua,
        prompt: "Sinto que meu parceiro percebe quando não estou bem.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "agua_3",
        dimension: Dimension::Agua,
        prompt: "Compartilhamos o que sentimos, não apenas o que fazemos.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "agua_4",
        dimension: Dimension::Agua,
        prompt: "Me sinto emocionalmente acolhido(a) pelo meu parceiro.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "agua_5",
        dimension: Dimension::Agua,
        prompt: "Choramos ou celebramos juntos sem constrangimento.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "ar_1",
        dimension: Dimension::Ar,
        prompt: "Conseguimos conversar sobre assuntos difíceis sem brigar.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "ar_2",
        dimension: Dimension::Ar,
        prompt: "Me sinto ouvido(a) quando expresso uma opinião diferente.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "ar_3",
        dimension: Dimension::Ar,
        prompt: "Resolvemos desentendimentos no mesmo dia em que acontecem.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "ar_4",
        dimension: Dimension::Ar,
        prompt: "Nossas conversas vão além da rotina da casa.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "ar_5",
        dimension: Dimension::Ar,
        prompt: "Posso dizer \"não\" sem que isso vire um conflito.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "fogo_1",
        dimension: Dimension::Fogo,
        prompt: "Ainda sinto atração física pelo meu parceiro.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "fogo_2",
        dimension: Dimension::Fogo,
        prompt: "Criamos momentos de intimidade mesmo na rotina corrida.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "fogo_3",
        dimension: Dimension::Fogo,
        prompt: "Existe flerte e jogo de sedução entre nós.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "fogo_4",
        dimension: Dimension::Fogo,
        prompt: "A frequência da nossa intimidade satisfaz nós dois.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "fogo_5",
        dimension: Dimension::Fogo,
        prompt: "Surpreendo ou sou surpreendido(a) com gestos românticos.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "eter_1",
        dimension: Dimension::Eter,
        prompt: "Sinto que nossa relação tem um propósito maior que nós dois.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "eter_2",
        dimension: Dimension::Eter,
        prompt: "Compartilhamos valores sobre o que é uma vida bem vivida.",
        choices: &CONCORDANCIA,
    },
    Question {
        id: "eter_3",
        dimension: Dimension::Eter,
        prompt: "Sonhamos juntos com o que queremos construir.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "eter_4",
        dimension: Dimension::Eter,
        prompt: "Sinto gratidão pela pessoa que escolhi.",
        choices: &FREQUENCIA,
    },
    Question {
        id: "eter_5",
        dimension: Dimension::Eter,
        prompt: "Nos admiramos mutuamente pelo que somos, não só pelo que fazemos.",
        choices: &CONCORDANCIA,
    },
];

/// Legacy catalog: two questions per dimension, values 1..=4.
pub const COMPACT: &[Question] = &[
    Question {
        id: "terra_1",
        dimension: Dimension::Terra,
        prompt: "Confio no meu parceiro sem precisar verificar.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "terra_2",
        dimension: Dimension::Terra,
        prompt: "Me sinto seguro(a) sobre o futuro da relação.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "agua_1",
        dimension: Dimension::Agua,
        prompt: "Falamos abertamente sobre o que sentimos.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "agua_2",
        dimension: Dimension::Agua,
        prompt: "Me sinto acolhido(a) quando estou mal.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "ar_1",
        dimension: Dimension::Ar,
        prompt: "Conversamos sobre assuntos difíceis sem brigar.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "ar_2",
        dimension: Dimension::Ar,
        prompt: "Me sinto ouvido(a) pelo meu parceiro.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "fogo_1",
        dimension: Dimension::Fogo,
        prompt: "Mantemos momentos de intimidade na rotina.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "fogo_2",
        dimension: Dimension::Fogo,
        prompt: "Ainda existe flerte entre nós.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "eter_1",
        dimension: Dimension::Eter,
        prompt: "Compartilhamos os mesmos valores de vida.",
        choices: &FREQUENCIA_CURTA,
    },
    Question {
        id: "eter_2",
        dimension: Dimension::Eter,
        prompt: "Sonhamos juntos com o futuro.",
        choices: &FREQUENCIA_CURTA,
    },
];
