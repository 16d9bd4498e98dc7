use serde::{Deserialize, Serialize};

/// The five qualitative axes of the quiz. Declaration order is the canonical
/// catalog order: iteration and tie-breaks always follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Terra,
    Agua,
    Ar,
    Fogo,
    Eter,
}

impl Dimension {
    pub const ORDER: [Dimension; 5] = [
        Dimension::Terra,
        Dimension::Agua,
        Dimension::Ar,
        Dimension::Fogo,
        Dimension::Eter,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Dimension::Terra => "terra",
            Dimension::Agua => "agua",
            Dimension::Ar => "ar",
            Dimension::Fogo => "fogo",
            Dimension::Eter => "eter",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Dimension> {
        match slug {
            "terra" => Some(Dimension::Terra),
            "agua" => Some(Dimension::Agua),
            "ar" => Some(Dimension::Ar),
            "fogo" => Some(Dimension::Fogo),
            "eter" => Some(Dimension::Eter),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Terra => "Terra",
            Dimension::Agua => "Água",
            Dimension::Ar => "Ar",
            Dimension::Fogo => "Fogo",
            Dimension::Eter => "Éter",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Dimension::Terra => "🌍",
            Dimension::Agua => "💧",
            Dimension::Ar => "🌬️",
            Dimension::Fogo => "🔥",
            Dimension::Eter => "✨",
        }
    }

    /// Short meaning shown next to the dimension name.
    pub fn meaning(self) -> &'static str {
        match self {
            Dimension::Terra => "Segurança e confiança",
            Dimension::Agua => "Conexão emocional",
            Dimension::Ar => "Comunicação",
            Dimension::Fogo => "Paixão e desejo",
            Dimension::Eter => "Propósito e transcendência",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dimension::Terra => {
                "A base da relação: estabilidade, confiança e a certeza de poder contar um com o outro."
            }
            Dimension::Agua => {
                "A fluidez dos sentimentos: vulnerabilidade, acolhimento e intimidade emocional."
            }
            Dimension::Ar => {
                "O espaço do diálogo: ouvir, ser ouvido e resolver conflitos com leveza."
            }
            Dimension::Fogo => {
                "O calor do encontro: atração, sedução e a intimidade física que mantém a chama acesa."
            }
            Dimension::Eter => {
                "O que une além do cotidiano: valores, sonhos compartilhados e admiração mútua."
            }
        }
    }

    /// Cosmetic disaster metaphor used when this dimension is the weakest.
    pub fn disaster(self) -> Disaster {
        match self {
            Dimension::Terra => Disaster::Terremoto,
            Dimension::Agua => Disaster::Seca,
            Dimension::Ar => Disaster::Furacao,
            Dimension::Fogo => Disaster::Apagao,
            Dimension::Eter => Disaster::Eclipse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disaster {
    Terremoto,
    Seca,
    Furacao,
    Apagao,
    Eclipse,
}

impl Disaster {
    pub fn slug(self) -> &'static str {
        match self {
            Disaster::Terremoto => "terremoto",
            Disaster::Seca => "seca",
            Disaster::Furacao => "furacao",
            Disaster::Apagao => "apagao",
            Disaster::Eclipse => "eclipse",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Disaster::Terremoto => "Terremoto",
            Disaster::Seca => "Seca",
            Disaster::Furacao => "Furacão",
            Disaster::Apagao => "Apagão",
            Disaster::Eclipse => "Eclipse",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Disaster::Terremoto => "quando a Terra falta, tudo que foi construído treme",
            Disaster::Seca => "quando a Água falta, os sentimentos secam",
            Disaster::Furacao => "quando o Ar adoece, as palavras viram destruição",
            Disaster::Apagao => "quando o Fogo apaga, o desejo fica no escuro",
            Disaster::Eclipse => "quando o Éter some, a relação perde o sentido",
        }
    }
}
