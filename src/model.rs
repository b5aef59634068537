use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Bloque del banco del que procede una pregunta. El orden de las variantes
/// es el orden de concatenación.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum QuestionGroup {
    #[default]
    Conceptual,
    Coding,
    Scenario,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String, // Respuesta de ejemplo
    pub difficulty: Difficulty,
    pub category: String,
    // Lo rellena el cargador al aplanar los grupos
    #[serde(default)]
    pub group: QuestionGroup,
}

impl QuestionRecord {
    /// Las respuestas de los ejercicios de código se muestran en el visor de código.
    pub fn answer_is_code(&self) -> bool {
        self.group == QuestionGroup::Coding
    }
}

/// Secuencia plana e inmutable de preguntas. El índice define la navegación.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Concatena los grupos en orden fijo: conceptual, código, escenarios.
    pub fn from_groups(
        conceptual: Vec<QuestionRecord>,
        coding: Vec<QuestionRecord>,
        scenarios: Vec<QuestionRecord>,
    ) -> Self {
        let tagged = |records: Vec<QuestionRecord>, group: QuestionGroup| {
            records.into_iter().map(move |mut q| {
                q.group = group;
                q
            })
        };

        let questions = tagged(conceptual, QuestionGroup::Conceptual)
            .chain(tagged(coding, QuestionGroup::Coding))
            .chain(tagged(scenarios, QuestionGroup::Scenario))
            .collect();

        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&QuestionRecord> {
        self.questions.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.iter()
    }

    /// Último índice navegable (0 si el banco está vacío).
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Section {
    Overview,
    Practice,
    Tips,
}

impl Default for Section {
    fn default() -> Self {
        Section::Overview
    }
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Overview, Section::Practice, Section::Tips];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Practice => "Practice Questions",
            Section::Tips => "Interview Tips",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Overview => "📖",
            Section::Practice => "🧠",
            Section::Tips => "⚡",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicGroup {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OverviewContent {
    pub title: String,
    pub subtitle: String,
    pub learn_heading: String,
    pub topics: Vec<TopicGroup>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TipTone {
    Green,
    Blue,
    Purple,
    Orange,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TipCard {
    pub heading: String,
    pub tone: TipTone,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub groups: Vec<TopicGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TipsContent {
    pub title: String,
    pub cards: Vec<TipCard>,
}

/// Todo el contenido estático de la aplicación.
#[derive(Debug, Clone)]
pub struct Content {
    pub bank: QuestionBank,
    pub overview: OverviewContent,
    pub tips: TipsContent,
}
