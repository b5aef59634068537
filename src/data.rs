// src/data.rs

use crate::error::ContentError;
use crate::model::{Content, OverviewContent, QuestionBank, QuestionRecord, TipsContent};
use serde::Deserialize;

const EMBEDDED_CONTENT: &str = include_str!("data/interview_prep.yaml");

#[derive(Deserialize)]
struct QuestionGroups {
    conceptual: Vec<QuestionRecord>,
    coding: Vec<QuestionRecord>,
    scenarios: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
struct RawContent {
    questions: QuestionGroups,
    overview: OverviewContent,
    tips: TipsContent,
}

/// Carga el banco de preguntas y los textos estáticos desde el YAML embebido
pub fn read_content_embedded() -> Result<Content, ContentError> {
    parse_content(EMBEDDED_CONTENT)
}

pub fn parse_content(yaml: &str) -> Result<Content, ContentError> {
    let raw: RawContent = serde_yaml::from_str(yaml)?;
    let QuestionGroups { conceptual, coding, scenarios } = raw.questions;
    let bank = QuestionBank::from_groups(conceptual, coding, scenarios);

    if bank.is_empty() {
        return Err(ContentError::EmptyBank);
    }

    log::info!(
        "contenido cargado: {} preguntas, {} tarjetas de consejos",
        bank.len(),
        raw.tips.cards.len()
    );

    Ok(Content {
        bank,
        overview: raw.overview,
        tips: raw.tips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionGroup};

    #[test]
    fn embedded_bank_has_ten_questions_in_group_order() {
        let content = read_content_embedded().expect("embedded content must parse");
        assert_eq!(content.bank.len(), 10);

        let groups: Vec<QuestionGroup> = content.bank.iter().map(|q| q.group).collect();
        let mut expected = vec![QuestionGroup::Conceptual; 5];
        expected.extend([QuestionGroup::Coding; 3]);
        expected.extend([QuestionGroup::Scenario; 2]);
        assert_eq!(groups, expected);
    }

    #[test]
    fn embedded_bank_keeps_first_and_last_records() {
        let content = read_content_embedded().unwrap();
        let first = content.bank.get(0).unwrap();
        assert!(first.question.starts_with("What is LangGraph"));
        assert_eq!(first.difficulty, Difficulty::Medium);
        assert_eq!(first.category, "Core Concepts");

        let last = content.bank.get(content.bank.last_index()).unwrap();
        assert_eq!(last.category, "Multi-Agent Systems");
        assert_eq!(last.difficulty, Difficulty::Hard);
    }

    #[test]
    fn coding_answers_keep_their_line_breaks() {
        let content = read_content_embedded().unwrap();
        let coding = content.bank.get(5).unwrap();
        assert!(coding.answer_is_code());
        assert!(coding.answer.starts_with("from langgraph.graph import StateGraph, END\n"));
        assert!(coding.answer.ends_with("app = workflow.compile()"));
    }

    #[test]
    fn embedded_static_copy_is_present() {
        let content = read_content_embedded().unwrap();
        assert_eq!(content.overview.title, "LangGraph Interview Prep");
        assert_eq!(content.overview.topics.len(), 2);
        assert_eq!(content.tips.cards.len(), 4);
        assert_eq!(content.tips.cards[3].groups.len(), 2);
    }

    #[test]
    fn empty_bank_is_rejected() {
        let yaml = r#"
questions:
  conceptual: []
  coding: []
  scenarios: []
overview:
  title: t
  subtitle: s
  learn_heading: l
  topics: []
tips:
  title: t
  cards: []
"#;
        assert!(matches!(parse_content(yaml), Err(ContentError::EmptyBank)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_content("questions: [").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
