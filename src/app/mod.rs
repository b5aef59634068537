use crate::data::read_content_embedded;
use crate::error::ContentError;
use crate::model::{Content, OverviewContent, QuestionBank, Section, TipsContent};
use std::collections::BTreeSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{QuestionHeader, ScoreBadge};

/// Estado de la visita actual. Nunca se guarda en disco.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: usize,
    pub score: usize,
    pub revealed: BTreeSet<usize>, // índices cuya respuesta se ha visto alguna vez
    pub draft: String,
    pub answer_shown: bool,
    pub section: Section,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_index: 0,
            score: 0,
            revealed: BTreeSet::new(),
            draft: String::new(),
            answer_shown: false,
            section: Section::Overview,
        }
    }
}

pub struct InterviewApp {
    pub bank: QuestionBank,
    pub overview: OverviewContent,
    pub tips: TipsContent,
    pub session: SessionState,
    pub dark_mode: bool,
}

impl InterviewApp {
    /// Construye la app con el contenido embebido.
    pub fn new() -> Result<Self, ContentError> {
        Ok(Self::from_content(read_content_embedded()?))
    }

    pub fn from_content(content: Content) -> Self {
        let Content { bank, overview, tips } = content;
        Self {
            bank,
            overview,
            tips,
            session: SessionState::default(),
            dark_mode: false,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, assert_score_matches};
    use super::*;

    #[test]
    fn fresh_app_starts_on_overview_with_empty_session() {
        let app = app();
        assert_eq!(app.session(), &SessionState::default());
        assert_eq!(app.session.section, Section::Overview);
    }

    #[test]
    fn walkthrough_reveal_navigate_and_reset() {
        let mut app = app();

        app.reveal_answer();
        assert_eq!(app.session.score, 1);
        assert_eq!(app.session.revealed, BTreeSet::from([0]));

        app.next();
        assert_eq!(app.session.current_index, 1);
        assert!(!app.session.answer_shown);

        app.reveal_answer();
        app.reveal_answer();
        assert_eq!(app.session.score, 2);
        assert_score_matches(&app);

        app.set_draft("interrupt_before");
        app.previous();
        assert_eq!(app.session.current_index, 0);
        assert!(!app.session.answer_shown);
        assert!(app.session.draft.is_empty());
        assert_eq!(app.session.revealed, BTreeSet::from([0, 1]));

        app.reset_all();
        assert_eq!(app.session, SessionState::default());
    }

    #[test]
    fn score_tracks_revealed_set_over_a_mixed_run() {
        let mut app = app();
        let script = "rnrrnpnnrpprnnnnnnnnrppr";
        for step in script.chars() {
            match step {
                'n' => app.next(),
                'p' => app.previous(),
                'r' => app.reveal_answer(),
                _ => unreachable!(),
            }
            assert_score_matches(&app);
            assert!(app.session.current_index < app.bank.len());
        }
    }
}
