use super::*;

impl InterviewApp {
    /// Vuelve al estado inicial de la práctica. Sin confirmación; la sección no cambia.
    pub fn reset_all(&mut self) {
        let section = self.session.section;
        self.session = SessionState {
            section,
            ..SessionState::default()
        };
        log::debug!("sesión reiniciada");
    }
}

#[cfg(test)]
mod tests {
    use crate::app::SessionState;
    use crate::app::test_support::app;
    use crate::model::Section;

    #[test]
    fn reset_restores_initial_question_state() {
        let mut app = app();
        app.go_to_section(Section::Practice);
        app.reveal_answer();
        app.next();
        app.next();
        app.reveal_answer();
        app.set_draft("StateGraph");

        app.reset_all();

        let s = app.session();
        assert_eq!(s.current_index, 0);
        assert_eq!(s.score, 0);
        assert!(s.revealed.is_empty());
        assert!(!s.answer_shown);
        assert!(s.draft.is_empty());
        assert_eq!(s.section, Section::Practice);
    }

    #[test]
    fn reset_on_fresh_session_is_harmless() {
        let mut app = app();
        app.reset_all();
        app.reset_all();
        assert_eq!(app.session, SessionState::default());
    }
}
