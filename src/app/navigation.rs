use super::*;

impl InterviewApp {
    pub fn has_next(&self) -> bool {
        self.session.current_index < self.bank.last_index()
    }

    pub fn has_previous(&self) -> bool {
        self.session.current_index > 0
    }

    /// Avanza una pregunta. En la última no hace nada.
    pub fn next(&mut self) {
        if !self.has_next() {
            return;
        }
        self.session.current_index += 1;
        self.clear_question_view();
        log::debug!("siguiente pregunta: {}", self.session.current_index);
    }

    /// Retrocede una pregunta. En la primera no hace nada.
    pub fn previous(&mut self) {
        if !self.has_previous() {
            return;
        }
        self.session.current_index -= 1;
        self.clear_question_view();
        log::debug!("pregunta anterior: {}", self.session.current_index);
    }

    /// Cambia de sección sin tocar el progreso de la práctica.
    pub fn go_to_section(&mut self, section: Section) {
        if self.session.section != section {
            log::debug!("sección {:?} -> {:?}", self.session.section, section);
        }
        self.session.section = section;
    }

    // Al cambiar de pregunta se oculta la respuesta y se descarta el borrador
    fn clear_question_view(&mut self) {
        self.session.answer_shown = false;
        self.session.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::Section;

    #[test]
    fn next_stops_at_last_question() {
        let mut app = app();
        for _ in 0..25 {
            app.next();
        }
        assert_eq!(app.session.current_index, app.bank.len() - 1);
        assert!(!app.has_next());

        app.next();
        assert_eq!(app.session.current_index, 9);
    }

    #[test]
    fn previous_is_noop_at_first_question() {
        let mut app = app();
        app.set_draft("borrador");
        app.previous();
        assert_eq!(app.session.current_index, 0);
        // el guard corta antes de limpiar
        assert_eq!(app.session.draft, "borrador");
        assert!(!app.has_previous());
    }

    #[test]
    fn moving_clears_draft_and_reveal_flag() {
        let mut app = app();
        app.set_draft("mi respuesta");
        app.reveal_answer();
        app.next();
        assert!(app.session.draft.is_empty());
        assert!(!app.session.answer_shown);
        assert_eq!(app.session.score, 1);
    }

    #[test]
    fn section_changes_keep_question_state() {
        let mut app = app();
        app.next();
        app.next();
        app.reveal_answer();
        app.set_draft("nodes and edges");
        let before = app.session.clone();

        for section in [Section::Tips, Section::Practice, Section::Overview] {
            app.go_to_section(section);
            assert_eq!(app.session.section, section);
            assert_eq!(app.session.current_index, before.current_index);
            assert_eq!(app.session.score, before.score);
            assert_eq!(app.session.revealed, before.revealed);
            assert_eq!(app.session.draft, before.draft);
            assert_eq!(app.session.answer_shown, before.answer_shown);
        }
    }
}
