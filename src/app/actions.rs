use super::*;

impl InterviewApp {
    /// Muestra la respuesta de ejemplo. La primera vez que se ve cada pregunta
    /// suma un punto; no se compara con el borrador.
    pub fn reveal_answer(&mut self) {
        let idx = self.session.current_index;
        self.session.answer_shown = true;

        if self.session.revealed.insert(idx) {
            self.session.score += 1;
            log::debug!("respuesta {idx} revelada, puntuación {}", self.session.score);
        }
        debug_assert_eq!(self.session.score, self.session.revealed.len());
    }

    /// Sustituye el borrador tal cual, sin validar.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.session.draft = text.into();
    }
}
