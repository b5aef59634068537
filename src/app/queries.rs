use super::*;
use crate::model::QuestionRecord;

impl InterviewApp {
    /// Pregunta activa.
    pub fn current(&self) -> Option<&QuestionRecord> {
        self.bank.get(self.session.current_index)
    }

    /// (índice + 1) / N, en (0, 1]. Con el banco vacío devuelve 0.
    pub fn progress_fraction(&self) -> f32 {
        if self.bank.is_empty() {
            return 0.0;
        }
        (self.session.current_index + 1) as f32 / self.bank.len() as f32
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }
}
