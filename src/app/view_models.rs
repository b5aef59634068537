use super::*;

impl InterviewApp {
    pub fn question_header(&self) -> Option<QuestionHeader> {
        let q = self.current()?;
        Some(QuestionHeader {
            number: self.session.current_index + 1,
            total: self.bank.len(),
            difficulty: q.difficulty,
            category: q.category.clone(),
        })
    }

    pub fn score_badge(&self) -> ScoreBadge {
        ScoreBadge {
            score: self.session.score,
            total: self.bank.len(),
        }
    }
}
