// src/view_models.rs

use crate::model::{Difficulty, TipTone};
use egui::Color32;

#[derive(Clone, Debug)]
pub struct QuestionHeader {
    pub number: usize, // número "humano" (1,2,3…)
    pub total: usize,
    pub difficulty: Difficulty,
    pub category: String,
}

#[derive(Clone, Copy, Debug)]
pub struct ScoreBadge {
    pub score: usize,
    pub total: usize,
}

impl QuestionHeader {
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

impl ScoreBadge {
    pub fn label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

/// Colores (texto, fondo) de la etiqueta de dificultad.
pub fn difficulty_colors(difficulty: Difficulty) -> (Color32, Color32) {
    match difficulty {
        Difficulty::Easy => (Color32::from_rgb(22, 163, 74), Color32::from_rgb(220, 252, 231)),
        Difficulty::Medium => (Color32::from_rgb(202, 138, 4), Color32::from_rgb(254, 249, 195)),
        Difficulty::Hard => (Color32::from_rgb(220, 38, 38), Color32::from_rgb(254, 226, 226)),
    }
}

pub fn tip_tone_fill(tone: TipTone) -> Color32 {
    match tone {
        TipTone::Green => Color32::from_rgb(16, 150, 120),
        TipTone::Blue => Color32::from_rgb(59, 100, 220),
        TipTone::Purple => Color32::from_rgb(150, 70, 200),
        TipTone::Orange => Color32::from_rgb(230, 100, 40),
    }
}
