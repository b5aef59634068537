pub mod overview;
pub mod practice;
pub mod tips;
