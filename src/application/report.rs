use crate::domain::money::Money;
use crate::domain::quiz::QuizState;
use crate::domain::savings::{Badge, GoalPhase, SavingsState};
use rust_decimal::Decimal;
use serde::Serialize;

/// Savings jar as the tracker page shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsSummary {
    pub goal: Money,
    pub saved: Money,
    /// Rounded to two places, capped at 100.
    pub progress_percent: Decimal,
    pub phase: GoalPhase,
    pub badges: Vec<Badge>,
}

impl From<&SavingsState> for SavingsSummary {
    fn from(state: &SavingsState) -> Self {
        Self {
            goal: Money::new(state.goal.value().normalize()),
            saved: Money::new(state.saved.value().normalize()),
            progress_percent: state.progress_percent().round_dp(2).normalize(),
            phase: state.phase(),
            badges: state.badges.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSummary {
    pub current_index: usize,
    pub next_prompt: String,
    pub score: u32,
    pub question_count: usize,
}

impl From<&QuizState> for QuizSummary {
    fn from(state: &QuizState) -> Self {
        Self {
            current_index: state.current_index,
            next_prompt: state.current_question().prompt.clone(),
            score: state.score,
            question_count: state.questions.len(),
        }
    }
}

/// Numbers for the profile page's stats grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    pub total_saved: Money,
    pub badges_earned: usize,
    /// Times the jar went from in progress to full on a contribution.
    pub goals_completed: u32,
    pub quiz_score: u32,
    pub questions_answered: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub savings: SavingsSummary,
    pub quiz: QuizSummary,
    pub profile: ProfileStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::QuestionBank;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_savings_summary_rounds_progress() {
        let state = SavingsState::new().set_goal_amount(dec!(3)).contribute_amount(dec!(1)).state;
        let summary = SavingsSummary::from(&state);
        assert_eq!(summary.progress_percent, dec!(33.33));
        assert_eq!(summary.phase, GoalPhase::InProgress);
    }

    #[test]
    fn test_savings_summary_serializes_badges_by_name() {
        let state = SavingsState::new().contribute_amount(dec!(100)).state;
        let json = serde_json::to_value(SavingsSummary::from(&state)).unwrap();
        assert_eq!(json["badges"][0], "Goal Achiever");
        assert_eq!(json["phase"], "completed");
    }

    #[test]
    fn test_quiz_summary() {
        let state = QuizState::new(Arc::new(QuestionBank::default()));
        let summary = QuizSummary::from(&state);
        assert_eq!(summary.current_index, 0);
        assert_eq!(summary.question_count, 3);
        assert_eq!(summary.next_prompt, "What is the best way to save money?");
    }
}
