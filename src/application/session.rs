use super::report::{ProfileStats, QuizSummary, SavingsSummary, SessionReport};
use crate::domain::action::{Action, ActionKind};
use crate::domain::ports::StateStoreBox;
use crate::domain::quiz::Answered;
use crate::domain::savings::{
    Contribution, ContributionOutcome, GoalPhase, SavingsState, CELEBRATION_DURATION,
};
use crate::error::Result;
use tracing::{debug, info};

/// What the view layer gets back after applying one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Contributed(Contribution),
    GoalSet(SavingsState),
    Answered(Answered),
}

/// One child's visit to the app.
///
/// `Session` stands where the view layer would: it owns the state store, runs
/// each user action through the matching engine, and swaps the stored state for
/// the engine's result. Actions are applied strictly one after another.
pub struct Session {
    store: StateStoreBox,
    goals_completed: u32,
    questions_answered: u32,
}

impl Session {
    /// Creates a session over a store already seeded with initial states.
    pub fn new(store: StateStoreBox) -> Self {
        Self {
            store,
            goals_completed: 0,
            questions_answered: 0,
        }
    }

    /// Adds the typed-in amount to the savings jar.
    pub async fn contribute(&mut self, raw: &str) -> Result<Contribution> {
        let current = self.store.savings().await?;
        let contribution = current.contribute(raw);

        match contribution.outcome {
            ContributionOutcome::Ignored => debug!(input = raw, "contribution ignored"),
            ContributionOutcome::Applied => debug!(
                input = raw,
                saved = %contribution.state.saved,
                goal = %contribution.state.goal,
                "contribution applied"
            ),
            ContributionOutcome::Capped => debug!(
                input = raw,
                saved = %contribution.state.saved,
                goal = %contribution.state.goal,
                "contribution capped at goal"
            ),
        }

        if current.phase() == GoalPhase::InProgress
            && contribution.state.phase() == GoalPhase::Completed
        {
            self.goals_completed += 1;
        }
        if contribution.goal_reached() {
            info!(
                goal = %contribution.state.goal,
                celebrate_for_ms = CELEBRATION_DURATION.as_millis() as u64,
                "goal reached"
            );
        }

        self.store.replace_savings(contribution.state.clone()).await?;
        Ok(contribution)
    }

    /// Replaces the savings goal with the typed-in value.
    pub async fn set_goal(&mut self, raw: &str) -> Result<SavingsState> {
        let current = self.store.savings().await?;
        let next = current.set_goal(raw);
        debug!(input = raw, from = %current.goal, to = %next.goal, "goal set");

        self.store.replace_savings(next.clone()).await?;
        Ok(next)
    }

    /// Answers the current quiz question and moves on to the next one.
    pub async fn answer(&mut self, answer: &str) -> Result<Answered> {
        let current = self.store.quiz().await?;
        let answered = current.submit_answer(answer);
        self.questions_answered += 1;
        debug!(
            question = current.current_index,
            verdict = ?answered.verdict,
            score = answered.state.score,
            "answer submitted"
        );

        self.store.replace_quiz(answered.state.clone()).await?;
        Ok(answered)
    }

    /// Dispatches a scripted action to the matching operation.
    pub async fn apply(&mut self, action: &Action) -> Result<Feedback> {
        let feedback = match action.kind {
            ActionKind::Contribute => Feedback::Contributed(self.contribute(&action.value).await?),
            ActionKind::SetGoal => Feedback::GoalSet(self.set_goal(&action.value).await?),
            ActionKind::Answer => Feedback::Answered(self.answer(&action.value).await?),
        };
        Ok(feedback)
    }

    /// Stats shown on the profile page.
    pub async fn profile(&self) -> Result<ProfileStats> {
        let savings = self.store.savings().await?;
        let quiz = self.store.quiz().await?;
        Ok(ProfileStats {
            total_saved: savings.saved,
            badges_earned: savings.badges.len(),
            goals_completed: self.goals_completed,
            quiz_score: quiz.score,
            questions_answered: self.questions_answered,
        })
    }

    /// Consumes the session and returns its final state.
    pub async fn into_report(self) -> Result<SessionReport> {
        let profile = self.profile().await?;
        let savings = self.store.savings().await?;
        let quiz = self.store.quiz().await?;
        Ok(SessionReport {
            savings: SavingsSummary::from(&savings),
            quiz: QuizSummary::from(&quiz),
            profile,
        })
    }
}
