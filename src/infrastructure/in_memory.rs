use crate::domain::ports::StateStore;
use crate::domain::quiz::QuizState;
use crate::domain::savings::SavingsState;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session-scoped state held in memory.
///
/// Each state lives behind its own `Arc<RwLock<_>>`; clones share the same
/// slots. Nothing outlives the process.
#[derive(Clone)]
pub struct InMemoryStateStore {
    savings: Arc<RwLock<SavingsState>>,
    quiz: Arc<RwLock<QuizState>>,
}

impl InMemoryStateStore {
    /// Creates a store seeded with the given initial states.
    pub fn new(savings: SavingsState, quiz: QuizState) -> Self {
        Self {
            savings: Arc::new(RwLock::new(savings)),
            quiz: Arc::new(RwLock::new(quiz)),
        }
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn savings(&self) -> Result<SavingsState> {
        Ok(self.savings.read().await.clone())
    }

    async fn replace_savings(&self, state: SavingsState) -> Result<()> {
        *self.savings.write().await = state;
        Ok(())
    }

    async fn quiz(&self) -> Result<QuizState> {
        Ok(self.quiz.read().await.clone())
    }

    async fn replace_quiz(&self, state: QuizState) -> Result<()> {
        *self.quiz.write().await = state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::quiz::QuestionBank;
    use rust_decimal_macros::dec;

    fn store() -> InMemoryStateStore {
        InMemoryStateStore::new(
            SavingsState::new(),
            QuizState::new(Arc::new(QuestionBank::default())),
        )
    }

    #[tokio::test]
    async fn test_savings_replace_and_read() {
        let store = store();
        assert_eq!(store.savings().await.unwrap(), SavingsState::new());

        let next = SavingsState::new().contribute_amount(dec!(25)).state;
        store.replace_savings(next.clone()).await.unwrap();

        let retrieved = store.savings().await.unwrap();
        assert_eq!(retrieved, next);
        assert_eq!(retrieved.saved, Money::new(dec!(25)));
    }

    #[tokio::test]
    async fn test_quiz_replace_and_read() {
        let store = store();
        let quiz = store.quiz().await.unwrap();
        let next = quiz.submit_answer("Save a portion").state;
        store.replace_quiz(next).await.unwrap();

        let retrieved = store.quiz().await.unwrap();
        assert_eq!(retrieved.current_index, 1);
        assert_eq!(retrieved.score, 10);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = store();
        let other = store.clone();
        other
            .replace_savings(SavingsState::new().set_goal_amount(dec!(40)))
            .await
            .unwrap();
        assert_eq!(store.savings().await.unwrap().goal, Money::new(dec!(40)));
    }
}
