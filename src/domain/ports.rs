use super::quiz::QuizState;
use super::savings::SavingsState;
use crate::error::Result;
use async_trait::async_trait;

/// Holds the one live copy of each engine's state for a session.
///
/// Callers read the current state, run a pure transition on it, and hand the
/// result back with `replace_*`; the store never merges.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn savings(&self) -> Result<SavingsState>;
    async fn replace_savings(&self, state: SavingsState) -> Result<()>;
    async fn quiz(&self) -> Result<QuizState>;
    async fn replace_quiz(&self, state: QuizState) -> Result<()>;
}

pub type StateStoreBox = Box<dyn StateStore>;
