use super::money::{parse_lenient, ContributionAmount, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Goal a fresh savings jar starts with.
pub const DEFAULT_GOAL: Money = Money(dec!(100));

/// How long the view layer should celebrate after a `GoalReached` event.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(3);

/// Amounts offered as one-tap buttons next to the contribution field.
pub const QUICK_ADD_AMOUNTS: [Decimal; 4] = [dec!(1), dec!(5), dec!(10), dec!(20)];

/// Tips listed under the tracker.
pub const SAVINGS_TIPS: [&str; 3] = [
    "Save a little bit regularly instead of a lot at once.",
    "Set realistic goals you can achieve.",
    "Ask for chores you can do to earn money.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Goal Achiever")]
    GoalAchiever,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::GoalAchiever => f.write_str("Goal Achiever"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsEvent {
    GoalReached,
}

/// What a contribution did to the jar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionOutcome {
    /// Input was not a positive number; nothing changed.
    Ignored,
    /// The full amount went in.
    Applied,
    /// The amount was cut down to what fits under the goal.
    Capped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPhase {
    InProgress,
    Completed,
}

/// The savings jar: a goal, what has been put in so far, and the badges earned.
///
/// Every operation is a pure transition returning a new state; the caller owns
/// the current value and swaps it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsState {
    pub goal: Money,
    pub saved: Money,
    /// Insertion-ordered, never contains duplicates.
    pub badges: Vec<Badge>,
}

/// Result of a contribution: the next state plus whatever happened on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub state: SavingsState,
    pub events: Vec<SavingsEvent>,
    pub outcome: ContributionOutcome,
}

impl Contribution {
    fn unchanged(state: &SavingsState) -> Self {
        Self {
            state: state.clone(),
            events: Vec::new(),
            outcome: ContributionOutcome::Ignored,
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.events.contains(&SavingsEvent::GoalReached)
    }
}

impl Default for SavingsState {
    fn default() -> Self {
        Self::new()
    }
}

impl SavingsState {
    pub fn new() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            saved: Money::ZERO,
            badges: Vec::new(),
        }
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    /// Adds typed-in text to the jar. Text that isn't a positive number is ignored.
    pub fn contribute(&self, raw: &str) -> Contribution {
        match parse_lenient(raw) {
            Some(value) => self.contribute_amount(value),
            None => Contribution::unchanged(self),
        }
    }

    /// Adds `amount` to the jar, capping at the goal.
    ///
    /// Reaching the goal from below awards `Badge::GoalAchiever` and emits
    /// `SavingsEvent::GoalReached`, once per session.
    pub fn contribute_amount(&self, amount: Decimal) -> Contribution {
        let Ok(amount) = ContributionAmount::new(amount) else {
            return Contribution::unchanged(self);
        };

        let mut next = self.clone();
        next.saved = self.saved.add_capped(amount.into(), self.goal);
        let outcome = match self.saved.value().checked_add(amount.value()) {
            Some(sum) if sum == next.saved.value() => ContributionOutcome::Applied,
            _ => ContributionOutcome::Capped,
        };

        let mut events = Vec::new();
        if self.saved < self.goal
            && next.saved == next.goal
            && !next.has_badge(Badge::GoalAchiever)
        {
            next.badges.push(Badge::GoalAchiever);
            events.push(SavingsEvent::GoalReached);
        }

        Contribution {
            state: next,
            events,
            outcome,
        }
    }

    /// Sets the goal from typed-in text. Non-numeric text counts as zero.
    pub fn set_goal(&self, raw: &str) -> SavingsState {
        self.set_goal_amount(parse_lenient(raw).unwrap_or(Decimal::ZERO))
    }

    /// Sets the goal, never below 1. `saved` is left alone, so it may exceed
    /// the new goal until the next contribution.
    pub fn set_goal_amount(&self, goal: Decimal) -> SavingsState {
        SavingsState {
            goal: Money::new(goal).max(Money::ONE),
            ..self.clone()
        }
    }

    /// Share of the goal saved so far, in `[0, 100]`.
    pub fn progress_percent(&self) -> Decimal {
        if self.goal <= Money::ZERO {
            return Decimal::ZERO;
        }
        if self.saved >= self.goal {
            return Decimal::ONE_HUNDRED;
        }
        (self.saved.value() / self.goal.value() * Decimal::ONE_HUNDRED).max(Decimal::ZERO)
    }

    pub fn phase(&self) -> GoalPhase {
        if self.saved >= self.goal {
            GoalPhase::Completed
        } else {
            GoalPhase::InProgress
        }
    }
}
