use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Contribute,
    SetGoal,
    Answer,
}

/// One thing the child did in the app, with the raw text they entered.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Action {
    #[serde(rename = "action")]
    pub kind: ActionKind,
    #[serde(default)]
    pub value: String,
}

impl Action {
    pub fn new(kind: ActionKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
