use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::flow::{Field, Form};
use crate::store::Application;

/// Chat identity of an end user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct UserId(pub(crate) i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "field", rename_all = "snake_case")]
pub(crate) enum State {
    Menu,
    /// Waiting for the answer to `Field`
    Answering(Field),
}

/// Which option set the menu currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum MenuView {
    #[default]
    Main,
    Info,
}

/// Answers collected so far, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Answers(BTreeMap<Field, String>);

impl Answers {
    pub(crate) fn set(&mut self, field: Field, value: String) {
        self.0.insert(field, value);
    }

    pub(crate) fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First field of `form` that has no answer yet
    pub(crate) fn first_missing(&self, form: Form) -> Option<Field> {
        form.fields()
            .iter()
            .copied()
            .find(|f| !self.0.contains_key(f))
    }

    /// Assemble the record once every field of `form` is answered,
    /// otherwise report the first unanswered field.
    pub(crate) fn to_application(&self, form: Form) -> Result<Application, Field> {
        if let Some(missing) = self.first_missing(form) {
            return Err(missing);
        }
        let take = |field: Field| self.get(field).map(str::to_string).ok_or(field);
        Ok(Application {
            username: take(Field::Username)?,
            full_name: take(Field::FullName)?,
            group_number: take(Field::GroupNumber)?,
            programming_level: take(Field::ProgrammingLevel)?,
            direction: match form {
                Form::Full => Some(take(Field::Direction)?),
                Form::Short => None,
            },
            known_languages: take(Field::KnownLanguages)?,
            motivation: take(Field::Motivation)?,
            teaching_experience: take(Field::TeachingExperience)?,
        })
    }
}

/// Per-user conversation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Session {
    pub(crate) state: State,
    #[serde(default)]
    pub(crate) view: MenuView,
    #[serde(default)]
    pub(crate) answers: Answers,
    /// Set once the session was dropped from the registry
    #[serde(skip)]
    pub(crate) closed: bool,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Menu,
            view: MenuView::Main,
            answers: Answers::default(),
            closed: false,
        }
    }

    /// Abandon the form in progress and go back to the main menu.
    pub(crate) fn reset_to_menu(&mut self) {
        self.answers.clear();
        self.state = State::Menu;
        self.view = MenuView::Main;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
