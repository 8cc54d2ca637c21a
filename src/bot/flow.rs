//! Questionnaire step table
//!
//! Each data-entry state corresponds to exactly one [`Field`]. A [`Form`] is
//! the ordered list of fields it asks and the controller always moves to the
//! first unanswered one, so adding or dropping a question only touches the
//! slices below.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::texts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Field {
    FullName,
    Username,
    GroupNumber,
    ProgrammingLevel,
    Direction,
    KnownLanguages,
    Motivation,
    TeachingExperience,
}

/// Static description of one questionnaire step
#[derive(Debug)]
pub(crate) struct Step {
    pub(crate) field: Field,
    pub(crate) prompt: &'static str,
    /// Suggested answers offered above the cancel option
    pub(crate) choices: &'static [&'static str],
}

const STEPS: &[Step] = &[
    Step {
        field: Field::FullName,
        prompt: texts::PROMPT_FULL_NAME,
        choices: &[],
    },
    Step {
        field: Field::Username,
        prompt: texts::PROMPT_USERNAME,
        choices: &[],
    },
    Step {
        field: Field::GroupNumber,
        prompt: texts::PROMPT_GROUP,
        choices: &[],
    },
    Step {
        field: Field::ProgrammingLevel,
        prompt: texts::PROMPT_LEVEL,
        choices: texts::LEVEL_OPTIONS,
    },
    Step {
        field: Field::Direction,
        prompt: texts::PROMPT_DIRECTION,
        choices: texts::DIRECTION_OPTIONS,
    },
    Step {
        field: Field::KnownLanguages,
        prompt: texts::PROMPT_LANGUAGES,
        choices: &[],
    },
    Step {
        field: Field::Motivation,
        prompt: texts::PROMPT_MOTIVATION,
        choices: &[],
    },
    Step {
        field: Field::TeachingExperience,
        prompt: texts::PROMPT_EXPERIENCE,
        choices: &[],
    },
];

const FULL_FIELDS: &[Field] = &[
    Field::FullName,
    Field::Username,
    Field::GroupNumber,
    Field::ProgrammingLevel,
    Field::Direction,
    Field::KnownLanguages,
    Field::Motivation,
    Field::TeachingExperience,
];

const SHORT_FIELDS: &[Field] = &[
    Field::FullName,
    Field::Username,
    Field::GroupNumber,
    Field::ProgrammingLevel,
    Field::KnownLanguages,
    Field::Motivation,
    Field::TeachingExperience,
];

impl Field {
    pub(crate) fn step(self) -> &'static Step {
        // STEPS lists every variant in declaration order
        let step = &STEPS[self as usize];
        debug_assert_eq!(step.field, self);
        step
    }

    /// Column name of this field in the applications table
    pub(crate) fn name(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Username => "username",
            Field::GroupNumber => "group_number",
            Field::ProgrammingLevel => "programming_level",
            Field::Direction => "direction",
            Field::KnownLanguages => "known_languages",
            Field::Motivation => "motivation",
            Field::TeachingExperience => "teaching_experience",
        }
    }

    /// Canonical stored form of a raw answer
    pub(crate) fn normalize(self, raw: &str) -> String {
        match self {
            Field::Username => raw.trim().trim_start_matches('@').to_string(),
            Field::Direction => raw.trim().to_lowercase(),
            _ => raw.to_string(),
        }
    }
}

/// Which questionnaire is asked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Form {
    /// All eight questions, including the teaching direction (default)
    #[default]
    Full,
    /// Seven questions, no direction
    Short,
}

impl Form {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "full" => Some(Form::Full),
            "short" => Some(Form::Short),
            _ => None,
        }
    }

    pub(crate) fn fields(self) -> &'static [Field] {
        match self {
            Form::Full => FULL_FIELDS,
            Form::Short => SHORT_FIELDS,
        }
    }

    pub(crate) fn first(self) -> Field {
        self.fields()[0]
    }

    pub(crate) fn last(self) -> Field {
        let fields = self.fields();
        fields[fields.len() - 1]
    }
}
