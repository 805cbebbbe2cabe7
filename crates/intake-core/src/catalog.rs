//! The static question catalog.
//!
//! Seven questions, asked in order. The catalog is read-only data; the
//! wizard only ever indexes into it.

use std::fmt;
use std::str::FromStr;

use crate::error::IntakeError;

/// Title shown above the question card.
pub const HEADLINE: &str = "Help us match you to the right therapist";

/// Explanatory copy shown under the headline.
pub const SUBHEADING: &str = "It's important to have a therapist who you can establish a personal \
connection with. The following questions are designed to match you to a licensed therapist \
based on your therapy needs and personal preferences.";

/// Five-point agreement scale used by the self-assessment questions.
pub const AGREEMENT_SCALE: &[&str] = &[
    "Not at all true",
    "Slightly true",
    "Moderately true",
    "Mostly true",
    "Completely true",
];

const GENDER_CHOICES: &[&str] = &["Male", "Female", "Other"];

/// How a question captures its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single-line text, stored verbatim
    FreeText,
    /// Number-constrained text input, still stored as a string
    NumericText,
    /// Country-aware phone number
    Phone,
    /// One button per choice, exactly one selected
    ChoiceButtons,
}

/// A named slot in the answer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Age,
    Phone,
    Gender,
    Q1,
    Q2,
    Q3,
}

impl Field {
    /// Every field, in catalog order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Age,
        Field::Phone,
        Field::Gender,
        Field::Q1,
        Field::Q2,
        Field::Q3,
    ];

    /// Stable internal key (`name`, `age`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Q1 => "q1",
            Field::Q2 => "q2",
            Field::Q3 => "q3",
        }
    }

    /// Key used in the outbound form body.
    pub fn external_name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Phone => "Phone",
            Field::Gender => "Gender",
            Field::Q1 => "Question1",
            Field::Q2 => "Question2",
            Field::Q3 => "Question3",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}

/// One question definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSpec {
    pub id: u32,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    /// Choice labels; empty unless `kind` is `ChoiceButtons`
    pub choices: &'static [&'static str],
    pub field: Field,
}

impl QuestionSpec {
    /// Resolve user input to a choice label.
    ///
    /// Accepts the exact label (case-insensitive) or a 1-based index.
    pub fn resolve_choice(&self, input: &str) -> Result<&'static str, IntakeError> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            if let Some(label) = n.checked_sub(1).and_then(|i| self.choices.get(i)) {
                return Ok(*label);
            }
        }
        self.choices
            .iter()
            .find(|label| label.eq_ignore_ascii_case(input))
            .copied()
            .ok_or_else(|| IntakeError::InvalidChoice {
                field: self.field,
                value: input.to_string(),
            })
    }
}

static QUESTIONS: [QuestionSpec; 7] = [
    QuestionSpec {
        id: 0,
        prompt: "What is your name?",
        kind: QuestionKind::FreeText,
        choices: &[],
        field: Field::Name,
    },
    QuestionSpec {
        id: 1,
        prompt: "How old are you?",
        kind: QuestionKind::NumericText,
        choices: &[],
        field: Field::Age,
    },
    QuestionSpec {
        id: 2,
        prompt: "What is your phone number?",
        kind: QuestionKind::Phone,
        choices: &[],
        field: Field::Phone,
    },
    QuestionSpec {
        id: 3,
        prompt: "What is your gender?",
        kind: QuestionKind::ChoiceButtons,
        choices: GENDER_CHOICES,
        field: Field::Gender,
    },
    QuestionSpec {
        id: 4,
        prompt: "I often doubt my ability to learn new tasks at work.",
        kind: QuestionKind::ChoiceButtons,
        choices: AGREEMENT_SCALE,
        field: Field::Q1,
    },
    QuestionSpec {
        id: 5,
        prompt: "I struggle to solve problems that come up in my job.",
        kind: QuestionKind::ChoiceButtons,
        choices: AGREEMENT_SCALE,
        field: Field::Q2,
    },
    QuestionSpec {
        id: 6,
        prompt: "I find it difficult to work well as part of a team.",
        kind: QuestionKind::ChoiceButtons,
        choices: AGREEMENT_SCALE,
        field: Field::Q3,
    },
];

/// The full catalog, in the order questions are asked.
pub fn catalog() -> &'static [QuestionSpec] {
    &QUESTIONS
}

/// Number of questions (N).
pub fn question_count() -> usize {
    QUESTIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_questions_in_order() {
        let questions = catalog();
        assert_eq!(questions.len(), 7);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id as usize, i);
            assert_eq!(q.field, Field::ALL[i]);
        }
    }

    #[test]
    fn only_choice_questions_carry_choices() {
        for q in catalog() {
            match q.kind {
                QuestionKind::ChoiceButtons => assert!(!q.choices.is_empty()),
                _ => assert!(q.choices.is_empty()),
            }
        }
    }

    #[test]
    fn field_keys_are_unique_and_parse_back() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
        let keys: std::collections::HashSet<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn unknown_field_key_is_rejected() {
        let err = "email".parse::<Field>().unwrap_err();
        assert!(matches!(err, IntakeError::UnknownField(ref k) if k == "email"));
    }

    #[test]
    fn external_names_match_form_contract() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.external_name()).collect();
        assert_eq!(
            names,
            ["Name", "Age", "Phone", "Gender", "Question1", "Question2", "Question3"]
        );
    }

    #[test]
    fn resolve_choice_by_label_or_index() {
        let gender = &catalog()[3];
        assert_eq!(gender.resolve_choice("Female").unwrap(), "Female");
        assert_eq!(gender.resolve_choice("other").unwrap(), "Other");
        assert_eq!(gender.resolve_choice("1").unwrap(), "Male");
        assert!(gender.resolve_choice("0").is_err());
        assert!(gender.resolve_choice("4").is_err());
        assert!(gender.resolve_choice("Unknown").is_err());
    }
}
