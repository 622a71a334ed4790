//! Task-typed dataset settings and label schemas

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{validate_label, DatasetValidationError};

/// Annotation task a dataset is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// One or more labels per record
    TextClassification,
    /// Labelled spans inside the record text
    TokenClassification,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextClassification => "TextClassification",
            Self::TokenClassification => "TokenClassification",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TextClassification" | "text_classification" | "text-classification" => {
                Ok(Self::TextClassification)
            }
            "TokenClassification" | "token_classification" | "token-classification" => {
                Ok(Self::TokenClassification)
            }
            other => Err(format!(
                "Unknown task type '{}'. Expected TextClassification or TokenClassification",
                other
            )),
        }
    }
}

/// Set of permissible labels for a dataset
///
/// Labels are trimmed and deduplicated; the set is never empty. Two schemas
/// with the same labels are equal regardless of the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelSchema(BTreeSet<String>);

impl LabelSchema {
    /// Build a schema from any collection of labels
    pub fn new<I, S>(labels: I) -> Result<Self, DatasetValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();

        for label in labels {
            let label = label.as_ref().trim();
            validate_label(label)?;
            set.insert(label.to_string());
        }

        if set.is_empty() {
            return Err(DatasetValidationError::EmptyLabelSchema);
        }

        Ok(Self(set))
    }

    /// Labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for LabelSchema {
    type Error = DatasetValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LabelSchema> for Vec<String> {
    fn from(schema: LabelSchema) -> Self {
        schema.0.into_iter().collect()
    }
}

/// Settings for text classification datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextClassificationSettings {
    pub label_schema: LabelSchema,
}

impl TextClassificationSettings {
    pub fn new<I, S>(labels: I) -> Result<Self, DatasetValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            label_schema: LabelSchema::new(labels)?,
        })
    }
}

/// Settings for token classification datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClassificationSettings {
    pub label_schema: LabelSchema,
}

impl TokenClassificationSettings {
    pub fn new<I, S>(labels: I) -> Result<Self, DatasetValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            label_schema: LabelSchema::new(labels)?,
        })
    }
}

/// Dataset settings, one variant per task type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task")]
pub enum Settings {
    TextClassification(TextClassificationSettings),
    TokenClassification(TokenClassificationSettings),
}

impl Settings {
    /// Build settings for the given task from a list of labels
    pub fn for_task<I, S>(task: TaskType, labels: I) -> Result<Self, DatasetValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let label_schema = LabelSchema::new(labels)?;

        Ok(match task {
            TaskType::TextClassification => {
                Self::TextClassification(TextClassificationSettings { label_schema })
            }
            TaskType::TokenClassification => {
                Self::TokenClassification(TokenClassificationSettings { label_schema })
            }
        })
    }

    /// The task these settings apply to
    pub fn task(&self) -> TaskType {
        match self {
            Self::TextClassification(_) => TaskType::TextClassification,
            Self::TokenClassification(_) => TaskType::TokenClassification,
        }
    }

    pub fn label_schema(&self) -> &LabelSchema {
        match self {
            Self::TextClassification(s) => &s.label_schema,
            Self::TokenClassification(s) => &s.label_schema,
        }
    }

    /// Replace the label schema, keeping the task type
    pub fn set_label_schema(&mut self, label_schema: LabelSchema) {
        match self {
            Self::TextClassification(s) => s.label_schema = label_schema,
            Self::TokenClassification(s) => s.label_schema = label_schema,
        }
    }
}

impl From<TextClassificationSettings> for Settings {
    fn from(settings: TextClassificationSettings) -> Self {
        Self::TextClassification(settings)
    }
}

impl From<TokenClassificationSettings> for Settings {
    fn from(settings: TokenClassificationSettings) -> Self {
        Self::TokenClassification(settings)
    }
}
