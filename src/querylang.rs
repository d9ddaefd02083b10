//! Query-language records, their wrapper view, and accepted append inputs.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::store::Record,
    error::{SetError, SetResult},
    types::{Parameters, Priority},
};

/// Wire-ready query-language entry as stored in the repeated field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLangRecord {
    /// Modifier name; doubles as the key-index identifier.
    pub name: String,
    /// Modifier-specific parameters.
    pub parameters: Parameters,
    /// True when the modifier should be skipped.
    pub disabled: bool,
    /// Ordering weight.
    pub priority: Priority,
}

impl Record for QueryLangRecord {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Something that can describe itself as a query-language entry, such as a
/// driver configured with the modifier's arguments.
pub trait QueryLangProducer {
    /// Builds the entry this producer stands for.
    fn produce(&self) -> QueryLang;
}

/// Caller-facing view over one [`QueryLangRecord`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryLang {
    record: QueryLangRecord,
}

impl QueryLang {
    /// Creates an enabled entry with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: QueryLangRecord {
                name: name.into(),
                ..QueryLangRecord::default()
            },
        }
    }

    /// Asks `producer` for its entry.
    pub fn from_producer(producer: &dyn QueryLangProducer) -> Self {
        producer.produce()
    }

    /// Converts a JSON object carrying record fields. Missing fields default.
    pub fn from_value(value: Value) -> SetResult<Self> {
        if !value.is_object() {
            return Err(SetError::UnsupportedType(json_kind(&value).to_string()));
        }
        serde_json::from_value::<QueryLangRecord>(value)
            .map(Self::from)
            .map_err(|err| SetError::UnsupportedType(format!("object ({err})")))
    }

    /// Parses `text` as JSON, then converts it like [`QueryLang::from_value`].
    pub fn from_json(text: &str) -> SetResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| SetError::UnsupportedType(format!("str ({err})")))?;
        Self::from_value(value)
    }

    /// Sets a parameter, builder style.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.parameters.insert(key.into(), value.into());
        self
    }

    /// Sets the priority, builder style.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.record.priority = priority;
        self
    }

    /// Modifier name.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Renames the modifier.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.record.name = name.into();
    }

    /// Ordering weight.
    pub fn priority(&self) -> Priority {
        self.record.priority
    }

    /// Changes the ordering weight.
    pub fn set_priority(&mut self, priority: Priority) {
        self.record.priority = priority;
    }

    /// True when the modifier is switched off.
    pub fn disabled(&self) -> bool {
        self.record.disabled
    }

    /// Switches the modifier off or on.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.record.disabled = disabled;
    }

    /// Modifier parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.record.parameters
    }

    /// Mutable modifier parameters.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.record.parameters
    }

    /// Underlying wire data.
    pub fn as_record(&self) -> &QueryLangRecord {
        &self.record
    }

    /// Consumes the view, returning its wire data.
    pub fn into_record(self) -> QueryLangRecord {
        self.record
    }

    /// JSON object with the record's fields.
    pub fn to_value(&self) -> Value {
        // A derived struct of strings, maps, and scalars always serializes.
        serde_json::to_value(&self.record).unwrap_or_default()
    }

    /// Compact JSON text of [`QueryLang::to_value`].
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl From<QueryLangRecord> for QueryLang {
    fn from(record: QueryLangRecord) -> Self {
        Self { record }
    }
}

/// Closed set of inputs accepted by `append` and `extend`.
#[derive(Clone, Copy)]
pub enum AcceptQueryLang<'a> {
    /// Raw wire record, copied as-is.
    Record(&'a QueryLangRecord),
    /// Existing view, its record copied.
    QueryLang(&'a QueryLang),
    /// JSON converted through [`QueryLang::from_value`].
    Value(&'a Value),
    /// Producer whose entry is copied.
    Producer(&'a dyn QueryLangProducer),
}

impl<'a> AcceptQueryLang<'a> {
    /// Resolves the input to the record that should be stored.
    pub fn resolve(self) -> SetResult<Cow<'a, QueryLangRecord>> {
        match self {
            Self::Record(rec) => Ok(Cow::Borrowed(rec)),
            Self::QueryLang(ql) => Ok(Cow::Borrowed(ql.as_record())),
            Self::Value(value) => {
                QueryLang::from_value(value.clone()).map(|ql| Cow::Owned(ql.record))
            }
            Self::Producer(producer) => Ok(Cow::Owned(producer.produce().record)),
        }
    }

    /// Short name of the input shape, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::QueryLang(_) => "querylang",
            Self::Value(value) => json_kind(value),
            Self::Producer(_) => "producer",
        }
    }
}

impl<'a> From<&'a QueryLangRecord> for AcceptQueryLang<'a> {
    fn from(value: &'a QueryLangRecord) -> Self {
        Self::Record(value)
    }
}

impl<'a> From<&'a QueryLang> for AcceptQueryLang<'a> {
    fn from(value: &'a QueryLang) -> Self {
        Self::QueryLang(value)
    }
}

impl<'a> From<&'a Value> for AcceptQueryLang<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a dyn QueryLangProducer> for AcceptQueryLang<'a> {
    fn from(value: &'a dyn QueryLangProducer) -> Self {
        Self::Producer(value)
    }
}

impl<'a, P: QueryLangProducer + 'a> From<&'a P> for AcceptQueryLang<'a> {
    fn from(value: &'a P) -> Self {
        Self::Producer(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
