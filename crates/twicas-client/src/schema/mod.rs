//! Declarative shape validation for request parameters and response bodies.
//!
//! A [`Schema`] is plain data: strings with length/pattern rules, numbers
//! with bounds, arrays, objects with required/optional/defaulted fields,
//! and tagged unions keyed on a discriminator field. Validation walks a
//! `serde_json::Value`, collects every failed rule with its location, and
//! returns a normalized copy with defaults filled in. Typed decoding happens
//! afterwards via serde, see [`Schema::parse`].
//!
//! Request parameter objects are built with [`strict_object`] (unknown
//! fields rejected), response objects with [`loose_object`] (unknown fields
//! passed through).

pub mod entities;
pub mod registry;

use std::fmt;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{ValidateLength, ValidateRange, ValidateRegex};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A single failed rule. `path` is empty for the root value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Every issue found while validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                path: path.into(),
                message: message.into(),
            }],
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Whether any issue was reported at exactly `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Schema definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Schema {
    /// Accepts any JSON value unchanged.
    Any,
    String(StringRule),
    Number(NumberRule),
    Boolean,
    Null,
    Literal(&'static str),
    Enum(&'static [&'static str]),
    Array(Box<ArrayRule>),
    Object(ObjectRule),
    /// `null` or the inner schema. Absence is governed by the field presence.
    Nullish(Box<Schema>),
    Tagged(TaggedUnion),
}

#[derive(Debug, Clone, Default)]
pub struct StringRule {
    min_len: Option<usize>,
    max_len: Option<usize>,
    pattern: Option<(Regex, &'static str)>,
}

impl StringRule {
    /// Inclusive bounds on the number of Unicode scalar values.
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_len = Some(min);
        self.max_len = Some(max);
        self
    }

    pub fn pattern(mut self, re: Regex, message: &'static str) -> Self {
        self.pattern = Some((re, message));
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberRule {
    integer: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberRule {
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min as f64);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max as f64);
        self
    }

    pub fn range(self, min: i64, max: i64) -> Self {
        self.min(min).max(max)
    }
}

#[derive(Debug, Clone)]
pub struct ArrayRule {
    items: Schema,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

impl ArrayRule {
    pub fn items(mut self, min: usize, max: usize) -> Self {
        self.min_items = Some(min);
        self.max_items = Some(max);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFields {
    Reject,
    Passthrough,
}

#[derive(Debug, Clone)]
pub enum Presence {
    Required,
    Optional,
    Default(Value),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    pub presence: Presence,
}

#[derive(Debug, Clone)]
pub struct ObjectRule {
    fields: Vec<Field>,
    unknown: UnknownFields,
}

impl ObjectRule {
    pub fn required(self, name: &'static str, schema: impl Into<Schema>) -> Self {
        self.field(name, schema.into(), Presence::Required)
    }

    pub fn optional(self, name: &'static str, schema: impl Into<Schema>) -> Self {
        self.field(name, schema.into(), Presence::Optional)
    }

    /// Field filled with `default` when absent.
    pub fn with_default(
        self,
        name: &'static str,
        schema: impl Into<Schema>,
        default: impl Into<Value>,
    ) -> Self {
        self.field(name, schema.into(), Presence::Default(default.into()))
    }

    /// Copy of this rule with the fields of `other` appended.
    pub fn extend(mut self, other: ObjectRule) -> Self {
        self.fields.extend(other.fields);
        self
    }

    fn field(mut self, name: &'static str, schema: Schema, presence: Presence) -> Self {
        self.fields.retain(|f| f.name != name);
        self.fields.push(Field {
            name,
            schema,
            presence,
        });
        self
    }
}

/// Object variants selected by the string value of a discriminator field.
#[derive(Debug, Clone)]
pub struct TaggedUnion {
    tag: &'static str,
    variants: Vec<(&'static [&'static str], ObjectRule)>,
}

impl TaggedUnion {
    /// Add a variant used when the tag is one of `tags`. The variant object
    /// should declare the tag field itself.
    pub fn variant(mut self, tags: &'static [&'static str], object: ObjectRule) -> Self {
        self.variants.push((tags, object));
        self
    }

    fn all_tags(&self) -> Vec<&'static str> {
        self.variants
            .iter()
            .flat_map(|(tags, _)| tags.iter().copied())
            .collect()
    }
}

impl From<StringRule> for Schema {
    fn from(rule: StringRule) -> Self {
        Schema::String(rule)
    }
}

impl From<NumberRule> for Schema {
    fn from(rule: NumberRule) -> Self {
        Schema::Number(rule)
    }
}

impl From<ArrayRule> for Schema {
    fn from(rule: ArrayRule) -> Self {
        Schema::Array(Box::new(rule))
    }
}

impl From<ObjectRule> for Schema {
    fn from(rule: ObjectRule) -> Self {
        Schema::Object(rule)
    }
}

impl From<TaggedUnion> for Schema {
    fn from(rule: TaggedUnion) -> Self {
        Schema::Tagged(rule)
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

pub fn any() -> Schema {
    Schema::Any
}

pub fn string() -> StringRule {
    StringRule::default()
}

/// Any JSON number, fractional values included.
pub fn number() -> NumberRule {
    NumberRule::default()
}

pub fn integer() -> NumberRule {
    NumberRule {
        integer: true,
        ..NumberRule::default()
    }
}

pub fn boolean() -> Schema {
    Schema::Boolean
}

pub fn null() -> Schema {
    Schema::Null
}

pub fn literal(value: &'static str) -> Schema {
    Schema::Literal(value)
}

pub fn one_of(values: &'static [&'static str]) -> Schema {
    Schema::Enum(values)
}

pub fn array_of(items: impl Into<Schema>) -> ArrayRule {
    ArrayRule {
        items: items.into(),
        min_items: None,
        max_items: None,
    }
}

pub fn nullish(inner: impl Into<Schema>) -> Schema {
    Schema::Nullish(Box::new(inner.into()))
}

/// Object that rejects fields it does not declare.
pub fn strict_object() -> ObjectRule {
    ObjectRule {
        fields: Vec::new(),
        unknown: UnknownFields::Reject,
    }
}

/// Object that keeps fields it does not declare.
pub fn loose_object() -> ObjectRule {
    ObjectRule {
        fields: Vec::new(),
        unknown: UnknownFields::Passthrough,
    }
}

pub fn tagged(tag: &'static str) -> TaggedUnion {
    TaggedUnion {
        tag,
        variants: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl Schema {
    /// Validate `value` and return it with defaults filled in.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let mut issues = Vec::new();
        let normalized = self.check(value, "", &mut issues);
        if issues.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Validate `value`, then decode the normalized value into `T`.
    pub fn parse<T: DeserializeOwned>(&self, value: &Value) -> Result<T, ValidationError> {
        let normalized = self.validate(value)?;
        serde_json::from_value(normalized)
            .map_err(|e| ValidationError::single("", format!("cannot decode value: {e}")))
    }

    fn check(&self, value: &Value, path: &str, issues: &mut Vec<ValidationIssue>) -> Value {
        let mut fail = |message: String| {
            issues.push(ValidationIssue {
                path: path.to_string(),
                message,
            })
        };

        match self {
            Schema::Any => {}
            Schema::String(rule) => match value.as_str() {
                Some(s) => {
                    if let Some(message) = rule.violation(s) {
                        fail(message);
                    }
                }
                None => fail(expected("string", value)),
            },
            Schema::Number(rule) => match value.as_f64() {
                Some(n) => {
                    if let Some(message) = rule.violation(n) {
                        fail(message);
                    }
                }
                None => fail(expected("number", value)),
            },
            Schema::Boolean => {
                if !value.is_boolean() {
                    fail(expected("boolean", value));
                }
            }
            Schema::Null => {
                if !value.is_null() {
                    fail(expected("null", value));
                }
            }
            Schema::Literal(lit) => {
                if value.as_str() != Some(*lit) {
                    fail(format!("expected \"{lit}\""));
                }
            }
            Schema::Enum(values) => {
                if !value.as_str().is_some_and(|s| values.iter().any(|v| *v == s)) {
                    fail(format!("expected one of: {}", values.join(", ")));
                }
            }
            Schema::Nullish(inner) => {
                if !value.is_null() {
                    return inner.check(value, path, issues);
                }
            }
            Schema::Array(rule) => {
                let Some(items) = value.as_array() else {
                    fail(expected("array", value));
                    return value.clone();
                };
                if let Some(min) = rule.min_items {
                    if !items.validate_length(Some(min as u64), None, None) {
                        fail(format!("must contain at least {min} item(s)"));
                    }
                }
                if let Some(max) = rule.max_items {
                    if !items.validate_length(None, Some(max as u64), None) {
                        fail(format!("must contain at most {max} item(s)"));
                    }
                }
                let normalized = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| rule.items.check(item, &format!("{path}[{i}]"), issues))
                    .collect();
                return Value::Array(normalized);
            }
            Schema::Object(rule) => return rule.check(value, path, issues),
            Schema::Tagged(union) => return union.check(value, path, issues),
        }
        value.clone()
    }
}

impl StringRule {
    /// Lengths count characters, not bytes.
    fn violation(&self, s: &str) -> Option<String> {
        if let Some(min) = self.min_len {
            if !s.validate_length(Some(min as u64), None, None) {
                return Some(format!("must contain at least {min} character(s)"));
            }
        }
        if let Some(max) = self.max_len {
            if !s.validate_length(None, Some(max as u64), None) {
                return Some(format!("must contain at most {max} character(s)"));
            }
        }
        match &self.pattern {
            Some((re, message)) if !s.validate_regex(re) => Some((*message).to_string()),
            _ => None,
        }
    }
}

impl NumberRule {
    fn violation(&self, n: f64) -> Option<String> {
        if self.integer && n.fract() != 0.0 {
            return Some("expected integer".into());
        }
        if let Some(min) = self.min {
            if !n.validate_range(Some(min), None, None, None) {
                return Some(format!("must be greater than or equal to {min}"));
            }
        }
        if let Some(max) = self.max {
            if !n.validate_range(None, Some(max), None, None) {
                return Some(format!("must be less than or equal to {max}"));
            }
        }
        None
    }
}
