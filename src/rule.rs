//! Leaf validation rules.
//!
//! A [`Rule`] declares one type plus optional constraints and checks a single
//! value against them. Rules are configured through a consuming builder and
//! are read-only once placed in a [`Schema`](crate::Schema).

use regex::Regex;
use serde_json::{Number, Value};
use stillwater::Validation;

use crate::config::ValidationContext;
use crate::error::{ErrorAggregator, ErrorKind, SchemaFault, Violation, Violations};
use crate::path::Path;
use crate::schema::SchemaNode;
use crate::types::TypeTag;
use crate::validation::collect;

/// Outcome of a single check: the outer `Result` carries schema faults, the
/// inner `Validation` carries data violations.
pub type CheckOutcome = Result<Validation<(), Violations>, SchemaFault>;

/// A leaf schema node: one declared type and its constraints.
///
/// None of the builder methods inspect their argument, so contradictory
/// settings (`min(5).max(3)`) are accepted and simply match nothing.
///
/// # Example
///
/// ```rust
/// use rulebook::{Path, Rule};
/// use serde_json::json;
///
/// let rule = Rule::string().required().min(2).one_of(["ab", "abc"]);
///
/// let ctx = Default::default();
/// assert!(rule.check(Some(&json!("ab")), &Path::root(), &ctx).unwrap().is_success());
/// assert!(rule.check(None, &Path::root(), &ctx).unwrap().is_failure());
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    declared: TypeTag,
    required: bool,
    nullable: bool,
    min: Option<Number>,
    max: Option<Number>,
    len: Option<usize>,
    one_of: Option<Vec<Value>>,
    pattern: Option<Regex>,
    element_type: Option<TypeTag>,
    schema: Option<Box<SchemaNode>>,
}

impl Rule {
    /// Creates an unconstrained rule for `declared`.
    pub fn new(declared: TypeTag) -> Self {
        Self {
            declared,
            required: false,
            nullable: false,
            min: None,
            max: None,
            len: None,
            one_of: None,
            pattern: None,
            element_type: None,
            schema: None,
        }
    }

    pub fn string() -> Self {
        Self::new(TypeTag::String)
    }

    pub fn number() -> Self {
        Self::new(TypeTag::Number)
    }

    pub fn boolean() -> Self {
        Self::new(TypeTag::Boolean)
    }

    pub fn object() -> Self {
        Self::new(TypeTag::Object)
    }

    pub fn array() -> Self {
        Self::new(TypeTag::Array)
    }

    /// The value must be present.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// `null` is accepted in place of a value of the declared type.
    ///
    /// On a required rule `null` also counts as present.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Lower bound: string/array length, or numeric value.
    pub fn min(mut self, bound: impl Into<Number>) -> Self {
        self.min = Some(bound.into());
        self
    }

    /// Upper bound: string/array length, or numeric value.
    pub fn max(mut self, bound: impl Into<Number>) -> Self {
        self.max = Some(bound.into());
        self
    }

    /// Exact string/array length.
    pub fn len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    /// Allowed values. On arrays every element must be allowed.
    pub fn one_of<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Compiles `pattern` and requires strings to match it.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.matching(Regex::new(pattern)?))
    }

    /// Requires strings to match an already compiled regex.
    pub fn matching(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
        self
    }

    /// Required type of every array element.
    pub fn type_of(mut self, element_type: TypeTag) -> Self {
        self.element_type = Some(element_type);
        self
    }

    /// Nested schema applied to the rule's own value.
    ///
    /// On arrays, an ordered node validates the array as a positional tuple;
    /// a keyed node or a single rule validates each element independently.
    pub fn schema(mut self, node: impl Into<SchemaNode>) -> Self {
        self.schema = Some(Box::new(node.into()));
        self
    }

    pub fn declared_type(&self) -> TypeTag {
        self.declared
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn min_bound(&self) -> Option<&Number> {
        self.min.as_ref()
    }

    pub fn max_bound(&self) -> Option<&Number> {
        self.max.as_ref()
    }

    pub fn exact_len(&self) -> Option<usize> {
        self.len
    }

    pub fn allowed(&self) -> Option<&[Value]> {
        self.one_of.as_deref()
    }

    /// Source text of the pattern, if any.
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    pub fn element_type(&self) -> Option<TypeTag> {
        self.element_type
    }

    pub fn nested_schema(&self) -> Option<&SchemaNode> {
        self.schema.as_deref()
    }

    /// Checks `value` (absent when `None`) found at `path`.
    ///
    /// Checks stop at the first failing constraint of this rule. Violations
    /// from a nested schema are all reported, lifted under `path`.
    ///
    /// # Errors
    ///
    /// Only schema faults raised while walking a nested schema end up in
    /// `Err`; every data problem is a `Validation::Failure`.
    pub fn check(&self, value: Option<&Value>, path: &Path, ctx: &ValidationContext) -> CheckOutcome {
        let value = match (value, self.required, self.nullable) {
            (None, false, _) => return Ok(pass()),
            // null on a nullable rule also satisfies `required`
            (Some(Value::Null), _, true) => return Ok(pass()),
            (None, true, _) => return Ok(fail(Violation::new(ErrorKind::Required, path.clone()))),
            (Some(value), _, _) => value,
        };

        let actual = TypeTag::of(value);
        if actual != self.declared {
            let kind = if self.nullable {
                ErrorKind::TypeMismatchOrNull
            } else {
                ErrorKind::TypeMismatch
            };
            return Ok(fail(
                Violation::new(kind, path.clone())
                    .with_expected(self.declared)
                    .with_actual(actual),
            ));
        }

        match value {
            Value::String(s) => Ok(verdict(self.check_string(s, value, path, ctx))),
            Value::Number(n) => Ok(verdict(self.check_number(n, value, path))),
            Value::Object(_) => self.check_object(value, path, ctx),
            Value::Array(items) => self.check_array(items, value, path, ctx),
            Value::Bool(_) | Value::Null => Ok(pass()),
        }
    }

    fn check_string(
        &self,
        s: &str,
        value: &Value,
        path: &Path,
        ctx: &ValidationContext,
    ) -> Option<Violation> {
        if let Some(violation) = self.check_length(s.chars().count(), path) {
            return Some(violation);
        }
        if let Some(violation) = self.check_membership(value, path) {
            return Some(violation);
        }
        match &self.pattern {
            Some(regex) if !regex.is_match(s) => Some(
                Violation::new(ctx.config().pattern_kind(), path.clone())
                    .with_expected(regex.as_str())
                    .with_actual(s),
            ),
            _ => None,
        }
    }

    fn check_number(&self, n: &Number, value: &Value, path: &Path) -> Option<Violation> {
        let n = as_f64(n);
        if let Some(min) = self.min.as_ref().filter(|min| n < as_f64(min)) {
            return Some(
                Violation::new(ErrorKind::ValueGt, path.clone())
                    .with_expected(min.clone())
                    .with_actual(value.clone()),
            );
        }
        if let Some(max) = self.max.as_ref().filter(|max| n > as_f64(max)) {
            return Some(
                Violation::new(ErrorKind::ValueLt, path.clone())
                    .with_expected(max.clone())
                    .with_actual(value.clone()),
            );
        }
        self.check_membership(value, path)
    }

    fn check_object(&self, value: &Value, path: &Path, ctx: &ValidationContext) -> CheckOutcome {
        let Some(nested) = self.nested_schema() else {
            return Ok(pass());
        };
        let violations = collect(nested, Some(value), ctx)?;
        Ok(match Violations::try_from_vec(violations) {
            Some(violations) => Validation::Failure(ErrorAggregator::lift(path, violations)),
            None => pass(),
        })
    }

    fn check_array(
        &self,
        items: &[Value],
        value: &Value,
        path: &Path,
        ctx: &ValidationContext,
    ) -> CheckOutcome {
        if let Some(violation) = self.check_length(items.len(), path) {
            return Ok(fail(violation));
        }

        if let Some(allowed) = &self.one_of {
            if let Some(item) = items.iter().find(|item| !contains(allowed, item)) {
                return Ok(fail(
                    Violation::new(ErrorKind::ValueOneOf, path.clone())
                        .with_expected(allowed.clone())
                        .with_actual(item.clone()),
                ));
            }
        }

        if let Some(expected) = self.element_type {
            if let Some(actual) = items.iter().map(TypeTag::of).find(|tag| *tag != expected) {
                return Ok(fail(
                    Violation::new(ErrorKind::TypeMismatchOneOf, path.clone())
                        .with_expected(expected)
                        .with_actual(actual),
                ));
            }
        }

        let Some(nested) = self.nested_schema() else {
            return Ok(pass());
        };

        let mut lifted: Vec<Violation> = Vec::new();
        match nested {
            SchemaNode::Ordered(_) => {
                if let Some(v) = Violations::try_from_vec(collect(nested, Some(value), ctx)?) {
                    lifted.extend(ErrorAggregator::lift(path, v));
                }
            }
            SchemaNode::Keyed(_) | SchemaNode::Rule(_) => {
                for (index, item) in items.iter().enumerate() {
                    if let Some(v) = Violations::try_from_vec(collect(nested, Some(item), ctx)?) {
                        lifted.extend(ErrorAggregator::lift(&path.push_index(index), v));
                    }
                }
            }
        }

        Ok(match Violations::try_from_vec(lifted) {
            Some(violations) => Validation::Failure(violations),
            None => pass(),
        })
    }

    /// Length bounds shared by strings and arrays.
    fn check_length(&self, len: usize, path: &Path) -> Option<Violation> {
        let measured = len as f64;
        if let Some(min) = self.min.as_ref().filter(|min| measured < as_f64(min)) {
            return Some(
                Violation::new(ErrorKind::LengthGt, path.clone())
                    .with_expected(min.clone())
                    .with_actual(len),
            );
        }
        if let Some(max) = self.max.as_ref().filter(|max| measured > as_f64(max)) {
            return Some(
                Violation::new(ErrorKind::LengthLt, path.clone())
                    .with_expected(max.clone())
                    .with_actual(len),
            );
        }
        match self.len {
            Some(exact) if exact != len => Some(
                Violation::new(ErrorKind::LengthEq, path.clone())
                    .with_expected(exact)
                    .with_actual(len),
            ),
            _ => None,
        }
    }

    fn check_membership(&self, value: &Value, path: &Path) -> Option<Violation> {
        match &self.one_of {
            Some(allowed) if !contains(allowed, value) => Some(
                Violation::new(ErrorKind::ValueOneOf, path.clone())
                    .with_expected(allowed.clone())
                    .with_actual(value.clone()),
            ),
            _ => None,
        }
    }
}

impl From<TypeTag> for Rule {
    fn from(declared: TypeTag) -> Self {
        Rule::new(declared)
    }
}

fn pass() -> Validation<(), Violations> {
    Validation::Success(())
}

fn fail(violation: Violation) -> Validation<(), Violations> {
    Validation::Failure(Violations::single(violation))
}

fn verdict(violation: Option<Violation>) -> Validation<(), Violations> {
    violation.map_or_else(pass, fail)
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// Membership with numeric equality, so `1` and `1.0` are the same value.
fn contains(allowed: &[Value], value: &Value) -> bool {
    allowed.iter().any(|candidate| match (candidate, value) {
        (Value::Number(a), Value::Number(b)) => as_f64(a) == as_f64(b),
        _ => candidate == value,
    })
}
