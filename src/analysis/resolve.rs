// src/analysis/resolve.rs
//
// Ordered "first match wins" lookups over an untyped JSON value.

use serde_json::Value;

type Probe<'a, T> = Box<dyn Fn(&Value) -> Option<T> + 'a>;

struct Step<'a, T> {
    source: String,
    probe: Probe<'a, T>,
}

/// A value together with the name of the lookup that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub source: String,
    pub value: T,
}

/// Tries each registered lookup in order; the first one yielding a value wins.
pub struct Resolver<'a, T> {
    steps: Vec<Step<'a, T>>,
}

impl<'a, T> Default for Resolver<'a, T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<'a, T> Resolver<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(
        mut self,
        source: impl Into<String>,
        probe: impl Fn(&Value) -> Option<T> + 'a,
    ) -> Self {
        self.steps.push(Step {
            source: source.into(),
            probe: Box::new(probe),
        });
        self
    }

    pub fn resolve(&self, raw: &Value) -> Option<Resolved<T>> {
        self.steps.iter().find_map(|step| {
            (step.probe)(raw).map(|value| Resolved {
                source: step.source.clone(),
                value,
            })
        })
    }

    pub fn resolve_value(&self, raw: &Value) -> Option<T> {
        self.steps.iter().find_map(|step| (step.probe)(raw))
    }

    /// Lookup names in precedence order.
    pub fn sources(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.source.as_str()).collect()
    }
}

/// Walks object keys; `None` as soon as a segment is missing or not an object.
pub fn path<'v>(raw: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter().try_fold(raw, |node, key| node.as_object()?.get(*key))
}

/// A JSON number other than zero. Anything else is skipped.
pub fn truthy_number(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|n| n.is_finite() && *n != 0.0)
}

/// `{ "score": n }` objects yield `n`; bare values must themselves be numbers.
pub fn score_of(value: &Value) -> Option<f64> {
    match value {
        Value::Object(map) => map.get("score").and_then(truthy_number),
        other => truthy_number(other),
    }
}

pub fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A non-empty keyword list. Arrays keep their string entries, a plain
/// string is split on commas.
pub fn keyword_list(value: &Value) -> Option<Vec<String>> {
    let keywords: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(non_empty_str)
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_registered_match_wins() {
        let raw = json!({ "a": 1, "b": 2 });
        let resolver = Resolver::new()
            .then("missing", |v| path(v, &["zzz"]).and_then(truthy_number))
            .then("b", |v| path(v, &["b"]).and_then(truthy_number))
            .then("a", |v| path(v, &["a"]).and_then(truthy_number));

        let resolved = resolver.resolve(&raw).unwrap();
        assert_eq!(resolved.source, "b");
        assert_eq!(resolved.value, 2.0);
        assert_eq!(resolver.sources(), vec!["missing", "b", "a"]);
    }

    #[test]
    fn empty_resolver_yields_nothing() {
        let resolver: Resolver<f64> = Resolver::new();
        assert!(resolver.resolve_value(&json!({"a": 1})).is_none());
    }

    #[test]
    fn path_stops_at_non_objects() {
        let raw = json!({ "analysis": "text", "scores": { "x": { "score": 3 } } });
        assert_eq!(path(&raw, &["scores", "x", "score"]), Some(&json!(3)));
        assert!(path(&raw, &["analysis", "x"]).is_none());
        assert!(path(&json!([1, 2]), &["0"]).is_none());
    }

    #[test]
    fn only_non_zero_numbers_count() {
        assert_eq!(truthy_number(&json!(8.5)), Some(8.5));
        assert_eq!(truthy_number(&json!(0)), None);
        assert_eq!(truthy_number(&json!("8")), None);
        assert_eq!(truthy_number(&json!(true)), None);
        assert_eq!(truthy_number(&Value::Null), None);
    }

    #[test]
    fn score_of_unwraps_objects() {
        assert_eq!(score_of(&json!({ "score": 6 })), Some(6.0));
        assert_eq!(score_of(&json!({ "score": "6" })), None);
        assert_eq!(score_of(&json!({ "explanation": "x" })), None);
        assert_eq!(score_of(&json!(4.5)), Some(4.5));
    }

    #[test]
    fn keyword_lists_skip_empties() {
        assert_eq!(
            keyword_list(&json!(["must sell", "", 3, "relocating"])),
            Some(vec!["must sell".to_string(), "relocating".to_string()])
        );
        assert_eq!(
            keyword_list(&json!("value-add, prime location")),
            Some(vec!["value-add".to_string(), "prime location".to_string()])
        );
        assert_eq!(keyword_list(&json!([])), None);
        assert_eq!(keyword_list(&json!({})), None);
    }
}
