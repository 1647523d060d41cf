//! Plain JSON records

use serde_json::Value;

use super::{Entry, Record};

/// Split a dotted path with optional bracketed indices into segments.
///
/// `"a.b"`, `"a[0].b"` and `"a.0.b"` all address the same nested value.
fn path_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        let mut rest = part;
        match rest.find('[') {
            Some(0) => {}
            Some(open) => {
                segments.push(&rest[..open]);
                rest = &rest[open..];
            }
            None => {
                segments.push(rest);
                continue;
            }
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            match stripped.find(']') {
                Some(close) => {
                    segments.push(&stripped[..close]);
                    rest = &stripped[close + 1..];
                }
                None => {
                    segments.push(rest);
                    rest = "";
                }
            }
        }
        if !rest.is_empty() {
            segments.push(rest);
        }
    }
    segments
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn walk<'a, 's>(value: &'a Value, segments: impl IntoIterator<Item = &'s str>) -> Entry<'a> {
    let mut current = value;
    for segment in segments {
        match child(current, segment) {
            Some(next) => current = next,
            None => return Entry::Missing,
        }
    }
    Entry::Value(current)
}

impl Record for Value {
    fn get(&self, path: &str) -> Entry<'_> {
        walk(self, path_segments(path))
    }

    fn get_in(&self, path: &[&str]) -> Entry<'_> {
        walk(self, path.iter().copied())
    }

    fn values(&self) -> Box<dyn Iterator<Item = Entry<'_>> + '_> {
        match self {
            Value::Object(map) => Box::new(map.values().map(Entry::Value)),
            Value::Array(items) => Box::new(items.iter().map(Entry::Value)),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}
