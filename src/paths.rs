//! JSON-Pointer URI manipulation (RFC 6901 subset used for schema and instance pointers).
use serde_json::Value;

/// Escape a single pointer segment: `~` becomes `~0`, `/` becomes `~1`.
fn escape(segment: &str) -> String {
    if segment.contains('~') || segment.contains('/') {
        segment.replace('~', "~0").replace('/', "~1")
    } else {
        segment.to_string()
    }
}

/// Append a segment to a pointer URI, returning the child pointer.
///
/// ```ignore
/// assert_eq!(append("#/a", "b"), "#/a/b");
/// assert_eq!(append("#", "foo/bar"), "#/foo~1bar");
/// ```
pub(crate) fn append(base: &str, segment: &str) -> String {
    format!("{}/{}", base, escape(segment))
}

/// Resolve a pointer URI (`#/a/b`) against a root JSON value.
///
/// Numeric segments index into arrays; any other segment indexes into an object. The empty
/// segment (`#/`) refers to the key `""`. Fails with `None` if any segment along the way is
/// missing or indexes the wrong kind of container.
pub(crate) fn resolve<'a>(root: &'a Value, uri: &str) -> Option<&'a Value> {
    let rest = uri.strip_prefix('#')?;
    if rest.is_empty() {
        return Some(root);
    }
    let rest = rest.strip_prefix('/')?;
    let mut target = root;
    for raw in rest.split('/') {
        let token = raw.replace("~1", "/").replace("~0", "~");
        target = match target {
            Value::Object(map) => map.get(&token)?,
            Value::Array(items) => {
                let index: usize = token.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn append_escapes_tilde_and_slash() {
        assert_eq!(append("#/definitions", "a~b"), "#/definitions/a~0b");
        assert_eq!(append("#", "a/b"), "#/a~1b");
    }

    #[test]
    fn resolve_root() {
        let root = json!({"a": 1});
        assert_eq!(resolve(&root, "#"), Some(&root));
    }

    #[test]
    fn resolve_nested_object_and_array() {
        let root = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(resolve(&root, "#/a/b/1"), Some(&json!(2)));
    }

    #[test]
    fn resolve_empty_key_segment() {
        let root = json!({"": {"x": 1}});
        assert_eq!(resolve(&root, "#//x"), Some(&json!(1)));
    }

    #[test]
    fn resolve_missing_segment_fails() {
        let root = json!({"a": 1});
        assert_eq!(resolve(&root, "#/b"), None);
    }

    #[test]
    fn resolve_escaped_segment() {
        let root = json!({"a/b": 1});
        assert_eq!(resolve(&root, "#/a~1b"), Some(&json!(1)));
    }
}
