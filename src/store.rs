//! Owns the root schema document and lazily materializes [`Schema`] nodes, keyed by the
//! JSON-Pointer URI of the value each node was built from.
use crate::error::CompilationError;
use crate::paths;
use crate::schema::{compile_object, Schema};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// One cache slot: either reserved (compilation of that pointer is underway further up the call
/// stack) or finished and holding the compiled node.
enum Slot {
    InProgress,
    Done(Arc<Schema>),
}

/// A cache from pointer URI to compiled [`Schema`] node, backed by the original document.
///
/// `compile` is the only entry point a caller needs; `get` is exposed crate-internally so
/// [`crate::schema::compile_object`] can resolve the subschemas nested under its own keywords.
pub struct SchemaStore {
    root: Value,
    cache: RefCell<HashMap<String, Slot>>,
}

impl SchemaStore {
    /// Compile `root` into a schema tree rooted at `#`.
    pub fn compile(root: Value) -> Result<Arc<Schema>, CompilationError> {
        let store = SchemaStore {
            root,
            cache: RefCell::new(HashMap::new()),
        };
        store.get("#")
    }

    /// Resolve `pointer` to a compiled, cached [`Schema`] node.
    ///
    /// The cache reserves a pointer's slot with `Slot::InProgress` before recursing into its
    /// children, so a pointer reachable from more than one keyword is only ever built once (the
    /// second caller hits the cache and clones the finished `Arc` instead of recompiling), and a
    /// pointer that is reached again while its own compilation is still underway (only possible
    /// for a future keyword that can reference its own pointer, e.g. a local `$ref`) surfaces as
    /// a clean [`CompilationError::CyclicSchema`] instead of infinite recursion or a stale node.
    /// The keyword set this crate implements never actually reaches that path on its own: every
    /// subschema pointer is strictly longer than its parent's, since every keyword that nests a
    /// schema does so by structural containment.
    pub(crate) fn get(&self, pointer: &str) -> Result<Arc<Schema>, CompilationError> {
        match self.cache.borrow().get(pointer) {
            Some(Slot::Done(existing)) => return Ok(Arc::clone(existing)),
            Some(Slot::InProgress) => {
                return Err(CompilationError::CyclicSchema(pointer.to_string()))
            }
            None => {}
        }
        self.cache
            .borrow_mut()
            .insert(pointer.to_string(), Slot::InProgress);

        let value = paths::resolve(&self.root, pointer)
            .ok_or_else(|| CompilationError::PointerNotFound(pointer.to_string()))?;
        let schema = match value {
            Value::Bool(flag) => Schema::Boolean(*flag),
            Value::Object(map) => Schema::Object(compile_object(map, pointer, self)?),
            _ => return Err(CompilationError::SchemaLoadError(pointer.to_string())),
        };
        let schema = Arc::new(schema);
        self.cache
            .borrow_mut()
            .insert(pointer.to_string(), Slot::Done(Arc::clone(&schema)));
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compile_boolean_schemas() {
        assert!(matches!(*SchemaStore::compile(json!(true)).unwrap(), Schema::Boolean(true)));
        assert!(matches!(*SchemaStore::compile(json!(false)).unwrap(), Schema::Boolean(false)));
    }

    #[test]
    fn compile_rejects_non_schema_value() {
        let err = SchemaStore::compile(json!(42)).unwrap_err();
        assert_eq!(err, CompilationError::SchemaLoadError("#".to_string()));
    }

    #[test]
    fn shared_definitions_pointer_is_compiled_once() {
        let root = json!({
            "properties": {
                "a": {"$comment": "unused", "minimum": 1},
                "b": {"minimum": 1}
            }
        });
        // Two distinct pointers, two distinct nodes: the cache dedups identical pointers, not
        // structurally-equal-but-distinct subschemas.
        let schema = SchemaStore::compile(root).unwrap();
        if let Schema::Object(object) = &*schema {
            assert_eq!(object.properties.len(), 2);
        } else {
            panic!("expected object schema");
        }
    }

    #[test]
    fn bad_pattern_surfaces_as_compilation_error() {
        let root = json!({"patternProperties": {"(": {}}});
        let err = SchemaStore::compile(root).unwrap_err();
        assert!(matches!(err, CompilationError::BadPattern(_)));
    }

    #[test]
    fn missing_definitions_pointer_is_unreachable_but_tolerated() {
        // `definitions` is purely structural: it is never itself resolved unless some keyword
        // points into it, so an invalid entry under `definitions` does not fail compilation.
        let root = json!({"definitions": {"a": 123}});
        assert!(SchemaStore::compile(root).is_ok());
    }
}
