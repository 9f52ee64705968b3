//! The schema node tree: a [`Schema`] is either a `Boolean` schema (`true`/`false`) or an
//! `Object` schema holding the union of active keyword constraints.
//!
//! Construction lives here (`ObjectSchema::compile`), driven by [`crate::store::SchemaStore`],
//! which resolves each subschema's pointer to a JSON value before handing it to `compile`.
//! Validation is a pure, read-only walk of the tree that never mutates it.
use crate::error::{Sink, ValidationError, ValidationErrorKind};
use crate::keywords::{array_, combinators, conditional, equality, numeric, object_, string_};
use crate::pattern::PatternMatcher;
use crate::paths;
use crate::store::SchemaStore;
use crate::type_tag::TypeTag;
use crate::CompilationError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// A compiled schema node. Immutable once constructed.
#[derive(Debug)]
pub enum Schema {
    /// `true` accepts every instance; `false` rejects every instance.
    Boolean(bool),
    /// The object form: a bundle of whichever keywords were present at this pointer.
    Object(ObjectSchema),
}

/// The list-form of `items`: a single schema applied to every element, or a tuple of schemas
/// applied positionally.
#[derive(Debug)]
pub(crate) enum Items {
    Single(Arc<Schema>),
    Tuple(Vec<Arc<Schema>>),
}

/// One entry of `dependencies`: either a list of sibling properties that must also be present,
/// or a schema the whole object must additionally validate against.
#[derive(Debug)]
pub(crate) enum Dependency {
    Required(Vec<String>),
    Schema(Arc<Schema>),
}

/// The object variant of [`Schema`]. Every field is `Option`/empty-collection when the
/// corresponding keyword was absent from the schema document — absence disables the check
/// entirely, it is not the same as a permissive default.
#[derive(Debug, Default)]
pub struct ObjectSchema {
    pub(crate) types: Option<Vec<TypeTag>>,

    pub(crate) minimum: Option<f64>,
    pub(crate) maximum: Option<f64>,
    pub(crate) exclusive_minimum: Option<f64>,
    pub(crate) exclusive_maximum: Option<f64>,
    pub(crate) multiple_of: Option<f64>,

    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,

    pub(crate) items: Option<Items>,
    pub(crate) additional_items: Option<Arc<Schema>>,
    pub(crate) min_items: Option<usize>,
    pub(crate) max_items: Option<usize>,
    pub(crate) contains: Option<Arc<Schema>>,

    pub(crate) properties: HashMap<String, Arc<Schema>>,
    pub(crate) pattern_properties: Vec<(PatternMatcher, Arc<Schema>)>,
    pub(crate) additional_properties: Option<Arc<Schema>>,
    pub(crate) required: Vec<String>,
    pub(crate) min_properties: Option<usize>,
    pub(crate) dependencies: Vec<(String, Dependency)>,

    pub(crate) all_of: Vec<Arc<Schema>>,
    pub(crate) any_of: Vec<Arc<Schema>>,
    pub(crate) one_of: Vec<Arc<Schema>>,
    pub(crate) if_: Option<Arc<Schema>>,
    pub(crate) then: Option<Arc<Schema>>,
    pub(crate) else_: Option<Arc<Schema>>,

    pub(crate) const_: Option<Value>,
    pub(crate) enum_: Option<Vec<Value>>,
}

impl Schema {
    /// Validate `instance`, located at `pointer` in the overall instance document, pushing
    /// every failure it produces into `sink`.
    pub(crate) fn validate(&self, instance: &Value, pointer: &str, sink: &mut Sink) {
        match self {
            Schema::Boolean(true) => {}
            Schema::Boolean(false) => {
                sink.push(ValidationError::new(pointer, ValidationErrorKind::FalseSchema));
            }
            Schema::Object(object) => object.validate(instance, pointer, sink),
        }
    }
}

impl ObjectSchema {
    fn type_check(&self, candidates: &[TypeTag], pointer: &str, sink: &mut Sink) {
        if let Some(declared) = &self.types {
            if !candidates.iter().any(|tag| declared.contains(tag)) {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::TypeMismatch {
                        expected: declared.clone(),
                    },
                ));
            }
        }
    }

    fn validate(&self, instance: &Value, pointer: &str, sink: &mut Sink) {
        let tags = TypeTag::classify(instance);
        match instance {
            Value::Number(number) => {
                self.type_check(&tags, pointer, sink);
                if let Some(value) = number.as_f64() {
                    if !value.is_nan() {
                        self.check_numeric(value, pointer, sink);
                    }
                }
            }
            Value::Bool(_) => self.type_check(&[TypeTag::Boolean], pointer, sink),
            Value::String(s) => {
                self.type_check(&[TypeTag::String], pointer, sink);
                self.check_string(s, pointer, sink);
            }
            Value::Array(items) => {
                self.type_check(&[TypeTag::Array], pointer, sink);
                self.check_array(items, pointer, sink);
            }
            Value::Object(map) => {
                self.type_check(&[TypeTag::Object], pointer, sink);
                self.check_object(map, pointer, sink);
            }
            Value::Null => self.type_check(&[TypeTag::Null], pointer, sink),
        }

        if let Some(expected) = &self.const_ {
            if !equality::deep_equal(instance, expected) {
                sink.push(ValidationError::new(pointer, ValidationErrorKind::ConstMismatch));
            }
        }
        if let Some(options) = &self.enum_ {
            if !options.iter().any(|option| equality::deep_equal(instance, option)) {
                sink.push(ValidationError::new(pointer, ValidationErrorKind::EnumMismatch));
            }
        }

        if let Some(if_) = &self.if_ {
            conditional::check_if_then_else(
                if_,
                self.then.as_ref(),
                self.else_.as_ref(),
                instance,
                pointer,
                sink,
            );
        }

        combinators::check_all_of(&self.all_of, instance, pointer, sink);
        if !self.any_of.is_empty() {
            combinators::check_any_of(&self.any_of, instance, pointer, sink);
        }
        if !self.one_of.is_empty() {
            combinators::check_one_of(&self.one_of, instance, pointer, sink);
        }
    }

    fn check_numeric(&self, value: f64, pointer: &str, sink: &mut Sink) {
        if let Some(minimum) = self.minimum {
            if value < minimum {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::RangeViolation(format!(
                        "{} is less than the minimum of {}",
                        value, minimum
                    )),
                ));
            }
        }
        if let Some(limit) = self.exclusive_minimum {
            if value <= limit {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::RangeViolation(format!(
                        "{} is less than or equal to the exclusive minimum of {}",
                        value, limit
                    )),
                ));
            }
        }
        if let Some(maximum) = self.maximum {
            if value > maximum {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::RangeViolation(format!(
                        "{} is greater than the maximum of {}",
                        value, maximum
                    )),
                ));
            }
        }
        if let Some(limit) = self.exclusive_maximum {
            if value >= limit {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::RangeViolation(format!(
                        "{} is greater than or equal to the exclusive maximum of {}",
                        value, limit
                    )),
                ));
            }
        }
        if let Some(multiple_of) = self.multiple_of {
            if !numeric::is_multiple_of(value, multiple_of) {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::MultipleOfViolation { multiple_of },
                ));
            }
        }
    }

    fn check_string(&self, value: &str, pointer: &str, sink: &mut Sink) {
        let length = string_::code_point_length(value);
        if let Some(min_length) = self.min_length {
            if length < min_length {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::RangeViolation(format!(
                        "string of length {} is shorter than the minimum of {}",
                        length, min_length
                    )),
                ));
            }
        }
        if let Some(max_length) = self.max_length {
            if length > max_length {
                sink.push(ValidationError::new(
                    pointer,
                    ValidationErrorKind::RangeViolation(format!(
                        "string of length {} is longer than the maximum of {}",
                        length, max_length
                    )),
                ));
            }
        }
    }

    fn check_array(&self, items: &[Value], pointer: &str, sink: &mut Sink) {
        array_::check_array(
            self.items.as_ref(),
            self.additional_items.as_ref(),
            self.min_items,
            self.max_items,
            self.contains.as_ref(),
            items,
            pointer,
            sink,
        );
    }

    fn check_object(&self, instance: &Map<String, Value>, pointer: &str, sink: &mut Sink) {
        object_::check_object(
            &self.properties,
            &self.pattern_properties,
            self.additional_properties.as_ref(),
            &self.required,
            self.min_properties,
            &self.dependencies,
            instance,
            pointer,
            sink,
        );
    }
}

/// Construct an [`ObjectSchema`] from the raw keyword map at `pointer`, resolving every
/// subschema keyword through `store` so that child nodes are already interned by the time this
/// call returns.
pub(crate) fn compile_object(
    map: &Map<String, Value>,
    pointer: &str,
    store: &SchemaStore,
) -> Result<ObjectSchema, CompilationError> {
    let mut schema = ObjectSchema::default();

    if let Some(type_value) = map.get("type") {
        schema.types = Some(compile_types(type_value)?);
    }

    schema.minimum = map.get("minimum").and_then(Value::as_f64);
    schema.maximum = map.get("maximum").and_then(Value::as_f64);
    schema.exclusive_minimum = map.get("exclusiveMinimum").and_then(Value::as_f64);
    schema.exclusive_maximum = map.get("exclusiveMaximum").and_then(Value::as_f64);
    schema.multiple_of = map.get("multipleOf").and_then(Value::as_f64);

    schema.min_length = map.get("minLength").and_then(non_negative_integer);
    schema.max_length = map.get("maxLength").and_then(non_negative_integer);

    if let Some(items_value) = map.get("items") {
        schema.items = Some(compile_items(items_value, pointer, store)?);
    }
    if map.contains_key("additionalItems") {
        schema.additional_items = Some(store.get(&paths::append(pointer, "additionalItems"))?);
    }
    schema.min_items = map.get("minItems").and_then(non_negative_integer);
    schema.max_items = map.get("maxItems").and_then(non_negative_integer);
    if map.contains_key("contains") {
        schema.contains = Some(store.get(&paths::append(pointer, "contains"))?);
    }

    if let Some(Value::Object(properties)) = map.get("properties") {
        let mut compiled = HashMap::with_capacity(properties.len());
        let properties_pointer = paths::append(pointer, "properties");
        for name in properties.keys() {
            let child = store.get(&paths::append(&properties_pointer, name))?;
            compiled.insert(name.clone(), child);
        }
        schema.properties = compiled;
    }
    if let Some(Value::Object(pattern_properties)) = map.get("patternProperties") {
        let mut compiled = Vec::with_capacity(pattern_properties.len());
        let pattern_pointer = paths::append(pointer, "patternProperties");
        for pattern in pattern_properties.keys() {
            let matcher = PatternMatcher::compile(pattern)?;
            let child = store.get(&paths::append(&pattern_pointer, pattern))?;
            compiled.push((matcher, child));
        }
        schema.pattern_properties = compiled;
    }
    if map.contains_key("additionalProperties") {
        schema.additional_properties =
            Some(store.get(&paths::append(pointer, "additionalProperties"))?);
    }
    if let Some(Value::Array(required)) = map.get("required") {
        schema.required = required
            .iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
    }
    schema.min_properties = map.get("minProperties").and_then(non_negative_integer);
    if let Some(Value::Object(dependencies)) = map.get("dependencies") {
        let dependencies_pointer = paths::append(pointer, "dependencies");
        let mut compiled = Vec::with_capacity(dependencies.len());
        for (name, value) in dependencies {
            let dependency = match value {
                Value::Array(names) => Dependency::Required(
                    names
                        .iter()
                        .filter_map(|n| n.as_str().map(str::to_string))
                        .collect(),
                ),
                _ => Dependency::Schema(store.get(&paths::append(&dependencies_pointer, name))?),
            };
            compiled.push((name.clone(), dependency));
        }
        schema.dependencies = compiled;
    }

    if let Some(Value::Array(all_of)) = map.get("allOf") {
        schema.all_of = compile_list(all_of.len(), pointer, "allOf", store)?;
    }
    if let Some(Value::Array(any_of)) = map.get("anyOf") {
        schema.any_of = compile_list(any_of.len(), pointer, "anyOf", store)?;
    }
    if let Some(Value::Array(one_of)) = map.get("oneOf") {
        schema.one_of = compile_list(one_of.len(), pointer, "oneOf", store)?;
    }
    if map.contains_key("if") {
        schema.if_ = Some(store.get(&paths::append(pointer, "if"))?);
    }
    if map.contains_key("then") {
        schema.then = Some(store.get(&paths::append(pointer, "then"))?);
    }
    if map.contains_key("else") {
        schema.else_ = Some(store.get(&paths::append(pointer, "else"))?);
    }

    if let Some(value) = map.get("const") {
        schema.const_ = Some(value.clone());
    }
    if let Some(Value::Array(options)) = map.get("enum") {
        schema.enum_ = Some(options.clone());
    }

    Ok(schema)
}

fn compile_list(
    len: usize,
    pointer: &str,
    keyword: &str,
    store: &SchemaStore,
) -> Result<Vec<Arc<Schema>>, CompilationError> {
    let base = paths::append(pointer, keyword);
    let mut compiled = Vec::with_capacity(len);
    for index in 0..len {
        compiled.push(store.get(&paths::append(&base, &index.to_string()))?);
    }
    Ok(compiled)
}

fn compile_items(
    items_value: &Value,
    pointer: &str,
    store: &SchemaStore,
) -> Result<Items, CompilationError> {
    match items_value {
        Value::Array(tuple) => Ok(Items::Tuple(compile_list(tuple.len(), pointer, "items", store)?)),
        _ => Ok(Items::Single(store.get(&paths::append(pointer, "items"))?)),
    }
}

/// Read a keyword value as a non-negative integer bound (`minLength`, `maxItems`, ...).
///
/// Accepts both an integer-tagged number and an integral float (`3.0`), mirroring
/// [`crate::type_tag::is_integer`]'s definition of "integer" as "zero fractional part" rather
/// than a storage-tag distinction.
fn non_negative_integer(value: &Value) -> Option<usize> {
    if let Some(v) = value.as_u64() {
        return Some(v as usize);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 {
        Some(f as usize)
    } else {
        None
    }
}

fn compile_types(type_value: &Value) -> Result<Vec<TypeTag>, CompilationError> {
    match type_value {
        Value::String(name) => TypeTag::from_name(name)
            .map(|tag| vec![tag])
            .ok_or_else(|| CompilationError::SchemaLoadError(format!("unknown type '{}'", name))),
        Value::Array(names) => names
            .iter()
            .map(|value| match value.as_str() {
                Some(name) => TypeTag::from_name(name).ok_or_else(|| {
                    CompilationError::SchemaLoadError(format!("unknown type '{}'", name))
                }),
                None => Err(CompilationError::SchemaLoadError(
                    "type array must contain only strings".to_string(),
                )),
            })
            .collect(),
        _ => Err(CompilationError::SchemaLoadError(
            "'type' must be a string or an array of strings".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::store::SchemaStore;
    use serde_json::json;

    #[test]
    fn integer_bounds_accept_an_integral_float_literal() {
        let schema = SchemaStore::compile(json!({"minLength": 3.0})).unwrap();
        assert_eq!(crate::validate(&schema, &json!("a")).len(), 1);
        assert!(crate::validate(&schema, &json!("abc")).is_empty());
    }

    #[test]
    fn non_integer_float_bound_is_rejected_at_compile_time() {
        let schema = SchemaStore::compile(json!({"minItems": 2.5})).unwrap();
        // `2.5` isn't a whole number, so the bound never takes effect — it's treated the same
        // as `minItems` being absent rather than rounded.
        assert!(crate::validate(&schema, &json!([])).is_empty());
    }
}
