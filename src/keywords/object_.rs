//! `properties`, `patternProperties`, `additionalProperties`, `required`, `minProperties`,
//! `dependencies`.
use crate::error::{Sink, ValidationError, ValidationErrorKind};
use crate::pattern::PatternMatcher;
use crate::paths;
use crate::schema::{Dependency, Schema};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

#[allow(clippy::too_many_arguments)]
pub(crate) fn check_object(
    properties: &std::collections::HashMap<String, Arc<Schema>>,
    pattern_properties: &[(PatternMatcher, Arc<Schema>)],
    additional_properties: Option<&Arc<Schema>>,
    required: &[String],
    min_properties: Option<usize>,
    dependencies: &[(String, Dependency)],
    instance: &Map<String, Value>,
    pointer: &str,
    sink: &mut Sink,
) {
    if let Some(min_properties) = min_properties {
        if instance.len() < min_properties {
            sink.push(ValidationError::new(
                pointer,
                ValidationErrorKind::RangeViolation(format!(
                    "object has {} propert(y/ies), fewer than the minimum of {}",
                    instance.len(),
                    min_properties
                )),
            ));
        }
    }

    let mut matched: HashSet<&str> = HashSet::new();
    for (name, value) in instance {
        let child_pointer = paths::append(pointer, name);
        let mut was_matched = false;
        if let Some(schema) = properties.get(name) {
            schema.validate(value, &child_pointer, sink);
            was_matched = true;
        }
        for (pattern, schema) in pattern_properties {
            if pattern.matches(name) {
                schema.validate(value, &child_pointer, sink);
                was_matched = true;
            }
        }
        if was_matched {
            matched.insert(name.as_str());
        }
    }
    if let Some(additional) = additional_properties {
        for (name, value) in instance {
            if !matched.contains(name.as_str()) {
                let child_pointer = paths::append(pointer, name);
                additional.validate(value, &child_pointer, sink);
            }
        }
    }

    for name in required {
        if !instance.contains_key(name) {
            sink.push(ValidationError::new(
                pointer,
                ValidationErrorKind::MissingRequired {
                    property: name.clone(),
                },
            ));
        }
    }

    for (name, dependency) in dependencies {
        if !instance.contains_key(name) {
            continue;
        }
        match dependency {
            Dependency::Required(names) => {
                for dependent in names {
                    if !instance.contains_key(dependent) {
                        sink.push(ValidationError::new(
                            pointer,
                            ValidationErrorKind::DependencyUnmet {
                                property: name.clone(),
                            },
                        ));
                    }
                }
            }
            Dependency::Schema(schema) => {
                schema.validate(&Value::Object(instance.clone()), pointer, sink);
            }
        }
    }
}
