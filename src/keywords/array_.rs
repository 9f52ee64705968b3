//! `items`, `additionalItems`, `minItems`, `maxItems`, `contains`.
use crate::error::{Sink, ValidationError, ValidationErrorKind};
use crate::schema::{Items, Schema};
use serde_json::Value;
use std::sync::Arc;

#[allow(clippy::too_many_arguments)]
pub(crate) fn check_array(
    items: Option<&Items>,
    additional_items: Option<&Arc<Schema>>,
    min_items: Option<usize>,
    max_items: Option<usize>,
    contains: Option<&Arc<Schema>>,
    instance: &[Value],
    pointer: &str,
    sink: &mut Sink,
) {
    if let Some(min_items) = min_items {
        if instance.len() < min_items {
            sink.push(ValidationError::new(
                pointer,
                ValidationErrorKind::RangeViolation(format!(
                    "array has {} item(s), fewer than the minimum of {}",
                    instance.len(),
                    min_items
                )),
            ));
        }
    }
    if let Some(max_items) = max_items {
        if instance.len() > max_items {
            sink.push(ValidationError::new(
                pointer,
                ValidationErrorKind::RangeViolation(format!(
                    "array has {} item(s), more than the maximum of {}",
                    instance.len(),
                    max_items
                )),
            ));
        }
    }
    match items {
        Some(Items::Single(schema)) => {
            for (index, element) in instance.iter().enumerate() {
                let child_pointer = format!("{}/{}", pointer, index);
                schema.validate(element, &child_pointer, sink);
            }
        }
        Some(Items::Tuple(tuple)) => {
            for (index, element) in instance.iter().enumerate() {
                let child_pointer = format!("{}/{}", pointer, index);
                if let Some(schema) = tuple.get(index) {
                    schema.validate(element, &child_pointer, sink);
                } else if let Some(additional) = additional_items {
                    additional.validate(element, &child_pointer, sink);
                }
            }
        }
        None => {}
    }
    if let Some(contains) = contains {
        let matched = instance.iter().any(|element| {
            let mut scratch = Sink::new();
            contains.validate(element, pointer, &mut scratch);
            scratch.is_empty()
        });
        if !matched {
            sink.push(ValidationError::new(
                pointer,
                ValidationErrorKind::ContainsUnsatisfied,
            ));
        }
    }
}
