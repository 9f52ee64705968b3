//! `allOf`, `anyOf`, `oneOf`.
//!
//! `allOf` errors flow straight into the caller's sink. `anyOf`/`oneOf` need a boolean
//! pass/fail verdict per branch, so each branch is validated into a scratch sink whose
//! emptiness is observed and then discarded — the only place in the validator where errors are
//! suppressed outside of `if`/`then`/`else`.
use crate::error::{Sink, ValidationError, ValidationErrorKind};
use crate::schema::Schema;
use serde_json::Value;
use std::sync::Arc;

pub(crate) fn check_all_of(
    branches: &[Arc<Schema>],
    instance: &Value,
    pointer: &str,
    sink: &mut Sink,
) {
    for branch in branches {
        branch.validate(instance, pointer, sink);
    }
}

pub(crate) fn check_any_of(
    branches: &[Arc<Schema>],
    instance: &Value,
    pointer: &str,
    sink: &mut Sink,
) {
    for branch in branches {
        let mut scratch = Sink::new();
        branch.validate(instance, pointer, &mut scratch);
        if scratch.is_empty() {
            return;
        }
    }
    sink.push(ValidationError::new(
        pointer,
        ValidationErrorKind::CombinatorFailure("anyOf"),
    ));
}

pub(crate) fn check_one_of(
    branches: &[Arc<Schema>],
    instance: &Value,
    pointer: &str,
    sink: &mut Sink,
) {
    let mut matches = 0;
    for branch in branches {
        let mut scratch = Sink::new();
        branch.validate(instance, pointer, &mut scratch);
        if scratch.is_empty() {
            matches += 1;
        }
    }
    if matches != 1 {
        sink.push(ValidationError::new(
            pointer,
            ValidationErrorKind::CombinatorFailure("oneOf"),
        ));
    }
}
