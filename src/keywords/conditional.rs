//! `if`/`then`/`else`.
use crate::error::Sink;
use crate::schema::Schema;
use serde_json::Value;
use std::sync::Arc;

pub(crate) fn check_if_then_else(
    if_: &Arc<Schema>,
    then: Option<&Arc<Schema>>,
    else_: Option<&Arc<Schema>>,
    instance: &Value,
    pointer: &str,
    sink: &mut Sink,
) {
    let mut scratch = Sink::new();
    if_.validate(instance, pointer, &mut scratch);
    if scratch.is_empty() {
        if let Some(then) = then {
            then.validate(instance, pointer, sink);
        }
    } else if let Some(else_) = else_ {
        else_.validate(instance, pointer, sink);
    }
}
