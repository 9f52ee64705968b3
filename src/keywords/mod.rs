//! One module per family of keywords. Each exposes plain check functions rather than compiled
//! trait objects: the schema tree itself (see [`crate::schema`]) already holds the compiled
//! state, so a keyword module here only needs to know how to *check* it against an instance.
pub(crate) mod array_;
pub(crate) mod combinators;
pub(crate) mod conditional;
pub(crate) mod equality;
pub(crate) mod numeric;
pub(crate) mod object_;
pub(crate) mod string_;
