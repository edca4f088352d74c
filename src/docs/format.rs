//! Prop Type Formatter
//!
//! Renders a [`PropType`] into a markdown-safe token. Total and pure: every
//! well-formed type tree formats to a string, and the same tree always
//! formats to the same string.

use crate::types::PropType;

/// Format a prop type as a markdown token.
///
/// Container types recurse: `array<array<`string`>>` for a two-deep array.
/// Objects render their display name as a code token when one is known,
/// otherwise the literal `` `object` ``. Leaf types render verbatim in
/// backticks.
pub fn format_prop_type(ty: &PropType) -> String {
    match ty {
        PropType::Array { element } => format!("array<{}>", format_prop_type(element)),
        PropType::Object {
            type_name: Some(name),
            ..
        } => format!("`{}`", name),
        PropType::Object {
            type_name: None, ..
        } => "`object`".to_string(),
        PropType::Function => "`function`".to_string(),
        PropType::Named(name) => format!("`{}`", name),
    }
}
