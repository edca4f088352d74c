//! Component Analysis Data Model
//!
//! The structured result of analyzing one component source file: an ordered
//! list of components, each with a typed prop map. Prop types are a tagged
//! variant rather than a loosely-typed record, so the container invariants
//! (an array always has an element type, an object always has a prop map)
//! hold by construction.
//!
//! Everything here lives within a single tool invocation; there is no
//! persisted state and no cross-invocation identity.

use serde::Serialize;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

// =============================================================================
// Prop Types
// =============================================================================

/// The type of a single prop, as recovered from the source annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropType {
    /// `T[]` or `Array<T>`
    Array { element: Box<PropType> },
    /// An inline object type or a named interface resolved in the same file
    Object {
        type_name: Option<String>,
        props: BTreeMap<String, PropDescriptor>,
    },
    /// Any callable annotation, e.g. `() => void`
    Function,
    /// A primitive or otherwise unresolved type, kept as source text
    Named(String),
}

impl PropType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn array(element: PropType) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Nesting depth of array wrappers (1 for `T[]`, 2 for `T[][]`, ...)
    pub fn array_depth(&self) -> usize {
        match self {
            Self::Array { element } => 1 + element.array_depth(),
            _ => 0,
        }
    }
}

// The wire shape keeps the original tool contract: a `type` discriminant
// plus `elementType` / `typeName` / `props` fields present only where the
// variant carries them. An internally-tagged derive cannot express the
// primitive case (`{"type": "string"}`), hence the manual impl.
impl Serialize for PropType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Array { element } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("elementType", element)?;
                map.end()
            }
            Self::Object { type_name, props } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "object")?;
                if let Some(name) = type_name {
                    map.serialize_entry("typeName", name)?;
                }
                map.serialize_entry("props", props)?;
                map.end()
            }
            Self::Function => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "function")?;
                map.end()
            }
            Self::Named(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", name)?;
                map.end()
            }
        }
    }
}

// =============================================================================
// Prop Descriptor
// =============================================================================

/// One named prop: its type, whether it may be omitted, and its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    #[serde(flatten)]
    pub ty: PropType,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl PropDescriptor {
    pub fn required(ty: PropType) -> Self {
        Self {
            ty,
            optional: false,
            default_value: None,
        }
    }

    pub fn optional(ty: PropType) -> Self {
        Self {
            ty,
            optional: true,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

// =============================================================================
// Components
// =============================================================================

/// A documented UI unit: name, optional wrapper annotation, typed props.
///
/// Props are keyed by name in a `BTreeMap` so every rendering of the same
/// analysis is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper_fn: Option<String>,
    pub props: BTreeMap<String, PropDescriptor>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrapper_fn: None,
            props: BTreeMap::new(),
        }
    }

    pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper_fn = Some(wrapper.into());
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, descriptor: PropDescriptor) -> Self {
        self.props.insert(name.into(), descriptor);
        self
    }
}

/// The full analysis of one source file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentAnalysis {
    pub components: Vec<Component>,
}

impl ComponentAnalysis {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
