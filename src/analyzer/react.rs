//! React Component Extraction (tree-sitter)
//!
//! Parses TSX source and recovers component declarations with their prop
//! types. Recognized component forms:
//!
//! - `function Button(props: ButtonProps) { ... }` (exported or not)
//! - `const Card = (props: CardProps) => ...`
//! - `const Memo = memo((props: P) => ...)` and other wrapper calls
//!   (`forwardRef`, `React.memo`, ...), recorded as `wrapper_fn`
//! - `const Typed: React.FC<Props> = (props) => ...`
//!
//! Prop types come from the props parameter annotation, with `interface` and
//! `type` declarations in the same file resolved by name. Destructured
//! parameter defaults (`{ size = "md" }`) populate `default_value`.

use std::collections::{BTreeMap, HashMap};
use tree_sitter::{Node, Parser as TsParser};

use super::ComponentAnalyzer;
use crate::types::{Component, ComponentAnalysis, DocsError, PropDescriptor, PropType, Result};

/// Resolution ceiling for nested/self-referential type declarations
const MAX_TYPE_DEPTH: usize = 12;

pub struct ReactAnalyzer;

impl ReactAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReactAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentAnalyzer for ReactAnalyzer {
    fn analyze(&self, file_name: &str, source: &str) -> Result<ComponentAnalysis> {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|e| DocsError::parse(file_name, format!("failed to load TSX grammar: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| DocsError::parse(file_name, "parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(DocsError::parse(file_name, "source contains syntax errors"));
        }

        let registry = TypeRegistry::collect(root, source);

        let mut components = Vec::new();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            collect_components(statement, source, &registry, &mut components);
        }

        Ok(ComponentAnalysis { components })
    }
}

// =============================================================================
// Type Declaration Registry
// =============================================================================

/// Same-file `interface` and `type` declarations, keyed by name. Values are
/// the body node (`interface_body`) or the aliased type node.
struct TypeRegistry<'a> {
    types: HashMap<String, Node<'a>>,
}

impl<'a> TypeRegistry<'a> {
    fn collect(root: Node<'a>, source: &str) -> Self {
        let mut types = HashMap::new();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            let declaration = if statement.kind() == "export_statement" {
                match statement.child_by_field_name("declaration") {
                    Some(declaration) => declaration,
                    None => continue,
                }
            } else {
                statement
            };

            match declaration.kind() {
                "interface_declaration" => {
                    if let (Some(name), Some(body)) = (
                        declaration.child_by_field_name("name"),
                        declaration.child_by_field_name("body"),
                    ) {
                        types.insert(node_text(name, source), body);
                    }
                }
                "type_alias_declaration" => {
                    if let (Some(name), Some(value)) = (
                        declaration.child_by_field_name("name"),
                        declaration.child_by_field_name("value"),
                    ) {
                        types.insert(node_text(name, source), value);
                    }
                }
                _ => {}
            }
        }
        Self { types }
    }

    fn get(&self, name: &str) -> Option<Node<'a>> {
        self.types.get(name).copied()
    }
}

// =============================================================================
// Component Collection
// =============================================================================

fn collect_components(
    node: Node,
    source: &str,
    registry: &TypeRegistry,
    components: &mut Vec<Component>,
) {
    match node.kind() {
        "export_statement" => {
            if let Some(declaration) = node.child_by_field_name("declaration") {
                collect_components(declaration, source, registry, components);
            }
        }
        "function_declaration" => {
            if let Some(component) = component_from_function(node, source, registry) {
                components.push(component);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = node.walk();
            for declarator in node.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                if let Some(component) = component_from_declarator(declarator, source, registry) {
                    components.push(component);
                }
            }
        }
        _ => {}
    }
}

fn component_from_function(node: Node, source: &str, registry: &TypeRegistry) -> Option<Component> {
    let name = node_text(node.child_by_field_name("name")?, source);
    if !is_component_name(&name) {
        return None;
    }

    let props = node
        .child_by_field_name("parameters")
        .map(|params| props_from_parameters(params, source, registry))
        .unwrap_or_default();

    Some(Component {
        name,
        wrapper_fn: None,
        props,
    })
}

fn component_from_declarator(
    declarator: Node,
    source: &str,
    registry: &TypeRegistry,
) -> Option<Component> {
    let name_node = declarator.child_by_field_name("name")?;
    if name_node.kind() != "identifier" {
        return None;
    }
    let name = node_text(name_node, source);
    if !is_component_name(&name) {
        return None;
    }

    let mut value = declarator.child_by_field_name("value")?;
    let mut wrapper_fn = None;

    // Unwrap wrapper calls (memo, forwardRef, ...); the outermost callee is
    // the recorded wrapper.
    while value.kind() == "call_expression" {
        let callee = value.child_by_field_name("function")?;
        if wrapper_fn.is_none() {
            wrapper_fn = Some(node_text(callee, source));
        }
        value = first_function_argument(value)?;
    }

    let mut props = match value.kind() {
        "arrow_function" | "function_expression" | "function_declaration" => value
            .child_by_field_name("parameters")
            .map(|params| props_from_parameters(params, source, registry))
            .unwrap_or_default(),
        _ => return None,
    };

    // `const C: React.FC<Props> = (props) => ...` carries the prop type on
    // the declarator, not the parameter.
    if props.is_empty()
        && let Some(annotation) = declarator.child_by_field_name("type")
        && let Some(fc_props) = props_from_fc_annotation(annotation, source, registry)
    {
        props = fc_props;
    }

    Some(Component {
        name,
        wrapper_fn,
        props,
    })
}

/// First argument of a call that is itself a function or a nested call
fn first_function_argument(call: Node<'_>) -> Option<Node<'_>> {
    let arguments = call.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    arguments.named_children(&mut cursor).find(|arg| {
        matches!(
            arg.kind(),
            "arrow_function" | "function_expression" | "function_declaration" | "call_expression"
        )
    })
}

fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

// =============================================================================
// Prop Resolution
// =============================================================================

fn props_from_parameters(
    parameters: Node,
    source: &str,
    registry: &TypeRegistry,
) -> BTreeMap<String, PropDescriptor> {
    let mut cursor = parameters.walk();
    let Some(first) = parameters
        .named_children(&mut cursor)
        .find(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
    else {
        return BTreeMap::new();
    };

    let mut props = first
        .child_by_field_name("type")
        .and_then(|annotation| annotation.named_child(0))
        .map(|ty| resolve_props(ty, source, registry, 0))
        .unwrap_or_default();

    if let Some(pattern) = first.child_by_field_name("pattern")
        && pattern.kind() == "object_pattern"
    {
        apply_destructure_pattern(pattern, source, &mut props);
    }

    props
}

/// `React.FC<Props>` / `FunctionComponent<Props>` declarator annotations
fn props_from_fc_annotation(
    annotation: Node,
    source: &str,
    registry: &TypeRegistry,
) -> Option<BTreeMap<String, PropDescriptor>> {
    let ty = annotation.named_child(0)?;
    if ty.kind() != "generic_type" {
        return None;
    }
    let callee = node_text(ty.child_by_field_name("name")?, source);
    if !callee.ends_with("FC") && !callee.ends_with("FunctionComponent") {
        return None;
    }
    let argument = ty.child_by_field_name("type_arguments")?.named_child(0)?;
    Some(resolve_props(argument, source, registry, 0))
}

/// Destructured prop names fill in gaps left by the type annotation and
/// carry default values.
fn apply_destructure_pattern(
    pattern: Node,
    source: &str,
    props: &mut BTreeMap<String, PropDescriptor>,
) {
    let mut cursor = pattern.walk();
    for element in pattern.named_children(&mut cursor) {
        match element.kind() {
            "shorthand_property_identifier_pattern" => {
                let name = node_text(element, source);
                props
                    .entry(name)
                    .or_insert_with(|| PropDescriptor::required(PropType::named("unknown")));
            }
            "object_assignment_pattern" => {
                let Some(left) = element.child_by_field_name("left") else {
                    continue;
                };
                let Some(right) = element.child_by_field_name("right") else {
                    continue;
                };
                let name = node_text(left, source);
                let default = node_text(right, source);
                props
                    .entry(name)
                    .or_insert_with(|| PropDescriptor::required(PropType::named("unknown")))
                    .default_value = Some(default);
            }
            "pair_pattern" => {
                if let Some(key) = element.child_by_field_name("key") {
                    let name = node_text(key, source);
                    props
                        .entry(name)
                        .or_insert_with(|| PropDescriptor::required(PropType::named("unknown")));
                }
            }
            _ => {}
        }
    }
}

/// Resolve a type node to a prop map, following same-file declarations.
fn resolve_props(
    ty: Node,
    source: &str,
    registry: &TypeRegistry,
    depth: usize,
) -> BTreeMap<String, PropDescriptor> {
    if depth > MAX_TYPE_DEPTH {
        return BTreeMap::new();
    }
    match ty.kind() {
        "object_type" | "interface_body" => props_from_members(ty, source, registry, depth),
        "type_identifier" => {
            let name = node_text(ty, source);
            registry
                .get(&name)
                .map(|body| resolve_props(body, source, registry, depth + 1))
                .unwrap_or_default()
        }
        "intersection_type" => {
            let mut merged = BTreeMap::new();
            let mut cursor = ty.walk();
            for part in ty.named_children(&mut cursor) {
                merged.extend(resolve_props(part, source, registry, depth + 1));
            }
            merged
        }
        _ => BTreeMap::new(),
    }
}

fn props_from_members(
    body: Node,
    source: &str,
    registry: &TypeRegistry,
    depth: usize,
) -> BTreeMap<String, PropDescriptor> {
    let mut props = BTreeMap::new();
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        if member.kind() != "property_signature" {
            continue;
        }
        let Some(name_node) = member.child_by_field_name("name") else {
            continue;
        };
        let name = node_text(name_node, source);

        let ty = member
            .child_by_field_name("type")
            .and_then(|annotation| annotation.named_child(0))
            .map(|node| convert_type(node, source, registry, depth + 1))
            .unwrap_or_else(|| PropType::named("unknown"));

        let descriptor = if has_optional_marker(member) {
            PropDescriptor::optional(ty)
        } else {
            PropDescriptor::required(ty)
        };
        props.insert(name, descriptor);
    }
    props
}

/// Convert a type annotation node into the prop type model.
fn convert_type(ty: Node, source: &str, registry: &TypeRegistry, depth: usize) -> PropType {
    if depth > MAX_TYPE_DEPTH {
        return PropType::named(collapsed_text(ty, source));
    }
    match ty.kind() {
        "array_type" => match ty.named_child(0) {
            Some(element) => PropType::array(convert_type(element, source, registry, depth + 1)),
            None => PropType::named(collapsed_text(ty, source)),
        },
        "generic_type" => {
            let name = ty
                .child_by_field_name("name")
                .map(|n| node_text(n, source))
                .unwrap_or_default();
            if name == "Array" || name == "ReadonlyArray" {
                let element = ty
                    .child_by_field_name("type_arguments")
                    .and_then(|args| args.named_child(0));
                match element {
                    Some(element) => {
                        PropType::array(convert_type(element, source, registry, depth + 1))
                    }
                    None => PropType::named(name),
                }
            } else {
                PropType::named(collapsed_text(ty, source))
            }
        }
        "object_type" => PropType::Object {
            type_name: None,
            props: props_from_members(ty, source, registry, depth),
        },
        "type_identifier" => {
            let name = node_text(ty, source);
            match registry.get(&name) {
                Some(body) if matches!(body.kind(), "interface_body" | "object_type") => {
                    PropType::Object {
                        type_name: Some(name),
                        props: props_from_members(body, source, registry, depth + 1),
                    }
                }
                // Alias to a non-object type: follow it
                Some(body) => convert_type(body, source, registry, depth + 1),
                None => PropType::Named(name),
            }
        }
        "function_type" | "constructor_type" => PropType::Function,
        "parenthesized_type" | "readonly_type" => match ty.named_child(0) {
            Some(inner) => convert_type(inner, source, registry, depth + 1),
            None => PropType::named(collapsed_text(ty, source)),
        },
        "predefined_type" => PropType::named(node_text(ty, source)),
        _ => PropType::named(collapsed_text(ty, source)),
    }
}

fn has_optional_marker(member: Node) -> bool {
    let mut cursor = member.walk();
    member.children(&mut cursor).any(|child| child.kind() == "?")
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Node text with runs of whitespace collapsed, for multi-line annotations
fn collapsed_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(source: &str) -> ComponentAnalysis {
        ReactAnalyzer::new().analyze("Test.tsx", source).unwrap()
    }

    #[test]
    fn test_function_component_with_interface_props() {
        let analysis = analyze(
            r#"
interface ButtonProps {
    label: string;
    disabled?: boolean;
}

export function Button(props: ButtonProps) {
    return <button disabled={props.disabled}>{props.label}</button>;
}
"#,
        );

        assert_eq!(analysis.components.len(), 1);
        let button = &analysis.components[0];
        assert_eq!(button.name, "Button");
        assert_eq!(button.wrapper_fn, None);

        let label = &button.props["label"];
        assert_eq!(label.ty, PropType::named("string"));
        assert!(!label.optional);

        let disabled = &button.props["disabled"];
        assert_eq!(disabled.ty, PropType::named("boolean"));
        assert!(disabled.optional);
    }

    #[test]
    fn test_lowercase_functions_are_not_components() {
        let analysis = analyze(
            r#"
export function formatDate(value: string) {
    return value.trim();
}
"#,
        );
        assert!(analysis.components.is_empty());
    }

    #[test]
    fn test_arrow_component_with_inline_object_type() {
        let analysis = analyze(
            r#"
export const Badge = (props: { kind: string }) => <span>{props.kind}</span>;
"#,
        );

        let badge = &analysis.components[0];
        assert_eq!(badge.name, "Badge");
        assert_eq!(badge.props["kind"].ty, PropType::named("string"));
    }

    #[test]
    fn test_memo_wrapper_is_recorded() {
        let analysis = analyze(
            r#"
import { memo } from "react";

interface RowProps {
    id: number;
}

export const Row = memo((props: RowProps) => <tr data-id={props.id} />);
"#,
        );

        let row = &analysis.components[0];
        assert_eq!(row.name, "Row");
        assert_eq!(row.wrapper_fn.as_deref(), Some("memo"));
        assert_eq!(row.props["id"].ty, PropType::named("number"));
    }

    #[test]
    fn test_react_member_wrapper_name() {
        let analysis = analyze(
            r#"
import React from "react";

export const Pure = React.memo((props: { text: string }) => <p>{props.text}</p>);
"#,
        );
        assert_eq!(
            analysis.components[0].wrapper_fn.as_deref(),
            Some("React.memo")
        );
    }

    #[test]
    fn test_array_and_named_object_types() {
        let analysis = analyze(
            r#"
interface Item {
    id: number;
}

interface ListProps {
    items: Item[];
    tags: Array<string>;
}

export function List(props: ListProps) {
    return <ul />;
}
"#,
        );

        let list = &analysis.components[0];
        match &list.props["items"].ty {
            PropType::Array { element } => match element.as_ref() {
                PropType::Object { type_name, props } => {
                    assert_eq!(type_name.as_deref(), Some("Item"));
                    assert_eq!(props["id"].ty, PropType::named("number"));
                }
                other => panic!("expected object element, got {:?}", other),
            },
            other => panic!("expected array, got {:?}", other),
        }

        assert_eq!(
            list.props["tags"].ty,
            PropType::array(PropType::named("string"))
        );
    }

    #[test]
    fn test_function_prop_type() {
        let analysis = analyze(
            r#"
interface FormProps {
    onSubmit: (value: string) => void;
}

export function Form(props: FormProps) {
    return <form />;
}
"#,
        );
        assert_eq!(
            analysis.components[0].props["onSubmit"].ty,
            PropType::Function
        );
    }

    #[test]
    fn test_destructured_defaults() {
        let analysis = analyze(
            r#"
interface TagProps {
    label: string;
    size?: string;
}

export const Tag = ({ label, size = "md" }: TagProps) => <span>{label}</span>;
"#,
        );

        let tag = &analysis.components[0];
        assert_eq!(tag.props["size"].default_value.as_deref(), Some("\"md\""));
        assert_eq!(tag.props["label"].default_value, None);
    }

    #[test]
    fn test_fc_annotation_resolves_props() {
        let analysis = analyze(
            r#"
import React from "react";

interface PanelProps {
    title: string;
}

export const Panel: React.FC<PanelProps> = (props) => <h1>{props.title}</h1>;
"#,
        );

        let panel = &analysis.components[0];
        assert_eq!(panel.name, "Panel");
        assert_eq!(panel.props["title"].ty, PropType::named("string"));
    }

    #[test]
    fn test_untyped_jsx_destructuring_yields_unknown_props() {
        let analysis = analyze(
            r#"
export const Greeting = ({ name }) => <p>Hello {name}</p>;
"#,
        );
        assert_eq!(
            analysis.components[0].props["name"].ty,
            PropType::named("unknown")
        );
    }

    #[test]
    fn test_type_alias_props() {
        let analysis = analyze(
            r#"
type CardProps = {
    title: string;
    footer?: string;
};

export function Card(props: CardProps) {
    return <div>{props.title}</div>;
}
"#,
        );

        let card = &analysis.components[0];
        assert_eq!(card.props["title"].ty, PropType::named("string"));
        assert!(card.props["footer"].optional);
    }

    #[test]
    fn test_syntax_errors_are_reported() {
        let result = ReactAnalyzer::new().analyze("Broken.tsx", "const = = <div>");
        assert!(result.is_err());
    }

    #[test]
    fn test_multiple_components_in_source_order() {
        let analysis = analyze(
            r#"
export function First() {
    return <div />;
}

export function Second() {
    return <div />;
}
"#,
        );
        let names: Vec<&str> = analysis
            .components
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_self_referential_type_terminates() {
        let analysis = analyze(
            r#"
interface TreeNode {
    label: string;
    children: TreeNode[];
}

export function Tree(props: TreeNode) {
    return <ul />;
}
"#,
        );
        // Must terminate despite the cycle; label survives at the top level.
        assert_eq!(
            analysis.components[0].props["label"].ty,
            PropType::named("string")
        );
    }
}
