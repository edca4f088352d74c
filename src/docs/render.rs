//! Component Markdown Renderer
//!
//! Turns one file's analysis into a markdown section: a heading per
//! component, an optional wrapper annotation, and a props table. Pure string
//! construction; identical input always yields byte-identical output.

use crate::docs::format::format_prop_type;
use crate::types::ComponentAnalysis;

/// Rendered when an analysis is absent or found no components
pub const NO_COMPONENTS: &str = "**No components found**";

/// Rendered in place of the props table when a component has no props
pub const NO_PROPS: &str = "*No props*";

/// Render one file's analysis as markdown.
pub fn render_analysis(analysis: Option<&ComponentAnalysis>) -> String {
    let Some(analysis) = analysis.filter(|a| !a.is_empty()) else {
        return NO_COMPONENTS.to_string();
    };

    let mut out = String::new();
    for component in &analysis.components {
        out.push_str(&format!("## {}\n\n", component.name));

        if let Some(wrapper) = &component.wrapper_fn {
            out.push_str(&format!("*Wrapped with: `{}`*\n\n", wrapper));
        }

        out.push_str("### Props\n\n");
        if component.props.is_empty() {
            out.push_str(NO_PROPS);
            out.push('\n');
        } else {
            out.push_str("| Prop | Type | Optional | Default |\n");
            out.push_str("|------|------|----------|---------|\n");
            for (name, descriptor) in &component.props {
                let default = descriptor
                    .default_value
                    .as_ref()
                    .map(|value| format!("`{}`", value))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    name,
                    format_prop_type(&descriptor.ty),
                    if descriptor.optional { "✓" } else { "✗" },
                    default
                ));
            }
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}
