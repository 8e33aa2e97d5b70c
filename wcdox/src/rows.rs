// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table row rendering per manifest item kind.
//!
//! Row formatting is behaviour, not data, so it lives behind the
//! [`RowRenderer`] trait and is injected into the document renderer rather
//! than stored in the configuration.
use crate::{
    manifest::{ClassMember, CssCustomProperty, CssPart, CssState, Event, Slot, is_deprecated},
    markdown::{MarkdownRenderer, escape_html},
    metadata::PropItem
};

const CHECK_MARK: &str = "✔️";

/// Renders one `<tr>` per documented item.
///
/// Every method receives the markdown converter configured on the document
/// renderer so descriptions render consistently across sections.
pub trait RowRenderer {
    /// Attributes and properties.
    fn prop_row(&self, prop: &PropItem, markdown: &dyn MarkdownRenderer) -> String;
    /// Methods.
    fn method_row(&self, method: &ClassMember, markdown: &dyn MarkdownRenderer) -> String;
    /// Events.
    fn event_row(&self, event: &Event, markdown: &dyn MarkdownRenderer) -> String;
    /// Slots.
    fn slot_row(&self, slot: &Slot, markdown: &dyn MarkdownRenderer) -> String;
    /// CSS custom properties.
    fn css_prop_row(&self, css_prop: &CssCustomProperty, markdown: &dyn MarkdownRenderer)
    -> String;
    /// CSS shadow parts.
    fn css_part_row(&self, css_part: &CssPart, markdown: &dyn MarkdownRenderer) -> String;
    /// Custom CSS states.
    fn css_state_row(&self, css_state: &CssState, markdown: &dyn MarkdownRenderer) -> String;
}

/// Rows matching the default column headings of each section.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRows;

impl RowRenderer for DefaultRows {
    fn prop_row(&self, prop: &PropItem, markdown: &dyn MarkdownRenderer) -> String {
        row(&[
            code_cell(&prop.name),
            code_cell(prop.attribute.as_deref().unwrap_or_default()),
            description_cell(prop.description.as_deref(), markdown),
            code_cell(prop.type_.as_ref().map_or("", |t| t.text.as_str())),
            code_cell(prop.default.as_deref().unwrap_or_default()),
            flag_cell(prop.readonly),
            flag_cell(is_deprecated(prop.deprecated.as_ref()))
        ])
    }

    fn method_row(&self, method: &ClassMember, markdown: &dyn MarkdownRenderer) -> String {
        row(&[
            code_cell(&method_signature(method)),
            description_cell(method.description.as_deref(), markdown),
            flag_cell(is_deprecated(method.deprecated.as_ref()))
        ])
    }

    fn event_row(&self, event: &Event, markdown: &dyn MarkdownRenderer) -> String {
        row(&[
            code_cell(&event.name),
            code_cell(&event_type(event)),
            description_cell(event.description.as_deref(), markdown),
            flag_cell(is_deprecated(event.deprecated.as_ref()))
        ])
    }

    fn slot_row(&self, slot: &Slot, markdown: &dyn MarkdownRenderer) -> String {
        let name = if slot.name.is_empty() {
            "<p><code><em>(default)</em></code></p>".to_owned()
        } else {
            code_cell(&slot.name)
        };
        row(&[
            name,
            description_cell(slot.description.as_deref(), markdown),
            flag_cell(is_deprecated(slot.deprecated.as_ref()))
        ])
    }

    fn css_prop_row(
        &self,
        css_prop: &CssCustomProperty,
        markdown: &dyn MarkdownRenderer
    ) -> String {
        row(&[
            code_cell(&css_prop.name),
            code_cell(css_prop.default.as_deref().unwrap_or_default()),
            description_cell(css_prop.description.as_deref(), markdown),
            flag_cell(is_deprecated(css_prop.deprecated.as_ref()))
        ])
    }

    fn css_part_row(&self, css_part: &CssPart, markdown: &dyn MarkdownRenderer) -> String {
        named_row(css_part, markdown)
    }

    fn css_state_row(&self, css_state: &CssState, markdown: &dyn MarkdownRenderer) -> String {
        named_row(css_state, markdown)
    }
}

fn named_row(item: &crate::manifest::NamedItem, markdown: &dyn MarkdownRenderer) -> String {
    row(&[
        code_cell(&item.name),
        description_cell(item.description.as_deref(), markdown),
        flag_cell(is_deprecated(item.deprecated.as_ref()))
    ])
}

/// Formats a method as `name(param: Type, ...) => Return`.
pub fn method_signature(method: &ClassMember) -> String {
    let parameters = method
        .parameters
        .iter()
        .map(|parameter| match parameter.type_.as_ref().filter(|t| !t.text.is_empty()) {
            Some(type_) => format!("{}: {}", parameter.name, type_.text),
            None => parameter.name.clone()
        })
        .collect::<Vec<_>>()
        .join(", ");
    let returns = method
        .return_
        .as_ref()
        .and_then(|value| value.type_.as_ref())
        .map(|type_| type_.text.as_str())
        .filter(|text| !text.is_empty())
        .unwrap_or("void");

    format!("{}({parameters}) => {returns}", method.name)
}

/// Formats an event type, wrapping payload types in `CustomEvent<...>`.
pub fn event_type(event: &Event) -> String {
    match event.type_.as_ref().map(|t| t.text.as_str()) {
        None | Some("") | Some("CustomEvent") => "CustomEvent".to_owned(),
        Some(text) if text.starts_with("CustomEvent<") => text.to_owned(),
        Some(text) => format!("CustomEvent<{text}>")
    }
}

fn row(cells: &[String]) -> String {
    let mut html = String::from("<tr>");
    for cell in cells {
        html.push_str("\n  ");
        html.push_str(cell);
    }
    html.push_str("\n</tr>");
    html
}

fn code_cell(text: &str) -> String {
    format!("<td><p><code>{}</code></p></td>", escape_html(text))
}

fn description_cell(description: Option<&str>, markdown: &dyn MarkdownRenderer) -> String {
    format!("<td>{}</td>", markdown.to_html(description.unwrap_or_default()))
}

fn flag_cell(flag: bool) -> String {
    format!(
        "<td style=\"text-align: center;\">{}</td>",
        if flag { CHECK_MARK } else { "" }
    )
}
