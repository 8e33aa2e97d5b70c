// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTML rendering of documentation sections.
//!
//! A [`DocRenderer`] reads the effective configuration and manifest from a
//! [`DoxStore`] and renders one section per feature: a heading with an
//! anchor link, the markdown description, and a table with one row per
//! documented item. Sections follow `dox.apiOrder` when a whole element is
//! rendered.
use tracing::{debug, warn};

use crate::{
    anchor::scoped_anchor,
    config::{ImportsConfig, SectionConfig},
    error::Error,
    feature::FeatureKey,
    markdown::{InlineMarkdown, MarkdownRenderer, escape_html},
    metadata::ElementMetadata,
    rows::{DefaultRows, RowRenderer},
    store::DoxStore
};

/// Renders documentation for elements declared in the store's manifest.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wcdox::{DocRenderer, DoxStore, FeatureKey, Manifest};
///
/// let manifest = Manifest::from_json(
///     r#"{"modules": [{"declarations": [{
///         "name": "MyBadge", "tagName": "my-badge",
///         "slots": [{"name": "", "description": "Badge text"}]
///     }]}]}"#,
/// )?;
/// let mut store = DoxStore::new();
/// store.setup(manifest, Some(&json!({"headingLevel": 2})))?;
///
/// let html = DocRenderer::new(&store).render_section("my-badge", FeatureKey::Slots)?;
/// assert!(html.expect("slots are documented").contains("<h2"));
/// # Ok::<(), wcdox::Error>(())
/// ```
pub struct DocRenderer<'store> {
    store:    &'store DoxStore,
    rows:     Box<dyn RowRenderer + 'store>,
    markdown: Box<dyn MarkdownRenderer + 'store>
}

impl<'store> DocRenderer<'store> {
    /// Creates a renderer with the default rows and markdown converter.
    pub fn new(store: &'store DoxStore) -> Self {
        Self {
            store,
            rows: Box::new(DefaultRows),
            markdown: Box::new(InlineMarkdown)
        }
    }

    /// Replaces the row renderer.
    pub fn with_rows<R>(mut self, rows: R) -> Self
    where
        R: RowRenderer + 'store
    {
        self.rows = Box::new(rows);
        self
    }

    /// Replaces the markdown converter.
    pub fn with_markdown<M>(mut self, markdown: M) -> Self
    where
        M: MarkdownRenderer + 'store
    {
        self.markdown = Box::new(markdown);
        self
    }

    /// Renders every section listed in `dox.apiOrder` for `tag`.
    ///
    /// `class_name` fills the `{className}` placeholder of import snippets
    /// and defaults to the declaration's class name. Unknown section names
    /// are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the manifest
    /// does not declare `tag`.
    pub fn render_element(&self, tag: &str, class_name: Option<&str>) -> Result<String, Error> {
        let metadata = self.resolve(tag)?;
        let class_name = class_name.unwrap_or(&metadata.class_name);
        let mut sections = Vec::new();

        for name in &self.store.config().dox.api_order {
            let key = match name.parse::<FeatureKey>() {
                Ok(key) => key,
                Err(error) => {
                    warn!("Skipping section: {error}");
                    continue;
                }
            };
            if let Some(section) = self.render_resolved(&metadata, key, class_name) {
                sections.push(section);
            }
        }

        debug!("Rendered {} section(s) for <{tag}>", sections.len());
        Ok(sections.join("\n"))
    }

    /// Renders a single section for `tag`.
    ///
    /// Returns `Ok(None)` when the section has nothing to document and
    /// `hideOnEmpty` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the manifest
    /// does not declare `tag`.
    pub fn render_section(&self, tag: &str, key: FeatureKey) -> Result<Option<String>, Error> {
        self.render_section_as(tag, key, None)
    }

    /// Renders a single section for `tag`, overriding the class name used in
    /// import snippets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the manifest
    /// does not declare `tag`.
    pub fn render_section_as(
        &self,
        tag: &str,
        key: FeatureKey,
        class_name: Option<&str>
    ) -> Result<Option<String>, Error> {
        let metadata = self.resolve(tag)?;
        let class_name = class_name.unwrap_or(&metadata.class_name);
        Ok(self.render_resolved(&metadata, key, class_name))
    }

    fn resolve(&self, tag: &str) -> Result<ElementMetadata, Error> {
        ElementMetadata::resolve(self.store.manifest(), tag).ok_or_else(|| {
            Error::validation(format!("custom element '{tag}' was not found in the manifest"))
        })
    }

    fn render_resolved(
        &self,
        metadata: &ElementMetadata,
        key: FeatureKey,
        class_name: &str
    ) -> Option<String> {
        let config = self.store.config();

        let Some(section) = config.section(key) else {
            return self.render_imports(&config.imports, &metadata.tag, class_name);
        };

        if config.hide_on_empty && metadata.count(key) == 0 {
            debug!("Hiding empty {key} section for <{}>", metadata.tag);
            return None;
        }

        let markdown = self.markdown.as_ref();
        let rows: Vec<String> = match key {
            FeatureKey::Imports => Vec::new(),
            FeatureKey::Props => metadata
                .props
                .iter()
                .map(|item| self.rows.prop_row(item, markdown))
                .collect(),
            FeatureKey::Slots => metadata
                .slots
                .iter()
                .map(|item| self.rows.slot_row(item, markdown))
                .collect(),
            FeatureKey::Methods => metadata
                .methods
                .iter()
                .map(|item| self.rows.method_row(item, markdown))
                .collect(),
            FeatureKey::Events => metadata
                .events
                .iter()
                .map(|item| self.rows.event_row(item, markdown))
                .collect(),
            FeatureKey::CssProps => metadata
                .css_props
                .iter()
                .map(|item| self.rows.css_prop_row(item, markdown))
                .collect(),
            FeatureKey::CssParts => metadata
                .css_parts
                .iter()
                .map(|item| self.rows.css_part_row(item, markdown))
                .collect(),
            FeatureKey::CssStates => metadata
                .css_states
                .iter()
                .map(|item| self.rows.css_state_row(item, markdown))
                .collect()
        };

        Some(self.render_table_section(key, section, &metadata.tag, &rows))
    }

    fn render_table_section(
        &self,
        key: FeatureKey,
        section: &SectionConfig,
        tag: &str,
        rows: &[String]
    ) -> String {
        let anchor = scoped_anchor(tag, &section.heading_id);
        let mut html = format!("<div class=\"wc-{key}\">\n");
        html.push_str(&self.heading(&section.heading, &anchor, &section.skip_link_label));
        push_description(&mut html, self.markdown.to_html(&section.description));

        html.push_str("<table>\n  <thead>\n    <tr>");
        for heading in &section.headings {
            html.push_str(&format!("<th>{}</th>", escape_html(heading)));
        }
        html.push_str("</tr>\n  </thead>\n  <tbody>");
        for row in rows {
            html.push('\n');
            html.push_str(row);
        }
        html.push_str("\n  </tbody>\n</table>\n</div>");
        html
    }

    fn render_imports(
        &self,
        imports: &ImportsConfig,
        tag: &str,
        class_name: &str
    ) -> Option<String> {
        if self.store.config().hide_on_empty && imports.imports.is_empty() {
            debug!("Hiding empty imports section for <{tag}>");
            return None;
        }

        let anchor = scoped_anchor(tag, &imports.heading_id);
        let mut html = String::from("<div class=\"wc-imports\">\n");
        html.push_str(&self.heading(&imports.heading, &anchor, ""));
        push_description(&mut html, self.markdown.to_html(&imports.description));

        html.push_str(&format!(
            "<div role=\"tablist\" aria-labelledby=\"{anchor}\" class=\"tablist\">"
        ));
        for (index, import) in imports.imports.iter().enumerate() {
            html.push_str(&format!(
                "\n  <button id=\"{anchor}-tab-{index}\" class=\"tab\" type=\"button\" role=\"tab\" aria-selected=\"{}\" aria-controls=\"{anchor}-tabpanel-{index}\">{}</button>",
                index == 0,
                escape_html(&import.label)
            ));
        }
        html.push_str("\n</div>");

        for (index, import) in imports.imports.iter().enumerate() {
            html.push_str(&format!(
                "\n<div id=\"{anchor}-tabpanel-{index}\" class=\"tabpanel\" role=\"tabpanel\" aria-labelledby=\"{anchor}-tab-{index}\"{}>",
                if index == 0 { "" } else { " hidden" }
            ));
            html.push_str(&format!(
                "\n  <pre><code class=\"language-{}\">{}</code></pre>",
                escape_html(&import.lang),
                escape_html(&import.render(tag, class_name))
            ));
            html.push_str(&format!(
                "\n  <button class=\"copy\" type=\"button\" aria-label=\"{}\" data-copied-label=\"{}\">{}</button>",
                escape_html(&imports.copy_label),
                escape_html(&imports.copied_label),
                imports.copy_icon
            ));
            html.push_str("\n</div>");
        }

        html.push_str("\n</div>");
        Some(html)
    }

    fn heading(&self, text: &str, anchor: &str, skip_link_label: &str) -> String {
        let level = self.store.config().heading_level.clamp(1, 6);
        let label = if skip_link_label.is_empty() {
            String::new()
        } else {
            format!(" aria-label=\"{}\"", escape_html(skip_link_label))
        };

        format!(
            "<h{level} id=\"{anchor}\" class=\"heading\">{} <a href=\"#{anchor}\" class=\"skip-link\"{label}>#</a></h{level}>\n",
            escape_html(text)
        )
    }
}

fn push_description(html: &mut String, description: String) {
    if !description.is_empty() {
        html.push_str(&description);
        html.push('\n');
    }
}
