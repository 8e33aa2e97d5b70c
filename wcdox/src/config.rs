// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document types describing how documentation is rendered.
//!
//! The types mirror the camelCase structure of user configuration documents.
//! User documents are partial: they are deep-merged onto the defaults defined
//! here before being decoded, so every key below is always present in the
//! effective configuration.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{self, Error};

const COPY_ICON: &str = r#"<?xml version="1.0" ?><svg style="enable-background:new 0 0 24 24;" version="1.1" viewBox="0 0 24 24" xml:space="preserve" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><g class="st0" id="grid_system"/><g id="_icons"><path d="M17,3h-6C8.8,3,7,4.8,7,7c-2.2,0-4,1.8-4,4v6c0,2.2,1.8,4,4,4h6c2.2,0,4-1.8,4-4c2.2,0,4-1.8,4-4V7C21,4.8,19.2,3,17,3z    M15,17c0,1.1-0.9,2-2,2H7c-1.1,0-2-0.9-2-2v-6c0-1.1,0.9-2,2-2h1h5c1.1,0,2,0.9,2,2v5V17z M19,13c0,1.1-0.9,2-2,2v-4   c0-2.2-1.8-4-4-4H9c0-1.1,0.9-2,2-2h6c1.1,0,2,0.9,2,2V13z"/></g></svg>"#;
const COPIED_ICON: &str = r#"<?xml version="1.0" ?><svg style="enable-background:new 0 0 36 36;" version="1.1" viewBox="0 0 36 36" xml:space="preserve" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><g id="Layer_1"/><g id="icons"><path class="st0" d="M12.8,28.7l-9.5-9.5c-0.4-0.4-0.4-1.1,0-1.6l1.5-1.5c0.4-0.4,1.1-0.4,1.6,0l7.2,7.2   l16-16c0.4-0.4,1.1-0.4,1.6,0l1.5,1.5c0.4,0.4,0.4,1.1,0,1.6L14.4,28.7C13.9,29.1,13.2,29.1,12.8,28.7z" id="check_x5F_mark_1_"/></g></svg>"#;

/// Root configuration read by every renderer.
///
/// # Examples
///
/// ```
/// use wcdox::DoxConfig;
///
/// let config = DoxConfig::default();
/// assert!(config.hide_on_empty);
/// assert_eq!(config.heading_level, 3);
/// assert_eq!(config.props.heading, "Attributes and Properties");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq,)]
#[serde(rename_all = "camelCase", default)]
pub struct DoxConfig
{
    /// Hide a section entirely when it has nothing to document.
    #[serde(deserialize_with = "null_as_default")]
    pub hide_on_empty: bool,
    /// HTML heading level used for section headings.
    #[serde(deserialize_with = "null_as_default")]
    pub heading_level: u8,
    /// Options for the combined documentation view.
    #[serde(deserialize_with = "null_as_default")]
    pub dox:           DoxOptions,
    /// Import snippets section.
    #[serde(deserialize_with = "null_as_default")]
    pub imports:       ImportsConfig,
    /// CSS shadow parts section.
    #[serde(deserialize_with = "null_as_default")]
    pub css_parts:     SectionConfig,
    /// CSS custom properties section.
    #[serde(deserialize_with = "null_as_default")]
    pub css_props:     SectionConfig,
    /// Events section.
    #[serde(deserialize_with = "null_as_default")]
    pub events:        SectionConfig,
    /// Methods section.
    #[serde(deserialize_with = "null_as_default")]
    pub methods:       SectionConfig,
    /// Attributes and properties section.
    #[serde(deserialize_with = "null_as_default")]
    pub props:         SectionConfig,
    /// Slots section.
    #[serde(deserialize_with = "null_as_default")]
    pub slots:         SectionConfig,
    /// Custom CSS states section.
    #[serde(deserialize_with = "null_as_default")]
    pub css_states:    SectionConfig,
}

/// Options for the combined documentation view.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq,)]
#[serde(rename_all = "camelCase", default)]
pub struct DoxOptions
{
    /// Section keys in the order they are rendered.
    #[serde(deserialize_with = "null_as_default")]
    pub api_order: Vec<String,>,
}

/// Display options shared by every table-based section.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default,)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionConfig
{
    /// Heading text.
    #[serde(deserialize_with = "null_as_default")]
    pub heading:         String,
    /// Anchor id of the heading.
    #[serde(deserialize_with = "null_as_default")]
    pub heading_id:      String,
    /// Accessible label of the skip link next to the heading.
    #[serde(deserialize_with = "null_as_default")]
    pub skip_link_label: String,
    /// Markdown rendered below the heading.
    #[serde(deserialize_with = "null_as_default")]
    pub description:     String,
    /// Column headings of the table.
    #[serde(deserialize_with = "null_as_default")]
    pub headings:        Vec<String,>,
}

/// Display options of the imports section.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default,)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportsConfig
{
    /// Heading text.
    #[serde(deserialize_with = "null_as_default")]
    pub heading:      String,
    /// Anchor id of the heading.
    #[serde(deserialize_with = "null_as_default")]
    pub heading_id:   String,
    /// Markdown rendered below the heading.
    #[serde(deserialize_with = "null_as_default")]
    pub description:  String,
    /// Inline SVG shown on the copy button.
    #[serde(deserialize_with = "null_as_default")]
    pub copy_icon:    String,
    /// Accessible label of the copy button.
    #[serde(deserialize_with = "null_as_default")]
    pub copy_label:   String,
    /// Inline SVG shown once the snippet was copied.
    #[serde(deserialize_with = "null_as_default")]
    pub copied_icon:  String,
    /// Accessible label shown once the snippet was copied.
    #[serde(deserialize_with = "null_as_default")]
    pub copied_label: String,
    /// Import snippets, one tab each.
    #[serde(deserialize_with = "null_as_default")]
    pub imports:      Vec<ImportConfig,>,
}

/// A single import snippet.
///
/// `import_template` may reference `{tag}` and `{className}`, which are
/// replaced with the documented element's tag and class name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default,)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig
{
    /// Tab label.
    #[serde(deserialize_with = "null_as_default")]
    pub label:           String,
    /// Language class applied to the code block.
    #[serde(deserialize_with = "null_as_default")]
    pub lang:            String,
    /// Snippet template.
    #[serde(deserialize_with = "null_as_default")]
    pub import_template: String,
}

impl ImportConfig
{
    /// Fills the template with the element's tag and class name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wcdox::ImportConfig;
    ///
    /// let import = ImportConfig {
    ///     label:           "HTML".to_owned(),
    ///     lang:            "html".to_owned(),
    ///     import_template: "import { {className} } from './{tag}.js';".to_owned(),
    /// };
    /// assert_eq!(import.render("my-button", "MyButton"), "import { MyButton } from './my-button.js';");
    /// ```
    pub fn render(&self, tag: &str, class_name: &str,) -> String
    {
        self.import_template.replace("{tag}", tag,).replace("{className}", class_name,)
    }
}

impl DoxConfig
{
    /// Encodes the configuration as a JSON document suitable for merging.
    pub fn to_value(&self,) -> Value
    {
        match serde_json::to_value(self,) {
            Ok(value,) => value,
            Err(error,) => {
                warn!("Failed to encode configuration, using an empty document: {error}");
                debug_assert!(false, "configuration must always encode: {error}");
                Value::Object(serde_json::Map::new(),)
            }
        }
    }

    /// Decodes a merged configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](Error::Config) when a value has the wrong
    /// type, for example `headingLevel: "three"`.
    pub fn from_value(value: Value,) -> Result<Self, Error,>
    {
        serde_json::from_value(value,).map_err(error::config_error,)
    }

    /// Returns the section options for a table-based feature, or `None` for
    /// the imports section.
    pub fn section(&self, key: crate::FeatureKey,) -> Option<&SectionConfig,>
    {
        use crate::FeatureKey;

        match key {
            FeatureKey::Imports => None,
            FeatureKey::Props => Some(&self.props,),
            FeatureKey::Slots => Some(&self.slots,),
            FeatureKey::Methods => Some(&self.methods,),
            FeatureKey::Events => Some(&self.events,),
            FeatureKey::CssProps => Some(&self.css_props,),
            FeatureKey::CssParts => Some(&self.css_parts,),
            FeatureKey::CssStates => Some(&self.css_states,),
        }
    }
}

impl Default for DoxOptions
{
    fn default() -> Self
    {
        Self {
            api_order: [
                "imports",
                "props",
                "slots",
                "methods",
                "events",
                "css-props",
                "css-parts",
                "css-states",
            ]
            .into_iter()
            .map(str::to_owned,)
            .collect(),
        }
    }
}

/// Decodes an explicit `null` as the field type's empty value.
fn null_as_default<'de, D, T,>(deserializer: D,) -> Result<T, D::Error,>
where
    D: Deserializer<'de,>,
    T: Default + Deserialize<'de,>,
{
    Ok(Option::<T,>::deserialize(deserializer,)?.unwrap_or_default(),)
}

fn section(
    heading: &str,
    heading_id: &str,
    skip_link_label: &str,
    description: &str,
    headings: &[&str],
) -> SectionConfig
{
    SectionConfig {
        heading:         heading.to_owned(),
        heading_id:      heading_id.to_owned(),
        skip_link_label: skip_link_label.to_owned(),
        description:     description.to_owned(),
        headings:        headings.iter().map(|&value| value.to_owned(),).collect(),
    }
}

impl Default for DoxConfig
{
    fn default() -> Self
    {
        Self {
            hide_on_empty: true,
            heading_level: 3,
            dox:           DoxOptions::default(),
            imports:       ImportsConfig {
                heading:      "Imports".to_owned(),
                heading_id:   "imports".to_owned(),
                description:  "You can import the component in the following ways:".to_owned(),
                copy_icon:    COPY_ICON.to_owned(),
                copy_label:   "Copy import".to_owned(),
                copied_icon:  COPIED_ICON.to_owned(),
                copied_label: "Import copied".to_owned(),
                imports:      Vec::new(),
            },
            css_parts:     section(
                "CSS Parts",
                "css-parts",
                "Skip to CSS parts",
                "The following [CSS shadow parts](https://developer.mozilla.org/en-US/docs/Web/CSS/CSS_shadow_parts) are available to customize the component:",
                &["Name", "Description", "Deprecated",],
            ),
            css_props:     section(
                "CSS Custom Properties",
                "css-props",
                "Skip to CSS custom properties",
                "You can use [CSS custom properties](https://developer.mozilla.org/en-US/docs/Web/CSS/Using_CSS_custom_properties) to customize the look and feel of the component using the following properties:",
                &["Name", "Default", "Description", "Deprecated",],
            ),
            events:        section(
                "Events",
                "events",
                "Skip to events",
                "The following [events](https://developer.mozilla.org/en-US/docs/Web/Events/Creating_and_triggering_events) are emitted by the component:",
                &["Name", "Type", "Description", "Deprecated",],
            ),
            methods:       section(
                "Methods",
                "methods",
                "Skip to methods",
                "The following Methods are available:",
                &["Name", "Description", "Deprecated",],
            ),
            props:         section(
                "Attributes and Properties",
                "props",
                "Skip to attributes and properties",
                "The following Properties and Attributes are available:",
                &["Name", "Attribute", "Description", "Type", "Default", "Read-only", "Deprecated",],
            ),
            slots:         section(
                "Slots",
                "slots",
                "Skip to slots",
                "The following slots are available:",
                &["Name", "Description", "Deprecated",],
            ),
            css_states:    section(
                "CSS States",
                "css-states",
                "Skip to CSS states",
                "The following [CSS states](https://developer.mozilla.org/en-US/docs/Web/CSS/:state) can be used to customize component styles:",
                &["Name", "Description", "Deprecated",],
            ),
        }
    }
}
