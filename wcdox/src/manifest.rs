// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Types for the subset of the custom elements manifest read by renderers.
//!
//! The manifest is produced by external analyzers and treated as read-only
//! input. Unknown fields are ignored and every list defaults to empty, so a
//! sparse manifest decodes without errors and simply renders less.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

/// Root of a custom elements manifest document.
///
/// # Examples
///
/// ```
/// use wcdox::Manifest;
///
/// let json = r#"{
///   "schemaVersion": "2.0.0",
///   "modules": [{
///     "kind": "javascript-module",
///     "path": "src/my-button.js",
///     "declarations": [{
///       "kind": "class",
///       "name": "MyButton",
///       "tagName": "my-button",
///       "customElement": true
///     }]
///   }]
/// }"#;
/// let manifest = Manifest::from_json(json,).expect("valid manifest",);
/// assert_eq!(manifest.find_element("my-button").map(|d| d.name.as_str()), Some("MyButton"));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
#[serde(rename_all = "camelCase")]
pub struct Manifest
{
    /// Version of the manifest schema.
    #[serde(default)]
    pub schema_version: String,
    /// Optional path to the package readme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme:         Option<String,>,
    /// Modules of the package.
    #[serde(default)]
    pub modules:        Vec<Module,>,
}

/// A JavaScript module and the declarations it contains.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
#[serde(rename_all = "camelCase")]
pub struct Module
{
    /// Module kind, usually `javascript-module`.
    #[serde(default)]
    pub kind:         String,
    /// Path of the module relative to the package root.
    #[serde(default)]
    pub path:         String,
    /// Classes, functions, and variables declared by the module.
    #[serde(default)]
    pub declarations: Vec<Declaration,>,
    /// Exports of the module.
    #[serde(default)]
    pub exports:      Vec<Export,>,
}

/// A module export.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Export
{
    /// Either `js` or `custom-element-definition`.
    #[serde(default)]
    pub kind:        String,
    /// Exported name, or the tag name for element definitions.
    #[serde(default)]
    pub name:        String,
    /// Reference to the exported declaration.
    #[serde(default)]
    pub declaration: Reference,
}

/// Reference to a declaration, optionally in another module or package.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Reference
{
    /// Declaration name.
    #[serde(default)]
    pub name:    String,
    /// Module path, when not the current module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module:  Option<String,>,
    /// Package name, when not the current package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String,>,
}

/// A declaration. Custom elements carry a `tagName`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
#[serde(rename_all = "camelCase")]
pub struct Declaration
{
    /// Declaration kind such as `class`, `function`, or `variable`.
    #[serde(default)]
    pub kind:           String,
    /// Declared name, usually the class name.
    #[serde(default)]
    pub name:           String,
    /// Tag name the element is registered under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name:       Option<String,>,
    /// Marks classes that are custom elements.
    #[serde(default)]
    pub custom_element: bool,
    /// Markdown summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary:        Option<String,>,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description:    Option<String,>,
    /// Deprecation marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated:     Option<Deprecation,>,
    /// Fields and methods.
    #[serde(default)]
    pub members:        Vec<ClassMember,>,
    /// Observed attributes.
    #[serde(default)]
    pub attributes:     Vec<Attribute,>,
    /// Dispatched events.
    #[serde(default)]
    pub events:         Vec<Event,>,
    /// Slots.
    #[serde(default)]
    pub slots:          Vec<Slot,>,
    /// CSS custom properties.
    #[serde(default)]
    pub css_properties: Vec<CssCustomProperty,>,
    /// CSS shadow parts.
    #[serde(default)]
    pub css_parts:      Vec<CssPart,>,
    /// Custom CSS states.
    #[serde(default)]
    pub css_states:     Vec<CssState,>,
}

/// `deprecated` is either a flag or a reason string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(untagged)]
pub enum Deprecation
{
    /// `true` or `false`.
    Flag(bool,),
    /// Deprecated with an explanation.
    Reason(String,),
}

impl Deprecation
{
    /// Returns `true` unless the marker is an explicit `false`.
    pub fn is_deprecated(&self,) -> bool
    {
        match self {
            Self::Flag(flag,) => *flag,
            Self::Reason(_,) => true,
        }
    }
}

/// Returns whether an optional deprecation marker flags the item.
pub fn is_deprecated(deprecated: Option<&Deprecation,>,) -> bool
{
    deprecated.is_some_and(Deprecation::is_deprecated,)
}

/// Type annotation as written in source.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Type
{
    /// Type text, e.g. `string | undefined`.
    #[serde(default)]
    pub text: String,
}

/// Member visibility.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash,)]
#[serde(rename_all = "lowercase")]
pub enum Privacy
{
    /// Part of the public API.
    Public,
    /// Internal.
    Private,
    /// Visible to subclasses only.
    Protected,
}

/// A class field or method.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
#[serde(rename_all = "camelCase")]
pub struct ClassMember
{
    /// Either `field` or `method`.
    #[serde(default)]
    pub kind:        String,
    /// Member name.
    #[serde(default)]
    pub name:        String,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
    /// Field type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_:       Option<Type,>,
    /// Initial value as written in source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default:     Option<String,>,
    /// Visibility, public when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy:     Option<Privacy,>,
    /// Static members belong to the class, not to instances.
    #[serde(default, rename = "static")]
    pub is_static:   bool,
    /// Read-only fields.
    #[serde(default)]
    pub readonly:    bool,
    /// Attribute reflected by the field, when analyzers record it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute:   Option<String,>,
    /// Deprecation marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated:  Option<Deprecation,>,
    /// Method parameters.
    #[serde(default)]
    pub parameters:  Vec<Parameter,>,
    /// Method return value.
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_:     Option<Return,>,
}

impl ClassMember
{
    /// Returns `true` for members without private or protected visibility.
    pub fn is_public(&self,) -> bool
    {
        matches!(self.privacy, None | Some(Privacy::Public))
    }
}

/// A method parameter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Parameter
{
    /// Parameter name.
    #[serde(default)]
    pub name:        String,
    /// Parameter type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_:       Option<Type,>,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
}

/// A method return value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Return
{
    /// Return type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_:       Option<Type,>,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
}

/// An observed attribute.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
#[serde(rename_all = "camelCase")]
pub struct Attribute
{
    /// Attribute name.
    #[serde(default)]
    pub name:        String,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
    /// Attribute type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_:       Option<Type,>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default:     Option<String,>,
    /// Name of the field the attribute is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name:  Option<String,>,
    /// Deprecation marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated:  Option<Deprecation,>,
}

/// A dispatched event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Event
{
    /// Event name.
    #[serde(default)]
    pub name:        String,
    /// Event type, e.g. `CustomEvent<{ value: string }>`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_:       Option<Type,>,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
    /// Deprecation marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated:  Option<Deprecation,>,
}

/// A CSS custom property.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct CssCustomProperty
{
    /// Property name including the leading `--`.
    #[serde(default)]
    pub name:        String,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default:     Option<String,>,
    /// CSS syntax string, e.g. `<color>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax:      Option<String,>,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
    /// Deprecation marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated:  Option<Deprecation,>,
}

/// A named item with a description: slots, CSS parts, and CSS states.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct NamedItem
{
    /// Item name. Empty for the default slot.
    #[serde(default)]
    pub name:        String,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String,>,
    /// Deprecation marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated:  Option<Deprecation,>,
}

/// A slot. The default slot has an empty name.
pub type Slot = NamedItem;
/// A CSS shadow part.
pub type CssPart = NamedItem;
/// A custom CSS state.
pub type CssState = NamedItem;

impl Manifest
{
    /// Decodes a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`](Error::Manifest) when the text is not a
    /// JSON document of the expected shape.
    pub fn from_json(contents: &str,) -> Result<Self, Error,>
    {
        serde_json::from_str(contents,).map_err(error::manifest_error,)
    }

    /// Iterates over every declaration that registers a custom element.
    pub fn custom_elements(&self,) -> impl Iterator<Item = &Declaration,>
    {
        self.modules
            .iter()
            .flat_map(|module| module.declarations.iter(),)
            .filter(|declaration| declaration.tag_name.is_some(),)
    }

    /// Returns the first declaration registered under `tag`.
    pub fn find_element(&self, tag: &str,) -> Option<&Declaration,>
    {
        self.custom_elements().find(|declaration| declaration.tag_name.as_deref() == Some(tag),)
    }

    /// Returns the tag names of every custom element, in manifest order.
    pub fn tag_names(&self,) -> Vec<&str,>
    {
        self.custom_elements().filter_map(|declaration| declaration.tag_name.as_deref(),).collect()
    }
}

/// Loads a manifest from the provided JSON file path.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Manifest`](Error::Manifest) when it cannot be decoded.
pub fn load_manifest(path: &Path,) -> Result<Manifest, Error,>
{
    debug!("Reading manifest from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    Manifest::from_json(&contents,)
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use super::{Deprecation, Manifest, Privacy, is_deprecated, load_manifest};
    use crate::Error;

    const MANIFEST: &str = r#"{
      "schemaVersion": "2.0.0",
      "modules": [
        {
          "kind": "javascript-module",
          "path": "src/utils.js",
          "declarations": [{ "kind": "function", "name": "helper" }]
        },
        {
          "kind": "javascript-module",
          "path": "src/my-card.js",
          "declarations": [
            {
              "kind": "class",
              "name": "MyCard",
              "tagName": "my-card",
              "customElement": true,
              "deprecated": "use my-panel",
              "members": [
                { "kind": "field", "name": "open", "type": { "text": "boolean" }, "static": false, "privacy": "public" },
                { "kind": "method", "name": "toggle", "return": { "type": { "text": "void" } } }
              ],
              "slots": [{ "name": "", "description": "Card content" }],
              "cssStates": [{ "name": "expanded" }],
              "unknownField": 42
            }
          ],
          "exports": [
            { "kind": "custom-element-definition", "name": "my-card", "declaration": { "name": "MyCard", "module": "src/my-card.js" } }
          ]
        }
      ]
    }"#;

    #[test]
    fn decodes_manifest_and_ignores_unknown_fields()
    {
        let manifest = Manifest::from_json(MANIFEST,).expect("expected manifest to decode",);
        assert_eq!(manifest.schema_version, "2.0.0");
        assert_eq!(manifest.modules.len(), 2);

        let card = manifest.find_element("my-card",).expect("expected my-card",);
        assert_eq!(card.name, "MyCard");
        assert!(card.custom_element);
        assert_eq!(card.members.len(), 2);
        assert_eq!(card.members[0].privacy, Some(Privacy::Public));
        assert_eq!(card.members[1].return_.as_ref().and_then(|r| r.type_.as_ref()).map(|t| t.text.as_str()), Some("void"));
        assert_eq!(card.slots[0].name, "");
        assert_eq!(card.css_states[0].name, "expanded");
        assert_eq!(card.deprecated, Some(Deprecation::Reason("use my-panel".to_owned())));
        assert_eq!(manifest.modules[1].exports[0].declaration.name, "MyCard");
    }

    #[test]
    fn custom_elements_skip_plain_declarations()
    {
        let manifest = Manifest::from_json(MANIFEST,).expect("expected manifest to decode",);
        assert_eq!(manifest.tag_names(), ["my-card"]);
        assert!(manifest.find_element("helper").is_none());
        assert!(manifest.find_element("missing-tag").is_none());
    }

    #[test]
    fn deprecation_markers_follow_flag_or_reason()
    {
        assert!(is_deprecated(Some(&Deprecation::Flag(true))));
        assert!(!is_deprecated(Some(&Deprecation::Flag(false))));
        assert!(is_deprecated(Some(&Deprecation::Reason(String::new()))));
        assert!(!is_deprecated(None));
    }

    #[test]
    fn empty_document_decodes_to_empty_manifest()
    {
        let manifest = Manifest::from_json("{}",).expect("expected empty manifest",);
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn from_json_reports_manifest_errors()
    {
        let error = Manifest::from_json("[1, 2",).expect_err("expected decode failure",);
        assert!(matches!(error, Error::Manifest { .. }));
    }

    #[test]
    fn load_manifest_reads_from_disk()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "{MANIFEST}").expect("expected write to succeed",);

        let manifest = load_manifest(file.path(),).expect("expected load to succeed",);
        assert_eq!(manifest.tag_names(), ["my-card"]);
    }

    #[test]
    fn load_manifest_reports_io_errors()
    {
        let path = std::path::Path::new("/nonexistent/custom-elements.json",);
        let error = load_manifest(path,).expect_err("expected io error",);
        assert!(matches!(error, Error::Io { .. }));
    }
}
