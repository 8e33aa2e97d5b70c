// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-feature metadata resolved for a single custom element.
//!
//! Resolution is a linear scan over the manifest declarations. Fields are
//! joined with the attributes bound to them so that each property or
//! attribute appears exactly once in the props table.
use std::collections::HashSet;

use serde::Serialize;

use crate::manifest::{
    Attribute, ClassMember, CssCustomProperty, CssPart, CssState, Declaration, Deprecation,
    Event, Manifest, Slot, Type
};

/// A row of the attributes and properties table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropItem {
    /// Property name, or the attribute name for attribute-only entries.
    pub name:        String,
    /// Attribute bound to the property.
    pub attribute:   Option<String>,
    /// Markdown description.
    pub description: Option<String>,
    /// Type annotation.
    pub type_:       Option<Type>,
    /// Default value as written in source.
    pub default:     Option<String>,
    /// Read-only property.
    pub readonly:    bool,
    /// Deprecation marker.
    pub deprecated:  Option<Deprecation>
}

/// Everything documented for one custom element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementMetadata {
    /// Tag name.
    pub tag:        String,
    /// Class name of the declaration.
    pub class_name: String,
    /// Markdown description of the element.
    pub description: Option<String>,
    /// Public instance fields joined with their attributes.
    pub props:      Vec<PropItem>,
    /// Public instance methods.
    pub methods:    Vec<ClassMember>,
    /// Dispatched events.
    pub events:     Vec<Event>,
    /// Slots.
    pub slots:      Vec<Slot>,
    /// CSS custom properties.
    pub css_props:  Vec<CssCustomProperty>,
    /// CSS shadow parts.
    pub css_parts:  Vec<CssPart>,
    /// Custom CSS states.
    pub css_states: Vec<CssState>
}

impl ElementMetadata {
    /// Resolves metadata for `tag`, returning `None` when the manifest does
    /// not declare the element.
    pub fn resolve(manifest: &Manifest, tag: &str) -> Option<Self> {
        manifest.find_element(tag).map(|declaration| Self::from_declaration(tag, declaration))
    }

    /// Builds metadata from an already located declaration.
    pub fn from_declaration(tag: &str, declaration: &Declaration) -> Self {
        Self {
            tag:         tag.to_owned(),
            class_name:  declaration.name.clone(),
            description: declaration.description.clone(),
            props:       collect_props(declaration),
            methods:     declaration
                .members
                .iter()
                .filter(|member| member.kind == "method" && member.is_public() && !member.is_static)
                .cloned()
                .collect(),
            events:      declaration.events.clone(),
            slots:       declaration.slots.clone(),
            css_props:   declaration.css_properties.clone(),
            css_parts:   declaration.css_parts.clone(),
            css_states:  declaration.css_states.clone()
        }
    }

    /// Number of items documented for a feature. The imports section has no
    /// manifest items and always reports zero.
    pub fn count(&self, key: crate::FeatureKey) -> usize {
        use crate::FeatureKey;

        match key {
            FeatureKey::Imports => 0,
            FeatureKey::Props => self.props.len(),
            FeatureKey::Slots => self.slots.len(),
            FeatureKey::Methods => self.methods.len(),
            FeatureKey::Events => self.events.len(),
            FeatureKey::CssProps => self.css_props.len(),
            FeatureKey::CssParts => self.css_parts.len(),
            FeatureKey::CssStates => self.css_states.len()
        }
    }
}

fn collect_props(declaration: &Declaration) -> Vec<PropItem> {
    let mut bound_attributes = HashSet::new();
    let mut props = Vec::new();

    for member in declaration
        .members
        .iter()
        .filter(|member| member.kind == "field" && member.is_public() && !member.is_static)
    {
        let attribute = find_attribute(&declaration.attributes, member);
        if let Some(attribute) = attribute {
            bound_attributes.insert(attribute.name.as_str());
        }

        props.push(PropItem {
            name:        member.name.clone(),
            attribute:   member
                .attribute
                .clone()
                .or_else(|| attribute.map(|attribute| attribute.name.clone())),
            description: member
                .description
                .clone()
                .or_else(|| attribute.and_then(|attribute| attribute.description.clone())),
            type_:       member
                .type_
                .clone()
                .or_else(|| attribute.and_then(|attribute| attribute.type_.clone())),
            default:     member
                .default
                .clone()
                .or_else(|| attribute.and_then(|attribute| attribute.default.clone())),
            readonly:    member.readonly,
            deprecated:  member.deprecated.clone()
        });
    }

    for attribute in &declaration.attributes {
        if bound_attributes.contains(attribute.name.as_str()) {
            continue;
        }
        props.push(PropItem {
            name:        attribute.name.clone(),
            attribute:   Some(attribute.name.clone()),
            description: attribute.description.clone(),
            type_:       attribute.type_.clone(),
            default:     attribute.default.clone(),
            readonly:    false,
            deprecated:  attribute.deprecated.clone()
        });
    }

    props
}

fn find_attribute<'a>(attributes: &'a [Attribute], member: &ClassMember) -> Option<&'a Attribute> {
    attributes.iter().find(|attribute| {
        attribute.field_name.as_deref() == Some(member.name.as_str())
            || member.attribute.as_deref() == Some(attribute.name.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeatureKey, manifest::Privacy};

    fn field(name: &str) -> ClassMember {
        ClassMember {
            kind: "field".to_owned(),
            name: name.to_owned(),
            ..ClassMember::default()
        }
    }

    fn declaration() -> Declaration {
        let mut private = field("internal");
        private.privacy = Some(Privacy::Private);
        let mut statik = field("styles");
        statik.is_static = true;
        let mut label = field("label");
        label.type_ = Some(Type {
            text: "string".to_owned()
        });
        let mut size = field("size");
        size.readonly = true;

        let mut public_method = field("focus");
        public_method.kind = "method".to_owned();
        let mut protected_method = field("update");
        protected_method.kind = "method".to_owned();
        protected_method.privacy = Some(Privacy::Protected);

        Declaration {
            kind: "class".to_owned(),
            name: "MyInput".to_owned(),
            tag_name: Some("my-input".to_owned()),
            custom_element: true,
            members: vec![private, statik, label, size, public_method, protected_method],
            attributes: vec![
                Attribute {
                    name: "label".to_owned(),
                    field_name: Some("label".to_owned()),
                    description: Some("Visible label".to_owned()),
                    default: Some("''".to_owned()),
                    ..Attribute::default()
                },
                Attribute {
                    name: "aria-invalid".to_owned(),
                    ..Attribute::default()
                },
            ],
            slots: vec![Slot::default()],
            ..Declaration::default()
        }
    }

    fn manifest() -> Manifest {
        Manifest {
            modules: vec![crate::manifest::Module {
                declarations: vec![declaration()],
                ..crate::manifest::Module::default()
            }],
            ..Manifest::default()
        }
    }

    #[test]
    fn resolve_returns_none_for_unknown_tag() {
        assert!(ElementMetadata::resolve(&manifest(), "other-tag").is_none());
    }

    #[test]
    fn props_exclude_private_and_static_fields() {
        let metadata = ElementMetadata::resolve(&manifest(), "my-input").expect("element");
        let names: Vec<_> = metadata.props.iter().map(|prop| prop.name.as_str()).collect();
        assert_eq!(names, ["label", "size", "aria-invalid"]);
    }

    #[test]
    fn fields_are_joined_with_bound_attributes() {
        let metadata = ElementMetadata::resolve(&manifest(), "my-input").expect("element");
        let label = &metadata.props[0];
        assert_eq!(label.attribute.as_deref(), Some("label"));
        assert_eq!(label.description.as_deref(), Some("Visible label"));
        assert_eq!(label.type_.as_ref().map(|t| t.text.as_str()), Some("string"));
        assert_eq!(label.default.as_deref(), Some("''"));

        let size = &metadata.props[1];
        assert!(size.attribute.is_none());
        assert!(size.readonly);

        let unbound = &metadata.props[2];
        assert_eq!(unbound.attribute.as_deref(), Some("aria-invalid"));
    }

    #[test]
    fn methods_keep_public_instance_members_only() {
        let metadata = ElementMetadata::resolve(&manifest(), "my-input").expect("element");
        assert_eq!(metadata.methods.len(), 1);
        assert_eq!(metadata.methods[0].name, "focus");
        assert_eq!(metadata.class_name, "MyInput");
    }

    #[test]
    fn count_reports_items_per_feature() {
        let metadata = ElementMetadata::resolve(&manifest(), "my-input").expect("element");
        assert_eq!(metadata.count(FeatureKey::Props), 3);
        assert_eq!(metadata.count(FeatureKey::Slots), 1);
        assert_eq!(metadata.count(FeatureKey::Events), 0);
        assert_eq!(metadata.count(FeatureKey::Imports), 0);
    }
}
