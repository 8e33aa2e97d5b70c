// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Documentation rendering for custom elements.
//!
//! The library reads a custom elements manifest and renders HTML sections
//! documenting an element's attributes and properties, slots, methods,
//! events, CSS custom properties, CSS parts, CSS states, and import snippets.
//! Display options come from a default configuration deep-merged with a
//! partial user configuration and held, together with the manifest, in a
//! [`DoxStore`] that is passed to every renderer.

mod anchor;
mod config;
mod error;
mod feature;
mod loader;
mod manifest;
mod markdown;
mod merge;
mod metadata;
mod render;
mod rows;
mod store;

pub use anchor::{AnchorId, scoped_anchor};
pub use config::{DoxConfig, DoxOptions, ImportConfig, ImportsConfig, SectionConfig};
pub use error::{Error, io_error, output_io_error};
pub use feature::FeatureKey;
pub use loader::{ConfigFormat, load_user_config, load_user_configs, parse_user_config};
pub use manifest::{
    Attribute, ClassMember, CssCustomProperty, CssPart, CssState, Declaration, Deprecation, Event,
    Export, Manifest, Module, NamedItem, Parameter, Privacy, Reference, Return, Slot, Type,
    is_deprecated, load_manifest,
};
pub use markdown::{InlineMarkdown, MarkdownRenderer, escape_html};
pub use merge::{deep_merge, merge_layers};
pub use metadata::{ElementMetadata, PropItem};
pub use render::DocRenderer;
pub use rows::{DefaultRows, RowRenderer, event_type, method_signature};
pub use store::DoxStore;
