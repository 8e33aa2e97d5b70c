// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Holder of the effective configuration and the manifest.
//!
//! A [`DoxStore`] is built once at start-up, set up with the manifest and an
//! optional partial configuration, and then passed by reference to every
//! renderer. Reads are synchronous and infallible.
//!
//! The merged JSON document is the effective configuration. Keys the typed
//! [`DoxConfig`] does not know about are kept in it and returned by
//! [`DoxStore::config_value`].

use serde_json::Value;
use tracing::{debug, info};

use crate::{config::DoxConfig, error::Error, manifest::Manifest, merge::deep_merge};

/// Effective configuration and manifest shared by renderers.
///
/// Each call to [`setup`](Self::setup) merges the supplied partial
/// configuration onto the configuration currently held, so repeated calls
/// compound. Call [`reset`](Self::reset) first to start again from the
/// defaults.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wcdox::{DoxStore, Manifest};
///
/// let mut store = DoxStore::new();
/// store.setup(Manifest::default(), Some(&json!({"imports": {"heading": "Custom"}})),)?;
///
/// assert_eq!(store.config().imports.heading, "Custom");
/// assert_eq!(store.config().props.heading, "Attributes and Properties");
/// # Ok::<(), wcdox::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq,)]
pub struct DoxStore
{
    effective: Value,
    config:    DoxConfig,
    manifest:  Manifest,
}

impl Default for DoxStore
{
    fn default() -> Self
    {
        let config = DoxConfig::default();
        Self {
            effective: config.to_value(),
            config,
            manifest: Manifest::default(),
        }
    }
}

impl DoxStore
{
    /// Creates a store holding the default configuration and an empty
    /// manifest.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Merges `partial` onto the current configuration and stores `manifest`
    /// as-is.
    ///
    /// Passing `None` keeps the current configuration and only replaces the
    /// manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](Error::Config) when the merged document does
    /// not decode into [`DoxConfig`]. The store is left unchanged in that
    /// case.
    pub fn setup(&mut self, manifest: Manifest, partial: Option<&Value,>,) -> Result<(), Error,>
    {
        if let Some(partial,) = partial {
            let merged = deep_merge(&self.effective, partial,);
            self.config = DoxConfig::from_value(merged.clone(),)?;
            self.effective = merged;
            debug!("Merged user configuration onto the current configuration");
        }

        info!(
            "Configured documentation for {} custom element(s)",
            manifest.custom_elements().count()
        );
        self.manifest = manifest;

        Ok((),)
    }

    /// Restores the default configuration and an empty manifest.
    pub fn reset(&mut self,)
    {
        *self = Self::default();
    }

    /// Effective configuration.
    pub fn config(&self,) -> &DoxConfig
    {
        &self.config
    }

    /// Effective configuration as a JSON document, including keys that have
    /// no typed counterpart.
    pub fn config_value(&self,) -> Value
    {
        self.effective.clone()
    }

    /// Manifest supplied by the last setup.
    pub fn manifest(&self,) -> &Manifest
    {
        &self.manifest
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;

    use super::DoxStore;
    use crate::{
        DoxConfig, Error,
        manifest::{Declaration, Manifest, Module},
    };

    fn manifest() -> Manifest
    {
        Manifest {
            schema_version: "2.0.0".to_owned(),
            readme:         None,
            modules:        vec![Module {
                kind: "javascript-module".to_owned(),
                path: "src/my-tabs.js".to_owned(),
                declarations: vec![Declaration {
                    kind: "class".to_owned(),
                    name: "MyTabs".to_owned(),
                    tag_name: Some("my-tabs".to_owned(),),
                    custom_element: true,
                    ..Declaration::default()
                }],
                exports: Vec::new(),
            }],
        }
    }

    #[test]
    fn new_store_holds_defaults()
    {
        let store = DoxStore::new();
        assert_eq!(store.config(), &DoxConfig::default());
        assert_eq!(store.manifest(), &Manifest::default());
    }

    #[test]
    fn setup_then_read_applies_overrides_and_keeps_defaults()
    {
        let mut store = DoxStore::new();
        store
            .setup(manifest(), Some(&json!({"imports": {"heading": "Custom"}}),),)
            .expect("expected setup to succeed",);

        assert_eq!(store.config().imports.heading, "Custom");
        assert_eq!(store.config().imports.heading_id, "imports");
        assert_eq!(store.config().props.heading, "Attributes and Properties");
        assert_eq!(store.manifest(), &manifest());
    }

    #[test]
    fn setup_without_partial_keeps_default_configuration()
    {
        let mut store = DoxStore::new();
        store.setup(manifest(), None,).expect("expected setup to succeed",);

        assert_eq!(store.config(), &DoxConfig::default());
        assert_eq!(store.config_value(), DoxConfig::default().to_value());
    }

    #[test]
    fn setup_with_empty_partial_keeps_default_configuration()
    {
        let mut store = DoxStore::new();
        store.setup(manifest(), Some(&json!({}),),).expect("expected setup to succeed",);
        assert_eq!(store.config(), &DoxConfig::default());
    }

    #[test]
    fn arrays_in_partial_replace_defaults()
    {
        let mut store = DoxStore::new();
        store
            .setup(
                manifest(),
                Some(&json!({"dox": {"apiOrder": ["slots", "props"]}, "slots": {"headings": ["Slot"]}}),),
            )
            .expect("expected setup to succeed",);

        assert_eq!(store.config().dox.api_order, ["slots", "props"]);
        assert_eq!(store.config().slots.headings, ["Slot"]);
        assert_eq!(store.config().slots.heading, "Slots");
    }

    #[test]
    fn repeated_setup_compounds_until_reset()
    {
        let mut store = DoxStore::new();
        store
            .setup(manifest(), Some(&json!({"hideOnEmpty": false}),),)
            .expect("expected first setup to succeed",);
        store
            .setup(manifest(), Some(&json!({"headingLevel": 2}),),)
            .expect("expected second setup to succeed",);

        assert!(!store.config().hide_on_empty);
        assert_eq!(store.config().heading_level, 2);

        store.reset();
        store
            .setup(manifest(), Some(&json!({"headingLevel": 4}),),)
            .expect("expected setup after reset to succeed",);
        assert!(store.config().hide_on_empty);
        assert_eq!(store.config().heading_level, 4);
    }

    #[test]
    fn invalid_partial_leaves_store_unchanged()
    {
        let mut store = DoxStore::new();
        let error = store
            .setup(manifest(), Some(&json!({"headingLevel": "three"}),),)
            .expect_err("expected setup to fail",);

        assert!(matches!(error, Error::Config { .. }));
        assert_eq!(store, DoxStore::new());
    }

    #[test]
    fn user_only_keys_survive_setup()
    {
        let mut store = DoxStore::new();
        store
            .setup(
                manifest(),
                Some(&json!({"props": {"extraColumn": "x"}, "myFeature": {"heading": "Mine"}}),),
            )
            .expect("expected setup to succeed",);

        let value = store.config_value();
        assert_eq!(value["props"]["extraColumn"], json!("x"));
        assert_eq!(value["props"]["heading"], json!("Attributes and Properties"));
        assert_eq!(value["myFeature"], json!({"heading": "Mine"}));

        store
            .setup(manifest(), Some(&json!({"myFeature": {"headingId": "mine"}}),),)
            .expect("expected second setup to succeed",);
        assert_eq!(
            store.config_value()["myFeature"],
            json!({"heading": "Mine", "headingId": "mine"})
        );
    }

    #[test]
    fn null_override_replaces_leaf()
    {
        let mut store = DoxStore::new();
        store
            .setup(manifest(), Some(&json!({"props": {"description": null}}),),)
            .expect("expected null override to be accepted",);

        assert_eq!(store.config_value()["props"]["description"], json!(null));
        assert_eq!(store.config().props.description, "");
        assert_eq!(store.config().props.heading, "Attributes and Properties");
    }

    #[test]
    fn reset_restores_defaults()
    {
        let mut store = DoxStore::new();
        store
            .setup(manifest(), Some(&json!({"props": {"heading": "Props"}}),),)
            .expect("expected setup to succeed",);
        store.reset();
        assert_eq!(store, DoxStore::new());
        assert_eq!(store.config_value(), DoxConfig::default().to_value());
    }
}
