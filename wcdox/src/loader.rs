// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Loading of partial user configuration documents.
//!
//! User configuration is kept as an untyped JSON document until it has been
//! merged onto the defaults, so partial documents may omit any key.

use std::{fs, path::Path};

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{self, Error},
    merge::merge_layers,
};

/// Encoding of a user configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum ConfigFormat
{
    /// JSON document.
    Json,
    /// YAML document. JSON is valid YAML, so this is also the fallback.
    Yaml,
}

impl ConfigFormat
{
    /// Picks the format from the file extension, defaulting to YAML.
    pub fn from_path(path: &Path,) -> Self
    {
        match path.extension().and_then(|extension| extension.to_str(),) {
            Some(extension,) if extension.eq_ignore_ascii_case("json",) => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parses a partial configuration document.
///
/// An empty document yields an empty object.
///
/// # Errors
///
/// Returns [`Error::Config`](Error::Config) for malformed JSON,
/// [`Error::Parse`](Error::Parse) for malformed YAML, and
/// [`Error::Validation`](Error::Validation) when the document is not a
/// mapping.
pub fn parse_user_config(contents: &str, format: ConfigFormat,) -> Result<Value, Error,>
{
    if contents.trim().is_empty() {
        return Ok(Value::Object(Map::new(),),);
    }

    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(contents,).map_err(error::config_error,)?,
        ConfigFormat::Yaml => serde_yaml::from_str(contents,)?,
    };

    match value {
        Value::Null => Ok(Value::Object(Map::new(),),),
        Value::Object(_,) => Ok(value,),
        _ => Err(Error::validation("configuration document must be a mapping",),),
    }
}

/// Loads a partial configuration document from disk.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// propagates the errors of [`parse_user_config`].
pub fn load_user_config(path: &Path,) -> Result<Value, Error,>
{
    debug!("Reading configuration from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_user_config(&contents, ConfigFormat::from_path(path,),)
}

/// Loads several configuration documents and merges them in order, later
/// files taking precedence.
///
/// # Errors
///
/// Propagates the first error returned by [`load_user_config`].
pub fn load_user_configs<P,>(paths: &[P],) -> Result<Value, Error,>
where
    P: AsRef<Path,>,
{
    let layers = paths
        .iter()
        .map(|path| load_user_config(path.as_ref(),),)
        .collect::<Result<Vec<_,>, _,>>()?;
    Ok(merge_layers(layers,),)
}
