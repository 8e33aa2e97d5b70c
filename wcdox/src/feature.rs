// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Documentation sections addressable from `dox.apiOrder`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Documentation section identifiers in their default order.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash,)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKey
{
    /// Import snippets.
    Imports,
    /// Attributes and properties.
    Props,
    /// Slots.
    Slots,
    /// Methods.
    Methods,
    /// Events.
    Events,
    /// CSS custom properties.
    CssProps,
    /// CSS shadow parts.
    CssParts,
    /// Custom CSS states.
    CssStates,
}

impl FeatureKey
{
    /// Every section in default order.
    pub const ALL: [Self; 8] = [
        Self::Imports,
        Self::Props,
        Self::Slots,
        Self::Methods,
        Self::Events,
        Self::CssProps,
        Self::CssParts,
        Self::CssStates,
    ];

    /// Name used in `dox.apiOrder`.
    pub fn as_str(self,) -> &'static str
    {
        match self {
            Self::Imports => "imports",
            Self::Props => "props",
            Self::Slots => "slots",
            Self::Methods => "methods",
            Self::Events => "events",
            Self::CssProps => "css-props",
            Self::CssParts => "css-parts",
            Self::CssStates => "css-states",
        }
    }
}

impl fmt::Display for FeatureKey
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_str(),)
    }
}

impl FromStr for FeatureKey
{
    type Err = Error;

    fn from_str(value: &str,) -> Result<Self, Self::Err,>
    {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == trimmed,)
            .ok_or_else(|| Error::validation(format!("unknown documentation section '{trimmed}'"),),)
    }
}
