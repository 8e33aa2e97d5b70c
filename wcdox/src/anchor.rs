// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Anchor ids for documentation headings.
//!
//! Several elements can be documented on one page, so heading ids are scoped
//! by the element's tag. Ids contain only lowercase ASCII alphanumeric
//! characters separated by single hyphens.

/// Builder for anchor ids derived from free-form text.
#[derive(Debug, Clone, Copy,)]
pub struct AnchorId<'input,>
{
    source: &'input str,
}

impl<'input,> AnchorId<'input,>
{
    /// Creates a builder over the provided text.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
        }
    }

    /// Builds the id, or `None` when the text has no usable characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use wcdox::AnchorId;
    ///
    /// let id = AnchorId::builder(" My Button/CSS parts ",).build();
    /// assert_eq!(id.as_deref(), Some("my-button-css-parts"));
    /// ```
    pub fn build(self,) -> Option<String,>
    {
        let mut id = String::with_capacity(self.source.len(),);
        let mut previous_hyphen = false;

        for candidate in self.source.trim().chars() {
            if candidate.is_ascii_alphanumeric() {
                id.push(candidate.to_ascii_lowercase(),);
                previous_hyphen = false;
            } else if !previous_hyphen && !id.is_empty() {
                id.push('-',);
                previous_hyphen = true;
            }
        }

        while id.ends_with('-',) {
            id.pop();
        }

        if id.is_empty() { None } else { Some(id,) }
    }
}

/// Scopes a section heading id by the documented tag.
///
/// Falls back to the unscoped heading id when the tag yields no usable
/// characters, and to the tag alone when the heading id is blank.
pub fn scoped_anchor(tag: &str, heading_id: &str,) -> String
{
    let scope = AnchorId::builder(tag,).build();
    let section = AnchorId::builder(heading_id,).build();

    match (scope, section,) {
        (Some(scope,), Some(section,),) => format!("{scope}-{section}"),
        (Some(only,), None,) | (None, Some(only,),) => only,
        (None, None,) => String::new(),
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{AnchorId, scoped_anchor};

    proptest! {
        #[test]
        fn anchor_contains_only_allowed_characters(input in "[A-Za-z0-9._/ <>-]{1,48}") {
            let id = AnchorId::builder(&input).build();
            let well_formed = id.is_none_or(|value| {
                !value.starts_with('-')
                    && !value.ends_with('-')
                    && !value.contains("--")
                    && value.chars().all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '-'))
            });
            prop_assert!(well_formed);
        }
    }

    #[test]
    fn builder_collapses_separators()
    {
        let id = AnchorId::builder("  Multi--Separator__Value  ",).build().expect("expected id",);
        assert_eq!(id, "multi-separator-value");
    }

    #[test]
    fn builder_returns_none_for_empty_input()
    {
        assert!(AnchorId::builder("   ").build().is_none());
        assert!(AnchorId::builder("***").build().is_none());
    }

    #[test]
    fn scoped_anchor_prefixes_tag()
    {
        assert_eq!(scoped_anchor("my-card", "css-props"), "my-card-css-props");
    }

    #[test]
    fn scoped_anchor_falls_back_when_parts_are_blank()
    {
        assert_eq!(scoped_anchor("***", "slots"), "slots");
        assert_eq!(scoped_anchor("my-card", "  "), "my-card");
        assert_eq!(scoped_anchor("", ""), "");
    }
}
