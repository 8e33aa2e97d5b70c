// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Recursive merge of configuration documents.
//!
//! Objects are merged key by key. Every other value kind, including arrays
//! and `null`, is a leaf: the overlay replaces the base wholesale, so arrays
//! are never concatenated or merged element-wise.

use serde_json::{Map, Value};

/// Deep merges `overlay` on top of `base` and returns a new document.
///
/// * both values are objects: keys only in `base` are copied, keys only in
///   `overlay` are copied, shared keys are merged recursively;
/// * otherwise the overlay value is returned as-is.
///
/// Neither input is modified. The result of each key depends only on whether
/// the key is present in `base` and `overlay`, so visitation order does not
/// affect the outcome.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wcdox::deep_merge;
///
/// let base = json!({"a": {"x": 1, "y": 2}, "list": [1, 2, 3]});
/// let overlay = json!({"a": {"y": 3, "z": 4}, "list": [9]});
///
/// let merged = deep_merge(&base, &overlay,);
/// assert_eq!(merged, json!({"a": {"x": 1, "y": 3, "z": 4}, "list": [9]}));
/// ```
pub fn deep_merge(base: &Value, overlay: &Value,) -> Value
{
    match (base, overlay,) {
        (Value::Object(base_map,), Value::Object(overlay_map,),) => {
            Value::Object(merge_maps(base_map, overlay_map,),)
        }
        (_, overlay,) => overlay.clone(),
    }
}

fn merge_maps(base: &Map<String, Value,>, overlay: &Map<String, Value,>,) -> Map<String, Value,>
{
    let mut merged = Map::with_capacity(base.len() + overlay.len(),);

    for (key, base_value,) in base {
        let value = match overlay.get(key,) {
            Some(overlay_value,) => deep_merge(base_value, overlay_value,),
            None => base_value.clone(),
        };
        merged.insert(key.clone(), value,);
    }

    for (key, overlay_value,) in overlay {
        if !base.contains_key(key,) {
            merged.insert(key.clone(), overlay_value.clone(),);
        }
    }

    merged
}

/// Merges several layers in order, the first acting as the base and each
/// following layer taking precedence over everything before it.
///
/// Returns an empty object when no layers are supplied.
pub fn merge_layers<I,>(layers: I,) -> Value
where
    I: IntoIterator<Item = Value,>,
{
    layers
        .into_iter()
        .fold(Value::Object(Map::new(),), |accumulated, layer| deep_merge(&accumulated, &layer,),)
}
