//! Attribute maps - formatting state attached to operations.
//!
//! An attribute map is a plain string-to-string map (e.g. `bold -> true`,
//! `color -> red`). Keys are unique and ordering carries no meaning. The two
//! functions here are the stateless algebra used by [`Delta::compose`] and
//! [`Delta::diff`]:
//! - [`compose`] layers a new formatting change on top of an existing one
//! - [`diff`] computes the minimal set of writes turning one formatting
//!   state into another
//!
//! [`Delta::compose`]: crate::delta::Delta::compose
//! [`Delta::diff`]: crate::delta::Delta::diff

use std::collections::HashMap;

/// Formatting attributes carried by an operation.
pub type AttributeMap = HashMap<String, String>;

/// Apply format change `b` on top of existing format `a`.
///
/// `b` wins on overlapping keys, `a` fills the gaps.
pub fn compose(a: &AttributeMap, b: &AttributeMap) -> AttributeMap {
    let mut merged = b.clone();
    for (key, value) in a {
        if !b.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// The minimal set of key/value writes needed to turn state `a` into `b`.
///
/// Keys present in `a` but removed in `b` emit nothing; removal is not
/// representable in the result.
pub fn diff(a: &AttributeMap, b: &AttributeMap) -> AttributeMap {
    let mut changed = AttributeMap::new();
    for key in a.keys().chain(b.keys()) {
        if a.get(key) != b.get(key) {
            if let Some(value) = b.get(key) {
                changed.insert(key.clone(), value.clone());
            }
        }
    }
    changed
}

/// Build an [`AttributeMap`] literal: `attrs! { "bold" => "true" }`.
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::attributes::AttributeMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::attributes::AttributeMap::new();
        $(map.insert($key.to_string(), $value.to_string());)+
        map
    }};
}
