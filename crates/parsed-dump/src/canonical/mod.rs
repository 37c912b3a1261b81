//! Order-independent canonical forms of snapshot records.
//!
//! Canonical ordering is a pure function of content: children are sorted by
//! name with a stable sort, so ties keep their snapshot order.

pub mod class;
pub mod module;
pub mod signature;

pub use class::{canonicalize_class, canonicalize_class_template, ClassDetail};
pub use module::{canonicalize_module, ModuleDetail};
pub use signature::{duplicate_signatures, Signature};

/// Borrow `items` sorted by `key`, keeping the relative order of equal keys.
pub(crate) fn sorted_by_name<'a, T, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(*a).cmp(key(*b)));
    sorted
}

/// Empty collections are omitted from the dump rather than written as `[]`.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
