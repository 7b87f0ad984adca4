//! Value object trait: equality by value, not identity.
//!
//! Form snapshots, product contexts and deep links carry no identity of their
//! own. Two snapshots holding the same field values are the same snapshot.

/// Marker trait for value objects.
///
/// Value objects are **immutable once handed out** and **compared by value**.
/// Stores own their current value and hand out clones or references; they
/// never give out a mutable handle to it.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Default)]
/// struct ContactSnapshot {
///     name: String,
///     email: String,
/// }
///
/// impl ValueObject for ContactSnapshot {}
///
/// let a = ContactSnapshot { name: "Asha".into(), email: "a@x.com".into() };
/// let b = a.clone();
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
