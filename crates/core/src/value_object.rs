//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances holding the same values are
/// the same value. Items and quality bounds are modelled this way; a day's
/// update produces a new value rather than mutating a shared one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct QualityBounds { max: i32, min: i32 }
///
/// impl ValueObject for QualityBounds {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
