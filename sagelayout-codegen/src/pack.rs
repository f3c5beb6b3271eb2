//! Padding-minimizing field packing.
//!
//! Fields are ordered descending by alignment class, so same-alignment
//! fields end up adjacent and the target compiler inserts padding only
//! between classes. Within a class, attribute members sort before body
//! members, and declaration order is the final tie-break, making the
//! order a genuine total order over any extracted field set.

use crate::fields::FieldDescriptor;
use std::cmp::Ordering;

/// Compares two fields under the packing order.
#[must_use]
pub fn compare_fields(a: &FieldDescriptor, b: &FieldDescriptor) -> Ordering {
    b.alignment_class
        .cmp(&a.alignment_class)
        .then_with(|| b.is_attribute.cmp(&a.is_attribute))
        .then_with(|| a.order.cmp(&b.order))
}

/// Sorts a record type's fields into their final packed order.
pub fn pack_fields(fields: &mut [FieldDescriptor]) {
    fields.sort_by(compare_fields);
}
