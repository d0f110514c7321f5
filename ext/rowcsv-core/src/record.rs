//! Capability traits for the input side of the conversion
//!
//! A record only has to report its length and hand out the natural text of
//! each field by position. Null fields report `None`.

use crate::numeric::float_text;
use crate::value::FieldValue;
use std::borrow::Cow;
use std::sync::Arc;

/// One field of a record
pub trait FieldText {
    /// Natural text form of the field, `None` when the field is null
    fn text(&self) -> Option<Cow<'_, str>>;
}

/// An ordered, fixed-length sequence of fields
pub trait Record {
    /// Number of fields
    fn len(&self) -> usize;

    /// Whether the record has no fields
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Natural text form of the field at `index`, `None` when it is null
    ///
    /// Callers only ask for indices below [`Record::len`].
    fn field_text(&self, index: usize) -> Option<Cow<'_, str>>;
}

impl FieldText for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl FieldText for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl FieldText for Arc<str> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&**self))
    }
}

impl FieldText for FieldValue {
    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::String(s) => Some(Cow::Borrowed(&**s)),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl<T: FieldText + ?Sized> FieldText for &T {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }
}

impl<T: FieldText> FieldText for Option<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|field| field.text())
    }
}

macro_rules! impl_field_text_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldText for $ty {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_field_text_display!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, bool);

impl FieldText for f32 {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(float_text(*self)))
    }
}

impl FieldText for f64 {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(float_text(*self)))
    }
}

impl<F: FieldText> Record for [F] {
    fn len(&self) -> usize {
        <[F]>::len(self)
    }

    fn field_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self[index].text()
    }
}

impl<F: FieldText> Record for Vec<F> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn field_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self[index].text()
    }
}

impl<F: FieldText, const N: usize> Record for [F; N] {
    fn len(&self) -> usize {
        N
    }

    fn field_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self[index].text()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn field_text(&self, index: usize) -> Option<Cow<'_, str>> {
        (**self).field_text(index)
    }
}
