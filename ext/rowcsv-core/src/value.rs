use crate::numeric::float_text;
use num::BigInt;
use ordered_float::OrderedFloat;
use std::fmt;
use std::sync::Arc;

/// Text form of a null field
pub const NULL_TEXT: &str = "null";

/// A dynamically typed scalar field of a typed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    // Numeric types
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    /// Half-precision value widened to f32
    ///
    /// The natural text is that of the widened f32, so an f16 holding the
    /// nearest half to `0.1` reads as `0.099975586`, the exact value stored.
    Float16(OrderedFloat<f32>),
    Float32(OrderedFloat<f32>),
    Float64(OrderedFloat<f64>),

    // Decimal types
    Decimal128(i128, i8),   // unscaled value, scale
    Decimal256(BigInt, i8), // unscaled value, scale

    // Basic types
    Boolean(bool),
    String(Arc<str>),

    // Null value
    Null,
}

impl std::hash::Hash for FieldValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FieldValue::Int8(i) => i.hash(state),
            FieldValue::Int16(i) => i.hash(state),
            FieldValue::Int32(i) => i.hash(state),
            FieldValue::Int64(i) => i.hash(state),
            FieldValue::UInt8(i) => i.hash(state),
            FieldValue::UInt16(i) => i.hash(state),
            FieldValue::UInt32(i) => i.hash(state),
            FieldValue::UInt64(i) => i.hash(state),
            FieldValue::Float16(f) => f.hash(state),
            FieldValue::Float32(f) => f.hash(state),
            FieldValue::Float64(f) => f.hash(state),
            FieldValue::Decimal128(d, scale) => {
                d.hash(state);
                scale.hash(state);
            }
            FieldValue::Decimal256(d, scale) => {
                d.hash(state);
                scale.hash(state);
            }
            FieldValue::Boolean(b) => b.hash(state),
            FieldValue::String(s) => s.hash(state),
            FieldValue::Null => 0_i32.hash(state),
        }
    }
}

impl FieldValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Get the type name of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int8(_) => "Int8",
            FieldValue::Int16(_) => "Int16",
            FieldValue::Int32(_) => "Int32",
            FieldValue::Int64(_) => "Int64",
            FieldValue::UInt8(_) => "UInt8",
            FieldValue::UInt16(_) => "UInt16",
            FieldValue::UInt32(_) => "UInt32",
            FieldValue::UInt64(_) => "UInt64",
            FieldValue::Float16(_) => "Float16",
            FieldValue::Float32(_) => "Float32",
            FieldValue::Float64(_) => "Float64",
            FieldValue::Decimal128(_, _) => "Decimal128",
            FieldValue::Decimal256(_, _) => "Decimal256",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::String(_) => "String",
            FieldValue::Null => "Null",
        }
    }
}

/// Natural text form of the value, the text a record field is judged by
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int8(i) => write!(f, "{}", i),
            FieldValue::Int16(i) => write!(f, "{}", i),
            FieldValue::Int32(i) => write!(f, "{}", i),
            FieldValue::Int64(i) => write!(f, "{}", i),
            FieldValue::UInt8(i) => write!(f, "{}", i),
            FieldValue::UInt16(i) => write!(f, "{}", i),
            FieldValue::UInt32(i) => write!(f, "{}", i),
            FieldValue::UInt64(i) => write!(f, "{}", i),
            FieldValue::Float16(v) | FieldValue::Float32(v) => f.write_str(&float_text(v.0)),
            FieldValue::Float64(v) => f.write_str(&float_text(v.0)),
            FieldValue::Decimal128(d, scale) => {
                f.write_str(&format_decimal(&d.unsigned_abs().to_string(), *d < 0, *scale))
            }
            FieldValue::Decimal256(d, scale) => {
                let digits = d.magnitude().to_string();
                f.write_str(&format_decimal(&digits, d.sign() == num::bigint::Sign::Minus, *scale))
            }
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Null => f.write_str(NULL_TEXT),
        }
    }
}

/// Place the decimal point `scale` digits from the right of `digits`
fn format_decimal(digits: &str, negative: bool, scale: i8) -> String {
    let mut out = String::with_capacity(digits.len() + 4);
    if negative {
        out.push('-');
    }

    if scale <= 0 {
        out.push_str(digits);
        if digits != "0" {
            out.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
        }
        return out;
    }

    let scale = scale as usize;
    if digits.len() > scale {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(scale - digits.len()));
        out.push_str(digits);
    }
    out
}
