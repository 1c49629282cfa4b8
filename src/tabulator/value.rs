use num_bigint::BigInt;

/// A single tabulated cell value, tagged with the domain it was computed in.
///
/// Values from different domains never mix inside one grid; the tag exists
/// so one [`Grid`](crate::tabulator::Grid) type can carry the result of any
/// mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 32-bit integer result (checked or wrapping domain).
    Int(i32),
    /// A 64-bit integer result.
    Long(i64),
    /// A 16-bit integer result.
    Short(i16),
    /// A double-precision result.
    Double(f64),
    /// An arbitrary-precision result.
    Big(BigInt),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Big(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Big(v) => write!(f, "{v}"),
        }
    }
}
