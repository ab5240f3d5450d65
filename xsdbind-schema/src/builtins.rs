//! Built-in XML Schema kinds known to the compiler before any document is read.

use crate::names::QualifiedName;

/// A built-in scalar kind from the XML Schema namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinKind {
    /// Signed 8-bit integer.
    Byte,
    /// Unsigned 8-bit integer.
    UnsignedByte,
    /// Signed 16-bit integer.
    Short,
    /// Unsigned 16-bit integer.
    UnsignedShort,
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    UnsignedInt,
    /// Signed 64-bit integer.
    Long,
    /// Unsigned 64-bit integer.
    UnsignedLong,
    /// Unbounded integer, narrowed to 64 bits.
    Integer,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Decimal number, carried as 64-bit floating point.
    Decimal,
    /// Character string.
    String,
    /// URI reference.
    AnyUri,
    /// Language tag.
    Language,
    /// Boolean.
    Boolean,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time of day.
    DateTime,
}

/// Lexical family shared by several built-in kinds.
///
/// Kinds of one family are written and read with the same text rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFamily {
    /// Decimal integer digits.
    Integer,
    /// Decimal or scientific notation, plus `INF`, `-INF` and `NaN`.
    Float,
    /// Text taken verbatim.
    Text,
    /// `true`, `false`, `1` or `0`.
    Boolean,
    /// `YYYY-MM-DD`.
    Date,
    /// `hh:mm:ss[.fff]`.
    Time,
    /// `YYYY-MM-DDThh:mm:ss[.fff]`.
    DateTime,
}

impl BuiltinKind {
    /// Every built-in kind, in registration order.
    pub const ALL: [Self; 19] = [
        Self::Byte,
        Self::UnsignedByte,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::Integer,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::String,
        Self::AnyUri,
        Self::Language,
        Self::Boolean,
        Self::Date,
        Self::Time,
        Self::DateTime,
    ];

    /// Returns the local name in the XML Schema namespace.
    #[must_use]
    pub const fn xsd_name(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::UnsignedByte => "unsignedByte",
            Self::Short => "short",
            Self::UnsignedShort => "unsignedShort",
            Self::Int => "int",
            Self::UnsignedInt => "unsignedInt",
            Self::Long => "long",
            Self::UnsignedLong => "unsignedLong",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::AnyUri => "anyURI",
            Self::Language => "language",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "dateTime",
        }
    }

    /// Parses a built-in kind from its XML Schema local name.
    #[must_use]
    pub fn from_xsd_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.xsd_name() == name)
    }

    /// Returns the qualified name this kind is registered under.
    #[must_use]
    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::xs(self.xsd_name())
    }

    /// Returns the Rust type a value of this kind is held in.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Byte => "i8",
            Self::UnsignedByte => "u8",
            Self::Short => "i16",
            Self::UnsignedShort => "u16",
            Self::Int => "i32",
            Self::UnsignedInt => "u32",
            Self::Long | Self::Integer => "i64",
            Self::UnsignedLong => "u64",
            Self::Float => "f32",
            Self::Double | Self::Decimal => "f64",
            Self::String | Self::AnyUri | Self::Language => "String",
            Self::Boolean => "bool",
            Self::Date => "chrono::NaiveDate",
            Self::Time => "chrono::NaiveTime",
            Self::DateTime => "chrono::NaiveDateTime",
        }
    }

    /// Returns the lexical family of this kind.
    #[must_use]
    pub const fn family(&self) -> TextFamily {
        match self {
            Self::Byte
            | Self::UnsignedByte
            | Self::Short
            | Self::UnsignedShort
            | Self::Int
            | Self::UnsignedInt
            | Self::Long
            | Self::UnsignedLong
            | Self::Integer => TextFamily::Integer,
            Self::Float | Self::Double | Self::Decimal => TextFamily::Float,
            Self::String | Self::AnyUri | Self::Language => TextFamily::Text,
            Self::Boolean => TextFamily::Boolean,
            Self::Date => TextFamily::Date,
            Self::Time => TextFamily::Time,
            Self::DateTime => TextFamily::DateTime,
        }
    }
}
