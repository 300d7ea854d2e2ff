use std::fmt;

/// Scalar types understood without consulting the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Uuid,
    String,
    Text,
    Email,
    Url,
    Password,
    Phone,
    Date,
    Time,
    DateTime,
    Bool,
    Boolean,
    Int,
    Integer,
    Id,
    Long,
    Float,
    Double,
    Decimal,
    Price,
    RandomString,
}

impl NativeType {
    pub const ALL: [NativeType; 21] = [
        Self::Uuid,
        Self::String,
        Self::Text,
        Self::Email,
        Self::Url,
        Self::Password,
        Self::Phone,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Bool,
        Self::Boolean,
        Self::Int,
        Self::Integer,
        Self::Id,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Price,
        Self::RandomString,
    ];

    /// Parses a type tag. Matching ignores ASCII case.
    pub fn from_name(name: &str) -> Option<NativeType> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::String => "string",
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Password => "password",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Bool => "bool",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Integer => "integer",
            Self::Id => "id",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Price => "price",
            Self::RandomString => "randomstring",
        }
    }

    /// Only `id` and `uuid` fields may identify a model.
    pub fn is_identifier_type(self) -> bool {
        matches!(self, Self::Id | Self::Uuid)
    }

    pub fn is_string(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Text
                | Self::Uuid
                | Self::Email
                | Self::Url
                | Self::Password
                | Self::Phone
                | Self::RandomString
        )
    }

    /// String types whose values never leave the ASCII range.
    pub fn is_ascii(self) -> bool {
        matches!(self, Self::Uuid | Self::Email | Self::Url | Self::Phone)
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }

    pub fn is_date_time(self) -> bool {
        self == Self::DateTime
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Self::Bool | Self::Boolean)
    }

    /// 4-byte integers
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Integer)
    }

    /// 8-byte integers
    pub fn is_long(self) -> bool {
        matches!(self, Self::Long | Self::Id)
    }

    /// 8-byte floating point
    pub fn is_double(self) -> bool {
        matches!(self, Self::Double | Self::Decimal)
    }

    pub fn is_auto_increment(self) -> bool {
        matches!(self, Self::Id)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::NativeType;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(NativeType::from_name("UUID"), Some(NativeType::Uuid));
        assert_eq!(NativeType::from_name("DateTime"), Some(NativeType::DateTime));
        assert_eq!(NativeType::from_name("User"), None);

        for ty in NativeType::ALL {
            assert_eq!(NativeType::from_name(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn only_id_and_uuid_identify() {
        let identifiers: Vec<_> = NativeType::ALL
            .into_iter()
            .filter(|ty| ty.is_identifier_type())
            .collect();
        assert_eq!(identifiers, [NativeType::Uuid, NativeType::Id]);
        assert!(NativeType::Id.is_auto_increment());
        assert!(!NativeType::Uuid.is_auto_increment());
    }
}
