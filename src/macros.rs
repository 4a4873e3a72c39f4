//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for closed enums
///
/// Parsing ignores ASCII case; display writes the canonical string.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::BoardError;
///
/// enum_display_fromstr!(
///     MyEnum,
///     BoardError::InvalidMyEnum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "Variant 2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_variant:path,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl $enum_name {
            /// Canonical string for every variant, in declaration order.
            pub const ALL_STRINGS: &'static [&'static str] = &[$($str),+];

            /// Canonical string for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::BoardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($error_variant(s.to_string()))
            }
        }
    };
}
