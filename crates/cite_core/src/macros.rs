/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros shared by the record and standard types.

/// Generates a string-backed enum with `as_str`, `ALL`, `Display` and `FromStr`.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            #[doc = "Every variant, in declaration order."]
            pub const ALL: &'static [Self] = &[$( Self::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $val {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::error::UnknownNameError {
                    kind: stringify!($name),
                    name: s.to_string(),
                })
            }
        }
    }
}

/// Generates consuming setters for builder structs whose fields are all `Option`s.
macro_rules! builder_setters {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Sets `", stringify!($field), "`.")]
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

pub(crate) use builder_setters;
