//! Fixed option lists offered by the form: class/division codes, bus routes
//! and the allergy catalog.
//!
//! Every value serializes as its display string (`"3A"`, `"Route 2"`,
//! `"Peanuts"`) so stored cards stay readable and match what the select and
//! checkbox widgets submit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned by the `FromStr` impls when a value is not part of its catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub catalog: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} option: {:?}", self.catalog, self.value)
    }
}

impl std::error::Error for UnknownOption {}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident, $catalog:literal {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownOption {
                        catalog: $catalog,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

catalog! {
    /// Class and division printed on the card.
    ClassCode, "class" {
        Class1A => "1A",
        Class1B => "1B",
        Class2A => "2A",
        Class2B => "2B",
        Class3A => "3A",
        Class3B => "3B",
        Class4A => "4A",
        Class4B => "4B",
        Class5A => "5A",
        Class5B => "5B",
    }
}

catalog! {
    /// School bus route, or [`BusRoute::None`] for students who walk or are
    /// dropped off by a parent.
    BusRoute, "bus route" {
        Route1 => "Route 1",
        Route2 => "Route 2",
        Route3 => "Route 3",
        Route4 => "Route 4",
        Route5 => "Route 5",
        None => "None",
    }
}

catalog! {
    Allergy, "allergy" {
        Peanuts => "Peanuts",
        Dairy => "Dairy",
        Gluten => "Gluten",
        Seafood => "Seafood",
        Eggs => "Eggs",
        Soy => "Soy",
    }
}

impl BusRoute {
    /// Text shown in the route selector. Differs from the stored value only
    /// for the sentinel.
    pub fn option_label(self) -> &'static str {
        match self {
            BusRoute::None => "None (Walk/Parent Drop)",
            other => other.as_str(),
        }
    }
}

impl Allergy {
    /// Stable lowercase identifier used for checkbox element ids.
    pub fn key(self) -> &'static str {
        match self {
            Allergy::Peanuts => "peanuts",
            Allergy::Dairy => "dairy",
            Allergy::Gluten => "gluten",
            Allergy::Seafood => "seafood",
            Allergy::Eggs => "eggs",
            Allergy::Soy => "soy",
        }
    }
}

/// Comma-joined allergy list as printed on the card, `"None"` when empty.
pub fn format_allergies(allergies: &[Allergy]) -> String {
    if allergies.is_empty() {
        return "None".to_string();
    }
    allergies
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
