use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum Strand {
    /// Forward strand.
    Forward,
    /// Reverse strand.
    Reverse,
    /// No strand.
    #[default]
    None,
}

impl FromStr for Strand {
    type Err = Infallible;

    /// Accepts the manifest notation (`F`/`R`) as well as `+`/`-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "F" | "+" => Ok(Strand::Forward),
            "R" | "-" => Ok(Strand::Reverse),
            _ => Ok(Strand::None),
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::None => '.',
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Generates a closed vocabulary enum whose variants map one-to-one onto
/// the spellings used in the manifest.
macro_rules! vocabulary_enum {
    ($(#[$meta: meta])* $name: ident { $($variant: ident => $repr: literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $repr),+
                }
            }

            /// Returns true if `value` is spelled exactly like one of the
            /// variants.
            pub fn is_member(value: &str) -> bool {
                Self::ALL.iter().any(|v| v.as_str() == value)
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($repr => Ok($name::$variant),)+
                    other => Err(anyhow!(
                        "{:?} is not a valid {}",
                        other,
                        stringify!($name)
                    )),
                }
            }
        }

        impl Display for $name {
            fn fmt(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str { self.as_str() }
        }

        impl Serialize for $name {
            fn serialize<S>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer, {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>, {
                let s = String::deserialize(deserializer)?;
                FromStr::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

vocabulary_enum!(
    /// Position of a probe relative to gene structure
    /// (`UCSC_RefGene_Group` column).
    LocationTag {
        Body => "Body",
        Tss200 => "TSS200",
        Tss1500 => "TSS1500",
        Utr5 => "5'UTR",
        Utr3 => "3'UTR",
        Exon => "Exon",
    }
);

vocabulary_enum!(
    /// Position of a probe relative to a CpG island
    /// (`Relation_to_UCSC_CpG_Island` column).
    CpgContext {
        Island => "Island",
        NShore => "N_Shore",
        SShore => "S_Shore",
        NShelf => "N_Shelf",
        SShelf => "S_Shelf",
    }
);
