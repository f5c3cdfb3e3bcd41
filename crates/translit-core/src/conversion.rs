use std::fmt;
use std::str::FromStr;

/// One of the five conversions the engine offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    CyrillicToLatin,
    LatinToCyrillic,
    BoldLatin,
    LowerBoldLatin,
    UpperBoldLatin,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown conversion {0:?} (expected one of: cyr2lat, lat2cyr, bold, lower-bold, upper-bold)")]
pub struct UnknownConversion(pub String);

impl Conversion {
    pub const ALL: [Conversion; 5] = [
        Conversion::CyrillicToLatin,
        Conversion::LatinToCyrillic,
        Conversion::BoldLatin,
        Conversion::LowerBoldLatin,
        Conversion::UpperBoldLatin,
    ];

    /// Canonical short name, accepted back by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Conversion::CyrillicToLatin => "cyr2lat",
            Conversion::LatinToCyrillic => "lat2cyr",
            Conversion::BoldLatin => "bold",
            Conversion::LowerBoldLatin => "lower-bold",
            Conversion::UpperBoldLatin => "upper-bold",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Conversion {
    type Err = UnknownConversion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyr2lat" | "cyrillic-to-latin" => Ok(Conversion::CyrillicToLatin),
            "lat2cyr" | "latin-to-cyrillic" => Ok(Conversion::LatinToCyrillic),
            "bold" | "bold-latin" => Ok(Conversion::BoldLatin),
            "lower-bold" | "lower-bold-latin" => Ok(Conversion::LowerBoldLatin),
            "upper-bold" | "upper-bold-latin" => Ok(Conversion::UpperBoldLatin),
            _ => Err(UnknownConversion(s.to_string())),
        }
    }
}
