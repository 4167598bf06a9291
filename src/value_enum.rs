//! Command-line value parsing for the public enums.

use crate::address::AddressFamily;
use crate::formatter::ConfigFormat;
use clap::ValueEnum;
use clap::builder::PossibleValue;

impl ValueEnum for ConfigFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.as_str());
        Some(match self {
            Self::Dnsmasq => value.help("server=/<domain>/<server> lines"),
            Self::Bind => value.help("BIND static-stub zones"),
            Self::BindForward => value.help("BIND forward-only zones"),
        })
    }
}

impl ValueEnum for AddressFamily {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::V4, Self::V6]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}
