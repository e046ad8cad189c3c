use serde::{Deserialize, Deserializer};
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::errors::Result;
use crate::extensions::enums::parse_choice;

/// How a target is located when the wrapper was started by bare name
/// (argv[0] without any directory component).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum BareNameResolution {
    /// Hand the bare file name to the OS, which searches `PATH`.
    #[default]
    SearchPath,
    /// Look only in the current working directory.
    CurrentDir,
}

impl BareNameResolution {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_choice(s, "bare name resolution")
    }
}

impl<'de> Deserialize<'de> for BareNameResolution {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<BareNameResolution, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        BareNameResolution::try_from(&s).map_err(serde::de::Error::custom)
    }
}
