//! Backend families and their per-family defaults.

use super::options::OptionCase;
use serde::{Deserialize, Serialize};

/// Default Impala address for the legacy Beeswax protocol.
pub const IMPALA_BEESWAX_ADDRESS: &str = "localhost:21000";

/// Default Impala address for HiveServer2-compatible clients (HS2 and JDBC).
pub const IMPALA_HS2_ADDRESS: &str = "localhost:21050";

/// Default HiveServer2 host.
pub const HIVE_SERVER_ADDRESS: &str = "localhost";

/// The kind of backend an execution config describes.
///
/// The family selects default addresses, the option-name casing rule and
/// whether the executor may rebind the target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendFamily {
    /// A config with no backend-specific defaults.
    #[default]
    Generic,
    /// Impala without a protocol preference.
    Impala,
    /// Impala through the JDBC client script.
    #[serde(alias = "jdbc")]
    ImpalaJdbc,
    /// Impala over HiveServer2.
    #[serde(alias = "hs2")]
    ImpalaHs2,
    /// Hive over HiveServer2.
    #[serde(alias = "hive")]
    HiveHs2,
    /// Impala over the legacy Beeswax protocol.
    #[serde(alias = "beeswax")]
    ImpalaBeeswax,
}

impl BackendFamily {
    /// All families, in declaration order.
    pub const ALL: [BackendFamily; 6] = [
        Self::Generic,
        Self::Impala,
        Self::ImpalaJdbc,
        Self::ImpalaHs2,
        Self::HiveHs2,
        Self::ImpalaBeeswax,
    ];

    /// Returns the family as a string for persistence and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Impala => "impala",
            Self::ImpalaJdbc => "impala-jdbc",
            Self::ImpalaHs2 => "impala-hs2",
            Self::HiveHs2 => "hive-hs2",
            Self::ImpalaBeeswax => "impala-beeswax",
        }
    }

    /// Parses a family from a string.
    ///
    /// Accepts both the long names and the short executor names used by the
    /// perf framework (`beeswax`, `hs2`, `jdbc`, `hive`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generic" => Some(Self::Generic),
            "impala" => Some(Self::Impala),
            "jdbc" | "impala-jdbc" => Some(Self::ImpalaJdbc),
            "hs2" | "impala-hs2" => Some(Self::ImpalaHs2),
            "hive" | "hive-hs2" => Some(Self::HiveHs2),
            "beeswax" | "impala-beeswax" => Some(Self::ImpalaBeeswax),
            _ => None,
        }
    }

    /// Returns the default target address for this family, if it has one.
    pub fn default_target_address(&self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Impala | Self::ImpalaBeeswax => Some(IMPALA_BEESWAX_ADDRESS),
            Self::ImpalaJdbc | Self::ImpalaHs2 => Some(IMPALA_HS2_ADDRESS),
            Self::HiveHs2 => Some(HIVE_SERVER_ADDRESS),
        }
    }

    /// Returns the casing rule applied to execution option names.
    ///
    /// ImpalaService query options are upper case, HiveService ones lower case.
    pub fn option_case(&self) -> OptionCase {
        match self {
            Self::Generic => OptionCase::Preserve,
            Self::Impala | Self::ImpalaJdbc | Self::ImpalaHs2 | Self::ImpalaBeeswax => {
                OptionCase::Upper
            }
            Self::HiveHs2 => OptionCase::Lower,
        }
    }

    /// Returns false for families whose target is fixed by the service
    /// rather than chosen per run.
    pub fn has_addressable_target(&self) -> bool {
        !matches!(self, Self::HiveHs2)
    }

    /// Returns true if this family is served by Impala.
    pub fn is_impala(&self) -> bool {
        matches!(
            self,
            Self::Impala | Self::ImpalaJdbc | Self::ImpalaHs2 | Self::ImpalaBeeswax
        )
    }
}

impl std::fmt::Display for BackendFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
