//! Generator settings.
//!
//! [`SettingsInput`] is what callers hand in: every field optional, raw
//! numbers.  [`Settings`] is the resolved form with validated knobs and the
//! defaults filled in.
//!
//! | Field            | Default           |
//! |------------------|-------------------|
//! | `heterogeneity`  | `0.3`             |
//! | `density`        | `0.5`             |
//! | `nodes`          | `30`              |
//! | `branchingModel` | `barabasi-albert` |

use std::fmt;
use std::str::FromStr;

use gg_core::{Density, Heterogeneity};

use crate::GrowthResult;

pub const DEFAULT_NODES: usize = 30;

/// How growth picks the node to attach to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BranchingModel {
    /// Non-linear preferential attachment over out-degrees.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "barabasi-albert"))]
    BarabasiAlbert,
    /// Uniform pick skewed by the biased dice roll.
    #[cfg_attr(feature = "serde", serde(rename = "dnd"))]
    Dnd,
}

impl BranchingModel {
    pub const ALL: [BranchingModel; 2] = [BranchingModel::BarabasiAlbert, BranchingModel::Dnd];

    pub fn name(self) -> &'static str {
        match self {
            BranchingModel::BarabasiAlbert => "barabasi-albert",
            BranchingModel::Dnd => "dnd",
        }
    }
}

impl fmt::Display for BranchingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown branching model name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown branching model `{0}`; expected `barabasi-albert` or `dnd`")]
pub struct UnknownBranchingModel(pub String);

impl FromStr for BranchingModel {
    type Err = UnknownBranchingModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BranchingModel::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownBranchingModel(s.to_owned()))
    }
}

/// Partial settings as supplied by a caller or a config file.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SettingsInput {
    pub heterogeneity:   Option<f64>,
    pub density:         Option<f64>,
    pub nodes:           Option<usize>,
    pub branching_model: Option<BranchingModel>,
}

impl SettingsInput {
    /// Field-wise overlay: values present in `other` win.
    pub fn merge(self, other: SettingsInput) -> SettingsInput {
        SettingsInput {
            heterogeneity:   other.heterogeneity.or(self.heterogeneity),
            density:         other.density.or(self.density),
            nodes:           other.nodes.or(self.nodes),
            branching_model: other.branching_model.or(self.branching_model),
        }
    }

    /// Validate the knobs and fill in defaults.
    pub fn resolve(self) -> GrowthResult<Settings> {
        Ok(Settings {
            heterogeneity:   self.heterogeneity.map(Heterogeneity::new).transpose()?.unwrap_or_default(),
            density:         self.density.map(Density::new).transpose()?.unwrap_or_default(),
            nodes:           self.nodes.unwrap_or(DEFAULT_NODES),
            branching_model: self.branching_model.unwrap_or_default(),
        })
    }
}

/// Fully resolved settings.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Settings {
    pub heterogeneity:   Heterogeneity,
    pub density:         Density,
    /// Target node count.  Zero is allowed and produces an empty stream.
    pub nodes:           usize,
    pub branching_model: BranchingModel,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            heterogeneity:   Heterogeneity::DEFAULT,
            density:         Density::DEFAULT,
            nodes:           DEFAULT_NODES,
            branching_model: BranchingModel::default(),
        }
    }
}

impl TryFrom<SettingsInput> for Settings {
    type Error = crate::GrowthError;

    fn try_from(input: SettingsInput) -> GrowthResult<Self> {
        input.resolve()
    }
}
