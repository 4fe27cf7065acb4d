/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use std::f64::consts::PI;
use std::fmt;

use serde::de;

use kred_structure::{BravaisType, LatticeParams};

/// Root settings object.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub lattice: LatticeSettings,

    pub mesh: MeshSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

/// Lattice definition.
///
/// ```yaml
/// lattice:
///   bravais: hexagonal
///   a: 2.46
///   c: 6.7
/// ```
///
/// Which of the parameters are required depends on `bravais`.
/// With `bravais: general`, all six are used as given.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LatticeSettings {
    #[serde(rename = "bravais")]
    pub kind: LatticeKind,

    #[serde(default)] pub a: Option<f64>,
    #[serde(default)] pub b: Option<f64>,
    #[serde(default)] pub c: Option<f64>,
    #[serde(default)] pub alpha: Option<f64>,
    #[serde(default)] pub beta: Option<f64>,
    #[serde(default)] pub gamma: Option<f64>,

    /// Unit of `alpha`, `beta` and `gamma`.
    #[serde(default)]
    pub angle_unit: AngleUnit,
}

impl LatticeSettings {
    /// The lattice parameters, with angles converted to radians.
    pub fn params(&self) -> LatticeParams {
        let angle = |x: Option<f64>| x.map(|x| self.angle_unit.to_radians(x));
        LatticeParams {
            a: self.a,
            b: self.b,
            c: self.c,
            alpha: angle(self.alpha),
            beta: angle(self.beta),
            gamma: angle(self.gamma),
        }
    }
}

/// Either a named Bravais lattice family or `general`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LatticeKind {
    General,
    Bravais(BravaisType),
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LatticeKind::General => f.write_str("general"),
            LatticeKind::Bravais(b) => fmt::Display::fmt(&b, f),
        }
    }
}

impl serde::Serialize for LatticeKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer,
    { serializer.collect_str(self) }
}

impl<'de> serde::Deserialize<'de> for LatticeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        if s.trim().eq_ignore_ascii_case("general") {
            return Ok(LatticeKind::General);
        }
        s.parse().map(LatticeKind::Bravais).map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleUnit::Radians => x,
            AngleUnit::Degrees => x * PI / 180.0,
        }
    }
}

impl Default for AngleUnit {
    fn default() -> Self { AngleUnit::Radians }
}

/// ```yaml
/// mesh:
///   dims: [4, 4, 4]
///   shift: [false, false, true]
/// ```
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MeshSettings {
    /// Number of points along each reciprocal lattice vector.
    pub dims: [i64; 3],

    /// Offset each axis by half of a step.
    #[serde(default)]
    pub shift: [bool; 3],
}

/// Controls what goes into the result document.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct OutputSettings {
    /// Include the class of every mesh point.
    #[serde(default="_output__labels")]
    pub labels: bool,

    /// Include the mesh points themselves.
    #[serde(default)]
    pub points: bool,
}
#[allow(non_snake_case)]
fn _output__labels() -> bool { true }

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            labels: _output__labels(),
            points: false,
        }
    }
}
