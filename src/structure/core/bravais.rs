/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use kred_array_types::{M33, mat};

use crate::core::lattice::Lattice;
use crate::errors::{Error, Result};

/// The family of a lattice, which decides which parameters are needed to
/// construct it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BravaisType {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
    FaceCenteredCubic,
    BodyCenteredCubic,
}

impl BravaisType {
    pub const ALL: [BravaisType; 9] = [
        BravaisType::Triclinic,
        BravaisType::Monoclinic,
        BravaisType::Orthorhombic,
        BravaisType::Tetragonal,
        BravaisType::Trigonal,
        BravaisType::Hexagonal,
        BravaisType::Cubic,
        BravaisType::FaceCenteredCubic,
        BravaisType::BodyCenteredCubic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BravaisType::Triclinic => "triclinic",
            BravaisType::Monoclinic => "monoclinic",
            BravaisType::Orthorhombic => "orthorhombic",
            BravaisType::Tetragonal => "tetragonal",
            BravaisType::Trigonal => "trigonal",
            BravaisType::Hexagonal => "hexagonal",
            BravaisType::Cubic => "cubic",
            BravaisType::FaceCenteredCubic => "face-centered-cubic",
            BravaisType::BodyCenteredCubic => "body-centered-cubic",
        }
    }

    /// The parameters that must be supplied to `make_lattice_bravais`.
    ///
    /// Anything else is derived from these.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            BravaisType::Triclinic => &["a", "b", "c", "alpha", "beta", "gamma"],
            BravaisType::Monoclinic => &["a", "b", "c", "beta"],
            BravaisType::Orthorhombic => &["a", "b", "c"],
            BravaisType::Tetragonal => &["a", "c"],
            BravaisType::Trigonal => &["a", "alpha"],
            BravaisType::Hexagonal => &["a", "c"],
            BravaisType::Cubic => &["a"],
            BravaisType::FaceCenteredCubic => &["a"],
            BravaisType::BodyCenteredCubic => &["a"],
        }
    }
}

impl fmt::Display for BravaisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str(self.name()) }
}

impl FromStr for BravaisType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-").replace(' ', "-");
        let found = match &normalized[..] {
            "fcc" => Some(BravaisType::FaceCenteredCubic),
            "bcc" => Some(BravaisType::BodyCenteredCubic),
            "hcp" => Some(BravaisType::Hexagonal),
            "rhombohedral" => Some(BravaisType::Trigonal),
            name => BravaisType::ALL.iter().cloned().find(|b| b.name() == name),
        };
        found.ok_or_else(|| Error::InvalidType { name: s.to_string() })
    }
}

/// Lattice constants and angles.  Angles are in radians.
///
/// Which of these are needed depends on the `BravaisType`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LatticeParams {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

impl LatticeParams {
    pub fn new() -> Self
    { Default::default() }

    pub fn a(mut self, a: f64) -> Self { self.a = Some(a); self }
    pub fn b(mut self, b: f64) -> Self { self.b = Some(b); self }
    pub fn c(mut self, c: f64) -> Self { self.c = Some(c); self }
    pub fn alpha(mut self, alpha: f64) -> Self { self.alpha = Some(alpha); self }
    pub fn beta(mut self, beta: f64) -> Self { self.beta = Some(beta); self }
    pub fn gamma(mut self, gamma: f64) -> Self { self.gamma = Some(gamma); self }

    /// Parameters by name, in the canonical order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ]
    }

    pub fn get(&self, key: &str) -> Option<f64>
    { self.entries().iter().find(|&&(k, _)| k == key).and_then(|&(_, v)| v) }
}

/// The (positive) volume of the cell whose vectors are the rows of `vectors`.
pub fn calc_volume(vectors: &M33) -> f64
{ vectors.det().abs() }

/// Construct a lattice from its six parameters.
///
/// `a` lies along x, and `b` lies in the xy plane.  Angles are in radians.
/// Returns the lattice and its volume.
pub fn make_lattice_general(
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> Result<(Lattice, f64)>
{Ok({
    let cx = c * beta.cos();
    let cy = c * (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
    let radicand = c * c - cx * cx - cy * cy;
    // also catches NaN
    if !(radicand >= 0.0) {
        throw!(Error::NegativeDiscriminant { value: radicand });
    }
    let cz = radicand.sqrt();

    let vectors = mat::from_array([
        [a, 0.0, 0.0],
        [b * gamma.cos(), b * gamma.sin(), 0.0],
        [cx, cy, cz],
    ]);
    let volume = a * b * cz * gamma.sin();
    (Lattice::new(&vectors)?, volume)
})}

/// Construct a lattice of the given family.
///
/// The parameters listed by `BravaisType::required_params` must be present.
/// Others are ignored (with a warning).  Returns the lattice and its volume.
pub fn make_lattice_bravais(bravais: BravaisType, params: &LatticeParams) -> Result<(Lattice, f64)>
{
    let required = bravais.required_params();
    for &(key, value) in &params.entries() {
        if value.is_none() && required.contains(&key) {
            throw!(Error::MissingParameter { bravais, key });
        }
    }
    for &(key, value) in &params.entries() {
        if let Some(value) = value {
            if !required.contains(&key) {
                warn!("Ignoring parameter {} = {} for {} lattice", key, value, bravais);
            }
        }
    }

    let get = |key: &'static str| params.get(key).ok_or(Error::MissingParameter { bravais, key });
    let right = FRAC_PI_2;
    match bravais {
        BravaisType::Triclinic => make_lattice_general(
            get("a")?, get("b")?, get("c")?,
            get("alpha")?, get("beta")?, get("gamma")?,
        ),
        BravaisType::Monoclinic => make_lattice_general(
            get("a")?, get("b")?, get("c")?,
            right, get("beta")?, right,
        ),
        BravaisType::Orthorhombic => make_lattice_general(
            get("a")?, get("b")?, get("c")?,
            right, right, right,
        ),
        BravaisType::Tetragonal => {
            let a = get("a")?;
            make_lattice_general(a, a, get("c")?, right, right, right)
        },
        BravaisType::Trigonal => {
            let (a, alpha) = (get("a")?, get("alpha")?);
            make_lattice_general(a, a, a, alpha, alpha, alpha)
        },
        BravaisType::Cubic => {
            let a = get("a")?;
            make_lattice_general(a, a, a, right, right, right)
        },
        BravaisType::Hexagonal => {
            let (a, c) = (get("a")?, get("c")?);
            let half_sqrt3 = 0.5 * 3f64.sqrt();
            closed_form(mat::from_array([
                [a, 0.0, 0.0],
                [-0.5 * a, half_sqrt3 * a, 0.0],
                [0.0, 0.0, c],
            ]), None)
        },
        BravaisType::FaceCenteredCubic => {
            let a = get("a")?;
            closed_form(a * mat::from_array([
                [0.5, 0.0, 0.5],
                [0.5, 0.5, 0.0],
                [0.0, 0.5, 0.5],
            ]), Some(0.25 * a * a * a))
        },
        BravaisType::BodyCenteredCubic => {
            let a = get("a")?;
            closed_form(0.5 * a * mat::from_array([
                [ 1.0,  1.0, 1.0],
                [ 1.0, -1.0, 1.0],
                [-1.0,  1.0, 1.0],
            ]), Some(0.5 * a * a * a))
        },
    }
}

fn closed_form(vectors: M33, volume: Option<f64>) -> Result<(Lattice, f64)>
{
    let volume = volume.unwrap_or_else(|| calc_volume(&vectors));
    Ok((Lattice::new(&vectors)?, volume))
}
