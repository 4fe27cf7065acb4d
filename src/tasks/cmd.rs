/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use kred_array_types::V3;
use kred_structure::{Lattice, make_lattice_general, make_lattice_bravais};
use kred_structure::{SYMMETRY_TOL, compatible_operations, possible_unitary_rotations};
use kred_structure::{make_mesh, reduce_kpts};
use kred_tasks_config::{Settings, ValidatedSettings, LatticeSettings, LatticeKind, YamlRead};
use serde_yaml::Value;

/// The computations available to the entry points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Partition the mesh into irreducible k-points.
    Reduce,
    /// Report the lattice and the rotations compatible with it.
    Symmetry,
    /// Report the mesh itself.
    Mesh,
}

/// Deserialize and validate the merged config.
pub fn settings_from_yaml(yaml: Value) -> FailResult<ValidatedSettings>
{Ok({
    match kred_tasks_config::value_to_string(&yaml) {
        Ok(s) => debug!("Effective config:\n{}", s),
        Err(e) => warn!("Unable to display the effective config: {}", e),
    }
    let settings = Settings::from_value(yaml)?;
    settings.validate()?
})}

/// Build the lattice described by the config, along with its volume.
pub fn build_lattice(settings: &LatticeSettings) -> FailResult<(Lattice, f64)>
{Ok({
    let params = settings.params();
    let (lattice, volume) = match settings.kind {
        LatticeKind::General => {
            let get = |key: &str| {
                params.get(key).ok_or_else(|| format_err!("lattice: 'general' requires '{}'", key))
            };
            make_lattice_general(
                get("a")?, get("b")?, get("c")?,
                get("alpha")?, get("beta")?, get("gamma")?,
            )?
        },
        LatticeKind::Bravais(bravais) => make_lattice_bravais(bravais, &params)?,
    };
    debug!("Built {} lattice with volume {}", settings.kind, volume);
    trace!("Lattice vectors: {:?}", lattice.matrix());
    (lattice, volume)
})}

pub fn run_command(command: Command, settings: &ValidatedSettings) -> FailResult<serde_json::Value>
{Ok({
    match command {
        Command::Reduce => serde_json::to_value(do_reduce(settings)?)?,
        Command::Symmetry => serde_json::to_value(do_symmetry(settings)?)?,
        Command::Mesh => serde_json::to_value(do_mesh(settings)?)?,
    }
})}

//--------------------------------------------------------

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct OperationOutput {
    /// Position in the catalog of 32 rotations.
    pub index: usize,
    pub label: String,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ReduceOutput {
    pub num_irreducible: usize,
    pub operations: Vec<OperationOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<usize>>,
    pub representatives: Vec<usize>,
    pub weights: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[f64; 3]>>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SymmetryOutput {
    pub bravais: String,
    /// Lattice vectors as rows.
    pub vectors: [[f64; 3]; 3],
    pub volume: f64,
    pub operations: Vec<OperationOutput>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MeshOutput {
    pub dims: [i64; 3],
    pub shift: [bool; 3],
    pub points: Vec<[f64; 3]>,
}

fn operation_outputs(indices: &[usize]) -> Vec<OperationOutput>
{
    let catalog = possible_unitary_rotations();
    indices.iter()
        .map(|&index| OperationOutput {
            index,
            label: catalog[index].label.to_string(),
        })
        .collect()
}

fn point_outputs(mesh: &[V3]) -> Vec<[f64; 3]>
{ mesh.iter().map(|v| v.0).collect() }

fn do_reduce(settings: &Settings) -> FailResult<ReduceOutput>
{Ok({
    let (lattice, _) = build_lattice(&settings.lattice)?;
    let mesh = make_mesh(settings.mesh.dims, settings.mesh.shift)?;

    info!("Reducing a mesh of {} k-points", mesh.len());
    let reduction = reduce_kpts(&mesh, &lattice)?;
    info!("Found {} irreducible k-points", reduction.num_irreducible);

    ReduceOutput {
        num_irreducible: reduction.num_irreducible,
        operations: operation_outputs(&reduction.operations),
        representatives: reduction.representatives(),
        weights: reduction.weights(),
        points: match settings.output.points {
            true => Some(point_outputs(&mesh)),
            false => None,
        },
        labels: match settings.output.labels {
            true => Some(reduction.labels),
            false => None,
        },
    }
})}

fn do_symmetry(settings: &Settings) -> FailResult<SymmetryOutput>
{Ok({
    let (lattice, volume) = build_lattice(&settings.lattice)?;
    let operations = compatible_operations(&lattice, SYMMETRY_TOL)?;

    SymmetryOutput {
        bravais: settings.lattice.kind.to_string(),
        vectors: lattice.matrix().into_array(),
        volume,
        operations: operation_outputs(&operations),
    }
})}

fn do_mesh(settings: &Settings) -> FailResult<MeshOutput>
{Ok({
    let mesh = make_mesh(settings.mesh.dims, settings.mesh.shift)?;
    MeshOutput {
        dims: settings.mesh.dims,
        shift: settings.mesh.shift,
        points: point_outputs(&mesh),
    }
})}
