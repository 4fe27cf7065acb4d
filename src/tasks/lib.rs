/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// HERE BE DRAGONS
//
// (this is the crate where lattice construction, mesh generation and
//  reduction get glued to configs, command lines and output documents)

#[macro_use] extern crate kred_clap;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[cfg(test)]
#[macro_use] extern crate kred_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

mod ui;
mod cmd;
pub mod entry_points;

pub use crate::ui::cfg_merging::ConfigSources;
pub use crate::cmd::{
    Command,
    run_command,
    settings_from_yaml,
    build_lattice,
    ReduceOutput,
    SymmetryOutput,
    MeshOutput,
    OperationOutput,
};
