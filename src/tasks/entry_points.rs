/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::cmd::{Command, run_command, settings_from_yaml};
use crate::ui::cfg_merging::ConfigSources;
use crate::ui::cli_deserialize::CliDeserialize;
use crate::ui::logging::GlobalLogger;

use std::ffi::OsStr;
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

/// Values of `--config`, resolved only once logging is up.
struct ConfigArgs(Vec<String>);

impl CliDeserialize for ConfigArgs {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
        app.args(&[
            arg!(*config [-c][--config]=CONFIG... "\
                config yaml, provided as either a filepath, or as an embedded literal \
                (via syntax described below). \
                When provided multiple times, the configs are merged, with preference \
                to the values supplied in later arguments. \
                \n\n\
                Literals are written as '--config [NESTED_KEY]:VALID_YAML', \
                where NESTED_KEY is an optional '.'-separated sequence of string keys, \
                and the ':' is a literal colon. When provided, NESTED_KEY constructs a nested \
                mapping (so `--config mesh.dims:[4,4,4]` is equivalent to \
                `--config :{mesh: {dims: [4,4,4]}}`).\
                \n\n\
                Note that detection of filepaths versus literals is based solely \
                on the presence of a colon.\
            "),
        ])
    }

    fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    {Ok({
        let values = match m.values_of("config") {
            Some(values) => values,
            None => bail!("at least one --config is required"),
        };
        ConfigArgs(values.map(String::from).collect())
    })}
}

struct LogArgs {
    verbosity: i32,
    path: Option<PathBuf>,
}

impl CliDeserialize for LogArgs {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
        app.args(&[
            arg!( verbose [-v][--verbose]... "increase log verbosity"),
            arg!( quiet [-q][--quiet]... "decrease log verbosity"),
            arg!( log [--log]=LOGFILE "also write the log to this file"),
        ])
    }

    fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok(LogArgs {
        verbosity: m.occurrences_of("verbose") as i32 - m.occurrences_of("quiet") as i32,
        path: m.value_of("log").map(PathBuf::from),
    })}
}

impl LogArgs {
    fn init_global_logger(&self) -> FailResult<()>
    {
        let mut logger = GlobalLogger::default();
        logger.verbosity(self.verbosity);
        if let Some(path) = &self.path {
            logger.path(path);
        }
        logger.apply()
    }
}

fn main_for_command(name: &'static str, about: &'static str, command: Command)
{
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            clap::App::new(name)
                .version(env!("CARGO_PKG_VERSION"))
                .about(about)
        });
        let matches = app.get_matches();
        let (log_args, ConfigArgs(config_args)): (LogArgs, ConfigArgs) = de.resolve_args(&matches)?;
        log_args.init_global_logger()?;

        let sources = ConfigSources::resolve_from_args(&config_args)?;
        info!("Merging {} config source(s)", sources.len());

        let settings = settings_from_yaml(sources.into_effective_yaml())?;
        let output = run_command(command, &settings)?;

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    });
}

// -------------------------------------------------------------------------------------

pub fn kred_reduce() {
    main_for_command(
        "kred-reduce",
        "Partition a k-point mesh into classes of symmetry-equivalent points.",
        Command::Reduce,
    );
}

pub fn kred_symmetry() {
    main_for_command(
        "kred-symmetry",
        "List the rotations compatible with a lattice.",
        Command::Symmetry,
    );
}

pub fn kred_mesh() {
    main_for_command(
        "kred-mesh",
        "Print the k-point mesh in crystal coordinates.",
        Command::Mesh,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str]) -> FailResult<(LogArgs, ConfigArgs)> {
        let (app, de) = CliDeserialize::augment_clap_app(clap::App::new("kred-test"));
        let matches = app.get_matches_from_safe(args.to_vec())?;
        let (log_args, config_args): (LogArgs, ConfigArgs) = de.resolve_args(&matches)?;
        Ok((log_args, config_args))
    }

    #[test]
    fn log_and_config_args() {
        let (log_args, ConfigArgs(configs)) = resolve(&[
            "kred-test", "-vv", "-c", "a.yaml", "--config", "mesh.dims:[1,1,1]", "--log", "out.log",
        ]).unwrap();
        assert_eq!(log_args.verbosity, 2);
        assert_eq!(log_args.path, Some(PathBuf::from("out.log")));
        assert_eq!(configs, vec!["a.yaml", "mesh.dims:[1,1,1]"]);

        let (log_args, _) = resolve(&["kred-test", "-q", "-c", "a.yaml"]).unwrap();
        assert_eq!(log_args.verbosity, -1);
        assert_eq!(log_args.path, None);
    }

    #[test]
    fn config_is_required() {
        assert!(resolve(&["kred-test", "-v"]).is_err());
    }
}
