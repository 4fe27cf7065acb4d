/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use failure::ResultExt;
use kred_tasks_config::YamlRead;
use serde_yaml::{Value, Mapping};
use std::path::{Path, PathBuf};

/// A list of config yamls that can be merged into a single effective config.
///
/// Each `--config` argument is either a path to a yaml file, or a literal
/// written as `[NESTED.KEY]:YAML`.
#[derive(Debug, Clone)]
pub struct ConfigSources(Vec<Config>);

#[derive(Debug, Clone)]
pub(crate) struct Config {
    source: ConfigSource,
    yaml: Value,
}

#[derive(Debug, Clone, PartialEq)]
enum ConfigSource {
    File(PathBuf),
    Argument,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "file {}", path.display()),
            ConfigSource::Argument => write!(f, "literal argument"),
        }
    }
}

impl Config {
    /// May do path resolution and file IO
    pub(crate) fn resolve_from_arg(s: &str) -> FailResult<Config>
    {
        // NOTE: unapologetically, no mechanism is provided for escaping a path containing ':'.
        match s.find(':') {
            Some(colon) => lit_from_arg(&s[..colon], &s[colon + 1..]),
            None => read_file_from_arg(s),
        }
    }
}

fn lit_from_arg(nested_key: &str, yaml: &str) -> FailResult<Config>
{Ok({
    let path: Vec<_> = match nested_key {
        "" => vec![],
        key => key.split('.').collect(),
    };
    let value: Value = YamlRead::from_reader(yaml.as_bytes())
        .with_context(|e| format!("in config literal {:?}: {}", yaml, e))?;

    Config {
        yaml: make_nested_mapping(&path, value),
        source: ConfigSource::Argument,
    }
})}

fn read_file_from_arg(path: &str) -> FailResult<Config>
{Ok({
    let path = Path::new(path).canonicalize()
        .with_context(|e| format!("config file {}: {}", path, e))?;
    let file = std::fs::File::open(&path)?;
    let yaml: Value = YamlRead::from_reader(file)
        .with_context(|e| format!("while reading {}: {}", path.display(), e))?;

    Config {
        yaml,
        source: ConfigSource::File(path),
    }
})}

fn make_nested_mapping(path: &[&str], mut value: Value) -> Value {
    for &key in path.iter().rev() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::String(key.into()), value);
        value = Value::Mapping(mapping);
    }
    value
}

impl ConfigSources {
    /// Construct from values given to --config.
    ///
    /// Paths are resolved and read immediately.
    pub fn resolve_from_args<As>(args: As) -> FailResult<Self>
    where
        As: IntoIterator,
        As::Item: AsRef<str>,
    {
        let mut out = vec![];
        for arg in args {
            let config = Config::resolve_from_arg(arg.as_ref())?;
            debug!("Config source: {}", config.source);
            out.push(config);
        }
        Ok(ConfigSources(out))
    }

    pub fn len(&self) -> usize
    { self.0.len() }

    pub fn into_effective_yaml(self) -> Value {
        let empty = Value::Mapping(Default::default());
        self.0.into_iter()
            .fold(empty, |a, b| dumb_config_merge(a, b.yaml))
    }
}

/// A simplistic config-merging function which operates directly on the yaml
/// representation, independent of what is being deserialized.
///
/// Given two mappings, it takes the union of their keys and recursively merges
/// their intersection.  Given any other two values, it prefers `b`.
fn dumb_config_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Mapping(mut a), Value::Mapping(b)) => {
            // (merged in place, so that keys keep their original order)
            for (key, b_value) in b {
                match a.get_mut(&key) {
                    Some(slot) => {
                        let a_value = std::mem::replace(slot, Value::Null);
                        *slot = dumb_config_merge(a_value, b_value);
                    },
                    None => {
                        a.insert(key, b_value);
                    },
                }
            }
            Value::Mapping(a)
        },
        (_, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! m { ($($arg:tt)*) => { Value::Mapping(vec![$($arg)*].into_iter().collect()) }; }
    macro_rules! s { ($($arg:tt)*) => { Value::Sequence(vec![$($arg)*]) }; }

    fn yaml(s: &str) -> Value
    { YamlRead::from_reader(s.as_bytes()).unwrap() }

    #[test]
    fn literal_args() {
        let expected = m!{ ("mesh".into(), m!{ ("dims".into(), s![4.into(), 4.into(), 2.into()]) }) };
        assert_eq!(expected, Config::resolve_from_arg(":{mesh: {dims: [4, 4, 2]}}").unwrap().yaml);
        assert_eq!(expected, Config::resolve_from_arg(": {mesh: {dims: [4, 4, 2]}}").unwrap().yaml);
        assert_eq!(expected, Config::resolve_from_arg("mesh:{dims: [4, 4, 2]}").unwrap().yaml);
        assert_eq!(expected, Config::resolve_from_arg("mesh.dims: [4, 4, 2]").unwrap().yaml);
        assert_eq!(
            Config::resolve_from_arg("mesh.dims: [4, 4, 2]").unwrap().source,
            ConfigSource::Argument,
        );
    }

    #[test]
    fn bad_literal() {
        assert!(Config::resolve_from_arg(":{mesh: [").is_err());
    }

    #[test]
    fn missing_file() {
        assert!(Config::resolve_from_arg("surely/this/does/not/exist.yaml").is_err());
    }

    #[test]
    fn merging() {
        let a = yaml("{lattice: {bravais: fcc, a: 1.0}, mesh: {dims: [4, 4, 4]}}");
        let b = yaml("{lattice: {a: 2.5}, output: {points: true}}");
        let expected = yaml("{lattice: {bravais: fcc, a: 2.5}, mesh: {dims: [4, 4, 4]}, output: {points: true}}");
        assert_eq!(dumb_config_merge(a, b), expected);

        // non-mappings are replaced wholesale
        assert_eq!(dumb_config_merge(yaml("[1, 2, 3]"), yaml("[4]")), yaml("[4]"));
        assert_eq!(dumb_config_merge(yaml("{a: 1}"), yaml("3")), yaml("3"));
    }

    #[test]
    fn later_sources_win() {
        let sources = ConfigSources::resolve_from_args(&[
            ":{lattice: {bravais: cubic, a: 1.0}}",
            "lattice.a: 3.0",
            "mesh.dims: [2, 2, 2]",
        ]).unwrap();
        assert_eq!(sources.len(), 3);
        let expected = yaml("{lattice: {bravais: cubic, a: 3.0}, mesh: {dims: [2, 2, 2]}}");
        assert_eq!(sources.into_effective_yaml(), expected);
    }
}
