/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A compact notation for `clap::Arg`s.
//!
//! `clap_app!` builds an entire `App` at once and has no shorthand for
//! options that take values, so we use a small macro for individual
//! arguments instead:
//!
//! ```
//! # #[macro_use] extern crate kred_clap;
//! # fn main() {
//! let _ = arg!(*config [-c][--config]=CONFIG... "settings yaml");
//! let _ = arg!(?output [-o][--output]=FILE "output file. Defaults to stdout.");
//! let _ = arg!( verbose [-v][--verbose] "more logging");
//! # }
//! ```
//!
//! * `*name` is required, `?name` is optional, and a bare `name` is required
//!   only if it is positional.
//! * `[-x]` and `[--long-name]` give option names.  Additional long names
//!   become aliases.
//! * `=NAME` makes it take a value.
//! * `...` allows repetition.

pub use clap;

use clap::Arg;

/// Pieces of an argument gathered by `arg!`.
#[derive(Debug, Clone, Default)]
pub struct ArgSpec {
    name: &'static str,
    required: Option<bool>,
    short: Option<&'static str>,
    longs: Vec<&'static str>,
    value_name: Option<&'static str>,
    multiple: bool,
    help: Option<&'static str>,
}

impl ArgSpec {
    pub fn new(name: &'static str, required: Option<bool>) -> Self
    { ArgSpec { name, required, ..Default::default() } }

    pub fn short(mut self, s: &'static str) -> Self
    { self.short = Some(s); self }

    pub fn long(mut self, s: &'static str) -> Self
    { self.longs.push(s); self }

    pub fn value(mut self, name: &'static str) -> Self
    { self.value_name = Some(name); self }

    pub fn multiple(mut self) -> Self
    { self.multiple = true; self }

    pub fn help(mut self, help: &'static str) -> Self
    { self.help = Some(help); self }

    pub fn is_positional(&self) -> bool
    { self.short.is_none() && self.longs.is_empty() }

    pub fn build(self) -> Arg<'static, 'static> {
        let required = self.required.unwrap_or(self.is_positional());
        let mut arg = Arg::with_name(self.name).required(required);

        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        let mut longs = self.longs.into_iter();
        if let Some(long) = longs.next() {
            arg = arg.long(long);
        }
        for alias in longs {
            arg = arg.alias(alias);
        }

        if let Some(value_name) = self.value_name {
            // without number_of_values(1), `-c a b` would swallow positionals
            arg = arg.takes_value(true).value_name(value_name).number_of_values(1);
        }
        if self.multiple {
            arg = arg.multiple(true);
        }
        if let Some(help) = self.help {
            arg = arg.help(help);
        }
        arg
    }
}

/// Produces a `clap::Arg`.  See the crate documentation.
#[macro_export]
macro_rules! arg {
    (* $name:ident $($rest:tt)*)
    => { $crate::__arg_opts!{ ($crate::ArgSpec::new(stringify!($name), Some(true))) $($rest)* } };

    (? $name:ident $($rest:tt)*)
    => { $crate::__arg_opts!{ ($crate::ArgSpec::new(stringify!($name), Some(false))) $($rest)* } };

    ($name:ident $uhoh:ident $($rest:tt)*)
    => {
        compile_error!{concat!{
            "found two consecutive idents, did you mean to write '",
            stringify!($name), "=", stringify!($uhoh), "'?"
        }}
    };

    ($name:ident $($rest:tt)*)
    => { $crate::__arg_opts!{ ($crate::ArgSpec::new(stringify!($name), None)) $($rest)* } };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __arg_opts {
    (($b:expr) [--$($opt:tt)+] $($rest:tt)*)
    => { $crate::__arg_opts!{ ($b.long(concat!($(stringify!($opt)),+))) $($rest)* } };

    (($b:expr) [-$($opt:tt)+] $($rest:tt)*)
    => { $crate::__arg_opts!{ ($b.short(concat!($(stringify!($opt)),+))) $($rest)* } };

    (($b:expr) =$value:ident $($rest:tt)*)
    => { $crate::__arg_opts!{ ($b.value(stringify!($value))) $($rest)* } };

    (($b:expr) ... $($rest:tt)*)
    => { $crate::__arg_opts!{ ($b.multiple()) $($rest)* } };

    (($b:expr))
    => { $b.build() };

    (($b:expr) $help:expr)
    => { $b.help($help).build() };
}

#[cfg(test)]
mod tests {
    use clap::App;

    #[test]
    fn examples() {
        let _ = arg!(*config [-c][--config]=CONFIG "settings yaml");
        let _ = arg!( verbose [-v][--verbose] "increase log verbosity");
        let _ = arg!( dims [--dims][--mesh]=N... "mesh dimensions");
        let _ = arg!(?input=INPUT "Input file. Defaults to stdin.");
        let _ = arg!( log [--log-file]=PATH);
    }

    #[test]
    fn required_flags() {
        let app = || {
            App::new("test")
                .arg(arg!( input=INPUT "positional, required by default"))
                .arg(arg!( shift [--shift] "an option, optional by default"))
                .arg(arg!(*bravais [--bravais]=TYPE "required option"))
        };
        assert!(app().get_matches_from_safe(vec!["test", "in"]).is_err());
        assert!(app().get_matches_from_safe(vec!["test", "--bravais", "fcc"]).is_err());

        let matches = app().get_matches_from_safe(vec!["test", "in", "--bravais", "fcc"]).unwrap();
        assert_eq!(matches.value_of("input"), Some("in"));
        assert_eq!(matches.value_of("bravais"), Some("fcc"));
        assert!(!matches.is_present("shift"));
    }

    #[test]
    fn repeated_values_and_aliases() {
        let app = App::new("test")
            .arg(arg!( config [-c][--config][--cfg]=CONFIG... "settings"))
            .arg(arg!(?input=INPUT));
        let matches = app.get_matches_from_safe(vec!["test", "-c", "a.yaml", "--cfg", "b.yaml", "in"]).unwrap();
        let configs: Vec<_> = matches.values_of("config").unwrap().collect();
        assert_eq!(configs, vec!["a.yaml", "b.yaml"]);
        assert_eq!(matches.value_of("input"), Some("in"));
    }
}
