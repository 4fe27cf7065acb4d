/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::marker::PhantomData;

use crate::FailResult;

/// Types that can be read from command line arguments.
///
/// Each implementation adds its own arguments to a clap app and later
/// reads them back out of the matches.  Type inference on the returned
/// `ClapDeserializer` picks the right `_resolve_args`, so an entry point
/// only names its argument types once.
pub trait CliDeserialize: Sized {
    fn augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> (clap::App<'a, 'b>, ClapDeserializer<Self>)
    { (Self::_augment_clap_app(app), ClapDeserializer(PhantomData)) }

    /// Don't use this. Call 'augment_clap_app' instead.
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>;
    /// Don't use this. Call 'resolve_args' on the ClapDeserializer instead.
    fn _resolve_args(matches: &clap::ArgMatches<'_>) -> FailResult<Self>;
}

/// Token showing that an app was augmented with the arguments of `A`.
pub struct ClapDeserializer<A>(PhantomData<A>);

impl<A: CliDeserialize> ClapDeserializer<A> {
    /// May perform IO, such as reading config files.
    pub fn resolve_args(self, matches: &clap::ArgMatches<'_>) -> FailResult<A>
    { A::_resolve_args(matches) }
}

impl CliDeserialize for () {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>
    { app }

    fn _resolve_args(_: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok(()) }
}

macro_rules! impl_tuple_product {
    ($($A:ident)+) => {
        impl<$($A: CliDeserialize),+> CliDeserialize for ($($A,)+) {
            fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>
            {
                $( let app = $A::_augment_clap_app(app); )+
                app
            }

            fn _resolve_args(matches: &clap::ArgMatches<'_>) -> FailResult<Self>
            { Ok(($($A::_resolve_args(matches)?,)+)) }
        }
    };
}

impl_tuple_product!{ A B }
impl_tuple_product!{ A B C }

#[cfg(test)]
mod tests {
    use super::*;

    struct Name(String);
    struct Loud(bool);

    impl CliDeserialize for Name {
        fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>
        { app.arg(arg!(*name [--name]=NAME "a name")) }

        fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
        { Ok(Name(m.value_of("name").unwrap_or_default().to_string())) }
    }

    impl CliDeserialize for Loud {
        fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>
        { app.arg(arg!( loud [--loud] "be loud")) }

        fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
        { Ok(Loud(m.is_present("loud"))) }
    }

    #[test]
    fn product() {
        let (app, de) = CliDeserialize::augment_clap_app(clap::App::new("test"));
        let matches = app.get_matches_from_safe(vec!["test", "--name", "x", "--loud"]).unwrap();
        let (Name(name), Loud(loud), ()) = de.resolve_args(&matches).unwrap();
        assert_eq!(name, "x");
        assert!(loud);
    }
}
