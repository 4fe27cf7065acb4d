/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks performed on the config after merging, before anything is computed.

use std::ops::Deref;

use failure::Error;

use crate::config::*;

/// Settings that have passed `Settings::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(Settings);

impl Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Settings { &self.0 }
}

impl Settings {
    pub fn validate(self) -> Result<ValidatedSettings, Error> {
        check_lattice(&self.lattice)?;
        Ok(ValidatedSettings(self))
    }
}

fn check_lattice(lattice: &LatticeSettings) -> Result<(), Error> {
    let params = lattice.params();

    // the bravais families report their own missing keys
    if let LatticeKind::General = lattice.kind {
        for &(key, value) in &params.entries() {
            if value.is_none() {
                bail!("lattice: 'general' requires all of a, b, c, alpha, beta, gamma (missing '{}')", key);
            }
        }
    }

    for &(key, value) in &params.entries()[..3] {
        if let Some(value) = value {
            ensure!(value > 0.0, "lattice: '{}' must be positive (got {})", key, value);
        }
    }
    for &(key, value) in &params.entries()[3..] {
        if let Some(value) = value {
            ensure!(
                0.0 < value && value < std::f64::consts::PI,
                "lattice: '{}' must be strictly between 0 and 180 degrees (got {} radians)", key, value,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YamlRead;

    fn settings(lattice: &str) -> Settings {
        let yaml = format!("lattice: {}\nmesh: {{dims: [2, 2, 2]}}", lattice);
        Settings::from_reader(yaml.as_bytes()).unwrap()
    }

    #[test]
    fn valid() {
        assert!(settings("{bravais: fcc, a: 1}").validate().is_ok());
        assert!(settings("{bravais: hexagonal, a: 1, c: 2}").validate().is_ok());
        assert!(settings("{bravais: general, a: 1, b: 1, c: 1, alpha: 90, beta: 90, gamma: 90, angle-unit: degrees}").validate().is_ok());

        let validated = settings("{bravais: cubic, a: 3}").validate().unwrap();
        assert_eq!(validated.lattice.a, Some(3.0));
    }

    #[test]
    fn general_needs_everything() {
        let err = settings("{bravais: general, a: 1, b: 1, c: 1, alpha: 1, gamma: 1}").validate().unwrap_err();
        assert!(err.to_string().contains("'beta'"), "{}", err);
    }

    #[test]
    fn bad_values() {
        assert!(settings("{bravais: cubic, a: -1}").validate().is_err());
        assert!(settings("{bravais: cubic, a: 0}").validate().is_err());
        assert!(settings("{bravais: trigonal, a: 1, alpha: 4}").validate().is_err());
        assert!(settings("{bravais: trigonal, a: 1, alpha: 200, angle-unit: degrees}").validate().is_err());
        assert!(settings("{bravais: trigonal, a: 1, alpha: 70, angle-unit: degrees}").validate().is_ok());
    }
}
