//! Command registry.
//!
//! Built once per run: built-in commands first, then the manifests found in
//! the command directory. Read-only after discovery.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::command::Command;
use crate::commands;
use crate::error::{BootError, BootResult};
use crate::manifest;

/// A registered command, keyed by its invocation name.
pub struct Descriptor {
    name: String,
    unit: Box<dyn Command>,
}

impl Descriptor {
    /// Wraps `unit` after checking the name it declares.
    pub fn new(unit: Box<dyn Command>) -> BootResult<Self> {
        let name = unit.name().to_string();
        if let Err(reason) = validate_name(&name) {
            return Err(BootError::discovery(format!(
                "command name \"{name}\" is invalid: {reason}"
            )));
        }
        Ok(Self { name, unit })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &dyn Command {
        self.unit.as_ref()
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor").field("name", &self.name).finish()
    }
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        Err("it is empty")
    } else if name.starts_with('-') {
        Err("it starts with '-'")
    } else if !name.chars().all(|c| c.is_ascii_graphic()) {
        Err("only printable ASCII without spaces is allowed")
    } else {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Descriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Registers the built-in commands and every manifest under `location`.
    pub fn discover(location: &Path) -> BootResult<Self> {
        let mut registry = Registry::default();
        for unit in commands::builtin() {
            registry.register(Descriptor::new(unit)?)?;
        }
        for descriptor in manifest::discover(location)? {
            registry.register(descriptor)?;
        }
        debug!(
            "registered {} commands: {}",
            registry.len(),
            registry.names().collect::<Vec<_>>().join(", ")
        );
        Ok(registry)
    }

    /// Builds a registry from an explicit list of units, in order.
    pub fn from_units(units: impl IntoIterator<Item = Box<dyn Command>>) -> BootResult<Self> {
        let mut registry = Registry::default();
        for unit in units {
            registry.register(Descriptor::new(unit)?)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: Descriptor) -> BootResult<()> {
        if self.index.contains_key(descriptor.name()) {
            return Err(BootError::discovery(format!(
                "command \"{}\" is registered more than once",
                descriptor.name()
            )));
        }
        self.index
            .insert(descriptor.name().to_string(), self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Descriptor> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Invocation names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Descriptor::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::io::Write;

    use super::*;
    use crate::command::Context;
    use crate::error::CommandResult;

    pub(crate) struct Named(pub &'static str);

    impl Command for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn execute(&self, _ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult {
            writeln!(out, "ran {}", self.0)?;
            Ok(())
        }
    }

    fn units(names: &[&'static str]) -> Vec<Box<dyn Command>> {
        names
            .iter()
            .map(|&n| Box::new(Named(n)) as Box<dyn Command>)
            .collect()
    }

    #[test]
    fn keeps_registration_order() {
        let registry = Registry::from_units(units(&["zeta", "alpha", "mid"])).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_is_exact() {
        let registry = Registry::from_units(units(&["build"])).unwrap();
        assert!(registry.lookup("build").is_some());
        assert!(registry.lookup("Build").is_none());
        assert!(registry.lookup(" build").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Registry::from_units(units(&["build", "build"])).unwrap_err();
        assert_eq!(err.kind(), "DiscoveryError");
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn malformed_names_fail_the_capability_check() {
        for bad in ["", "two words", "-flag", "tab\there"] {
            let err = Descriptor::new(Box::new(Named(bad))).unwrap_err();
            assert_eq!(err.kind(), "DiscoveryError", "name {bad:?}");
        }
    }

    #[test]
    fn builtins_are_registered_without_manifests() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::discover(&dir.path().join("commands")).unwrap();
        assert_eq!(registry.len(), commands::MODULES.len());
        assert!(registry.lookup("help").is_some());
    }

    #[test]
    fn manifests_follow_builtins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.toml"),
            "command = \"lint\"\nprogram = \"true\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a.toml"),
            "command = \"fmt\"\nprogram = \"true\"\n",
        )
        .unwrap();

        let registry = Registry::discover(dir.path()).unwrap();
        let names = registry.names().collect::<Vec<_>>();
        assert_eq!(&names[names.len() - 2..], ["fmt", "lint"]);
    }

    #[test]
    fn manifest_shadowing_a_builtin_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("help.toml"),
            "command = \"help\"\nprogram = \"true\"\n",
        )
        .unwrap();
        let err = Registry::discover(dir.path()).unwrap_err();
        assert_eq!(err.kind(), "DiscoveryError");
    }

    #[test]
    fn discovery_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.toml"), "command = \"x\"\nprogram = \"true\"\n").unwrap();

        let first = Registry::discover(dir.path()).unwrap();
        let second = Registry::discover(dir.path()).unwrap();
        assert!(first.names().eq(second.names()));
    }
}
