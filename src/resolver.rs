use crate::error::{BootError, BootResult};
use crate::phonetic::metaphone;
use crate::registry::{Descriptor, Registry};

/// Maps `requested` to its registered command.
///
/// On a miss every registered name sharing the requested name's phonetic key
/// is offered as a suggestion, in registry order.
pub fn resolve<'r>(requested: &str, registry: &'r Registry) -> BootResult<&'r Descriptor> {
    if let Some(descriptor) = registry.lookup(requested) {
        return Ok(descriptor);
    }

    let key = metaphone(requested);
    let suggestions = registry
        .names()
        .filter(|name| metaphone(name) == key)
        .map(str::to_string)
        .collect::<Vec<_>>();
    debug!("no command \"{requested}\" (key {key}), suggestions: {suggestions:?}");

    Err(BootError::unrecognized(requested, suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::registry::tests::Named;

    fn registry(names: &[&'static str]) -> Registry {
        Registry::from_units(
            names
                .iter()
                .map(|&n| Box::new(Named(n)) as Box<dyn Command>),
        )
        .unwrap()
    }

    #[test]
    fn exact_match_resolves() {
        let registry = registry(&["build", "help"]);
        assert_eq!(resolve("build", &registry).unwrap().name(), "build");
    }

    #[test]
    fn near_miss_suggests() {
        let registry = registry(&["build", "help"]);
        let err = resolve("buld", &registry).unwrap_err();
        assert_eq!(err.kind(), "UnrecognizedActionError");
        assert_eq!(err.to_string(), "Unrecognized action \"buld\"");
        assert_eq!(err.suggestions(), ["build"]);
    }

    #[test]
    fn suggestions_follow_registry_order() {
        let registry = registry(&["bolt", "help", "build"]);
        let err = resolve("buld", &registry).unwrap_err();
        assert_eq!(err.suggestions(), ["bolt", "build"]);
    }

    #[test]
    fn unrelated_name_has_no_suggestions() {
        let registry = registry(&["build", "help"]);
        let err = resolve("deploy", &registry).unwrap_err();
        assert!(err.suggestions().is_empty());
    }

    #[test]
    fn no_case_folding() {
        let registry = registry(&["build"]);
        let err = resolve("BUILD", &registry).unwrap_err();
        assert_eq!(err.suggestions(), ["build"]);
    }
}
