//! Built-in commands.
//!
//! Every `*.rs` file in `src/commands/` is picked up by the build script and
//! must export a `CommandInstance` type implementing `Command + Default`.

include!(concat!(env!("OUT_DIR"), "/generated_commands.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_builtin_per_module() {
        let names = builtin()
            .iter()
            .map(|c| c.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names.len(), MODULES.len());
        assert_eq!(names, MODULES);
    }
}
