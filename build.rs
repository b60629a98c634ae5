use std::{env, fs, path::Path};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dst = Path::new(&out_dir).join("generated_commands.rs");
    let mut mods = String::new();

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let commands_dir = Path::new(&manifest_dir).join("src/commands");

    // Every plain `*.rs` file is a command module; sorting keeps registration order stable
    let mut command_names = Vec::new();
    let mut paths = fs::read_dir(&commands_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| !path.is_dir())
        .collect::<Vec<_>>();
    paths.sort();

    for path in paths {
        if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let mod_name = path.file_stem().unwrap().to_string_lossy().to_string();
            let abs_path = path.canonicalize().unwrap();
            let path_str = abs_path.to_string_lossy().replace('\\', "/");

            mods.push_str(&format!(
                "#[path = \"{}\"]\npub mod {};\n",
                path_str, mod_name
            ));

            command_names.push(mod_name);
        }
    }

    mods.push('\n');
    mods.push_str("/// Built-in commands, in module file-name order\n");
    mods.push_str("pub fn builtin() -> Vec<Box<dyn crate::command::Command>> {\n");
    mods.push_str("    vec![\n");
    for name in &command_names {
        mods.push_str(&format!(
            "        Box::new({}::CommandInstance::default()) as Box<dyn crate::command::Command>,\n",
            name
        ));
    }
    mods.push_str("    ]\n");
    mods.push_str("}\n");

    mods.push('\n');
    mods.push_str("/// Module names the built-in table was generated from\n");
    mods.push_str("pub const MODULES: &[&str] = &[\n");
    for name in &command_names {
        mods.push_str(&format!("    \"{}\",\n", name));
    }
    mods.push_str("];\n");

    fs::write(&dst, mods).unwrap();
    println!("cargo:rerun-if-changed=src/commands");
}
