use std::env;
use std::fs;
use std::path::Path;

/// Copies `config.toml` and the CSV files under `data/` from the workspace
/// root next to the binary, where the server resolves relative paths.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../data");

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    let source_data = workspace_root.join("data");
    let Ok(entries) = fs::read_dir(&source_data) else {
        println!("cargo:warning=no data directory at {:?}", source_data);
        return;
    };
    let dest_data = target_dir.join("data");
    fs::create_dir_all(&dest_data).expect("Could not create data directory");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            fs::copy(&path, dest_data.join(entry.file_name()))
                .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
        }
    }
}
