use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use uniffi_bindgen::bindings::SwiftBindingGenerator;

fn main() -> Result<()> {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_dir = match std::env::args().nth(1) {
        Some(dir) => Utf8PathBuf::from(dir),
        None => default_output_dir(&manifest_dir)?,
    };

    generate_swift_bindings(&manifest_dir, &output_dir)
}

fn default_output_dir(manifest_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let repo_root = manifest_dir
        .parent()
        .context("failed to locate workspace root")?;
    Ok(repo_root.join("swift/ToolboxFFI/Sources/ToolboxFFI"))
}

fn generate_swift_bindings(manifest_dir: &Utf8Path, output_dir: &Utf8Path) -> Result<()> {
    let udl_path = manifest_dir.join("src/toolbox_core.udl");

    std::fs::create_dir_all(output_dir.as_std_path())
        .with_context(|| format!("failed to create {output_dir}"))?;

    uniffi_bindgen::generate_bindings(
        udl_path.as_path(),
        None,
        SwiftBindingGenerator,
        Some(output_dir),
        None,
        Some("toolbox_core"),
        true,
    )
    .with_context(|| format!("failed to generate Swift bindings from {udl_path}"))?;

    println!("Generated Swift bindings in {output_dir}");

    Ok(())
}
