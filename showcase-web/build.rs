use std::path::Path;
use std::process::Command;

fn main() {
    copy_shared_assets();
    generate_tailwind();
}

fn copy_shared_assets() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let shared_main_css = Path::new(manifest_dir).join("../showcase-ui/assets/main.css");
    let local_main_css = Path::new(manifest_dir).join("assets/main.css");

    println!("cargo:rerun-if-changed={}", shared_main_css.display());

    if shared_main_css.exists() {
        if let Err(e) = std::fs::copy(&shared_main_css, &local_main_css) {
            println!("cargo:warning=Failed to copy main.css from showcase-ui: {e}");
        }
    }
}

/// Tailwind is optional at build time: without the CLI the checked-in
/// stylesheet in assets/ is served as is.
fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("../showcase-ui/src").display()
    );

    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed, keeping existing assets/tailwind.css");
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {
            println!("cargo:warning=Tailwind CSS generated successfully");
        }
        Ok(output) => {
            println!(
                "cargo:warning=Failed to generate Tailwind CSS: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => println!("cargo:warning=Failed to run tailwindcss: {e}"),
    }
}
