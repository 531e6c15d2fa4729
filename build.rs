use std::{env, error::Error, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn Error>> {
    // put the linker script somewhere downstream images can find it
    // with `-T boot.ld`
    let out = PathBuf::from(env::var("OUT_DIR")?);
    fs::copy("lds/boot.ld", out.join("boot.ld"))?;

    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=lds/boot.ld");

    Ok(())
}
