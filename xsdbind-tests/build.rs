//! Generates marshalling code for the schemas under `tests/schemas`, which the
//! integration tests include from `OUT_DIR`.

use std::error::Error;
use std::path::PathBuf;
use xsdbind_codegen::{Generator, write_artifacts};
use xsdbind_schema::SchemaSet;

const SCHEMAS: [&str; 2] = ["widget", "catalog"];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    println!("cargo:rerun-if-changed=build.rs");

    for name in SCHEMAS {
        let schema = PathBuf::from("tests/schemas").join(format!("{name}.xsd"));
        println!("cargo:rerun-if-changed={}", schema.display());

        let mut set = SchemaSet::new();
        set.add_file(&schema)?;
        let graph = set.compile()?;
        let artifacts = Generator::new(&graph)
            .runtime_crate("xsdbind::core")
            .generate()?;
        write_artifacts(&out_dir.join(name), &artifacts)?;
    }
    Ok(())
}
