use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct SalutationData {
    canonical_by_salutation: HashMap<String, String>,
}

#[derive(Deserialize)]
struct SuffixData {
    suffixes: Vec<String>,
}

#[derive(Deserialize)]
struct ParticleData {
    compound_surname_particles: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/salutation_data.json")?;
    let salutations: SalutationData = serde_json::from_str(&json)?;
    let canonical_by_salutation = salutations
        .canonical_by_salutation
        .into_iter()
        .map(|(k, v)| (lookup_key(&k), v))
        .collect::<Vec<_>>();
    write_map(
        &output.join("canonical_by_salutation.rs"),
        &canonical_by_salutation,
    )?;

    // The suffix list is ordered; if two entries collide once normalized,
    // the earlier one is canonical.
    let json = read_file(&input, "build/suffix_data.json")?;
    let suffixes: SuffixData = serde_json::from_str(&json)?;
    let mut canonical_by_suffix: Vec<(String, String)> = Vec::new();
    for suffix in suffixes.suffixes {
        let key = lookup_key(&suffix);
        if !canonical_by_suffix.iter().any(|(k, _)| *k == key) {
            canonical_by_suffix.push((key, suffix));
        }
    }
    write_map(&output.join("canonical_by_suffix.rs"), &canonical_by_suffix)?;

    // Stored normalized, so "st." and "st" collapse into one key
    let json = read_file(&input, "build/particle_data.json")?;
    let particles: ParticleData = serde_json::from_str(&json)?;
    let mut compound_surname_particles = particles
        .compound_surname_particles
        .iter()
        .map(|p| lookup_key(p))
        .collect::<Vec<_>>();
    compound_surname_particles.sort();
    compound_surname_particles.dedup();
    write_set(
        &output.join("compound_surname_particles.rs"),
        &compound_surname_particles,
    )?;

    Ok(())
}

// Must agree with `utils::lookup_key` in the library
fn lookup_key(word: &str) -> String {
    word.to_lowercase().replace('.', "")
}

fn write_map(output: &Path, entries: &[(String, String)]) -> Result<()> {
    let mut builder = phf_codegen::Map::new();
    for (k, v) in entries {
        builder.entry(k.as_str(), &format!("\"{}\"", v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
