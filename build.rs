use std::env;
use std::path::{PathBuf, Path};

use anyhow::{Context, Result};

use ergodox_config::KeymapConfig;

fn json_config(out: &Path) -> Result<()>  {
    // Generate config schema
    KeymapConfig::schema_to_file(&out.join("schema.json"))
        .context("While generating JSON schema")?;

    // Generate config from JSON if enabled
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_JSON_CONFIG");
    println!("cargo:rerun-if-env-changed=ERGODOX_JSON_CONFIG");
    if env::var_os("CARGO_FEATURE_JSON_CONFIG").is_some() {
        // Get path from env variable or use default
        let default_path = String::from("ergodox.json");
        let path = env::var_os("ERGODOX_JSON_CONFIG")
            .map(|s| s.into_string())
            .transpose()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "ERGODOX_JSON_CONFIG is not utf-8"))?
            .unwrap_or(default_path);

        println!("cargo:rerun-if-changed={}", path);
        let json = Path::new(&path);

        let config = KeymapConfig::from_file(json)
            .context(format!("While reading {}", path))?;

        config.to_file(&out.join("config.rs"))
            .context("While generating config.rs")?;
    } else if env::var_os("ERGODOX_JSON_CONFIG").is_some() {
        println!("cargo:warning=ERGODOX_JSON_CONFIG defined but ignored because feature \"json-config\" is not enabled");
    }

    Ok(())
}

fn main() -> Result<()>  {
    let out = &PathBuf::from(env::var_os("OUT_DIR").context("Could not get OUT_DIR")?);
    json_config(out)?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
