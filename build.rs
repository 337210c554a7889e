use std::env;
use std::fs;
use std::path::Path;

// Variables que la aplicación lee con option_env!
const KNOWN_VARS: &[&str] = &[
    "ENVIRONMENT",
    "MOUNT_POINT_ID",
    "CHUNK_BASE_URL",
    "SERVICE_WORKER_URL",
    "LOG_LEVEL",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for var in KNOWN_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !KNOWN_VARS.contains(&key) {
            println!("cargo:warning=Variable desconocida en .env: {}", key);
            continue;
        }
        // El entorno tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
