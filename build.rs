use std::{env, path::PathBuf};

fn main() {
    // 1) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");
    load_home_env(".env");

    // 2) Provide fallbacks so the clock compiles without .env
    let initial_epoch = env_or_default("INITIAL_EPOCH_SECONDS", "0");
    let adjust_timeout = env_or_default("ADJUST_TIMEOUT_SECONDS", "30");

    if initial_epoch.trim().parse::<u32>().is_err() {
        println!(
            "cargo:warning=INITIAL_EPOCH_SECONDS is not a u32 ({initial_epoch}); ClockConfig::from_build_env will reject it"
        );
    }
    if adjust_timeout.trim().parse::<u32>().is_err() {
        println!(
            "cargo:warning=ADJUST_TIMEOUT_SECONDS is not a u32 ({adjust_timeout}); ClockConfig::from_build_env will reject it"
        );
    }

    // 3) Expose as compile-time constants
    println!("cargo:rustc-env=INITIAL_EPOCH_SECONDS={initial_epoch}");
    println!("cargo:rustc-env=ADJUST_TIMEOUT_SECONDS={adjust_timeout}");

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=INITIAL_EPOCH_SECONDS");
    println!("cargo:rerun-if-env-changed=ADJUST_TIMEOUT_SECONDS");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
