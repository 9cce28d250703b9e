//! Build script for smsdash-i18n
//!
//! Validates every Fluent locale file at compile time:
//! - all Fluent syntax is valid
//! - every locale defines exactly the same message keys
//! - every message has a value

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::Entry;
use fluent_syntax::parser::parse;

/// Extract message keys from a Fluent file
fn extract_message_keys(content: &str) -> Result<BTreeSet<String>, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut keys = BTreeSet::new();
    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let key = message.id.name.to_string();
            if message.value.is_none() {
                return Err(format!("Message '{key}' has no value"));
            }
            if !keys.insert(key.clone()) {
                return Err(format!("Duplicate message key '{key}'"));
            }
        }
    }

    Ok(keys)
}

/// Find `locales/<lang>/main.ftl` files
fn find_locale_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    if !locales_dir.exists() {
        return Err(format!(
            "Locales directory not found: {}",
            locales_dir.display()
        ));
    }

    let mut locale_files = BTreeMap::new();

    for entry in fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {e}"))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {e}"))?;
        let path = entry.path();

        if path.is_dir() {
            let locale_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?
                .to_string();

            let main_ftl = path.join("main.ftl");
            if main_ftl.exists() {
                println!("cargo:rerun-if-changed={}", main_ftl.display());
                locale_files.insert(locale_name, main_ftl);
            }
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }

    Ok(locale_files)
}

fn validate_locales() -> Result<(), String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");
    println!("cargo:rerun-if-changed={}", locales_dir.display());

    let locale_files = find_locale_files(&locales_dir)?;

    let mut all_keys = BTreeMap::new();
    let mut errors = Vec::new();

    for (locale, path) in &locale_files {
        let parsed = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))
            .and_then(|content| extract_message_keys(&content));
        match parsed {
            Ok(keys) => {
                all_keys.insert(locale.clone(), keys);
            }
            Err(e) => errors.push(format!("{locale}: {e}")),
        }
    }

    if !errors.is_empty() {
        return Err(format!("Validation errors:\n{}", errors.join("\n")));
    }

    let mut iter = all_keys.iter();
    if let Some((reference_locale, reference_keys)) = iter.next() {
        for (locale, keys) in iter {
            for key in reference_keys.difference(keys) {
                errors.push(format!(
                    "{locale}: Missing message key '{key}' (present in {reference_locale})"
                ));
            }
            for key in keys.difference(reference_keys) {
                errors.push(format!(
                    "{locale}: Extra message key '{key}' (absent from {reference_locale})"
                ));
            }
        }
    }

    if !errors.is_empty() {
        return Err(format!("Consistency errors:\n{}", errors.join("\n")));
    }

    Ok(())
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
