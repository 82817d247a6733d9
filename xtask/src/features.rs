use std::process::Command;

use anyhow::{Context, Result};

/// `dealdesk-infra` builds to verify: (label, extra cargo arguments)
const FEATURE_COMBINATIONS: &[(&str, &[&str])] = &[
    ("default", &[]),
    ("memory only", &["--no-default-features"]),
    ("sqlite", &["--no-default-features", "--features", "sqlite"]),
];

/// Check that every supported feature combination compiles and passes its
/// tests.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} dealdesk-infra feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, (label, args)) in FEATURE_COMBINATIONS.iter().enumerate() {
        println!(
            "\n[{}/{}] cargo test -p dealdesk-infra {}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            args.join(" ")
        );

        let status = Command::new("cargo")
            .args(["test", "-p", "dealdesk-infra"])
            .args(*args)
            .status()
            .with_context(|| format!("Failed to run cargo test for '{label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed");
        }

        println!("✅ Features '{label}' passed");
    }

    println!("\n✅ All {} feature combinations pass!", FEATURE_COMBINATIONS.len());

    Ok(())
}
