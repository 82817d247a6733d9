//! Development automation tasks for the `DealDesk` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{anyhow, Context};

mod features;

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("codegen") => run_codegen(),
        Some("test-features") => features::test_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("DealDesk Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, build, test, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    test      Run all tests");
    println!("    codegen   Generate TypeScript types for the HTTP payloads");
    println!("    test-features  Verify the dealdesk-infra storage feature matrix");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/6: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/6: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/6: Building server binary (dealdesk-api)...");
    verify_server_binary()?;

    println!("\n==> Step 4/6: Running tests...");
    run_test()?;

    println!("\n==> Step 5/6: Checking dependencies...");
    run_deny()?;

    println!("\n==> Step 6/6: Auditing dependencies...");
    run_audit()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Run `cargo <args>`, failing with `failure` on a non-zero exit
fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}

/// Run an optional cargo subcommand such as `deny`, after checking that it
/// is installed
fn cargo_plugin(plugin: &str, args: &[&str], failure: &str) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([plugin, "--version"])
        .output()
        .is_ok_and(|output| output.status.success());

    if !installed {
        eprintln!("cargo-{plugin} is not installed.");
        eprintln!("Install it with: cargo install cargo-{plugin}");
        anyhow::bail!("cargo-{plugin} not found");
    }

    let mut full_args = vec![plugin];
    full_args.extend_from_slice(args);
    cargo(&full_args, failure)
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(
        &["fmt", "--all", "--", "--check"],
        "Format check failed. Run 'cargo fmt --all' to fix.",
    )
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

/// Build the `dealdesk` server binary on its own, so a missing feature in
/// the api crate shows up outside the workspace-wide test build
fn verify_server_binary() -> anyhow::Result<()> {
    cargo(&["build", "-p", "dealdesk-api", "--bin", "dealdesk"], "dealdesk binary failed to build")?;
    println!("✓ dealdesk builds successfully");
    Ok(())
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "Tests failed")
}

fn run_deny() -> anyhow::Result<()> {
    cargo_plugin("deny", &["check"], "cargo-deny found issues")
}

fn run_audit() -> anyhow::Result<()> {
    cargo_plugin("audit", &[], "cargo-audit found vulnerabilities")
}

/// Generate TypeScript types for the HTTP payloads and copy them to `bindings/`
fn run_codegen() -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");

    // ts-rs writes one file per exported type while the domain tests run
    println!("Step 1/2: Running dealdesk-domain tests with ts-gen...");
    let status = Command::new("cargo")
        .args(["test", "-p", "dealdesk-domain", "--features", "ts-gen", "--lib"])
        .status()
        .context("Failed to run cargo test")?;

    if !status.success() {
        anyhow::bail!("TypeScript generation tests failed");
    }

    let generated_dir = PathBuf::from("crates/domain/bindings");
    if !generated_dir.exists() {
        anyhow::bail!("No bindings found at {}", generated_dir.display());
    }

    let output_dir = PathBuf::from("bindings");
    println!("\nStep 2/2: Copying bindings to {}...", output_dir.display());
    let copied = copy_ts_files(&generated_dir, &output_dir)?;

    println!("\n✓ {copied} TypeScript files written to {}", output_dir.display());
    Ok(())
}

/// Copy every `.ts` file in `src` into `dest`, returning how many were copied
fn copy_ts_files(src: &Path, dest: &Path) -> anyhow::Result<usize> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).context("Failed to read bindings directory")? {
        let path = entry?.path();
        if path.extension().and_then(OsStr::to_str) != Some("ts") {
            continue;
        }
        let file_name = path.file_name().ok_or_else(|| anyhow!("Invalid file name"))?;
        let dest_path = dest.join(file_name);
        fs::copy(&path, &dest_path).with_context(|| {
            format!("Failed to copy {} to {}", path.display(), dest_path.display())
        })?;
        copied += 1;
    }

    Ok(copied)
}
