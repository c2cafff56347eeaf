//! Custom cargo commands for the arraybag crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no Kani)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Fuzz one target for a minute

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(args.next().as_deref().unwrap_or("bag_operations"))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + constant alignment + Kani)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
  kani      Run Kani proofs only
  fuzz      Fuzz a target for 60s (default: bag_operations)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("ArrayBag Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Verifying crate/Kani constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run the standalone Kani proofs, skipping when Kani is not installed
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    if !proofs_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    if !tool_available("cargo-kani") {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    run_in(&proofs_dir, "cargo", &["kani"])
}

/// Fuzz one target with cargo-fuzz
fn fuzz(target: &str) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    run_in(
        &fuzz_dir,
        "cargo",
        &["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"],
    )
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn tool_available(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The Kani crate copies the capacity policy; its ceiling must match the crate's.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let crate_src = std::fs::read_to_string(root.join("src/capacity.rs"))
        .context("Failed to read src/capacity.rs")?;
    let kani_path = root.join("kani-proofs/src/lib.rs");
    if !kani_path.exists() {
        println!("  (no kani-proofs/src/lib.rs, skipping constant check)");
        return Ok(());
    }
    let kani_src = std::fs::read_to_string(&kani_path).context("Failed to read Kani proofs")?;

    let crate_max = extract_usize_const(&crate_src, "MAX_CAPACITY")
        .context("MAX_CAPACITY not found in src/capacity.rs")?;
    let kani_max = extract_usize_const(&kani_src, "MAX_CAPACITY")
        .context("MAX_CAPACITY not found in kani-proofs")?;

    if crate_max != kani_max {
        bail!("crate MAX_CAPACITY={} != Kani MAX_CAPACITY={}", crate_max, kani_max);
    }

    Ok(())
}

fn extract_usize_const(content: &str, name: &str) -> Option<usize> {
    // Look for "pub const MAX_CAPACITY: usize = 10_000;"
    let needle = format!("const {}: usize =", name);
    content.lines().find_map(|line| {
        let value = line.split(&needle).nth(1)?;
        let value = value.split(';').next()?.trim().replace('_', "");
        value.parse().ok()
    })
}
