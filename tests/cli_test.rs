use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SPREAD_TS: &str = "export const SearchInputSchema = z
  .object({
    query: z.string(),
    ...PaginationSchema.shape
  })
  .strict();
";

const PLAIN_TS: &str = "export const ReadFileInputSchema = z.object({ path: z.string() }).strict();\n";

fn seed_project(root: &Path, reading: &str) -> Result<()> {
    fs::create_dir_all(root.join("src/tools"))?;
    fs::create_dir_all(root.join("src/schemas"))?;
    fs::write(root.join("src/tools/discovery.ts"), SPREAD_TS)?;
    fs::write(root.join("src/tools/reading.ts"), reading)?;
    fs::write(root.join("src/schemas/common.ts"), SPREAD_TS)?;
    Ok(())
}

fn run_in(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_shape-spread-fix"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()?;
    Ok(output)
}

#[test]
fn test_default_run_prints_confirmations_and_done() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;

    let output = run_in(temp_dir.path(), &[])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "✓ Fixed src/tools/discovery.ts\n\
         ✓ Fixed src/tools/reading.ts\n\
         ✓ Fixed src/schemas/common.ts\n\
         \n\
         Done! All files fixed.\n"
    );

    let reading = fs::read_to_string(temp_dir.path().join("src/tools/reading.ts"))?;
    assert_eq!(reading, PLAIN_TS);
    let discovery = fs::read_to_string(temp_dir.path().join("src/tools/discovery.ts"))?;
    assert!(discovery.contains(".merge(PaginationSchema)"));
    Ok(())
}

#[test]
fn test_missing_file_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;
    fs::remove_file(temp_dir.path().join("src/schemas/common.ts"))?;

    let output = run_in(temp_dir.path(), &[])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("✓ Fixed src/tools/reading.ts"));
    assert!(!stdout.contains("Done!"));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("src/schemas/common.ts"));
    Ok(())
}

#[test]
fn test_check_exits_one_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;

    let output = run_in(temp_dir.path(), &["--check"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("~ Would fix src/tools/discovery.ts (1 replacements)"));
    assert!(stdout.contains("✓ Clean src/tools/reading.ts"));
    assert!(!stdout.contains("Done!"));

    let discovery = fs::read_to_string(temp_dir.path().join("src/tools/discovery.ts"))?;
    assert_eq!(discovery, SPREAD_TS);
    Ok(())
}

#[test]
fn test_check_on_fixed_tree_exits_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;

    assert_eq!(run_in(temp_dir.path(), &[])?.status.code(), Some(0));
    let output = run_in(temp_dir.path(), &["--check"])?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_strict_fails_after_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;

    let output = run_in(temp_dir.path(), &["--strict"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Done! All files fixed."));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("src/tools/reading.ts"));

    // Matching files were still rewritten.
    let common = fs::read_to_string(temp_dir.path().join("src/schemas/common.ts"))?;
    assert!(common.contains(".merge(PaginationSchema)"));
    Ok(())
}

#[test]
fn test_strict_passes_when_every_file_matches() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), SPREAD_TS)?;

    let output = run_in(temp_dir.path(), &["--strict"])?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_json_report_replaces_confirmations() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;

    let output = run_in(temp_dir.path(), &["--json"])?;

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["dry_run"], serde_json::json!(false));
    assert_eq!(report["files"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["files"][1]["path"], "src/tools/reading.ts");
    Ok(())
}

#[test]
fn test_bad_config_exits_two() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_project(temp_dir.path(), PLAIN_TS)?;
    fs::write(
        temp_dir.path().join("fix.toml"),
        "[[rules]]\nname = \"broken\"\npattern = \"(unclosed\"\nreplacement = \"\"\n",
    )?;

    let output = run_in(temp_dir.path(), &["--config", "fix.toml"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}
