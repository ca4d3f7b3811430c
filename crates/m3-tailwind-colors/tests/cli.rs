//! End-to-end command tests against a temporary directory.

use std::fs;
use std::path::Path;

use clap::Parser;
use m3_tailwind_colors::config::load_config;
use m3_tailwind_colors::{run, Cli};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("m3-tailwind-colors").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn generate_from_flags_only() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.json");
    let output = dir.path().join("src/m3-theme.css");

    let report = run_args(&[
        "generate",
        "--primary",
        "#6750A4",
        "--config",
        path_str(&config),
        "--output",
        path_str(&output),
    ])
    .unwrap();

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.starts_with("@theme {\n"));
    assert!(css.contains("  --color-primary: #"));
    assert!(css.contains("@media (prefers-color-scheme: dark)"));

    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines[0], format!("Success: Generated M3 theme at {}", output.display()));
    assert_eq!(lines[1], "  Colors: primary");
    assert_eq!(lines[2], "  Format: hex (combined mode)");
}

#[test]
fn generate_requires_primary() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.json");
    let err = run_args(&["generate", "--config", path_str(&config)]).unwrap_err();
    assert!(err.to_string().contains("primary color is required"));
}

#[test]
fn generate_rejects_invalid_color() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.json");
    let output = dir.path().join("theme.css");
    let err = run_args(&[
        "generate",
        "--primary",
        "#GGGGGG",
        "--config",
        path_str(&config),
        "--output",
        path_str(&output),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("#GGGGGG"));
    assert!(!output.exists());
}

#[test]
fn generate_rejects_invalid_scheme_and_contrast() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.json");
    let base = ["generate", "--primary", "#6750A4", "--config", path_str(&config)];

    let mut args = base.to_vec();
    args.extend(["--scheme", "bogus"]);
    assert!(run_args(&args).unwrap_err().to_string().contains("bogus"));

    let mut args = base.to_vec();
    args.extend(["--contrast", "1.5"]);
    assert!(run_args(&args).unwrap_err().to_string().contains("1.5"));
}

#[test]
fn generate_merges_config_and_flags() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("m3-colors.config.json");
    let output = dir.path().join("out/theme.css");
    fs::write(
        &config,
        format!(
            r##"{{
  "colors": {{ "primary": "#6750A4", "brand": "#FF5722" }},
  "format": "oklch",
  "mode": "light",
  "output": "{}"
}}"##,
            path_str(&output).replace('\\', "\\\\")
        ),
    )
    .unwrap();

    let report = run_args(&[
        "generate",
        "--config",
        path_str(&config),
        "--format",
        "hex",
        "--include-tailwind-import",
    ])
    .unwrap();

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.starts_with("@import \"tailwindcss\";\n\n@theme {\n"));
    assert!(css.contains("  --color-on-brand-container: #"));
    assert!(!css.contains("@media"));
    assert!(report.contains("  Colors: primary, brand\n"));
    assert!(report.contains("  Format: hex (light mode)\n"));
}

#[test]
fn generate_class_dark_mode() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.json");
    let output = dir.path().join("theme.css");
    run_args(&[
        "generate",
        "--primary",
        "#6750A4",
        "--config",
        path_str(&config),
        "--output",
        path_str(&output),
        "--dark-mode",
        "class",
    ])
    .unwrap();

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.contains("@custom-variant dark (&:where(.dark, .dark *));"));
    assert!(css.contains("@variant dark {"));
}

#[test]
fn generate_nativewind_writes_both_files() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("missing.json");
    let output = dir.path().join("global.css");
    let colors = dir.path().join("theme/m3-colors.ts");

    let report = run_args(&[
        "generate",
        "--primary",
        "#6750A4",
        "--config",
        path_str(&config),
        "--target",
        "nativewind",
        "--output",
        path_str(&output),
        "--colors-output",
        path_str(&colors),
    ])
    .unwrap();

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.contains("@layer base {"));
    assert!(css.contains("--android-primary: "));

    let module = fs::read_to_string(&colors).unwrap();
    assert!(module.contains("export const m3Colors = {"));
    assert!(module.contains("onPrimaryContainer"));
    assert!(module.contains("export type M3ColorName = keyof typeof m3Colors.light;"));

    assert_eq!(
        report,
        format!(
            "Success: Generated NativeWind CSS at {}\n  Generated colors file at {}\n",
            output.display(),
            colors.display()
        )
    );
}

#[test]
fn generate_reports_broken_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("m3-colors.config.json");
    fs::write(&config, r##"{"colors": {"brand": "#FF5722"}}"##).unwrap();

    let err = run_args(&["generate", "--config", path_str(&config)]).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.starts_with("invalid config file"));
    assert!(message.contains("primary"));
}

// ============================================================================
// init
// ============================================================================

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("m3-colors.config.json");

    let report = run_args(&["init", "--config", path_str(&config)]).unwrap();

    let loaded = load_config(&config).unwrap().unwrap();
    assert_eq!(loaded.colors.primary(), "#6750A4");
    assert_eq!(loaded.scheme.as_deref(), Some("content"));

    let text = fs::read_to_string(&config).unwrap();
    assert!(text.starts_with("{\n  \"colors\": {\n    \"primary\": \"#6750A4\"\n  },\n"));
    assert!(text.contains("\n  \"format\": \"oklch\",\n"));

    assert_eq!(
        report,
        format!(
            "Success: Created configuration file at {}\n  Primary color: #6750A4\n  Output: src/m3-theme.css\n  Format: oklch\n",
            config.display()
        )
    );
}

#[test]
fn init_with_generate() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("m3-colors.config.json");
    let output = dir.path().join("css/theme.css");

    let report = run_args(&[
        "init",
        "--config",
        path_str(&config),
        "--primary",
        "#0062A8",
        "--secondary",
        "#00A86B",
        "--output",
        path_str(&output),
        "--generate",
    ])
    .unwrap();

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.contains("--color-secondary: oklch("));
    assert!(report.contains("Success: Created configuration file"));
    assert!(report.contains("  Colors: primary, secondary\n"));
    assert!(report.contains("  Format: oklch (combined mode)\n"));
}

#[test]
fn init_rejects_invalid_primary() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("m3-colors.config.json");
    let err = run_args(&["init", "--config", path_str(&config), "--primary", "purple"]).unwrap_err();
    assert!(err.to_string().contains("purple"));
    assert!(!config.exists());
}
