use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup_locales(test: &CliTest) -> Result<()> {
    test.write_file(
        "locales/en/common.json",
        r#"{"a": "1", "b": "2", "greeting": "Hello, \"friend\""}"#,
    )?;
    test.write_file("locales/en/settings.json", r#"{"theme": "Theme"}"#)?;
    test.write_file("locales/fr/common.json", r#"{"a": "x", "c": "y"}"#)?;
    test.write_file("locales/fr/settings.json", r#"{"theme": "Thème"}"#)?;
    Ok(())
}

#[test]
fn test_compare_writes_both_reports() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    let output = test.compare_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(test.read_file("out/english_labels.csv")?, @r#"
    "label_key","value","json_file"
    "a","1","common.json"
    "b","2","common.json"
    "greeting","Hello, ""friend""","common.json"
    "theme","Theme","settings.json"
    "#);
    assert_snapshot!(test.read_file("out/locale_key_comparison_consolidated.csv")?, @r#"
    "locale","status","label_key","json_file"
    "fr","missing","b","common.json"
    "fr","missing","greeting","common.json"
    "fr","extraneous","c","common.json"
    "#);
    Ok(())
}

#[test]
fn test_compare_prints_reports_and_summary() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    let output = test.compare_command().output()?;

    assert_eq!(
        stdout(&output),
        "✓ Baseline labels written to out/english_labels.csv\n\
         ✓ Comparison CSV written to out/locale_key_comparison_consolidated.csv\n  \
         fr: 2 missing, 1 extraneous\n\
         ✘ 1 of 1 locale out of sync with 4 baseline entries\n"
    );
    Ok(())
}

#[test]
fn test_compare_empty_locale_misses_everything() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"a": "1"}"#)?;
    test.write_file("locales/fr/common.json", "{}")?;

    let output = test.compare_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("out/locale_key_comparison_consolidated.csv")?,
        "\"locale\",\"status\",\"label_key\",\"json_file\"\r\n\
         \"fr\",\"missing\",\"a\",\"common.json\"\r\n"
    );
    Ok(())
}

#[test]
fn test_compare_locale_without_json_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"a": "1", "b": "2"}"#)?;
    test.write_file("locales/ja/README.md", "todo")?;

    let output = test.compare_command().output()?;

    assert!(output.status.success());
    assert_snapshot!(test.read_file("out/locale_key_comparison_consolidated.csv")?, @r#"
    "locale","status","label_key","json_file"
    "ja","missing","a","common.json"
    "ja","missing","b","common.json"
    "#);
    Ok(())
}

#[test]
fn test_compare_in_sync_writes_header_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"a": "1"}"#)?;
    test.write_file("locales/de/common.json", r#"{"a": "eins"}"#)?;

    let output = test.compare_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("out/locale_key_comparison_consolidated.csv")?,
        "\"locale\",\"status\",\"label_key\",\"json_file\"\r\n"
    );
    assert!(stdout(&output).contains("✓ 1 locale in sync with 1 baseline entry"));
    Ok(())
}

#[test]
fn test_compare_is_idempotent_and_overwrites() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file("out/english_labels.csv", "stale content")?;

    test.compare_command().output()?;
    let labels = test.read_file("out/english_labels.csv")?;
    let comparison = test.read_file("out/locale_key_comparison_consolidated.csv")?;

    test.compare_command().output()?;

    assert!(!labels.contains("stale"));
    assert_eq!(test.read_file("out/english_labels.csv")?, labels);
    assert_eq!(
        test.read_file("out/locale_key_comparison_consolidated.csv")?,
        comparison
    );
    Ok(())
}

#[test]
fn test_compare_verbose_lists_locales() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    let output = test.compare_command().arg("--verbose").output()?;

    let out = stdout(&output);
    assert!(out.contains("Loaded 4 baseline keys from 2 files"));
    assert!(out.contains("Comparing locale fr (3 keys in 2 files)"));
    Ok(())
}

#[test]
fn test_compare_baseline_locale_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en-US/common.json", r#"{"a": "1"}"#)?;
    test.write_file("locales/fr/common.json", r#"{"a": "1"}"#)?;

    let mut cmd = test.command();
    cmd.args([
        "compare",
        "--en-locale-path",
        "locales/en-US",
        "--base-path",
        "locales",
        "--output-dir",
        "out",
        "--baseline-locale",
        "en-US",
    ]);
    let output = cmd.output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("out/locale_key_comparison_consolidated.csv")?,
        "\"locale\",\"status\",\"label_key\",\"json_file\"\r\n"
    );
    Ok(())
}

#[test]
fn test_compare_baseline_locale_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyauditrc.json", r#"{ "baselineLocale": "en-GB" }"#)?;
    test.write_file("locales/en-GB/common.json", r#"{"colour": "Colour"}"#)?;
    test.write_file("locales/en/common.json", r#"{"color": "Color"}"#)?;

    let mut cmd = test.command();
    cmd.args([
        "compare",
        "--en-locale-path",
        "locales/en-GB",
        "--base-path",
        "locales",
        "--output-dir",
        "out",
    ]);
    let output = cmd.output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(test.read_file("out/locale_key_comparison_consolidated.csv")?, @r#"
    "locale","status","label_key","json_file"
    "en","missing","colour","common.json"
    "en","extraneous","color","common.json"
    "#);
    Ok(())
}

#[test]
fn test_compare_malformed_json_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"a": "1"}"#)?;
    test.write_file("locales/fr/common.json", r#"{"a": "#)?;

    let output = test.compare_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to parse JSON file"));
    assert!(err.contains("fr"));
    assert!(!test.root().join("out/locale_key_comparison_consolidated.csv").exists());
    Ok(())
}

#[test]
fn test_compare_missing_baseline_dir_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr/common.json", "{}")?;

    let output = test.compare_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));
    Ok(())
}

#[test]
fn test_compare_requires_base_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["compare", "--en-locale-path", "locales/en", "--output-dir", "out"])
        .output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--base-path"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("compare"));
    assert!(out.contains("unused"));
    Ok(())
}
