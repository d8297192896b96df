use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, MOCK_HARDCODED, MOCK_WITH_KEY, mock_with_key, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock("identify.json", MOCK_WITH_KEY)?;
    test.write_mock("no-messages.json", r#"{"version": "1.0.0"}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "✓ Checked 2 mock files against login.properties (1 key) - no issues found\n"
    );
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_reports_findings() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock("challenge/email.json", MOCK_HARDCODED)?;
    test.write_mock("ghost.json", &mock_with_key("ghost"))?;
    test.write_mock("identify.json", MOCK_WITH_KEY)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    insta::assert_snapshot!(output.stdout, @r#"
    error: API mock "challenge/email.json" does not have an i18nKey. Avoid hard-coding English strings.  missing-i18n-key
      --> ./mocks/idp/idx/challenge/email.json
      = hint: set `messages.value[0].i18n.key` to a key from the translation bundle

    error: "ghost" is missing from login.properties.  missing-bundle-entry
      --> ./mocks/idp/idx/ghost.json
      = hint: add "ghost" to login.properties or list it in `ignoreKeys`

    ✘ 2 problems (2 errors, 0 warnings)
    "#);

    Ok(())
}

#[test]
fn test_only_first_message_is_checked() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock(
        "multi.json",
        r#"{"messages": {"value": [
            {"i18n": {"key": "welcome"}},
            {"message": "Hard-coded second message"}
        ]}}"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    Ok(())
}

#[test]
fn test_rule_filter() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock("hardcoded.json", MOCK_HARDCODED)?;
    test.write_mock("ghost.json", &mock_with_key("ghost"))?;

    let mut cmd = test.check_command();
    cmd.arg("missing-bundle-entry");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    let stdout = output.stdout;
    assert!(stdout.contains("\"ghost\" is missing from login.properties."));
    assert!(!stdout.contains("does not have an i18nKey"));
    assert!(stdout.contains("✘ 1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_ignore_key_flag() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock("rate-limit.json", &mock_with_key("tooManyRequests"))?;

    let mut cmd = test.check_command();
    cmd.args(["--ignore-key", "tooManyRequests"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".mocklintrc.json",
        r#"{
          "mocksRoot": "playground/mocks/data",
          "bundle": "i18n/login.properties",
          "ignoreKeys": ["tooManyRequests"],
          "ignores": ["**/legacy/**"],
          "rules": { "missing-bundle-entry": "warn" }
        }"#,
    )?;
    test.write_file(
        "i18n/login.properties",
        "# Login bundle\nwelcome = Welcome!\n",
    )?;
    test.write_file(
        "playground/mocks/data/idp/idx/rate-limit.json",
        &mock_with_key("tooManyRequests"),
    )?;
    test.write_file(
        "playground/mocks/data/idp/idx/ghost.json",
        &mock_with_key("ghost"),
    )?;
    test.write_file(
        "playground/mocks/data/legacy/hardcoded.json",
        MOCK_HARDCODED,
    )?;

    let output = run(test.check_command())?;

    // Warnings alone do not fail the run
    assert_eq!(output.code, Some(0));
    let stdout = output.stdout;
    assert!(stdout.starts_with(
        "warning: \"ghost\" is missing from login.properties.  missing-bundle-entry\n"
    ));
    assert!(stdout.contains("✘ 1 problem (0 errors, 1 warning)"));
    assert!(!stdout.contains("legacy"));

    Ok(())
}

#[test]
fn test_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".mocklintrc.json",
        r#"{ "bundleName": "messages.properties" }"#,
    )?;
    test.write_file("i18n/login.json", r#"{"welcome": "Welcome!"}"#)?;
    test.write_file("fixtures/api/ghost.json", &mock_with_key("ghost"))?;

    let mut cmd = test.check_command();
    cmd.args(["--mocks-root", "fixtures", "--bundle-name", "login_en.properties"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    let stdout = output.stdout;
    assert!(stdout.contains("\"ghost\" is missing from login_en.properties."));
    assert!(stdout.contains("--> fixtures/api/ghost.json"));

    Ok(())
}

#[test]
fn test_bundle_from_env() -> Result<()> {
    // The default bundle does not define "welcome"
    let test = CliTest::with_bundle("{}")?;
    test.write_file("i18n/login.properties", "welcome = Welcome!\n")?;
    test.write_mock("identify.json", MOCK_WITH_KEY)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));

    let mut cmd = test.check_command();
    cmd.env("MOCKLINT_BUNDLE", "i18n/login.properties");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "✓ Checked 1 mock file against login.properties (1 key) - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_identifier_without_anchor() -> Result<()> {
    let test = CliTest::with_bundle("{}")?;
    test.write_file("mocks/v1/authn.json", MOCK_HARDCODED)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    let stdout = output.stdout;
    assert!(stdout.contains("API mock \"v1/authn.json\" does not have an i18nKey."));

    Ok(())
}

#[test]
fn test_parse_error_is_isolated() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock("broken.json", "{ \"messages\": ")?;
    test.write_mock("hardcoded.json", MOCK_HARDCODED)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    let stdout = output.stdout;
    assert!(stdout.contains("error: Failed to parse mock file:"));
    assert!(stdout.contains("parse-error\n  --> ./mocks/idp/idx/broken.json"));
    // The other file is still checked
    assert!(stdout.contains("API mock \"hardcoded.json\" does not have an i18nKey."));
    assert!(stdout.contains("✘ 2 problems (2 errors, 0 warnings)"));
    // Reported without -v
    assert_eq!(
        output.stderr,
        "warning: 1 mock file(s) could not be parsed\n"
    );

    Ok(())
}

#[test]
fn test_missing_bundle_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_mock("identify.json", MOCK_WITH_KEY)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    let stderr = output.stderr;
    assert!(stderr.starts_with("Error: Failed to read translation bundle"));

    Ok(())
}

#[test]
fn test_missing_mocks_dir_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/login.json", "{}")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Mocks directory not found"));

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_bundle("{}")?;
    test.write_file(
        ".mocklintrc.json",
        r#"{ "rules": { "hardcoded": "error" } }"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    let stderr = output.stderr;
    assert!(stderr.contains("Unknown rule in 'rules': \"hardcoded\""));

    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"welcome": "Welcome!"}"#)?;
    test.write_mock("identify.json", MOCK_WITH_KEY)?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("Note: No .mocklintrc.json found"));
    assert!(output.stderr.contains("Loaded 1 key(s)"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("init"));
    assert!(output.stdout.contains("serve"));

    Ok(())
}
