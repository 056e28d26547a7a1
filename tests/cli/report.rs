use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

fn four_locales() -> Result<CliTest> {
    let test = CliTest::with_fake_msgfmt()?;
    test.write_catalog(
        "de.po",
        "1 translated message, 1 fuzzy translation, 1 untranslated message.\n",
    )?;
    test.write_catalog("de_AT.po", "0 translated messages, 11 fuzzy translations.\n")?;
    test.write_catalog("de_DE.po", "11 translated messages.\n")?;
    test.write_catalog("fr.po", "0 translated messages, 11 untranslated messages.\n")?;
    Ok(test)
}

/// Table rows as whitespace-separated cells, skipping the header.
fn table_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .take_while(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

#[test]
fn test_report_table() -> Result<()> {
    let test = four_locales()?;

    let (code, stdout, stderr) = run(test.report_command())?;

    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert_eq!(
        table_rows(&stdout),
        vec![
            "French fr 0 11 0 11",
            "German de 1 1 1 3",
            "German (Austria) de_AT 0 0 11 11",
            "German (Germany) de_DE 11 0 0 11",
        ]
    );
    assert!(stdout.contains("Collected statistics for 4 catalog(s)"));
    assert_eq!(stderr, "");

    Ok(())
}

#[test]
fn test_report_json() -> Result<()> {
    let test = four_locales()?;

    let (code, stdout, _) = run({
        let mut cmd = test.report_command();
        cmd.args(["--format", "json"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    let report: Value = serde_json::from_str(&stdout)?;
    let catalogs = report["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 4);
    for catalog in catalogs {
        let sum = catalog["translated"].as_u64().unwrap()
            + catalog["fuzzy"].as_u64().unwrap()
            + catalog["untranslated"].as_u64().unwrap();
        assert_eq!(catalog["total"].as_u64().unwrap(), sum);
    }
    assert_eq!(catalogs[2]["locale"], "de_AT");
    assert_eq!(catalogs[2]["fuzzy"], 11);
    assert_eq!(report["skipped"].as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn test_failing_catalog_is_skipped() -> Result<()> {
    let test = four_locales()?;
    test.write_catalog("it.po", "FAIL: it.po:3: syntax error\n")?;

    let (code, stdout, stderr) = run(test.report_command())?;

    assert_eq!(code, Some(0));
    assert_eq!(table_rows(&stdout).len(), 4);
    assert!(!stdout.contains("Italian"));
    assert!(stderr.contains("1 catalog(s) skipped"));

    Ok(())
}

#[test]
fn test_strict_fails_on_skipped_catalog() -> Result<()> {
    let test = four_locales()?;
    test.write_catalog("it.po", "FAIL\n")?;

    let (code, stdout, _) = run({
        let mut cmd = test.report_command();
        cmd.arg("--strict");
        cmd
    })?;

    assert_eq!(code, Some(1));
    assert_eq!(table_rows(&stdout).len(), 4);

    Ok(())
}

#[test]
fn test_unparseable_output_keeps_zeroed_entry() -> Result<()> {
    let test = CliTest::with_fake_msgfmt()?;
    test.write_catalog("de.po", "nothing useful here\n")?;

    let (code, stdout, stderr) = run(test.report_command())?;

    assert_eq!(code, Some(0));
    assert_eq!(table_rows(&stdout), vec!["German de 0 0 0 0"]);
    assert!(stderr.contains("Could not parse statistic output"));
    assert!(stderr.contains("1 catalog(s) had unparseable statistics"));

    Ok(())
}

#[test]
fn test_html_output_file() -> Result<()> {
    let test = four_locales()?;

    let (code, stdout, _) = run({
        let mut cmd = test.report_command();
        cmd.args(["--format", "html", "--output", "report.html"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "");
    let html = test.read_file("report.html")?;
    assert!(html.contains("<h1>Gettext Statistics</h1>"));
    assert!(html.contains(
        "<tr><td title=\"de_AT\">German (Austria)</td><td>0</td><td>0</td><td>11</td></tr>"
    ));

    Ok(())
}

#[test]
fn test_po_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_fake_msgfmt()?;
    test.write_file("other/fr.po", "2 translated messages.\n")?;

    let (code, stdout, _) = run({
        let mut cmd = test.report_command();
        cmd.args(["--po-dir", "other"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_eq!(table_rows(&stdout), vec!["French fr 2 0 0 2"]);

    Ok(())
}

#[test]
fn test_missing_msgfmt_skips_every_catalog() -> Result<()> {
    let test = four_locales()?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.report_command();
        cmd.args(["--msgfmt", "/nonexistent/msgfmt"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "No catalog statistics collected\n");
    assert!(stderr.contains("4 catalog(s) skipped"));

    Ok(())
}

#[test]
fn test_missing_po_directory_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.report_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Catalog directory does not exist"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("report"));
    assert!(stdout.contains("init"));

    Ok(())
}
