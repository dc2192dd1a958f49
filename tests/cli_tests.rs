mod common;

use anyhow::Result;
use common::{NAME, YEAR, copyline, read_file, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_basic_with_backup() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "output.tmp", "pass")?;

  copyline()?
    .args(["-y", "2020", "-n", NAME, "-b", "-q", "-e", "tmp"])
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  assert_eq!(read_file(&path)?, format!("# Copyright 2020 {NAME}\n\npass"));
  assert_eq!(read_file(&dir.path().join("output.tmp.bak"))?, "pass");
  Ok(())
}

#[test]
fn test_prints_processed_paths() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "app.py", "pass\n")?;

  copyline()?
    .args(["-y", YEAR])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(format!("{}\n", path.display()));
  Ok(())
}

#[test]
fn test_shebang_and_coding() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(
    dir.path(),
    "script.py",
    "#!/usr/bin/env python\n# -*- coding: utf-8 -*-\npass",
  )?;

  copyline()?.args(["-q", "-y", YEAR, "-n", NAME]).arg(&path).assert().success();

  assert_eq!(
    read_file(&path)?,
    format!("#!/usr/bin/env python\n# -*- coding: utf-8 -*-\n# Copyright {YEAR} {NAME}\n\npass")
  );
  Ok(())
}

#[test]
fn test_update_preserves_crlf() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", "# Copyright 2010 blah blah\r\npass  \r\n")?;

  copyline()?.args(["-q", "-u", "-y", YEAR]).arg(&path).assert().success();

  assert_eq!(read_file(&path)?, format!("# Copyright 2010-{YEAR}\r\npass  \r\n"));
  Ok(())
}

#[test]
fn test_keep_endings() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", "# Copyright 2010\r\npass  \r\n")?;

  copyline()?.args(["-q", "-y", YEAR]).arg(&path).assert().success();

  assert_eq!(read_file(&path)?, format!("# Copyright {YEAR}\r\npass  \r\n"));
  Ok(())
}

#[test]
fn test_strip() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", "# Copyright 2010   \rpass    \r\r")?;

  copyline()?.args(["-q", "-s", "-y", YEAR]).arg(&path).assert().success();

  assert_eq!(read_file(&path)?, format!("# Copyright {YEAR}\npass\n\n"));
  Ok(())
}

#[test]
fn test_comment_and_no_newline() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "main.rs", "fn main() {}\n")?;

  copyline()?
    .args(["-q", "-y", YEAR, "-n", NAME, "-c", "//", "-e", "rs", "--no-newline"])
    .arg(dir.path())
    .assert()
    .success();

  assert_eq!(read_file(&path)?, format!("// Copyright {YEAR} {NAME}\nfn main() {{}}\n"));
  Ok(())
}

#[test]
fn test_print_only_does_not_modify() -> Result<()> {
  let dir = tempdir()?;
  let changing = write_file(dir.path(), "a.py", "pass")?;
  write_file(dir.path(), "b.py", &format!("# Copyright {YEAR}\n\npass"))?;

  copyline()?
    .args(["-y", YEAR, "-p"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(format!("{}\n", changing.display()));

  assert_eq!(read_file(&changing)?, "pass");
  assert!(!dir.path().join("a.py.bak").exists());
  Ok(())
}

#[test]
fn test_check_reports_outdated_file() -> Result<()> {
  let dir = tempdir()?;
  let outdated = write_file(dir.path(), "old.py", "# Copyright 2023 Dan Watson\npass\n")?;
  write_file(dir.path(), "new.py", "# Copyright 2024 Dan Watson\npass\n")?;

  copyline()?
    .args(["--check", "-y", YEAR])
    .arg(dir.path())
    .assert()
    .code(1)
    .stdout(format!("{}\n", outdated.display()));

  assert_eq!(read_file(&outdated)?, "# Copyright 2023 Dan Watson\npass\n");
  Ok(())
}

#[test]
fn test_check_lists_failures_when_quiet() -> Result<()> {
  let dir = tempdir()?;
  let outdated = write_file(dir.path(), "old.py", "# Copyright 2023\npass\n")?;

  copyline()?
    .args(["--check", "-q", "-y", YEAR])
    .arg(&outdated)
    .assert()
    .code(1)
    .stdout(format!("{}\n", outdated.display()));
  Ok(())
}

#[test]
fn test_paths_are_never_colored() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", "pass\n")?;

  let mut cmd = assert_cmd::Command::cargo_bin("copyline")?;
  cmd
    .env_remove("COPYLINE_CONFIG")
    .env_remove("RUST_LOG")
    .args(["--no-config", "--colors=always", "-y", YEAR])
    .arg(&path)
    .assert()
    .success()
    .stdout(format!("{}\n", path.display()));
  Ok(())
}

#[test]
fn test_update_same_year_writes_range() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", &format!("# Copyright {YEAR} X\npass\n"))?;

  copyline()?.args(["-q", "-u", "-y", YEAR]).arg(&path).assert().success();

  assert_eq!(read_file(&path)?, format!("# Copyright {YEAR}-{YEAR}\npass\n"));
  Ok(())
}

#[test]
fn test_check_passes_when_compliant() -> Result<()> {
  let dir = tempdir()?;
  write_file(dir.path(), "a.py", "#!/usr/bin/env python\n# Copyright 2001-2024\n")?;

  copyline()?
    .args(["--check", "-y", YEAR])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
  Ok(())
}

#[test]
fn test_selects_by_extension_and_skips_dotfiles() -> Result<()> {
  let dir = tempdir()?;
  let nested = write_file(dir.path(), "pkg/sub/mod.py", "x = 1\n")?;
  let hidden = write_file(dir.path(), "pkg/.hidden.py", "x = 1\n")?;
  let other = write_file(dir.path(), "pkg/readme.txt", "text\n")?;

  copyline()?.args(["-q", "-y", YEAR]).arg(dir.path()).assert().success();

  assert_eq!(read_file(&nested)?, format!("# Copyright {YEAR}\n\nx = 1\n"));
  assert_eq!(read_file(&hidden)?, "x = 1\n");
  assert_eq!(read_file(&other)?, "text\n");
  Ok(())
}

#[test]
fn test_empty_selection_succeeds() -> Result<()> {
  let dir = tempdir()?;
  write_file(dir.path(), "notes.txt", "text\n")?;

  copyline()?
    .args(["--check", "-y", YEAR])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
  Ok(())
}

#[test]
fn test_missing_path_fails_before_touching_files() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", "pass")?;

  copyline()?
    .args(["-y", YEAR])
    .arg(&path)
    .arg(dir.path().join("missing"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Cannot access"));

  assert_eq!(read_file(&path)?, "pass");
  Ok(())
}

#[test]
fn test_invalid_year_rejected() -> Result<()> {
  let dir = tempdir()?;

  copyline()?
    .args(["-y", "next"])
    .arg(dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("--year"));
  Ok(())
}

#[test]
fn test_undecodable_file_is_fatal() -> Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("bin.py");
  std::fs::write(&path, [0xC3, 0x28, 0x0A])?;

  copyline()?
    .args(["-q", "-y", YEAR])
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("not valid UTF-8"));
  Ok(())
}

#[test]
fn test_config_file_supplies_defaults() -> Result<()> {
  let dir = tempdir()?;
  let config = write_file(
    dir.path(),
    "copyline.toml",
    "name = \"File Corp\"\ncomment = \"--\"\nextension = \"sql\"\nno-newline = true\n",
  )?;
  let path = write_file(dir.path(), "db/schema.sql", "create table t (id int);\n")?;

  let mut cmd = assert_cmd::Command::cargo_bin("copyline")?;
  cmd
    .env_remove("COPYLINE_CONFIG")
    .args(["-q", "-y", YEAR, "--config"])
    .arg(&config)
    .arg(dir.path().join("db"))
    .assert()
    .success();

  assert_eq!(
    read_file(&path)?,
    format!("-- Copyright {YEAR} File Corp\ncreate table t (id int);\n")
  );
  Ok(())
}

#[test]
fn test_show_diff_goes_to_stderr() -> Result<()> {
  let dir = tempdir()?;
  let path = write_file(dir.path(), "a.py", "pass\n")?;

  copyline()?
    .args(["-y", YEAR, "-p", "--show-diff"])
    .arg(&path)
    .assert()
    .success()
    .stdout(format!("{}\n", path.display()))
    .stderr(predicate::str::contains(format!("+# Copyright {YEAR}")));
  Ok(())
}

#[test]
fn test_print_only_help_mentions_unchanged_files() -> Result<()> {
  copyline()?
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("files already up to date are not listed"));
  Ok(())
}
