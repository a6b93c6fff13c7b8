//! Integration tests for sw-inject

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn sw_inject() -> Command {
        let mut cmd = cargo_bin_cmd!("sw-inject");
        cmd.env_remove("SW_INJECT_CONFIG").env_remove("RUST_LOG");
        cmd
    }

    fn site(files: &[(&str, &str)]) -> TempDir {
        let dir = tempdir().unwrap();
        for (relative, contents) in files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }
        dir
    }

    fn read(root: &Path, relative: &str) -> String {
        fs::read_to_string(root.join(relative)).unwrap()
    }

    fn json_report(args: &[&str]) -> Value {
        let output = sw_inject().args(args).arg("--json").output().unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn help_displays() {
        sw_inject()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--ignore"));
    }

    #[test]
    fn injects_minimal_site() {
        let dir = site(&[("index.html", "<head></head>")]);

        sw_inject().arg(dir.path()).assert().success();

        assert_eq!(
            read(dir.path(), "index.html"),
            "<head><script src=\"/register-sw.js\"></script></head>"
        );
        assert_eq!(
            read(dir.path(), "register-sw.js"),
            r#"navigator.serviceWorker.register("/sw.js", { scope: "/" });"#
        );
        let worker = read(dir.path(), "sw.js");
        assert!(worker.contains("const VERSION = \"version-"));
        assert!(worker.contains("const ASSETS = [\n  \"/\"\n];"));
    }

    #[test]
    fn ignored_directory_is_not_cached() {
        let dir = site(&[
            ("index.html", "<head></head>"),
            ("app.js", ""),
            ("css/style.css", ""),
        ]);
        let root = dir.path().to_string_lossy().into_owned();

        let report = json_report(&["--ignore", "css,index.html", "--base", "/app", &root]);

        assert_eq!(report["manifest"]["assets"], serde_json::json!(["/app/", "/app/app.js"]));
        assert_eq!(report["indexOutcome"], "injected");
        assert!(read(dir.path(), "sw.js").contains("\"/app/app.js\""));
        assert!(!read(dir.path(), "sw.js").contains("style.css"));
    }

    #[test]
    fn rerun_keeps_single_tag_and_changes_version() {
        let dir = site(&[("index.html", "<html>\n  <head>\n  </head>\n</html>\n")]);
        let root = dir.path().to_string_lossy().into_owned();

        let first = json_report(&[&root]);
        sleep(Duration::from_millis(20));
        let second = json_report(&[&root]);

        assert_eq!(second["indexOutcome"], "already_present");
        assert_ne!(first["manifest"]["version"], second["manifest"]["version"]);
        assert_eq!(second["previousVersion"], first["manifest"]["version"]);
        assert_eq!(read(dir.path(), "index.html").matches("register-sw.js").count(), 1);
        assert_eq!(
            read(dir.path(), "index.html"),
            "<html>\n  <head>\n    <script src=\"/register-sw.js\"></script>\n  </head>\n</html>\n"
        );
    }

    #[test]
    fn malformed_index_fails_before_scripts() {
        let dir = site(&[("index.html", "<html><body></body></html>")]);

        sw_inject()
            .arg(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("error: could not find </head> tag"));

        assert!(!dir.path().join("register-sw.js").exists());
        assert!(!dir.path().join("sw.js").exists());
    }

    #[test]
    fn missing_index_is_reported() {
        let dir = site(&[("app.js", "")]);

        sw_inject()
            .arg(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("error: failed to read"));

        assert!(!dir.path().join("sw.js").exists());
    }

    #[test]
    fn relative_base_is_rejected_without_side_effects() {
        let dir = site(&[("index.html", "<head></head>")]);

        sw_inject()
            .args(["--base", "app"])
            .arg(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("base path must start with /"));

        assert_eq!(read(dir.path(), "index.html"), "<head></head>");
        assert!(!dir.path().join("register-sw.js").exists());
        assert!(!dir.path().join("sw.js").exists());
    }

    #[test]
    fn no_fetch_omits_fetch_handler() {
        let dir = site(&[("index.html", "<head></head>")]);

        sw_inject().arg("--no-fetch").arg(dir.path()).assert().success();

        let worker = read(dir.path(), "sw.js");
        assert!(!worker.contains("\"fetch\""));
        assert!(worker.contains("self.clients.claim()"));
    }

    #[test]
    fn reads_configuration_file() {
        let dir = site(&[
            ("index.html", "<head></head>"),
            ("drafts/post.html", ""),
            ("about.html", ""),
        ]);
        let config_dir = tempdir().unwrap();
        let config = config_dir.path().join("sw-inject.json");
        fs::write(
            &config,
            r#"{"base": "/blog", "ignore": ["drafts"], "serviceWorkerFile": "worker.js"}"#,
        )
        .unwrap();

        sw_inject()
            .env("SW_INJECT_CONFIG", &config)
            .arg(dir.path())
            .assert()
            .success();

        assert_eq!(
            read(dir.path(), "register-sw.js"),
            r#"navigator.serviceWorker.register("/blog/worker.js", { scope: "/blog/" });"#
        );
        let worker = read(dir.path(), "worker.js");
        assert!(worker.contains("\"/blog/about.html\""));
        assert!(!worker.contains("drafts"));
        assert!(!worker.contains("worker.js"));
    }

    #[test]
    fn broken_configuration_is_rejected() {
        let dir = site(&[("index.html", "<head></head>")]);
        let config = dir.path().join("broken.json");
        fs::write(&config, "{").unwrap();

        sw_inject()
            .arg("--config")
            .arg(&config)
            .arg(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("failed to load configuration"));

        assert_eq!(read(dir.path(), "index.html"), "<head></head>");
    }

    #[test]
    fn unknown_flag_exits_with_failure() {
        sw_inject().arg("--bogus").assert().code(1);
    }
}
