//! Runs the built `ssa` binary and checks what it printed.

use std::path::Path;
use std::process::Command;

use serde_json::Value;

/// Variables the binary reads that must not leak in from the test environment.
const SCRUBBED_ENV: &[&str] = &[
    "SSA_FORMAT",
    "SSA_CONFIG",
    "SSA_APP_NAME",
    "SSA_STEAM_USERDATA",
    "NO_COLOR",
    "RUST_LOG",
    "XDG_CONFIG_HOME",
];

/// Builder for one `ssa` invocation.
///
/// ```ignore
/// let home = FakeHome::new().with_pollymc().with_steam_user("123");
/// CliRunner::new()
///     .with_home(home.path())
///     .run_robot(&["--skip-artwork"])
///     .assert_success()
///     .assert_json_field("/index", &json!(0));
/// ```
#[derive(Default)]
pub struct CliRunner {
    env: Vec<(String, String)>,
}

impl CliRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Run with `home` as `$HOME` and `<home>/.config` as the config dir.
    #[must_use]
    pub fn with_home(self, home: &Path) -> Self {
        let config = home.join(".config");
        self.with_env("HOME", &home.to_string_lossy())
            .with_env("XDG_CONFIG_HOME", &config.to_string_lossy())
    }

    /// # Panics
    ///
    /// Panics if the binary cannot be spawned.
    #[must_use]
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ssa"));
        cmd.args(args);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.envs(self.env.iter().map(|(k, v)| (k, v)));

        let output = cmd.output().expect("spawn ssa");
        CliResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
            args: args.join(" "),
        }
    }

    #[must_use]
    pub fn run_robot(&self, args: &[&str]) -> CliResult {
        let mut full = vec!["--robot"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

/// Output of one invocation. Assertions return `&Self` so they chain.
#[derive(Debug)]
pub struct CliResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    args: String,
}

impl CliResult {
    pub fn assert_success(&self) -> &Self {
        self.assert_exit_code(0)
    }

    pub fn assert_exit_code(&self, expected: i32) -> &Self {
        assert_eq!(
            self.exit_code, expected,
            "`ssa {}` exited {}\nstdout:\n{}\nstderr:\n{}",
            self.args, self.exit_code, self.stdout, self.stderr
        );
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(self.stdout.contains(text), "stdout lacks {text:?}:\n{}", self.stdout);
        self
    }

    /// # Panics
    ///
    /// Panics on an invalid pattern or a mismatch.
    pub fn assert_stdout_matches(&self, pattern: &str) -> &Self {
        let re = regex::Regex::new(pattern).expect("valid regex");
        assert!(re.is_match(&self.stdout), "stdout does not match /{pattern}/:\n{}", self.stdout);
        self
    }

    pub fn assert_stdout_is_empty(&self) -> &Self {
        assert!(self.stdout.is_empty(), "stdout is not empty:\n{}", self.stdout);
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(self.stderr.contains(text), "stderr lacks {text:?}:\n{}", self.stderr);
        self
    }

    /// The JSON document on stdout.
    #[must_use]
    pub fn json(&self) -> Value {
        parse_json("stdout", &self.stdout)
    }

    /// The JSON error document on stderr.
    #[must_use]
    pub fn error_json(&self) -> Value {
        parse_json("stderr", &self.stderr)
    }

    /// Compare the value at a JSON pointer in the stdout document.
    pub fn assert_json_field(&self, pointer: &str, expected: &Value) -> &Self {
        let json = self.json();
        let actual = json
            .pointer(pointer)
            .unwrap_or_else(|| panic!("{pointer} missing from {json}"));
        assert_eq!(actual, expected, "JSON field {pointer}");
        self
    }

    pub fn assert_json_array_len(&self, pointer: &str, expected: usize) -> &Self {
        let json = self.json();
        let len = json
            .pointer(pointer)
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or_else(|| panic!("{pointer} is not an array in {json}"));
        assert_eq!(len, expected, "length of {pointer}");
        self
    }
}

fn parse_json(stream: &str, text: &str) -> Value {
    serde_json::from_str(text.trim())
        .unwrap_or_else(|e| panic!("{stream} is not JSON ({e}):\n{text}"))
}
