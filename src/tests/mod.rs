//! End-to-end tests running `peggy` commands the way the binary does.

use {
    crate::{cli, infra},
    clap::Parser,
    std::{io::Write, path::PathBuf},
};


/// A bridged token contract used throughout the tests.
pub const CONTRACT: &str = "0xABCDEF0000000000000000000000000000001234";

/// The output of a command.
pub struct Output {
    pub result: anyhow::Result<()>,
    pub stdout: String,
}

impl Output {
    /// Asserts that the command succeeded.
    pub fn ok(&self) {
        if let Err(err) = &self.result {
            panic!("command failed: {err:#}");
        }
    }

    /// Returns the JSON written by the command.
    ///
    /// # Panics
    ///
    /// Panics if the command did not write valid JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("command printed invalid JSON")
    }

    /// Returns the error message chain of a failed command.
    ///
    /// # Panics
    ///
    /// Panics if the command succeeded.
    pub fn error(&self) -> String {
        format!("{:#}", self.result.as_ref().expect_err("command succeeded"))
    }
}

/// Runs `peggy` with the specified command line arguments.
pub async fn peggy(args: &[&str]) -> Output {
    infra::observe::initialize("warn,peggy=trace");

    let args = cli::Args::try_parse_from(std::iter::once("peggy").chain(args.iter().copied()))
        .expect("invalid command line arguments");
    let mut stdout = Vec::new();
    let result = crate::run(args.command, &mut stdout).await;
    Output {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
    }
}

/// A token list config.
pub enum Config {
    String(String),
    File(PathBuf),
}

impl Config {
    /// Writes the config to a temporary file, if needed. The file is removed
    /// when the returned handle is dropped.
    pub fn persist(self) -> (Option<tempfile::NamedTempFile>, PathBuf) {
        match self {
            Config::String(config) => {
                let mut file = tempfile::NamedTempFile::new().unwrap();
                file.write_all(config.as_bytes()).unwrap();
                let path = file.path().to_owned();
                (Some(file), path)
            }
            Config::File(path) => (None, path),
        }
    }
}
