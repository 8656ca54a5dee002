use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway home for one test: data dir, config, and working directory
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("tasks.json")
    }

    pub fn write_tasks_file(&self, contents: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(self.data_dir())?;
        let path = self.tasks_file();
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join("config.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Command wired to the test home, hermetic against the real environment
pub fn ticklist_cmd(home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("ticklist").expect("binary");
    cmd.env("TICKLIST_DATA_DIR", home.data_dir());
    cmd.env_remove("TICKLIST_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(home.path());
    cmd
}
