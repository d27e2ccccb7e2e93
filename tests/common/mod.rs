use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for driving the binary: a temp working directory,
/// a scratch HOME, and fake OS wireless tools on PATH that append their
/// argv to a log instead of touching any network.
pub struct TestEnv {
    tmp: TempDir,
    home: PathBuf,
    bin: PathBuf,
    join_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create fake tool dir");
        let join_log = tmp.path().join("join.log");

        let env = Self {
            tmp,
            home,
            bin,
            join_log,
        };
        env.install_wifi_tools(0);
        env
    }

    /// Swaps the fake wireless tools for variants that exit non-zero.
    pub fn break_wifi_tools(&self) {
        self.install_wifi_tools(4);
    }

    fn install_wifi_tools(&self, exit_code: i32) {
        for tool in ["nmcli", "networksetup"] {
            write_tool(&self.bin.join(tool), &self.join_log, exit_code);
        }
    }

    pub fn workdir(&self) -> &Path {
        self.tmp.path()
    }

    pub fn password_file(&self) -> PathBuf {
        self.tmp.path().join(".password")
    }

    pub fn seed_password(&self, value: &str) {
        fs::write(self.password_file(), format!("{value}\n")).expect("seed password file");
    }

    /// One entry per join attempt, argv of the wireless tool.
    pub fn joins(&self) -> Vec<String> {
        if !self.join_log.exists() {
            return vec![];
        }
        fs::read_to_string(&self.join_log)
            .expect("read join log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rekey").expect("rekey binary");
        cmd.current_dir(self.tmp.path())
            .env("HOME", &self.home)
            // PATH holds nothing but the fake wireless tools, so a system
            // browser is not found through it
            .env("PATH", &self.bin)
            .env("WIFI_SSID", "copperline")
            .env("WIFI_INTERFACE", "wl-test")
            .env("AP_URL", "http://127.0.0.1:1/")
            .env("AP_USERNAME", "admin")
            .env("AP_PASSWORD", "hunter2")
            .env("GENERATOR_URL", "http://127.0.0.1:1/")
            .env("SLACK_URL", "http://127.0.0.1:1/")
            .env("SLACK_TOKEN", "xoxb-test")
            .env("SLACK_CHANNEL", "#infra")
            // chrome discovery ignores a CHROME value whose path does not
            // exist and falls back to searching PATH, which is bare here.
            // a browser the OS surfaces through some other channel still
            // dies at the unreachable admin url
            .env("CHROME", self.tmp.path().join("no-such-chrome"))
            .env_remove("LOG_ENTRIES_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn write_tool(path: &Path, log: &Path, exit_code: i32) {
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {}\n",
        log.display(),
        exit_code
    );
    fs::write(path, script).expect("write fake tool");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).expect("fake tool metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("make fake tool executable");
    }
}
