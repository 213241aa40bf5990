use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdbError {
    #[error("failed to launch adb: {0}")]
    Launch(#[from] std::io::Error),
    #[error("adb command failed: {0}")]
    Failed(String),
    #[error("adb produced non-UTF8 output: {0}")]
    Output(#[from] std::string::FromUtf8Error),
}

pub struct AdbCommand;

impl AdbCommand {
    fn execute_adb(args: &[&str]) -> Result<String, AdbError> {
        let output = Command::new("adb").args(args).output()?;

        if !output.status.success() {
            return Err(AdbError::Failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8(output.stdout)?)
    }

    /// `pm list packages -s` for system apps, `-3` for user-installed ones.
    pub fn list_packages(system: bool) -> Result<String, AdbError> {
        let scope_arg = if system { "-s" } else { "-3" };
        tracing::debug!("Running: adb shell pm list packages {}", scope_arg);
        let result = Self::execute_adb(&["shell", "pm", "list", "packages", scope_arg])?;
        tracing::debug!(
            "pm list packages {} returned {} bytes",
            scope_arg,
            result.len()
        );
        Ok(result)
    }

    /// Each line of `pm list packages` output is `package:<name>`.
    pub fn parse_package_lines(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| line.trim().strip_prefix("package:"))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}
