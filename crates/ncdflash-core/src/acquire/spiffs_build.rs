//! SPIFFS image build from a PlatformIO project

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something that can turn a project directory into a filesystem image
pub trait ImageBuilder {
    /// Build the image inside `project`.
    ///
    /// Failures, timeouts and a missing build tool are all
    /// [`Error::BuildFailed`].
    fn build(&mut self, project: &Path) -> Result<()>;
}

/// Runs `pio run -t buildfs` with a bounded wait
#[derive(Debug, Clone)]
pub struct PioBuilder {
    program: String,
    timeout: Duration,
}

impl PioBuilder {
    /// Create a builder running `program`
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

impl ImageBuilder for PioBuilder {
    fn build(&mut self, project: &Path) -> Result<()> {
        if !project.is_dir() {
            return Err(Error::BuildFailed {
                reason: format!("project directory {} does not exist", project.display()),
                output: String::new(),
            });
        }

        log::info!("Running {} run -t buildfs in {}", self.program, project.display());
        let mut child = Command::new(&self.program)
            .args(["run", "-t", "buildfs"])
            .current_dir(project)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::BuildFailed {
                reason: if e.kind() == io::ErrorKind::NotFound {
                    format!("{} not found; install PlatformIO or pass --no-spiffs", self.program)
                } else {
                    format!("failed to start {}: {}", self.program, e)
                },
                output: String::new(),
            })?;

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let start = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if start.elapsed() >= self.timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    // Build helpers may still hold the pipes, so the
                    // drain threads are left to finish on their own
                    return Err(Error::BuildFailed {
                        reason: format!("timed out after {}s", self.timeout.as_secs()),
                        output: String::new(),
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return Err(Error::BuildFailed {
                        reason: format!("failed to wait for {}: {}", self.program, e),
                        output: String::new(),
                    });
                }
            }
        };

        let stdout = collect(stdout);
        let stderr = collect(stderr);
        log::trace!("buildfs stdout:\n{}", stdout);

        if status.success() {
            log::debug!("buildfs finished in {:?}", start.elapsed());
            Ok(())
        } else {
            Err(Error::BuildFailed {
                reason: format!("{} exited with {}", self.program, status),
                output: if stderr.trim().is_empty() { stdout } else { stderr },
            })
        }
    }
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(rd) => rd.filter_map(|e| e.ok().map(|e| e.path())).collect(),
        Err(_) => Vec::new(),
    };
    entries.sort();
    entries
}

/// Locate the built image under `<project>/.pio/build`.
///
/// Build environments are visited in name order. A file named exactly
/// `spiffs.bin` wins; otherwise the first `.bin` whose name contains
/// "spiffs" is taken.
pub fn find_spiffs_image(project: &Path) -> Result<PathBuf> {
    let build_root = project.join(".pio").join("build");
    let envs: Vec<PathBuf> = sorted_entries(&build_root)
        .into_iter()
        .filter(|p| p.is_dir())
        .collect();

    if let Some(exact) = envs
        .iter()
        .map(|env| env.join("spiffs.bin"))
        .find(|p| p.is_file())
    {
        return Ok(exact);
    }

    envs.iter()
        .flat_map(|env| sorted_entries(env))
        .find(|p| {
            let name = p
                .file_name()
                .map(|n| n.to_string_lossy().to_ascii_lowercase())
                .unwrap_or_default();
            p.is_file() && name.ends_with(".bin") && name.contains("spiffs")
        })
        .ok_or(Error::ImageNotFound {
            search_root: build_root,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }

    #[test]
    fn test_exact_name_preferred() {
        let project = tempfile::tempdir().unwrap();
        let build = project.path().join(".pio/build");
        touch(&build.join("a_env/littlefs_spiffs.bin"));
        touch(&build.join("b_env/spiffs.bin"));

        assert_eq!(
            find_spiffs_image(project.path()).unwrap(),
            build.join("b_env/spiffs.bin")
        );
    }

    #[test]
    fn test_fallback_to_spiffs_named_bin() {
        let project = tempfile::tempdir().unwrap();
        let build = project.path().join(".pio/build");
        touch(&build.join("esp32dev/firmware.bin"));
        touch(&build.join("esp32dev/SPIFFS_data.bin"));

        assert_eq!(
            find_spiffs_image(project.path()).unwrap(),
            build.join("esp32dev/SPIFFS_data.bin")
        );
    }

    #[test]
    fn test_no_image() {
        let project = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_spiffs_image(project.path()),
            Err(Error::ImageNotFound { .. })
        ));

        touch(&project.path().join(".pio/build/esp32dev/firmware.bin"));
        match find_spiffs_image(project.path()) {
            Err(Error::ImageNotFound { search_root }) => {
                assert_eq!(search_root, project.path().join(".pio/build"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_tool_is_build_failure() {
        let project = tempfile::tempdir().unwrap();
        let mut builder =
            PioBuilder::new("ncdflash-test-no-such-pio", Duration::from_secs(5));
        match builder.build(project.path()) {
            Err(Error::BuildFailed { reason, .. }) => assert!(reason.contains("not found")),
            other => panic!("unexpected {:?}", other),
        }
    }

    /// Project holding a `run` script, executed as `sh run -t buildfs`
    #[cfg(unix)]
    fn scripted_project(script: &str) -> tempfile::TempDir {
        let project = tempfile::tempdir().unwrap();
        fs::write(project.path().join("run"), script).unwrap();
        project
    }

    #[test]
    #[cfg(unix)]
    fn test_build_timeout_kills_tool() {
        let project = scripted_project("sleep 5\n");
        let mut builder = PioBuilder::new("sh", Duration::from_secs(1));

        let start = Instant::now();
        match builder.build(project.path()) {
            Err(Error::BuildFailed { reason, output }) => {
                assert_eq!(reason, "timed out after 1s");
                assert!(output.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_keeps_stderr() {
        let project = scripted_project("echo building\necho err >&2\nexit 1\n");
        let mut builder = PioBuilder::new("sh", Duration::from_secs(10));
        match builder.build(project.path()) {
            Err(Error::BuildFailed { reason, output }) => {
                assert!(reason.starts_with("sh exited with"));
                assert_eq!(output, "err\n");
            }
            other => panic!("unexpected {:?}", other),
        }

        let project = scripted_project("echo 'Error: Unknown environment'\nexit 1\n");
        match builder.build(project.path()) {
            Err(Error::BuildFailed { output, .. }) => {
                assert_eq!(output, "Error: Unknown environment\n")
            }
            other => panic!("unexpected {:?}", other),
        }

        let project = scripted_project("exit 0\n");
        assert!(builder.build(project.path()).is_ok());
    }

    #[test]
    fn test_missing_project_dir() {
        let mut builder = PioBuilder::new("pio", Duration::from_secs(5));
        assert!(matches!(
            builder.build(Path::new("/nonexistent/ncdflash/project")),
            Err(Error::BuildFailed { .. })
        ));
    }
}
