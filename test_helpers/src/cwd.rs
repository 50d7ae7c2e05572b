//! Working-directory guard for tests that render relative to `.`.
//!
//! Generation writes beneath the current directory unless an output
//! directory is configured, so tests exercising that default move into a
//! temporary directory first. The working directory is process-global; a
//! single mutex serialises every guard in the test binary.
//!
//! # Examples
//!
//! ```no_run
//! use modelgen_test_helpers::cwd;
//!
//! let listing = cwd::within("/tmp", || Ok(std::fs::read_dir(".")?.count()))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use parking_lot::{Mutex, MutexGuard};
use std::path::Path;
use std::sync::LazyLock;

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Restores the previous working directory when dropped.
#[must_use = "dropping restores the prior working directory"]
pub struct CwdGuard {
    original: Utf8PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Directory that will be restored.
    #[must_use]
    pub fn original(&self) -> &Utf8PathBuf {
        &self.original
    }

    /// Restores the original directory, reporting failure.
    ///
    /// # Errors
    ///
    /// Returns an error if `set_current_dir` fails.
    pub fn restore(&self) -> std::io::Result<()> {
        std::env::set_current_dir(&self.original)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _unused = std::env::set_current_dir(&self.original);
    }
}

/// Moves into `path` until the returned guard is dropped.
///
/// The original directory is captured as UTF-8 before moving, so a
/// conversion failure leaves the working directory untouched.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read, is not valid
/// UTF-8, or `path` cannot be entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_MUTEX.lock();
    let current = std::env::current_dir().context("read current dir")?;
    let original = Utf8PathBuf::from_path_buf(current)
        .map_err(|non_utf8| anyhow!("cwd is not valid UTF-8: {}", non_utf8.display()))?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    Ok(CwdGuard {
        original,
        _lock: lock,
    })
}

/// Runs `f` with `path` as the working directory.
///
/// # Errors
///
/// Returns the errors of [`set_dir`], the closure's error, or a failure to
/// move back afterwards.
pub fn within<T>(path: impl AsRef<Path>, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let guard = set_dir(path)?;
    let output = f();
    guard.restore().context("restore working dir")?;
    output
}
