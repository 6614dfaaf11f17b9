use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A scratch directory laid out like a BitKeeper repository root.
///
/// File contents served by [`FakeBk`] live under `.revs/<rev>/<path>`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("BitKeeper").join("etc")).unwrap();
    temp_dir
}

/// Store `content` as the text of `path` at revision `rev` in a test repo.
pub(crate) fn put_revision(repo: &Path, rev: &str, path: &str, content: &[u8]) {
    let file = repo.join(".revs").join(rev).join(path);
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(file, content).unwrap();
}

/// A stand-in `bk` executable answering `bk -@<repo> get -pqr<rev> <path>`.
///
/// Every invocation is appended to `<repo>/.invocations`, and the
/// `RB_LOCAL_SITE` / `LC_ALL` values it saw are written to `<repo>/.env`.
#[cfg(unix)]
pub(crate) struct FakeBk {
    _dir: TempDir,
    pub(crate) path: PathBuf,
}

#[cfg(unix)]
const FAKE_BK_SCRIPT: &str = r#"#!/bin/sh
repo="${1#-@}"
echo "$*" >> "$repo/.invocations"
printf '%s\n%s\n' "${RB_LOCAL_SITE-}" "${LC_ALL-}" > "$repo/.env"
if [ "$2" != "get" ]; then
    echo "unsupported command: $2" >&2
    exit 2
fi
rev="${3#-pqr}"
file="$repo/.revs/$rev/$4"
if [ -f "$file" ]; then
    cat "$file"
    exit 0
fi
echo "$4: no such revision $rev" >&2
exit 1
"#;

#[cfg(unix)]
pub(crate) fn create_fake_bk() -> FakeBk {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bk");
    std::fs::write(&path, FAKE_BK_SCRIPT).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    FakeBk { _dir: dir, path }
}

/// Number of times the fake `bk` was run against `repo`.
pub(crate) fn invocation_count(repo: &Path) -> usize {
    std::fs::read_to_string(repo.join(".invocations"))
        .map(|s| s.lines().count())
        .unwrap_or(0)
}
