/// A string key-value backend. The store persists through this seam, so any
/// implementation can serve as durable storage.
pub trait Keyvalue {
    /// Returns the stored value, `None` when the key was never set.
    fn get(&self, key: &str) -> std::io::Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

/// Key-value storage backed by one file per key under a directory.
pub struct Fs {
    dir: std::path::PathBuf,
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Returns the path which `key` is stored at.
    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Keyvalue for Fs {
    fn get(&self, key: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(None),
                _ => Err(e),
            },
        }
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)
    }
}

/// In-memory key-value storage. Nothing survives the process, which suits
/// tests and ephemeral sessions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Memory(std::collections::BTreeMap<String, String>);

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Keyvalue for Memory {
    fn get(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
