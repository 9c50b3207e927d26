use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Rutas de instalación habituales de Chrome en Windows.
const CHROME_INSTALL_PATHS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

/// Nombres del binario para la búsqueda en el PATH.
const CHROME_BINARY_NAMES: &[&str] = &[
    "chrome.exe",
    "chrome",
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeVersion {
    full: String,
}

impl ChromeVersion {
    pub fn new(full: impl Into<String>) -> Self {
        Self { full: full.into() }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    /// Componente mayor de la versión: "120.0.6099.109" → "120".
    pub fn major(&self) -> &str {
        self.full.split('.').next().unwrap_or(&self.full)
    }
}

/// Busca Chrome primero en las rutas fijas de instalación y después en el PATH.
pub fn find_chrome() -> Option<PathBuf> {
    for path in CHROME_INSTALL_PATHS {
        let path = Path::new(path);
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }

    let path_var = std::env::var_os("PATH")?;
    let dirs: Vec<PathBuf> = std::env::split_paths(&path_var).collect();
    find_in_dirs(CHROME_BINARY_NAMES, &dirs)
}

fn find_in_dirs(names: &[&str], dirs: &[PathBuf]) -> Option<PathBuf> {
    for name in names {
        for dir in dirs {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

pub fn detect_version() -> Option<ChromeVersion> {
    let chrome = find_chrome()?;
    debug!(chrome = %chrome.display(), "Chrome encontrado");
    version_of(&chrome)
}

/// Ejecuta `<chrome> --version` y extrae la versión de la salida.
pub fn version_of(chrome: &Path) -> Option<ChromeVersion> {
    let output = Command::new(chrome).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_version_output(&String::from_utf8_lossy(&output.stdout))
}

/// "Google Chrome 120.0.6099.109" → "120.0.6099.109". Se toma el último
/// token con pinta de versión; algunos empaquetados añaden un sufijo
/// ("Chromium 119.0.6045.159 snap").
fn parse_version_output(output: &str) -> Option<ChromeVersion> {
    output
        .split_whitespace()
        .rev()
        .find(|token| {
            token.contains('.') && token.chars().next().is_some_and(|c| c.is_ascii_digit())
        })
        .map(ChromeVersion::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_chrome_version_output() {
        let version = parse_version_output("Google Chrome 120.0.6099.109\n").unwrap();
        assert_eq!(version.full(), "120.0.6099.109");
        assert_eq!(version.major(), "120");
    }

    #[test]
    fn parses_chromium_output_with_trailing_token() {
        let version = parse_version_output("Chromium 119.0.6045.159 snap").unwrap();
        assert_eq!(version.full(), "119.0.6045.159");
        assert_eq!(version.major(), "119");
    }

    #[test]
    fn rejects_output_without_version() {
        assert!(parse_version_output("no hay version aqui").is_none());
        assert!(parse_version_output("").is_none());
    }

    #[test]
    fn major_of_bare_number_is_the_number() {
        assert_eq!(ChromeVersion::new("120").major(), "120");
    }

    #[test]
    fn find_in_dirs_locates_existing_binary() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chrome.exe"), b"").unwrap();

        let dirs = vec![dir.path().to_path_buf()];
        let found = find_in_dirs(&["chrome.exe"], &dirs).unwrap();
        assert_eq!(found, dir.path().join("chrome.exe"));
    }

    #[test]
    fn find_in_dirs_prefers_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chrome"), b"").unwrap();
        fs::write(dir.path().join("chromium"), b"").unwrap();

        let dirs = vec![dir.path().to_path_buf()];
        let found = find_in_dirs(&["chrome", "chromium"], &dirs).unwrap();
        assert_eq!(found, dir.path().join("chrome"));
    }

    #[test]
    fn find_in_dirs_misses_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = vec![dir.path().to_path_buf()];
        assert!(find_in_dirs(&["chrome.exe"], &dirs).is_none());
    }
}
