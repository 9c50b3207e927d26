use crate::chrome::{self, ChromeVersion};
use crate::report;
use crate::verify::DRIVER_NAME;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const STORAGE_BASE: &str = "https://chromedriver.storage.googleapis.com";
const ARCHIVE_NAME: &str = "chromedriver_win32.zip";
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Endpoint que responde la última versión publicada, opcionalmente
/// acotada a una versión mayor de Chrome.
pub fn latest_release_url(major: Option<&str>) -> String {
    match major {
        Some(major) => format!("{STORAGE_BASE}/LATEST_RELEASE_{major}"),
        None => format!("{STORAGE_BASE}/LATEST_RELEASE"),
    }
}

pub fn archive_url(version: &str) -> String {
    format!("{STORAGE_BASE}/{version}/{ARCHIVE_NAME}")
}

fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("No se pudo crear el cliente HTTP")
}

pub fn resolve_latest(client: &reqwest::blocking::Client, major: Option<&str>) -> Result<String> {
    let url = latest_release_url(major);
    debug!(%url, "consultando la ultima version de ChromeDriver");

    let body = client
        .get(&url)
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("No se pudo consultar {url}"))?
        .text()
        .context("Respuesta invalida del servidor de versiones")?;

    let version = body.trim().to_owned();
    if version.is_empty() {
        bail!("El servidor devolvio una version vacia");
    }
    Ok(version)
}

pub fn download_archive(client: &reqwest::blocking::Client, version: &str) -> Result<Vec<u8>> {
    let url = archive_url(version);
    debug!(%url, "descargando ChromeDriver");

    let bytes = client
        .get(&url)
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("No se pudo descargar {url}"))?
        .bytes()
        .context("No se pudo leer la descarga")?;

    Ok(bytes.to_vec())
}

/// Extrae `chromedriver.exe` del ZIP descargado dentro de `target_dir`,
/// sobrescribiendo un driver anterior si lo hay. El resto del archivo
/// se ignora.
pub fn extract_driver(archive: &[u8], target_dir: &Path) -> Result<PathBuf> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))
        .context("El archivo descargado no es un ZIP valido")?;

    let mut entry = zip
        .by_name(DRIVER_NAME)
        .with_context(|| format!("El ZIP no contiene {DRIVER_NAME}"))?;

    let mut data = Vec::new();
    entry
        .read_to_end(&mut data)
        .context("No se pudo leer la entrada del ZIP")?;

    fs::create_dir_all(target_dir)
        .with_context(|| format!("No se pudo crear {}", target_dir.display()))?;

    let target = target_dir.join(DRIVER_NAME);
    fs::write(&target, &data)
        .with_context(|| format!("No se pudo escribir {}", target.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&target, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("No se pudo marcar {} como ejecutable", target.display()))?;
    }

    Ok(target)
}

/// Detecta Chrome (salvo que se indique la versión), resuelve el último
/// ChromeDriver compatible y lo deja en `dir`.
pub fn run(dir: &Path, chrome_version: Option<String>) -> Result<()> {
    println!("Descargando ChromeDriver...");

    let detected = chrome_version
        .map(ChromeVersion::new)
        .or_else(chrome::detect_version);

    let major = match &detected {
        Some(version) => {
            println!("  Chrome v{} detectado", version.full());
            Some(version.major())
        }
        None => {
            println!("  Chrome no detectado, usando la version estable");
            None
        }
    };

    let client = http_client()?;
    let version = resolve_latest(&client, major)?;
    println!("  Descargando v{version}...");

    let archive = download_archive(&client, &version)?;
    let target = extract_driver(&archive, dir)?;
    println!("  Guardado en {}", target.display());

    report::ok("ChromeDriver instalado");
    Ok(())
}
