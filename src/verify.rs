use crate::report;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Nombre del ejecutable principal, tal como lo genera la compilación.
pub const EXE_NAME: &str = "PDF_Watermark_Remover.exe";

/// Binario del driver de Chrome que la aplicación necesita a su lado.
pub const DRIVER_NAME: &str = "chromedriver.exe";

pub const DRIVER_DOWNLOAD_URL: &str = "https://chromedriver.chromium.org/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub exe_found: bool,
    pub driver_found: bool,
}

pub fn check_files(dir: &Path) -> VerifyReport {
    VerifyReport {
        exe_found: dir.join(EXE_NAME).is_file(),
        driver_found: dir.join(DRIVER_NAME).is_file(),
    }
}

/// Comprueba la instalación en `dir` y, si el ejecutable está, lo lanza.
///
/// El orden es fijo: ejecutable (fatal si falta), driver (solo aviso),
/// pausa, lanzamiento. El lanzamiento ocurre siempre que el ejecutable
/// exista, con o sin driver.
pub fn run(dir: &Path) -> Result<()> {
    println!("Verificando instalacion de PDF Watermark Remover...");
    println!();

    let report = check_files(dir);

    if report.exe_found {
        report::ok("Ejecutable encontrado");
    } else {
        report::error("Ejecutable no encontrado");
        println!();
        println!("Hay problemas con la instalacion.");
        report::pause("Presiona Enter para salir...")?;
        bail!("Falta {EXE_NAME} en la carpeta actual");
    }

    if report.driver_found {
        report::ok("ChromeDriver encontrado");
    } else {
        report::warn("ChromeDriver no encontrado");
        println!("Descarga desde: {DRIVER_DOWNLOAD_URL}");
    }

    println!();
    report::pause("Verificacion completa. Presiona cualquier tecla para probar la aplicacion...")?;

    launch(dir)
}

/// Lanza la aplicación como proceso hijo y regresa sin esperarla.
/// El código de salida del hijo no se inspecciona.
fn launch(dir: &Path) -> Result<()> {
    let exe = dir.join(EXE_NAME);
    let child = Command::new(&exe)
        .current_dir(dir)
        .spawn()
        .with_context(|| format!("No se pudo iniciar {}", exe.display()))?;
    debug!(pid = child.id(), "aplicacion lanzada");
    Ok(())
}
