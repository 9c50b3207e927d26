//! Instalación en la carpeta del usuario: copia el ejecutable, deja
//! README y desinstalador, y crea el acceso directo del escritorio.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::report;
use crate::scripts;
use crate::verify::EXE_NAME;

pub const APP_NAME: &str = "PDF Watermark Remover";
pub const APP_VERSION: &str = "2.0";
pub const INSTALL_DIR_NAME: &str = "PDF_Watermark_Remover";
pub const OUTPUT_DIR_NAME: &str = "ProcessedPDFs";

/// Qué hacer con el acceso directo del escritorio.
#[derive(Debug, Clone)]
pub enum Shortcut {
    /// Crear el lanzador en esta carpeta.
    Desktop(PathBuf),
    /// El usuario pidió no crearlo; no se avisa.
    Omitted,
    /// No se pudo resolver la carpeta de escritorio; se instala igual,
    /// con aviso.
    Unavailable,
}

/// Carpeta de instalación por defecto, bajo los datos locales del usuario
/// (`%LOCALAPPDATA%` en Windows).
pub fn default_root() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(INSTALL_DIR_NAME))
}

/// Copia la aplicación a `root` y deja los archivos de apoyo.
pub fn install(exe_src: &Path, root: &Path, shortcut: Shortcut) -> Result<()> {
    println!("Instalando {APP_NAME} v{APP_VERSION}...");

    if !exe_src.is_file() {
        bail!("No se encontro el ejecutable: {}", exe_src.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("No se pudo crear {}", root.display()))?;
    fs::create_dir_all(root.join(OUTPUT_DIR_NAME))
        .with_context(|| format!("No se pudo crear {OUTPUT_DIR_NAME}"))?;

    let exe_dst = root.join(EXE_NAME);
    fs::copy(exe_src, &exe_dst)
        .with_context(|| format!("No se pudo copiar {}", exe_src.display()))?;
    println!("  Ejecutable copiado");

    fs::write(root.join("README.txt"), scripts::install_readme(root))
        .context("No se pudo escribir README.txt")?;
    scripts::write_script(&root.join("uninstall.bat"), &scripts::uninstall_script(root))?;
    println!("  Archivos de instalacion creados");

    match shortcut {
        Shortcut::Desktop(desktop) => {
            let launcher = desktop.join(format!("{APP_NAME}.bat"));
            scripts::write_script(&launcher, &scripts::launcher_script(root))?;
            debug!(launcher = %launcher.display(), "acceso directo creado");
            println!("  Acceso directo creado");
        }
        Shortcut::Omitted => {}
        Shortcut::Unavailable => {
            report::warn("Sin carpeta de escritorio; no se creo el acceso directo");
        }
    }

    report::ok(&format!("Instalado en {}", root.display()));
    Ok(())
}

/// Borra la instalación de `root` y los accesos directos del escritorio.
/// Sin instalación previa solo avisa.
pub fn uninstall(root: &Path, desktop: Option<&Path>) -> Result<()> {
    println!("Desinstalando {APP_NAME}...");

    if let Some(desktop) = desktop {
        for name in [format!("{APP_NAME}.lnk"), format!("{APP_NAME}.bat")] {
            let shortcut = desktop.join(name);
            if shortcut.is_file() {
                fs::remove_file(&shortcut)
                    .with_context(|| format!("No se pudo borrar {}", shortcut.display()))?;
                debug!(shortcut = %shortcut.display(), "acceso directo borrado");
            }
        }
    }

    if root.exists() {
        fs::remove_dir_all(root)
            .with_context(|| format!("No se pudo borrar {}", root.display()))?;
        report::ok("Desinstalacion completada");
    } else {
        report::warn("No hay nada que desinstalar");
    }
    Ok(())
}
