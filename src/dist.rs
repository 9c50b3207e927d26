//! Arma la carpeta portable que se entrega al usuario final: ejecutable,
//! carpetas de trabajo, README y los .bat de apoyo.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::install::OUTPUT_DIR_NAME;
use crate::scripts;
use crate::verify::EXE_NAME;

pub const PORTABLE_DIR_NAME: &str = "PDF_Watermark_Remover_Portable";
pub const INPUT_DIR_NAME: &str = "InputPDFs";

/// Construye el paquete en `out`. Si la carpeta ya existe se reemplaza
/// entera, para no arrastrar restos de un paquete anterior.
pub fn assemble(exe_src: &Path, out: &Path) -> Result<()> {
    println!("Creando paquete de distribucion...");

    if !exe_src.is_file() {
        bail!("No se encontro el ejecutable: {}", exe_src.display());
    }

    if out.exists() {
        fs::remove_dir_all(out)
            .with_context(|| format!("No se pudo limpiar {}", out.display()))?;
        debug!(out = %out.display(), "paquete anterior eliminado");
    }
    fs::create_dir_all(out)
        .with_context(|| format!("No se pudo crear {}", out.display()))?;
    fs::create_dir_all(out.join(INPUT_DIR_NAME))
        .with_context(|| format!("No se pudo crear {INPUT_DIR_NAME}"))?;
    fs::create_dir_all(out.join(OUTPUT_DIR_NAME))
        .with_context(|| format!("No se pudo crear {OUTPUT_DIR_NAME}"))?;

    let exe_dst = out.join(EXE_NAME);
    fs::copy(exe_src, &exe_dst)
        .with_context(|| format!("No se pudo copiar {}", exe_src.display()))?;

    fs::write(out.join("README.txt"), scripts::USER_README)
        .context("No se pudo escribir README.txt")?;
    scripts::write_script(&out.join("verificar.bat"), scripts::VERIFY_SCRIPT)?;
    scripts::write_script(
        &out.join("install_chromedriver.bat"),
        scripts::DRIVER_HELPER_SCRIPT,
    )?;

    let size = fs::metadata(&exe_dst)?.len();
    println!("  Paquete creado en: {}", out.display());
    println!("  Tamaño del ejecutable: {:.1} MB", size as f64 / 1_048_576.0);
    Ok(())
}
