//! Definición de la línea de comandos con `clap`.

use crate::dist::PORTABLE_DIR_NAME;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "instalador")]
#[command(version)]
#[command(about = "Instalador y verificador de PDF Watermark Remover")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verifica la instalación en la carpeta actual y lanza la aplicación
    Verify {},

    /// Descarga el ChromeDriver compatible con el Chrome instalado
    Driver {
        /// Carpeta destino para chromedriver.exe
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Versión de Chrome a usar (omite la detección)
        #[arg(long)]
        chrome_version: Option<String>,
    },

    /// Instala la aplicación en la carpeta de datos del usuario
    Install {
        /// Ejecutable compilado a instalar
        #[arg(long, default_value = "dist/PDF_Watermark_Remover.exe")]
        exe: PathBuf,

        /// Carpeta de instalación (por defecto, datos locales del usuario)
        #[arg(long)]
        into: Option<PathBuf>,

        /// Carpeta de escritorio para el acceso directo (por defecto, la
        /// del usuario)
        #[arg(long)]
        desktop: Option<PathBuf>,

        /// No crear el acceso directo en el escritorio
        #[arg(long, conflicts_with = "desktop")]
        no_shortcut: bool,
    },

    /// Elimina una instalación existente
    Uninstall {
        /// Carpeta de instalación a eliminar
        #[arg(long)]
        from: Option<PathBuf>,

        /// Carpeta de escritorio donde borrar los accesos directos (por
        /// defecto, la del usuario)
        #[arg(long)]
        desktop: Option<PathBuf>,
    },

    /// Prepara la carpeta de distribución portable
    Dist {
        /// Ejecutable compilado a empaquetar
        #[arg(long, default_value = "dist/PDF_Watermark_Remover.exe")]
        exe: PathBuf,

        /// Carpeta de salida (se recrea si ya existe)
        #[arg(long, default_value = PORTABLE_DIR_NAME)]
        out: PathBuf,
    },
}
