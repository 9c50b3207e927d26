//! Textos que el instalador deja junto a la aplicación: el README para el
//! usuario final y los .bat de apoyo. Son los artefactos documentados de la
//! distribución, embebidos aquí para generarlos donde hagan falta.

use crate::install::{APP_NAME, APP_VERSION};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// README de la carpeta portable: inicio rápido, requisitos, instalación
/// del ChromeDriver y la tabla de problemas comunes.
pub const USER_README: &str = r#"# PDF Watermark Remover v2.0

## Inicio Rápido
1. Ejecutar PDF_Watermark_Remover.exe
2. Seleccionar archivo PDF
3. Hacer clic en "INICIAR PROCESAMIENTO"
4. Esperar resultado en ProcessedPDFs/

## Requisitos
- Windows 10+
- Conexión a Internet
- ChromeDriver (ver instrucciones abajo)

## Instalar ChromeDriver
1. Ir a https://chromedriver.chromium.org/
2. Descargar versión compatible con tu Chrome
3. Extraer chromedriver.exe
4. Colocar en la misma carpeta que este ejecutable
   O agregar al PATH del sistema

## Problemas Comunes
- "ChromeDriver not found": Seguir instrucciones arriba
- "Error de conexión": Verificar Internet
- Aplicación no inicia: Ejecutar como administrador

Versión: 2.0
"#;

/// Versión batch del comando `verify`, para quien recibe la carpeta
/// portable sin este instalador.
pub const VERIFY_SCRIPT: &str = r#"@echo off
title Verificar Instalacion
echo Verificando instalacion de PDF Watermark Remover...
echo.

if exist "PDF_Watermark_Remover.exe" (
    echo [OK] Ejecutable encontrado
) else (
    echo [ERROR] Ejecutable no encontrado
    goto :error
)

if exist "chromedriver.exe" (
    echo [OK] ChromeDriver encontrado
) else (
    echo [WARNING] ChromeDriver no encontrado
    echo Descarga desde: https://chromedriver.chromium.org/
)

echo.
echo Verificacion completa. Presiona cualquier tecla para probar la aplicacion...
pause > nul

PDF_Watermark_Remover.exe
goto :end

:error
echo.
echo Hay problemas con la instalacion.
pause

:end
"#;

pub const DRIVER_HELPER_SCRIPT: &str = r#"@echo off
echo Instalador de ChromeDriver para PDF Watermark Remover
echo.
echo Ve a https://chromedriver.chromium.org/
echo Descarga la version compatible con tu Chrome
echo Extrae chromedriver.exe a esta carpeta
echo.
echo Presiona una tecla cuando hayas instalado ChromeDriver...
pause
"#;

/// README de una instalación en la carpeta del usuario.
pub fn install_readme(install_dir: &Path) -> String {
    format!(
        r#"# {APP_NAME} v{APP_VERSION}

## Inicio Rápido
1. Ejecutar PDF_Watermark_Remover.exe
2. Seleccionar archivo PDF
3. Hacer clic en "INICIAR PROCESAMIENTO"
4. Resultado en ProcessedPDFs/

## Ubicación
Instalado en: {dir}

## Desinstalar
Ejecutar: uninstall.bat
"#,
        dir = install_dir.display()
    )
}

pub fn uninstall_script(install_dir: &Path) -> String {
    format!(
        r#"@echo off
title Desinstalar {APP_NAME}
echo Desinstalando {APP_NAME}...

del "%USERPROFILE%\Desktop\{APP_NAME}.lnk" 2>nul
del "%USERPROFILE%\Desktop\{APP_NAME}.bat" 2>nul

cd /d "%TEMP%"
rmdir /s /q "{dir}"

echo Desinstalación completada.
pause
"#,
        dir = install_dir.display()
    )
}

/// Lanzador de escritorio: entra a la carpeta de instalación y arranca
/// la aplicación.
pub fn launcher_script(install_dir: &Path) -> String {
    format!(
        "@echo off\ncd /d \"{}\"\nstart {}\n",
        install_dir.display(),
        crate::verify::EXE_NAME
    )
}

/// Escribe un .bat con finales CRLF; cmd.exe tropieza con `goto` cuando
/// los saltos son solo LF. Los cuerpos embebidos usan únicamente `\n`.
pub fn write_script(path: &Path, body: &str) -> Result<()> {
    let body = body.replace('\n', "\r\n");
    fs::write(path, body).with_context(|| format!("No se pudo escribir {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_readme_keeps_the_four_quick_start_steps() {
        for step in [
            "1. Ejecutar PDF_Watermark_Remover.exe",
            "2. Seleccionar archivo PDF",
            "3. Hacer clic en \"INICIAR PROCESAMIENTO\"",
            "4. Esperar resultado en ProcessedPDFs/",
        ] {
            assert!(USER_README.contains(step), "falta el paso: {step}");
        }
    }

    #[test]
    fn user_readme_keeps_the_three_troubleshooting_rows() {
        for row in [
            "\"ChromeDriver not found\": Seguir instrucciones arriba",
            "\"Error de conexión\": Verificar Internet",
            "Aplicación no inicia: Ejecutar como administrador",
        ] {
            assert!(USER_README.contains(row), "falta la fila: {row}");
        }
    }

    #[test]
    fn verify_script_keeps_markers_and_download_url() {
        assert!(VERIFY_SCRIPT.contains("[OK] Ejecutable encontrado"));
        assert!(VERIFY_SCRIPT.contains("[ERROR] Ejecutable no encontrado"));
        assert!(VERIFY_SCRIPT.contains("[WARNING] ChromeDriver no encontrado"));
        assert!(VERIFY_SCRIPT.contains("https://chromedriver.chromium.org/"));
        assert!(VERIFY_SCRIPT.contains("pause > nul"));
    }

    #[test]
    fn install_readme_names_the_install_dir() {
        let readme = install_readme(Path::new("/tmp/pwr"));
        assert!(readme.contains("Instalado en: /tmp/pwr"));
        assert!(readme.contains("Ejecutar: uninstall.bat"));
    }

    #[test]
    fn uninstall_script_removes_the_install_dir_and_shortcuts() {
        let script = uninstall_script(Path::new("/tmp/pwr"));
        assert!(script.contains(r#"rmdir /s /q "/tmp/pwr""#));
        assert!(script.contains(r#"del "%USERPROFILE%\Desktop\PDF Watermark Remover.lnk" 2>nul"#));
        assert!(script.contains(r#"del "%USERPROFILE%\Desktop\PDF Watermark Remover.bat" 2>nul"#));
    }

    #[test]
    fn launcher_script_starts_the_exe_from_the_install_dir() {
        let script = launcher_script(Path::new("/tmp/pwr"));
        assert!(script.contains("cd /d \"/tmp/pwr\""));
        assert!(script.contains("start PDF_Watermark_Remover.exe"));
    }

    #[test]
    fn write_script_converts_line_endings_to_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.bat");

        write_script(&path, "@echo off\npause\n").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "@echo off\r\npause\r\n");
    }
}
