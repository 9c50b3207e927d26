use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub fn ok(msg: &str) {
    println!("[OK] {msg}");
}

pub fn warn(msg: &str) {
    println!("[WARNING] {msg}");
}

pub fn error(msg: &str) {
    println!("[ERROR] {msg}");
}

/// Muestra el aviso y espera una línea en stdin. Un EOF cuenta como tecla:
/// así el comando no se bloquea cuando la entrada viene de una tubería.
pub fn pause(prompt: &str) -> Result<()> {
    print!("{prompt}");
    io::stdout().flush().context("No se pudo vaciar stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("No se pudo leer de stdin")?;
    Ok(())
}
