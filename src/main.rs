use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use p8png::{convert, validate_input, CartError};
use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::Path,
};

const BANNER: &str = "=== PICO-8 Data to PNG Converter ===";
const PROMPT: &str = "Digite o caminho para um arquivo .txt ou .js";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // the themed prompt needs a terminal on both ends, piped input is read as a plain line
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        println!("{BANNER}");
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT)
            .interact_text()?;
        process(Path::new(input.trim()), &mut io::stdout().lock())
    } else {
        run(io::stdin().lock(), io::stdout().lock())
    }
}

/// Prints the banner, reads one path line from `input` and converts it.
fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "{BANNER}")?;
    write!(output, "{PROMPT}: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    process(Path::new(line.trim()), &mut output)
}

// bad paths are reported and end the run without an error status
fn process<W: Write>(path: &Path, output: &mut W) -> Result<()> {
    match validate_input(path) {
        Err(CartError::NotFound(_)) => {
            writeln!(output, "Arquivo não encontrado.")?;
            return Ok(());
        },
        Err(CartError::UnsupportedExtension(_)) => {
            writeln!(output, "Arquivo precisa ser .txt ou .js")?;
            return Ok(());
        },
        Err(e) => return Err(e.into()),
        Ok(_) => {},
    }
    let image = convert(path).with_context(|| format!("Failed to convert {}", path.display()))?;
    writeln!(output, "Imagem salva como {}", image.display())?;
    Ok(())
}
