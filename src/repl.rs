use crate::greeting;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};

/// Interactive greeting loop.
///
/// Reads lines until Ctrl-C or Ctrl-D; each line is split on whitespace into
/// names and greeted immediately. Blank lines are skipped.
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("names> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let names: Vec<&str> = line.split_whitespace().collect();
                if names.is_empty() {
                    continue;
                }
                println!("{}", greeting::greeting_line(names));
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
