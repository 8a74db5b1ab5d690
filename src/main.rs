use anyhow::Result;
use argh::FromArgs;
use greeter::{greeting, names, repl};

#[derive(FromArgs)]
/// Greet a list of names on standard output, comma-separated.
struct Args {
    #[argh(switch, short = 'i')]
    /// read names interactively, one line per greeting.
    interactive: bool,

    #[argh(positional, greedy)]
    /// names to greet; the built-in list is used when none are given.
    names: Vec<String>,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    if args.interactive {
        repl::run()?;
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.names.is_empty() {
        greeting::write_greeting(&mut out, names::DEFAULT_NAMES)?;
    } else {
        greeting::write_greeting(&mut out, &args.names)?;
    }
    Ok(())
}
