mod cli;

use std::{fs, process, time::Instant};

use calx::{parse, ErrorKind, Interpreter, PResult};
use clap::Parser;
use cli::{Cli, Command};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let now = Instant::now();

    if let Err(why) = run(cli.command) {
        eprintln!("error: {why}");
        process::exit(1);
    }

    log::debug!("finished in {:.2?}", now.elapsed());
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Eval { expr, defines } => {
            let interpreter = with_defines(&defines)?;
            println!("{}", interpreter.eval(&expr)?);
        }
        Command::Parse { expr } => {
            println!("{:#?}", parse(&expr)?);
        }
        Command::Run { file, defines } => {
            let src = fs::read_to_string(&file)?;
            let interpreter = with_defines(&defines)?;

            for (line_no, line) in src.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with(';') {
                    continue;
                }
                let value = interpreter
                    .eval(line)
                    .map_err(|why| format!("{}:{}: {why}", file.display(), line_no + 1))?;
                println!("{value}");
            }
        }
    }
    Ok(())
}

/// Builds the standard interpreter and binds each `NAME=EXPR`, evaluating the
/// right-hand sides in order so later definitions can use earlier ones.
fn with_defines(defines: &[String]) -> PResult<Interpreter> {
    let mut interpreter = Interpreter::new();

    for define in defines {
        let (name, expr) = define.split_once('=').ok_or_else(|| ErrorKind::Parse {
            pos: define.len(),
            expected: "`=` in variable definition".into(),
        })?;

        let value = interpreter.eval(expr)?;
        log::debug!("define {} = {value}", name.trim());
        interpreter.env_mut().define_number(name.trim(), value);
    }

    Ok(interpreter)
}
