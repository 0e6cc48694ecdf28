//! Simple command that prints one or '-n count' UUIDv4 strings, or checks '-c uuid' strings

use std::{env, io, io::Write, process::ExitCode};

enum Command {
    Generate(usize),
    Check(Vec<String>),
}

fn main() -> io::Result<ExitCode> {
    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count | -c uuid...]",
                    program.as_deref().unwrap_or("uuid4")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Generate(count) => {
            for _ in 0..count {
                writeln!(buf, "{}", uuid4::uuid4().map_err(io::Error::other)?)?;
            }
        }
        Command::Check(inputs) => {
            let mut status = ExitCode::SUCCESS;
            for input in inputs {
                match input.parse::<uuid4::Uuid>() {
                    Ok(e) if e.is_v4() => writeln!(buf, "{}: valid v4", e)?,
                    Ok(e) => {
                        writeln!(buf, "{}: not v4 (version {:?})", e, e.version())?;
                        status = ExitCode::FAILURE;
                    }
                    Err(err) => {
                        writeln!(buf, "{}: {}", input, err)?;
                        status = ExitCode::FAILURE;
                    }
                }
            }
            return Ok(status);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut count = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" if count.is_none() => {
                let inputs: Vec<String> = args.collect();
                if inputs.is_empty() {
                    return Err("argument to option 'c' missing".to_owned());
                }
                return Ok(Command::Check(inputs));
            }
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(Command::Generate(count.unwrap_or(1)))
}
