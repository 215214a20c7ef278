//! Print SHA-1 digests of files, `sha1sum` style.

use std::io::{self, Write};
use std::process::ExitCode;

use sha1kit::{Digest, Result, VERSION, hash_file, hash_reader};

const USAGE: &str = "\
Usage: sha1kit [OPTION]... [--] [FILE]...

Print the SHA-1 digest of each FILE. With no FILE, or when FILE is -,
read standard input. Arguments after -- are always treated as files.

Options:
  -h, --help     print this help
  -V, --version  print the version";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Hash(Vec<String>),
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> std::result::Result<Command, String> {
    let mut targets = Vec::new();
    let mut args_iter = args.into_iter();

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--" => {
                targets.extend(args_iter.by_ref());
                break;
            }
            "-" => targets.push(arg),
            opt if opt.starts_with('-') => return Err(format!("unknown option '{opt}'")),
            _ => targets.push(arg),
        }
    }

    if targets.is_empty() {
        targets.push("-".to_owned());
    }
    Ok(Command::Hash(targets))
}

fn digest_of(target: &str) -> Result<Digest> {
    if target == "-" {
        hash_reader(io::stdin().lock())
    } else {
        hash_file(target)
    }
}

fn main() -> ExitCode {
    let targets = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("sha1kit {VERSION}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Hash(targets)) => targets,
        Err(msg) => {
            eprintln!("sha1kit: {msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for target in &targets {
        match digest_of(target) {
            Ok(digest) => {
                if writeln!(stdout, "{digest}  {target}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                eprintln!("sha1kit: {target}: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
