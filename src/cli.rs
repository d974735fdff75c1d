// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, PageOrigin};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// What the command line asked for.
pub enum Command {
    Run(Box<AppOptions>),
    Help,
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

/// Parse the process arguments.
pub fn parse_env() -> Result<Command, Box<dyn std::error::Error + Send + Sync>> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn std::error::Error + Send + Sync>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let (mut faculty, mut chug, mut maslul) = (None, None, None);

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("Missing value for {name}"));
        match a.as_str() {
            "--faculty" => faculty = Some(parse_num("--faculty", &value("--faculty")?)?),
            "--chug" => chug = Some(parse_num("--chug", &value("--chug")?)?),
            "--maslul" | "--lane" => maslul = Some(parse_num("--maslul", &value("--maslul")?)?),
            "--year" => opts.source.year = parse_num("--year", &value("--year")?)?,
            "--degree" => opts.source.degree = parse_num("--degree", &value("--degree")?)?,
            "--pages" => opts.source.origin = PageOrigin::Dir(PathBuf::from(value("--pages")?)),
            "--unavailable" => opts.input.unavailable = PathBuf::from(value("--unavailable")?),
            "--completed" => opts.input.completed = PathBuf::from(value("--completed")?),
            "-o" | "--out" => opts.export.set_out_dir(value("--out")?),
            "--print" => opts.print = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    match (faculty, chug, maslul) {
        (Some(f), Some(c), Some(m)) => {
            opts.source.faculty = f;
            opts.source.chug = c;
            opts.source.maslul = m;
        }
        (f, c, m) => {
            if opts.source.origin == PageOrigin::Http {
                return Err("Specify --faculty, --chug and --maslul (or --pages <dir>)".into());
            }
            opts.source.faculty = f.unwrap_or_default();
            opts.source.chug = c.unwrap_or_default();
            opts.source.maslul = m.unwrap_or_default();
        }
    }

    Ok(Command::Run(Box::new(opts)))
}

fn parse_num(flag: &str, v: &str) -> Result<u32, String> {
    v.trim().parse().map_err(|_| format!("{flag} expects a whole number, got `{v}`"))
}

/// Progress on stderr, one line per finished page.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.seen = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, course_id: u32) {
        self.seen += 1;
        eprintln!("[{}/{}] {course_id}", self.seen, self.total);
    }
    fn item_failed(&mut self, course_id: u32, reason: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {course_id} failed: {reason}", self.seen, self.total);
    }
}

/// Run with parsed options and report to the terminal.
pub fn run(opts: &AppOptions) -> crate::error::Result<RunSummary> {
    let source = runner::source_for(opts);
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(opts, source.as_ref(), Some(&mut progress))?;

    if !summary.failed.is_empty() {
        eprintln!("{} course page(s) could not be fetched; see .store/debug.log", summary.failed.len());
    }
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    if opts.print {
        for id in summary.selection.ids() {
            match summary.name_of(id) {
                Some(name) if !name.is_empty() => println!("{id} {name}"),
                _ => println!("{id}"),
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, Box<dyn std::error::Error + Send + Sync>> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn program_flags_fill_source_options() {
        let Command::Run(opts) = parse(&["--faculty", "2", "--chug", "521", "--maslul", "23009", "--print"]).unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!((opts.source.faculty, opts.source.chug, opts.source.maslul), (2, 521, 23009));
        assert!(opts.print);
        assert_eq!(opts.source.origin, PageOrigin::Http);
    }

    #[test]
    fn pages_dir_makes_program_optional() {
        let Command::Run(opts) = parse(&["--pages", "saved", "-o", "out"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(opts.source.origin, PageOrigin::Dir(PathBuf::from("saved")));
        assert_eq!(opts.export.out_dir(), std::path::Path::new("out"));
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(parse(&["--faculty", "2"]).is_err());
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = parse(&["--faculty", "two"]).err().unwrap();
        assert!(err.to_string().contains("--faculty"));
        assert!(parse(&["--chug"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["-h"]), Ok(Command::Help)));
    }
}
