// src/bin/cli.rs
use course_finder::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::parse_env() {
        Ok(cli::Command::Run(opts)) => opts,
        Ok(cli::Command::Help) => {
            print!("{}", cli::help());
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {e}\n");
            eprint!("{}", cli::help());
            std::process::exit(2);
        }
    };

    log::init();
    cli::run(&opts)?;
    Ok(())
}
