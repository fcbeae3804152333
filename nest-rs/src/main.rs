mod error;

use error::Error;
use nest_planner::Planner;
use rustyline::DefaultEditor;
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal, Write}, process::ExitCode};

/// The expression planned when no input file is given.
const DEFAULT_EXPRESSION: &str = "(a+(b>c)|c<(day off>another day off)|(150>879))&d=expression!";

/// Returns the first line of the given file, or the default expression if no file is given.
fn load_expression(filename: Option<&str>) -> Result<String, Error> {
    let Some(filename) = filename else {
        return Ok(DEFAULT_EXPRESSION.to_string());
    };

    let mut line = String::new();
    BufReader::new(File::open(filename)?).read_line(&mut line)?;

    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    log::info!("loaded expression from `{}`", filename);
    Ok(line)
}

/// Plans the given expression and writes each step on its own line.
fn plan_print(input: &str, mut out: impl Write) -> Result<(), Error> {
    let plan = Planner::new(input).plan()?;

    for step in plan.steps() {
        writeln!(out, "{}", step)?;
    }
    Ok(())
}

/// Waits for the user to press enter before the program exits, so that errors stay visible when
/// the program was started in its own terminal window.
fn wait_for_keypress() {
    if !io::stdin().is_terminal() {
        return;
    }

    if let Ok(mut rl) = DefaultEditor::new() {
        // any outcome, including ctrl-c, ends the wait
        let _ = rl.readline("press enter to exit");
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args();
    args.next();
    let filename = args.next();

    let input = match load_expression(filename.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            err.report_to_stderr("");
            wait_for_keypress();
            return ExitCode::FAILURE;
        },
    };

    match plan_print(&input, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(&input);
            wait_for_keypress();
            ExitCode::FAILURE
        },
    }
}
