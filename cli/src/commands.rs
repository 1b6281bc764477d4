use clap::{Parser, Subcommand};

use intervals_core::snapshot::share_query;
use intervals_core::{Screen, SetField, WorkoutError};

use crate::{CliContext, Console, render};

/// What the prompt loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Start,
    Quit,
}

#[derive(Parser)]
#[command(name = "intervals", about = "Interval workout timer", disable_version_flag = true)]
struct Repl {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the configured sets
    List,
    /// Append a set copying the last set's timings
    Add,
    /// Change one field of a set (fields: name, work, rest, reps)
    Edit {
        /// Set number as shown by `list`
        index: usize,
        field: SetField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Remove a set (the last remaining set cannot be removed)
    Remove { index: usize },
    /// Run the workout
    Start,
    /// Print the share link query for the current sets
    Share,
    Exit,
}

/// Parse and execute one setup-screen command line.
///
/// Messages for the user are returned in the `Ok` text; parse and validation
/// failures come back as `Err` text.
pub fn respond(line: &str, ctx: &mut CliContext) -> Result<(Action, String), String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "intervals".to_string());
    let repl = Repl::try_parse_from(args).map_err(|e| e.to_string())?;

    let output = match repl.command {
        Some(Command::List) | None => list(ctx),
        Some(Command::Add) => {
            let index = ctx.session.add_set();
            let name = ctx.session.store().sets()[index].name.clone();
            format!("Added {name}\n{}", list(ctx))
        }
        Some(Command::Edit {
            index,
            field,
            value,
        }) => {
            let index = to_zero_based(index)?;
            ctx.session
                .edit_field(index, field, &value.join(" "))
                .map_err(describe)?;
            list(ctx)
        }
        Some(Command::Remove { index }) => {
            ctx.session
                .remove_set(to_zero_based(index)?)
                .map_err(describe)?;
            list(ctx)
        }
        Some(Command::Share) => share_query(&ctx.session.current_token()),
        Some(Command::Start) => return Ok((Action::Start, String::new())),
        Some(Command::Exit) => return Ok((Action::Quit, "quitting...".to_string())),
    };
    Ok((Action::Continue, output))
}

fn list(ctx: &CliContext) -> String {
    let store = ctx.session.store();
    render::setup(store.sets(), store.can_remove())
}

fn to_zero_based(index: usize) -> Result<usize, String> {
    index
        .checked_sub(1)
        .ok_or_else(|| "error: set numbers start at 1".to_string())
}

fn describe(err: WorkoutError) -> String {
    match err {
        WorkoutError::IndexOutOfRange { index, len } => {
            format!("error: no set {} (have {len})", index + 1)
        }
        other => format!("error: {other}"),
    }
}

/// Interpret a line typed while a run is in progress.
///
/// `stop` and `q` end the run; `exit` ends the program, as it does at the
/// setup prompt. Anything else is ignored.
fn running_command(line: &str) -> Option<Action> {
    match line.trim() {
        "stop" | "q" => Some(Action::Continue),
        "exit" => Some(Action::Quit),
        _ => None,
    }
}

/// Run the workout until it completes, the user types `stop`, or stdin closes.
///
/// Returns `Action::Quit` on EOF or `exit` so the caller can exit.
pub async fn run_workout(ctx: &mut CliContext, console: &mut Console) -> Result<Action, String> {
    let display = ctx.session.start().map_err(|e| format!("error: {e}"))?;
    if let Some(token) = ctx.session.share_token() {
        println!("Share: ?{}", share_query(token));
    }
    println!("Type `stop` to end the run or `exit` to quit.");
    println!("{}", render::running(&display));

    ctx.ticker.start();
    let action = loop {
        tokio::select! {
            _ = ctx.ticker.next_tick(), if ctx.ticker.is_running() => {
                if let Some(display) = ctx.session.tick() {
                    println!("{}", render::running(&display));
                }
                if ctx.session.screen() == Screen::Complete {
                    ctx.ticker.stop();
                    println!("{}", render::complete());
                    break Action::Continue;
                }
            }
            line = console.next_line() => match line? {
                Some(line) => {
                    if let Some(action) = running_command(&line) {
                        break action;
                    }
                }
                None => break Action::Quit,
            },
        }
    };

    ctx.ticker.stop();
    ctx.session.restart();
    Ok(action)
}
