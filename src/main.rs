use std::env;
use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_finder::{
    ClientConfig, GridTarget, HtmlView, MealDbClient, OverlayTarget, RecipeApi, RecipeClient,
    RecipeError, TerminalView, View,
};

const USAGE: &str = "Usage: recipe-finder [--html <path>]

Commands:
  search <term>   search recipes by name (alias: s)
  random          show a random recipe (alias: r)
  open <n>        open the n-th card
  close           close the recipe overlay
  outside         click outside the recipe overlay
  help            show this help
  quit            exit (alias: exit)";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Random,
    Open(usize),
    Close,
    Outside,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let command = match word {
        "search" | "s" => Command::Search(rest.to_string()),
        "random" | "r" => Command::Random,
        "open" => match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => Command::Open(n),
            _ => Command::Unknown(line.to_string()),
        },
        "close" => Command::Close,
        "outside" => Command::Outside,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, String> {
    let mut html = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => {
                let path = args.next().ok_or("--html requires a path")?;
                html = Some(PathBuf::from(path));
            }
            other => return Err(format!("Unexpected argument: {}\n\n{}", other, USAGE)),
        }
    }
    Ok(html)
}

/// Read commands from stdin until EOF or `quit`.
///
/// `snapshot` renders the page after every command when the view supports it.
async fn run_shell<A, V>(
    client: &RecipeClient<A, V>,
    snapshot: impl Fn(&V) -> Option<String>,
    html_path: Option<&PathBuf>,
) -> Result<(), RecipeError>
where
    A: RecipeApi,
    V: View,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!("{:?}", command);

        match command {
            Command::Search(term) => client.submit_search(&term).await,
            Command::Random => client.random().await,
            Command::Open(n) => {
                let id = client.with_view(|view| view.card_id(n - 1).map(str::to_string));
                match &id {
                    Some(id) => client.on_grid_click(GridTarget::Card { id }).await,
                    None => println!("No card #{} in the grid", n),
                }
            }
            Command::Close => client.on_overlay_click(OverlayTarget::CloseButton),
            Command::Outside => client.on_overlay_click(OverlayTarget::Backdrop),
            Command::Help => println!("{}", USAGE),
            Command::Quit => break,
            Command::Unknown(input) => println!("Unknown command: {}\n\n{}", input, USAGE),
        }

        if let (Some(path), Some(page)) = (html_path, client.with_view(&snapshot)) {
            tokio::fs::write(path, page).await?;
            info!("Wrote page to {}", path.display());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let html_path = parse_args(env::args().skip(1))?;
    let config = ClientConfig::load()?;
    info!("Using recipe service at {}", config.base_url);
    let api = MealDbClient::new(&config)?;

    match html_path {
        Some(path) => {
            let client = RecipeClient::new(api, HtmlView::new());
            run_shell(&client, |view: &HtmlView| Some(view.document()), Some(&path)).await?;
        }
        None => {
            let client = RecipeClient::new(api, TerminalView::stdout());
            run_shell(&client, |_: &TerminalView<_>| None, None).await?;
        }
    }

    Ok(())
}
