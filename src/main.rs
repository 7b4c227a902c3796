use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_browser::controller::SUBMIT_KEY;
use recipe_browser::render::{render_document, render_page};
use recipe_browser::{BrowserConfig, BrowserError, FilterKind, MealApi, RecipeBrowser, ViewState};

#[derive(Parser, Debug)]
#[command(name = "recipe-browser", version, about = "Search, filter and view recipes from TheMealDB")]
struct Cli {
    /// Print the page as HTML instead of a text summary
    #[arg(long, global = true)]
    html: bool,

    /// Also write the full HTML page to this file
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes by name
    Search { term: String },
    /// Show a random recipe
    Random,
    /// List recipes in a category
    Category { value: String },
    /// List recipes from a cuisine
    Area { value: String },
    /// Show the full recipe with this id
    Show { id: String },
    /// List the available categories and cuisines
    Filters,
    /// Interactive session, one action per line
    Browse,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), BrowserError> {
    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = cli.base_url.clone() {
        config.base_url = base_url;
    }
    debug!("{:?}", config);

    let browser = recipe_browser::connect(&config)?;
    if cli.html
        || cli.output.is_some()
        || matches!(cli.command, Command::Filters | Command::Browse)
    {
        browser.load_filters().await;
    }

    match &cli.command {
        Command::Search { term } => browser.search(term).await,
        Command::Random => browser.random().await,
        Command::Category { value } => browser.filter_by_category(value).await,
        Command::Area { value } => browser.filter_by_area(value).await,
        Command::Show { id } => {
            if !browser.open_detail(id).await && browser.snapshot().error.is_none() {
                println!("no recipe {}", id);
            }
        }
        Command::Filters => {
            print_filters(&browser.snapshot());
            return write_output(&cli, &browser.snapshot()).await;
        }
        Command::Browse => browse(&browser, cli.html).await?,
    }

    let state = browser.snapshot();
    if !matches!(cli.command, Command::Browse) {
        show(&state, cli.html);
    }
    write_output(&cli, &state).await?;

    if state.error.is_some() {
        std::process::exit(2);
    }
    Ok(())
}

async fn write_output(cli: &Cli, state: &ViewState) -> Result<(), BrowserError> {
    if let Some(path) = &cli.output {
        tokio::fs::write(path, render_document(state)).await?;
        debug!("Wrote page to {}", path.display());
    }
    Ok(())
}

const BROWSE_HELP: &str = "\
commands:
  <text> | search <text>   search by name
  random                   random recipe
  category <name>          filter by category
  area <name>              filter by cuisine
  open <n>                 open card number n
  show <id>                open recipe by id
  close                    close the detail panel
  filters                  list categories and cuisines
  help                     this text
  quit                     leave

A line that starts with a command word runs that command; use
`search random` (or `search close`, ...) to search for the word itself.";

/// One line of a browse session
#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand<'a> {
    Skip,
    Quit,
    Help,
    Filters,
    Search(&'a str),
    Random,
    Filter(FilterKind, &'a str),
    Show(&'a str),
    Close,
    Open(&'a str),
}

fn parse_browse_line(line: &str) -> BrowseCommand<'_> {
    let line = line.trim();
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();

    match command {
        "" => BrowseCommand::Skip,
        "quit" | "exit" => BrowseCommand::Quit,
        "help" => BrowseCommand::Help,
        "filters" => BrowseCommand::Filters,
        "search" => BrowseCommand::Search(arg),
        "random" => BrowseCommand::Random,
        "category" => BrowseCommand::Filter(FilterKind::Category, arg),
        "area" => BrowseCommand::Filter(FilterKind::Area, arg),
        "show" => BrowseCommand::Show(arg),
        "close" => BrowseCommand::Close,
        "open" => BrowseCommand::Open(arg),
        _ => BrowseCommand::Search(line),
    }
}

/// Reads actions from stdin until EOF or `quit`
async fn browse<A: MealApi>(browser: &RecipeBrowser<A>, html: bool) -> Result<(), BrowserError> {
    println!("{}", BROWSE_HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_browse_line(&line) {
            BrowseCommand::Skip => continue,
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("{}", BROWSE_HELP);
                continue;
            }
            BrowseCommand::Filters => {
                print_filters(&browser.snapshot());
                continue;
            }
            BrowseCommand::Search(term) => browser.handle_search_key(SUBMIT_KEY, term).await,
            BrowseCommand::Random => browser.random().await,
            BrowseCommand::Filter(kind, value) => browser.filter(kind, value).await,
            BrowseCommand::Show(id) => {
                if !browser.open_detail(id).await && browser.snapshot().error.is_none() {
                    println!("no recipe {}", id);
                    continue;
                }
            }
            BrowseCommand::Close => browser.close_detail(),
            BrowseCommand::Open(arg) => {
                let opened = match arg.parse::<usize>() {
                    Ok(n) if n > 0 => browser.open_card(n - 1).await,
                    _ => false,
                };
                if !opened && browser.snapshot().error.is_none() {
                    println!("no card {}", arg);
                    continue;
                }
            }
        }

        show(&browser.snapshot(), html);
    }

    Ok(())
}

fn show(state: &ViewState, html: bool) {
    if html {
        print!("{}", render_page(state));
    } else {
        print_summary(state);
    }
}

fn print_summary(state: &ViewState) {
    if let Some(error) = &state.error {
        println!("! {}", error);
    }
    if !state.heading.is_empty() {
        println!("{}", state.heading);
    }
    for (i, meal) in state.grid.iter().enumerate() {
        match &meal.category {
            Some(category) => println!("{:>3}. {} [{}] ({})", i + 1, meal.name, meal.id, category),
            None => println!("{:>3}. {} [{}]", i + 1, meal.name, meal.id),
        }
    }

    if let (true, Some(detail)) = (state.detail.visible, &state.detail.content) {
        println!();
        println!("== {} ==", detail.name);
        println!("Category: {}", detail.category.as_deref().unwrap_or("N/A"));
        println!("Area: {}", detail.area.as_deref().unwrap_or("N/A"));
        println!();
        println!("Ingredients:");
        for ingredient in &detail.ingredients {
            println!("  - {}", ingredient);
        }
        println!();
        println!("{}", detail.instructions);
        if let Some(url) = &detail.youtube_url {
            println!();
            println!("Video: {}", url);
        }
    }
}

fn print_filters(state: &ViewState) {
    for kind in [FilterKind::Category, FilterKind::Area] {
        let names: Vec<_> = state
            .options(kind)
            .iter()
            .filter(|o| !o.is_placeholder())
            .map(|o| o.label.as_str())
            .collect();
        println!("{}: {}", kind.heading_label(), names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_words() {
        assert_eq!(parse_browse_line("random"), BrowseCommand::Random);
        assert_eq!(parse_browse_line("  close "), BrowseCommand::Close);
        assert_eq!(parse_browse_line(""), BrowseCommand::Skip);
        assert_eq!(
            parse_browse_line("category Seafood"),
            BrowseCommand::Filter(FilterKind::Category, "Seafood")
        );
        assert_eq!(parse_browse_line("show 52772"), BrowseCommand::Show("52772"));
        assert_eq!(parse_browse_line("open 2"), BrowseCommand::Open("2"));
    }

    #[test]
    fn test_search_prefix_searches_command_words() {
        assert_eq!(parse_browse_line("search random"), BrowseCommand::Search("random"));
        assert_eq!(parse_browse_line("search close"), BrowseCommand::Search("close"));
        assert_eq!(parse_browse_line("search   filters "), BrowseCommand::Search("filters"));
        assert!(BROWSE_HELP.contains("search random"));
    }

    #[test]
    fn test_plain_text_searches_whole_line() {
        assert_eq!(
            parse_browse_line("chicken soup"),
            BrowseCommand::Search("chicken soup")
        );
    }
}
