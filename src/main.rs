#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use clap::{Parser, Subcommand};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use uoguelph::{
    parse::{parse_schedule_with, schedule::ITEM_FIELDS},
    CalendarType, Client, Config, Credentials, Error,
};

#[derive(Parser, Debug)]
#[command(
    name = "uoguelph",
    about = "Looks up University of Guelph courses, events, meal plan balances and schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a course calendar entry, e.g. `course 2011 cis1910 undergraduate`.
    /// Set CACHE to a file path to reuse previously fetched courses.
    Course {
        year: i32,
        code: String,
        #[arg(default_value_t = CalendarType::Undergraduate)]
        calendar: CalendarType,
    },
    /// Print an event; the url is read from stdin when not given
    Event { url: Option<String> },
    /// Print the meal plan balance for a `username password` line read from stdin
    Balance,
    /// Parse a `|` delimited class or exam schedule read from stdin
    Schedule {
        /// Fragments per schedule item; only the first seven are kept
        #[arg(long, default_value_t = ITEM_FIELDS)]
        window: usize,
    },
}

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

async fn read_line() -> uoguelph::Result<String> {
    let mut line = String::new();
    BufReader::new(stdin()).read_line(&mut line).await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let output = match cli.command {
        Command::Course {
            year,
            code,
            calendar,
        } => {
            let use_cache = config.cache.is_some();
            let mut client = Client::new(config)?;
            let course = client.course(year, &code, calendar, use_cache).await?;
            serde_json::to_string_pretty(&course)?
        }
        Command::Event { url } => {
            let url = match url {
                Some(url) => url,
                None => read_line().await?,
            };
            let event = Client::new(config)?.event(&url).await?;
            serde_json::to_string_pretty(&event)?
        }
        Command::Balance => {
            let line = read_line().await?;
            let mut parts = line.split_whitespace();
            let (Some(username), Some(password)) = (parts.next(), parts.next()) else {
                return Err(Error::InvalidInput(
                    "expected `username password` on stdin".to_string(),
                )
                .into());
            };
            let credentials = Credentials {
                username: username.to_string(),
                password: password.to_string(),
            };
            let balance = Client::new(config)?.balance(&credentials).await?;
            serde_json::to_string_pretty(&balance)?
        }
        Command::Schedule { window } => {
            let data = read_line().await?;
            serde_json::to_string_pretty(&parse_schedule_with(&data, window)?)?
        }
    };
    println!("{output}");
    Ok(())
}
