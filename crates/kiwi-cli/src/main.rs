//! Kiwi CLI - Chat with your dessert pet from the terminal
//!
//! Talks to a running Kiwi server; `compose` and `classify` run offline.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use dialoguer::Input;

use api::KiwiClient;
use config::Config;
use kiwi::{classify, compose, Emotion, Personality};

#[derive(Parser)]
#[command(name = "kiwi")]
#[command(about = "Kiwi CLI - Chat with your dessert pet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the pet (interactive when no prompt is given)
    Chat {
        /// Message to send
        prompt: Option<String>,
        /// Personality id (e.g. "Kiwi Diva")
        #[arg(short, long)]
        personality: Option<String>,
    },

    /// List personalities known to the server
    Personalities,

    /// Print the composed prompt without calling the server
    Compose {
        /// Message to compose
        prompt: String,
        /// Personality id
        #[arg(short, long)]
        personality: Option<String>,
    },

    /// Print the emotion label for a piece of text
    Classify {
        /// Text to classify
        text: String,
    },

    /// Show or update configuration
    Config {
        /// Server base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Default personality id
        #[arg(long)]
        personality: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            prompt,
            personality,
        } => cmd_chat(prompt, personality).await,
        Commands::Personalities => cmd_personalities().await,
        Commands::Compose {
            prompt,
            personality,
        } => cmd_compose(prompt, personality),
        Commands::Classify { text } => cmd_classify(text),
        Commands::Config {
            base_url,
            personality,
        } => cmd_config(base_url, personality).await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_chat(prompt: Option<String>, personality: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let personality = config.personality(personality);
    let client = KiwiClient::new(&config.base_url);

    if let Some(prompt) = prompt {
        return say(&client, &prompt, &personality).await;
    }

    println!(
        "{} Chatting with {} (empty line or /quit to leave)",
        "🥝".green(),
        Personality::resolve(&personality).id().bold()
    );

    loop {
        let line: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let line = line.trim();
        if line.is_empty() || line == "/quit" {
            break;
        }

        if let Err(e) = say(&client, line, &personality).await {
            eprintln!("{} {:#}", "✗".red(), e);
        }
    }

    Ok(())
}

async fn say(client: &KiwiClient, prompt: &str, personality: &str) -> Result<()> {
    let response = client.run(prompt, personality).await?;
    let emotion = response.emotion.parse::<Emotion>().unwrap_or_default();
    println!("{} {}", paint(emotion), response.result);
    Ok(())
}

async fn cmd_personalities() -> Result<()> {
    let config = Config::load()?;
    let client = KiwiClient::new(&config.base_url);

    for info in client.personalities().await? {
        let marker = if info.is_default { " (default)" } else { "" };
        println!("{}{}", info.id.bold(), marker.dimmed());
        println!("  {}", info.instruction);
    }

    Ok(())
}

fn cmd_compose(prompt: String, personality: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let personality = Personality::resolve(&config.personality(personality));
    println!("{}", compose(personality.instruction(), &prompt));
    Ok(())
}

fn cmd_classify(text: String) -> Result<()> {
    println!("{}", paint(classify(&text)));
    Ok(())
}

async fn cmd_config(base_url: Option<String>, personality: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if base_url.is_some() || personality.is_some() {
        if let Some(url) = base_url {
            config.base_url = url;
        }
        if let Some(id) = personality {
            if id.parse::<Personality>().is_err() {
                println!(
                    "{} Unknown personality {:?}; the server will use {}",
                    "!".yellow(),
                    id,
                    Personality::default()
                );
            }
            config.default_personality = Some(id);
        }
        config.save()?;
        println!("{} Saved to {:?}", "✓".green(), Config::config_path()?);
    }

    let client = KiwiClient::new(&config.base_url);
    let status = match client.health().await {
        Ok(true) => "reachable".green(),
        _ => "unreachable".red(),
    };

    println!("Config file: {:?}", Config::config_path()?);
    println!("Server:      {} ({})", config.base_url, status);
    println!("Personality: {}", config.personality(None));

    Ok(())
}

fn paint(emotion: Emotion) -> ColoredString {
    let label = format!("[{}]", emotion);
    match emotion {
        Emotion::Joy | Emotion::Excited => label.yellow(),
        Emotion::Sadness => label.blue(),
        Emotion::Anger | Emotion::Disgust => label.red(),
        Emotion::Fear | Emotion::Surprise => label.magenta(),
        Emotion::Love | Emotion::Shy => label.bright_magenta(),
        Emotion::Neutral => label.dimmed(),
    }
}
