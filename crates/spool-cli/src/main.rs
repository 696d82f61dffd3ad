use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spool_cli::{
    config::Config,
    error::GeneratorError,
    generator::{Depth, ThreadGenerator},
};
use spool_llm::{GeminiClient, GenerateClient, GenerationConfig, ResearchClient, ThreadComposer};
use spool_persist::ThreadStore;
use spool_platform::{PlatformClient, ThreadPublisher, XApiClient};
use spool_types::{Thread, ThreadConfig};

#[derive(Parser)]
#[command(name = "spool")]
#[command(about = "Research a topic and publish it as a social-media thread", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a topic and generate a draft thread
    Generate {
        /// Topic to research
        topic: String,

        /// Research depth (defaults to the configured depth)
        #[arg(long, value_enum)]
        depth: Option<Depth>,

        /// Skip saving the draft to history
        #[arg(long)]
        no_save: bool,
    },
    /// List saved threads
    List,
    /// Print one saved thread's posts
    Show {
        /// 1-based thread number from `spool list`
        index: usize,
    },
    /// Publish a saved thread as a reply chain
    Post {
        /// 1-based thread number from `spool list`
        index: usize,

        /// Media files to attach, one per post in order
        #[arg(long)]
        media: Vec<PathBuf>,

        /// Post even if the thread was already published
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    let cli = Cli::parse();
    let generator = build_generator(&config)?;

    match cli.command {
        Commands::Generate {
            topic,
            depth,
            no_save,
        } => {
            anyhow::ensure!(
                !config.gemini_api_key.is_empty(),
                "GEMINI_API_KEY is not set"
            );

            let depth = match depth {
                Some(depth) => depth,
                None => config
                    .thread
                    .default_depth
                    .parse()
                    .map_err(anyhow::Error::msg)?,
            };

            let thread = generator.research_and_generate(&topic, depth).await?;
            print_thread(&thread);

            if !no_save {
                generator.save_thread(&thread)?;
                println!("\nSaved to {}", config.storage.history_path);
            }
        }

        Commands::List => {
            let threads = generator.load_threads()?;
            if threads.is_empty() {
                println!("No saved threads.");
                return Ok(());
            }

            for (i, thread) in threads.iter().enumerate() {
                println!(
                    "{:>3}. [{}] {}  ({})",
                    i + 1,
                    thread.status(),
                    thread.topic,
                    thread.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }

        Commands::Show { index } => {
            let threads = generator.load_threads()?;
            let thread = nth_thread(&threads, index)?;
            print_thread(thread);
        }

        Commands::Post {
            index,
            media,
            force,
        } => {
            anyhow::ensure!(!config.x_bearer_token.is_empty(), "X_BEARER_TOKEN is not set");

            let threads = generator.load_threads()?;
            let thread = nth_thread(&threads, index)?.clone();

            if thread.is_posted() && !force {
                anyhow::bail!("thread was already posted; pass --force to post it again");
            }

            let media = (!media.is_empty()).then_some(media);
            match generator.post_thread(thread, media).await {
                Ok(posted) => {
                    println!("Thread published:");
                    for (i, id) in posted.tweet_ids.as_deref().unwrap_or_default().iter().enumerate() {
                        println!("  Post {}: https://x.com/i/status/{}", i + 1, id);
                    }
                }
                Err(GeneratorError::Publish(partial)) => {
                    // Surface what did go out before failing.
                    for (i, id) in partial.completed_ids.iter().enumerate() {
                        eprintln!("already published post {}: https://x.com/i/status/{}", i + 1, id);
                    }
                    return Err(partial.into());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn build_generator(config: &Config) -> anyhow::Result<ThreadGenerator> {
    let llm: Arc<dyn GenerateClient> = Arc::new(GeminiClient::with_model(
        config.gemini_api_key.clone(),
        config.llm.model.clone(),
    )?);
    let platform: Arc<dyn PlatformClient> =
        Arc::new(XApiClient::new(config.x_bearer_token.clone())?);
    let generation = GenerationConfig::from(config.llm.clone());

    Ok(ThreadGenerator::new(
        ResearchClient::new(llm.clone()).with_config(generation.clone()),
        ThreadComposer::new(llm).with_config(generation),
        ThreadPublisher::new(platform),
        ThreadStore::new(&config.storage.history_path),
        ThreadConfig::from(config.thread.clone()),
    ))
}

fn nth_thread(threads: &[Thread], index: usize) -> anyhow::Result<&Thread> {
    index
        .checked_sub(1)
        .and_then(|i| threads.get(i))
        .with_context(|| format!("no thread number {} (run `spool list`)", index))
}

fn print_thread(thread: &Thread) {
    println!("Topic: {}", thread.topic);
    for (i, post) in thread.tweets.iter().enumerate() {
        println!("\nPost {} ({} chars):\n{}", i + 1, post.chars().count(), post);
    }
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
