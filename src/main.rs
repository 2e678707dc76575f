// src/main.rs
// eleme-fun - food fun widgets backed by a chat-completion provider

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use eleme_fun::api::create_router;
use eleme_fun::comments::relative_time;
use eleme_fun::config::{FunConfig, CONFIG};
use eleme_fun::menu::Reaction;
use eleme_fun::state::create_app_state;
use eleme_fun::wheel::SpinOutcome;

#[derive(Parser)]
#[command(name = "eleme-fun")]
#[command(about = "Jokes, food facts, a food wheel and a comment board")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API for the page
    Serve {
        /// Port to listen on (overrides ELEME_FUN_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    #[command(flatten)]
    Widget(WidgetCommand),
}

#[derive(Subcommand)]
enum WidgetCommand {
    /// Generate a food joke
    Joke,

    /// Generate a food fact
    Fact,

    /// Recommend a random dish
    Food,

    /// Generate a fictional menu
    Menu,

    /// Press the easter egg button
    Egg,

    /// Spin the food wheel
    Spin {
        /// Number of consecutive spins
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// Skip the animation delay
        #[arg(long)]
        fast: bool,
    },

    /// Manage the comment board
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// React to a menu item by name
    React {
        name: String,
        /// like or dislike
        reaction: Reaction,
    },
}

#[derive(Subcommand)]
enum CommentAction {
    /// Add a comment (max 100 characters)
    Add { text: String },
    /// List comments, newest first
    List,
    /// Toggle like on a comment
    Like { id: String },
    /// Delete a comment
    Delete { id: String },
}

fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        plain(value);
    }
    Ok(())
}

fn print_notice(notice: &Option<String>) {
    if let Some(notice) = notice {
        eprintln!("⚠ {}", notice);
    }
}

async fn run_server(config: &FunConfig, port: Option<u16>) -> Result<()> {
    let state = create_app_state(config).await?;
    let app = create_router(state, &config.cors_origin);

    let addr = match port {
        Some(port) => format!("{}:{}", config.host, port),
        None => config.bind_address(),
    };
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Model: {}", config.model);
    info!("eleme-fun API listening on http://{}/api", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_command(config: &FunConfig, json: bool, command: WidgetCommand) -> Result<()> {
    let state = match &command {
        WidgetCommand::Spin { fast: true, .. } => {
            let mut fast = config.clone();
            fast.spin_duration_ms = 0;
            create_app_state(&fast).await?
        }
        _ => create_app_state(config).await?,
    };

    match command {
        WidgetCommand::Joke => {
            let reveal = state.jokes.next().await?;
            emit(json, &reveal, |r| {
                print_notice(&r.generation.notice);
                println!("{}", r.generation.text);
            })?;
        }
        WidgetCommand::Fact => {
            let reveal = state.facts.next().await?;
            emit(json, &reveal, |r| {
                print_notice(&r.generation.notice);
                println!("{}", r.generation.text);
            })?;
        }
        WidgetCommand::Food => {
            let generation = state.food.recommend().await?;
            emit(json, &generation, |g| {
                print_notice(&g.notice);
                println!("{}", g.text);
            })?;
        }
        WidgetCommand::Menu => {
            let board = state.menu.generate().await?;
            emit(json, &board, |b| {
                print_notice(&b.notice);
                for item in &b.items {
                    let mark = match item.reaction {
                        Some(Reaction::Like) => " 👍",
                        Some(Reaction::Dislike) => " 👎",
                        None => "",
                    };
                    println!("{} {}{}\n  {}", item.name, item.price, mark, item.description);
                }
            })?;
        }
        WidgetCommand::Egg => {
            let reveal = state.easter_egg.press().await?;
            emit(json, &reveal, |r| {
                print_notice(&r.generation.notice);
                println!("{}", r.generation.text);
            })?;
        }
        WidgetCommand::Spin { times, .. } => {
            for _ in 0..times {
                match state.wheel.spin().await {
                    SpinOutcome::Completed(report) => emit(json, &report, |r| {
                        println!(
                            "#{} {} {} ({:.1}°)",
                            r.plan.spin_number, r.category.emoji, r.category.name, r.plan.target_rotation
                        );
                        println!("  {}", r.elaboration.text);
                        for label in &r.achievements {
                            println!("  🏆 解锁成就: {}!", label);
                        }
                        if r.celebrate {
                            println!("  🎉");
                        }
                    })?,
                    SpinOutcome::Ignored => warn!("Wheel is already spinning"),
                }
            }
        }
        WidgetCommand::Comment { action } => match action {
            CommentAction::Add { text } => {
                let comment = state.comments.add(&text).await?;
                emit(json, &comment, |c| println!("{} {}", c.id, c.text))?;
            }
            CommentAction::List => {
                let comments = state.comments.list().await;
                let now = chrono::Utc::now();
                emit(json, &comments, |list| {
                    println!("{} 条感悟", list.len());
                    for c in list {
                        let heart = if c.liked_by_viewer { "♥" } else { "♡" };
                        println!(
                            "{}  {} {}{}  [{}]\n  {}",
                            c.id,
                            relative_time(c.created_at, now),
                            heart,
                            c.like_count,
                            c.text.chars().count(),
                            c.text
                        );
                    }
                })?;
            }
            CommentAction::Like { id } => {
                let comment = state.comments.toggle_like(&id).await?;
                emit(json, &comment, |c| println!("{} likes: {}", c.id, c.like_count))?;
            }
            CommentAction::Delete { id } => {
                state.comments.delete(&id).await?;
                if !json {
                    println!("deleted {}", id);
                }
            }
        },
        WidgetCommand::React { name, reaction } => {
            let update = state.menu.react(&name, reaction).await?;
            emit(json, &update, |u| match u.reaction {
                Some(r) => println!("{}: {}", u.name, r),
                None => println!("{}: cleared", u.name),
            })?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config: &FunConfig = &CONFIG;

    // Set up logging based on command
    let log_level = match &cli.command {
        Commands::Serve { .. } => config.tracing_level(),
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve { port } => run_server(config, port).await,
        Commands::Widget(command) => run_command(config, cli.json, command).await,
    }
}
