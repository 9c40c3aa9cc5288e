//! Memmate CLI - a CLI-first personal tracker for memorizing verses
//!
//! This is the command-line interface for Memmate. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        Commands::Init(args) => commands::init::handle_init(&ctx, args),
        Commands::Add(args) => commands::verses::handle_add(&ctx, args),
        Commands::List(args) => commands::verses::handle_list(&ctx, args),
        Commands::Show(args) => commands::verses::handle_show(&ctx, args),
        Commands::Update(args) => commands::verses::handle_update(&ctx, args),
        Commands::Remove(args) => commands::verses::handle_remove(&ctx, args),
        Commands::Archive(args) => commands::verses::handle_archive(&ctx, args),
        Commands::Unarchive(args) => commands::verses::handle_unarchive(&ctx, args),
        Commands::Practice(args) => commands::progress::handle_practice(&ctx, args),
        Commands::Comfort(args) => commands::progress::handle_comfort(&ctx, args),
        Commands::Reset(args) => commands::progress::handle_reset(&ctx, args),
        Commands::Test(args) => commands::results::handle_test(&ctx, args),
        Commands::History(args) => commands::results::handle_history(&ctx, args),
        Commands::Stats(args) => commands::stats::handle_stats(&ctx, args),
        Commands::Completions { shell } => commands::misc::handle_completions(*shell),
    }
}
