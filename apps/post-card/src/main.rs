//! # Post Card
//!
//! Mounts the latest-post card against a running API server and prints it.
//!
//! ```text
//! post-card                 # show the latest post
//! post-card create <name>   # show, create, show again
//! post-card rename <name>   # show, rename, show again
//! post-card delete          # show, delete, show again
//! ```

use anyhow::bail;
use posts_client::{CardState, HttpPostsApi, LatestPostCard};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api/trpc/posts";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Show,
    Create(String),
    Rename(String),
    Delete,
}

fn parse_action(args: &[String]) -> anyhow::Result<Action> {
    match args {
        [] => Ok(Action::Show),
        [cmd] if cmd == "delete" => Ok(Action::Delete),
        [cmd, name @ ..] if cmd == "create" && !name.is_empty() => {
            Ok(Action::Create(name.join(" ")))
        }
        [cmd, name @ ..] if cmd == "rename" && !name.is_empty() => {
            Ok(Action::Rename(name.join(" ")))
        }
        _ => bail!("usage: post-card [create <name> | rename <name> | delete]"),
    }
}

fn print_card<A: posts_client::PostsApi>(card: &LatestPostCard<A>) {
    for line in card.render() {
        println!("{line}");
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let action = parse_action(&args)?;

    let url = std::env::var("POSTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    tracing::debug!(%url, ?action, "Mounting card");

    let mut card = LatestPostCard::new(HttpPostsApi::new(url));
    card.mount().await;
    print_card(&card);

    match action {
        Action::Show => {}
        Action::Create(name) => {
            card.create(&name).await;
            print_card(&card);
        }
        Action::Rename(name) => {
            card.set_edit_name(name);
            card.update().await;
            print_card(&card);
        }
        Action::Delete => {
            card.delete().await;
            print_card(&card);
        }
    }

    if let CardState::Failed(message) = card.state() {
        bail!("{message}");
    }

    Ok(())
}
