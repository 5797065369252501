use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feastly_core::{
    Category, CoreConfig, FilterState, Pagination, Recipe, Story, StoryViewer, classify,
    filter_recipes,
};
use feastly_wire::{Feed, StoryFeed};

#[derive(Parser)]
#[command(name = "feastly")]
#[command(about = "Feastly recipe feed and story carousel tools")]
struct Cli {
    /// Recipe feed file (.json, .yaml or .yml); overrides FEASTLY_FEED_PATH
    #[arg(long, global = true)]
    feed: Option<String>,
    /// Story list file (.json, .yaml or .yml); overrides FEASTLY_STORIES_PATH
    #[arg(long, global = true)]
    stories: Option<String>,
    /// Viewport width in logical pixels; overrides FEASTLY_VIEWPORT_WIDTH
    #[arg(long, global = true)]
    width: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feed filtered by category and search text
    Feed {
        /// One of: beef, seafood, vegetable, spicy, other
        #[arg(long)]
        category: Option<Category>,
        /// Case-insensitive substring to look for
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print every recipe with its derived category
    Classify,
    /// Print one page of the story carousel
    Stories {
        /// Zero-based page; stops at the last page
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Resolve a tapped story to its global index and open it
    OpenStory {
        /// Zero-based carousel page
        page: usize,
        /// Position of the story within the page
        index: usize,
    },
    /// Toggle the like on a post and print the optimistic result
    Like {
        /// Post id
        post_id: String,
    },
}

/// Entry point for the Feastly command line host.
///
/// Configuration is resolved once here and passed down; the core never reads the
/// environment.
///
/// # Environment Variables
/// - `FEASTLY_FEED_PATH`: recipe feed file (default: "data/recipes.json")
/// - `FEASTLY_STORIES_PATH`: story list file (default: "data/stories.json")
/// - `FEASTLY_VIEWPORT_WIDTH`: viewport width used for breakpoints (default: 390)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("feastly=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    tracing::debug!(?cfg, "resolved configuration");

    match cli.command {
        Some(Commands::Feed { category, search }) => {
            let recipes = load_feed(&cfg)?;
            let state = FilterState::new(category, search);
            let shown = filter_recipes(&recipes, &state);
            println!(
                "{} of {} recipes ({} column layout)",
                shown.len(),
                recipes.len(),
                cfg.feed_columns()
            );
            for recipe in shown {
                print_recipe(recipe);
            }
        }
        Some(Commands::Classify) => {
            for recipe in load_feed(&cfg)? {
                println!("{}: {}", recipe.id, classify(&recipe));
            }
        }
        Some(Commands::Stories { page }) => {
            let stories = load_stories(&cfg)?;
            let pagination = go_to_page(&cfg, &stories, page)?;
            if pagination.current_page() != page {
                tracing::info!(
                    requested = page,
                    shown = pagination.current_page(),
                    "requested page is past the end of the carousel"
                );
            }
            println!("{}", page_header(&pagination, stories.len()));
            let first = pagination.current_page() * pagination.chunk_size();
            for (offset, story) in pagination
                .current_chunk(&stories)
                .unwrap_or_default()
                .iter()
                .enumerate()
            {
                println!(
                    "  #{} {} ({} images)",
                    first + offset,
                    story.username,
                    story.image_count()
                );
            }
        }
        Some(Commands::OpenStory { page, index }) => {
            let stories = load_stories(&cfg)?;
            let pagination = go_to_page(&cfg, &stories, page)?;
            if pagination.current_page() != page {
                bail!("page {page} does not exist");
            }
            let (global, story) = pagination.select(&stories, index)?;
            let viewer = StoryViewer::open(&stories, global)?;
            println!(
                "story #{global} by {}: {} [{}]",
                story.username,
                story.dish_title,
                viewer.current_image(&stories)?
            );
        }
        Some(Commands::Like { post_id }) => {
            let recipes = load_feed(&cfg)?;
            let recipe = recipes
                .iter()
                .find(|r| r.id.as_str() == post_id.trim())
                .with_context(|| format!("no recipe with postId {post_id}"))?;
            let toggled = recipe.with_like_toggled();
            println!("{}", Feed::render_json(std::slice::from_ref(&toggled))?);
        }
        None => {
            println!("Use 'feastly --help' for commands");
        }
    }

    Ok(())
}

/// Merge environment values with command line overrides.
///
/// Flag values go through the same parsers as the environment, so `--width 0` is
/// rejected just like `FEASTLY_VIEWPORT_WIDTH=0`.
fn resolve_config(cli: &Cli) -> anyhow::Result<CoreConfig> {
    let pick = |flag: &Option<String>, var: &str| flag.clone().or_else(|| std::env::var(var).ok());

    Ok(CoreConfig::from_values(
        pick(&cli.feed, "FEASTLY_FEED_PATH"),
        pick(&cli.stories, "FEASTLY_STORIES_PATH"),
        pick(&cli.width, "FEASTLY_VIEWPORT_WIDTH"),
    )?)
}

fn load_feed(cfg: &CoreConfig) -> anyhow::Result<Vec<Recipe>> {
    Feed::load(cfg.feed_path())
        .with_context(|| format!("failed to load feed {}", cfg.feed_path().display()))
}

fn load_stories(cfg: &CoreConfig) -> anyhow::Result<Vec<Story>> {
    StoryFeed::load(cfg.stories_path())
        .with_context(|| format!("failed to load stories {}", cfg.stories_path().display()))
}

/// Walk forward from the first page the way the carousel arrows do.
fn go_to_page(cfg: &CoreConfig, stories: &[Story], page: usize) -> anyhow::Result<Pagination> {
    let mut pagination = Pagination::new(cfg.story_chunk_size())?;
    for _ in 0..page {
        let next = pagination.next(stories.len());
        if next == pagination {
            break;
        }
        pagination = next;
    }
    Ok(pagination)
}

fn page_header(pagination: &Pagination, story_count: usize) -> String {
    match pagination.page_count(story_count) {
        0 => "no stories".to_string(),
        pages => format!(
            "page {} of {pages} ({} per page)",
            pagination.current_page() + 1,
            pagination.chunk_size()
        ),
    }
}

fn print_recipe(recipe: &Recipe) {
    let posted = recipe
        .date_posted
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".into());
    let liked = if recipe.is_liked { ", liked" } else { "" };
    println!(
        "{} [{}] {} by {} ({posted}, {} likes{liked})",
        recipe.id,
        classify(recipe),
        recipe.title,
        if recipe.author.is_empty() {
            "unknown"
        } else {
            recipe.author.as_str()
        },
        recipe.likes
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use feastly_core::constants::{DEFAULT_FEED_PATH, DEFAULT_STORIES_PATH};
    use std::path::Path;

    fn bundled_config(width: u32) -> CoreConfig {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        CoreConfig::new(
            root.join(DEFAULT_FEED_PATH),
            root.join(DEFAULT_STORIES_PATH),
            width,
        )
        .expect("config")
    }

    #[test]
    fn bundled_data_loads() {
        let cfg = bundled_config(390);
        let recipes = load_feed(&cfg).expect("feed");
        let stories = load_stories(&cfg).expect("stories");
        assert_eq!(recipes.len(), 6);
        assert_eq!(stories.len(), 9);

        let spicy = filter_recipes(&recipes, &FilterState::new(Some(Category::Spicy), ""));
        assert_eq!(spicy.len(), 1);
        assert_eq!(spicy[0].id.as_str(), "post_127");
    }

    #[test]
    fn flags_override_environment_and_share_its_parsers() {
        let cli = Cli::parse_from([
            "feastly",
            "--feed",
            "fixtures/feed.yaml",
            "--width",
            "800",
            "stories",
        ]);
        let cfg = resolve_config(&cli).expect("config");
        assert_eq!(cfg.feed_path(), Path::new("fixtures/feed.yaml"));
        assert_eq!(cfg.viewport_width(), 800);
        assert_eq!(cfg.story_chunk_size(), 7);

        let cli = Cli::parse_from(["feastly", "--width", "0", "stories"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn empty_story_list_has_no_pages() {
        let cfg = bundled_config(390);
        let pagination = go_to_page(&cfg, &[], 3).expect("page");
        assert_eq!(pagination.current_page(), 0);
        assert_eq!(page_header(&pagination, 0), "no stories");

        let stories = load_stories(&cfg).expect("stories");
        let pagination = go_to_page(&cfg, &stories, 1).expect("page");
        assert_eq!(page_header(&pagination, stories.len()), "page 2 of 2 (5 per page)");
    }

    #[test]
    fn go_to_page_stops_at_last_page() {
        // 9 stories, 4 per page below 375px
        let cfg = bundled_config(320);
        let stories = load_stories(&cfg).expect("stories");
        assert_eq!(go_to_page(&cfg, &stories, 1).expect("page").current_page(), 1);
        assert_eq!(go_to_page(&cfg, &stories, 10).expect("page").current_page(), 2);

        let (global, story) = go_to_page(&cfg, &stories, 2)
            .expect("page")
            .select(&stories, 0)
            .expect("select");
        assert_eq!(global, 8);
        assert_eq!(story.username.as_str(), "Chef Pepin");
    }
}
