//! Renders one page of the public blog listing from a JSON data file.

use std::env;

use config::Config;
use dotenvy::dotenv;

use pushkind_blog::context::AppContext;
use pushkind_blog::listing::{BlogListController, ListingSettings};
use pushkind_blog::models::config::AppConfig;
use pushkind_blog::repository::InMemoryRepository;
use pushkind_blog::services::listing::fetch_blogs;
use pushkind_blog::ui::console::{LogNavigator, LogNotifier, StdoutRenderer};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let repo = match InMemoryRepository::from_path(&app_config.data_file) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to load data file {}: {err}", app_config.data_file);
            std::process::exit(1);
        }
    };

    let ctx = AppContext::new();
    if let Err(err) = fetch_blogs(&ctx, &repo, &LogNotifier) {
        log::error!("Failed to fetch blogs: {err}");
        std::process::exit(1);
    }
    if let Some(search) = app_config.search {
        ctx.set_input(search);
    }

    let listing_settings = ListingSettings {
        per_page: app_config.blogs_per_page,
        header_offset: app_config.header_offset,
    };
    let navigator = LogNavigator;
    let renderer = StdoutRenderer;
    let mut controller = BlogListController::new(ctx, listing_settings, &navigator, &renderer);
    if let Some(category) = app_config.category {
        controller = controller.with_category(category);
    }

    match app_config.page {
        Some(page) if page != controller.current_page() => {
            if !controller.go_to_page(page) {
                log::warn!(
                    "Page {page} is out of range, showing page {}",
                    controller.current_page()
                );
                controller.refresh();
            }
        }
        _ => controller.refresh(),
    }
}
