//! Hearthwood Storefront - headless session runner.
//!
//! Boots the storefront state from the environment, restores the persisted
//! session, loads the catalog and logs a summary of what a client would
//! render on the home and cart screens.

#![cfg_attr(not(test), forbid(unsafe_code))]

use hearthwood_storefront::catalog::{CatalogQuery, SortOrder};
use hearthwood_storefront::config::StorefrontConfig;
use hearthwood_storefront::models::Product;
use hearthwood_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Comma-separated product names for a log line.
fn names(products: &[&Product]) -> String {
    products
        .iter()
        .map(|product| product.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hearthwood_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let state = AppState::from_config(config).expect("Failed to initialize application state");
    tracing::info!(
        data_dir = %state.config().data_dir.display(),
        locale = %state.language().locale(),
        "Storefront state restored"
    );

    if let Err(e) = state.refresh_catalog().await {
        let notice = e.notice(state.language());
        tracing::warn!(message = %notice.message, "Catalog unavailable");
    }

    let products = state.products().state();
    tracing::info!(
        products = products.products.len(),
        promotions = products.promotions.len(),
        "Catalog loaded"
    );

    state.with_home_sections(|home| {
        tracing::info!(popular = %names(&home.popular), "Popular items");
        tracing::info!(top_rated = %names(&home.top_rated), "Top rated");
    });

    for sort in SortOrder::ALL {
        let query = CatalogQuery {
            sort,
            ..state.catalog_query()
        };
        let listing = query.apply(&products.products);
        tracing::info!(
            sort = state.language().t(sort.label_key()),
            first = listing.first().map_or("-", |product| product.name.as_str()),
            "Sorted listing"
        );
    }

    match state.auth().current_user() {
        Some(user) => {
            let history = state.checkout().orders_for(&user.id);
            tracing::info!(
                user_id = %user.id,
                name = %user.name,
                orders = history.len(),
                "Signed in"
            );
        }
        None => tracing::info!("Browsing anonymously"),
    }

    tracing::info!(
        items = state.cart().item_count(),
        total = %state.cart().cart_total().display(),
        "Cart"
    );
}
