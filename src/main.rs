//! Portfolio: a single-page personal portfolio.
//!
//! Entry point: opens the site in a native WebView window.
//! When built without the `gui` feature, runs a console walkthrough instead.

#[cfg(feature = "gui")]
fn main() {
    if let Err(err) = portfolio::ui::webview_app::run() {
        eprintln!("portfolio: {}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
#[tokio::main]
async fn main() {
    use portfolio::config::SiteConfig;

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("portfolio: {}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = portfolio::telemetry::init(&config.log_level) {
        eprintln!("portfolio: {}", err);
    }

    println!();
    println!("Portfolio v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = portfolio::app::App::new(config);
    demo_routes(&mut app);
    demo_theme(&mut app);
    demo_projects(&mut app).await;

    println!();
    println!("  ✅ Walkthrough finished.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_routes(app: &mut portfolio::app::App) {
    use portfolio::types::route::Route;
    section("Routes");

    for route in Route::ALL {
        if route == Route::Projects {
            continue;
        }
        app.navigate(route.path());
        println!("  {:<16} {:>6} bytes", route.path(), app.render_view().len());
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_theme(app: &mut portfolio::app::App) {
    section("Theme");

    println!("  Current theme: {:?}", app.theme());
    println!("  Toggled to:    {:?}", app.toggle_theme());
    println!("  Toggled to:    {:?}", app.toggle_theme());
    println!();
}

#[cfg(not(feature = "gui"))]
async fn demo_projects(app: &mut portfolio::app::App) {
    use portfolio::services::github_projects::{GitHubProjects, RepositorySource};
    use portfolio::types::repository::RepositoryListState;
    section("Projects");

    let client = match GitHubProjects::new(&app.config().github) {
        Ok(client) => client,
        Err(err) => {
            println!("  {}", err);
            return;
        }
    };

    let nav = app.navigate("/projects");
    println!("  Fetching {}", client.repos_url());
    let result = client.list_repositories().await;
    if let Some(ticket) = nav.fetch {
        app.complete_projects_fetch(ticket, result);
    }

    match app.projects() {
        RepositoryListState::Loaded(repos) => {
            println!("  {} repositories shown:", repos.len());
            for repo in repos {
                println!("    {} ({} ⭐)", repo.name, repo.stars);
            }
        }
        RepositoryListState::Error(message) => println!("  {}", message),
        other => println!("  Unexpected state: {:?}", other),
    }
}
