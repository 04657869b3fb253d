#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use resume_web::config::{SectionsConfig, init_sections};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let sections = SectionsConfig::from_env().context("Failed to load resume sections")?;
    tracing::info!(count = sections.sections().len(), "loaded resume sections");
    init_sections(sections)?;

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(resume_web::app::App);

    let site_root = leptos_options.site_root.clone();
    let shell_options = leptos_options.clone();
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            move || {
                use resume_web::app::App;
                view! {
                    <!DOCTYPE html>
                    <html lang="en">
                        <head>
                            <meta charset="utf-8" />
                            <meta name="viewport" content="width=device-width, initial-scale=1" />
                            <meta name="description" content="Choose which sections go into your resume." />
                            <title>"Resume Sections"</title>
                            <link rel="stylesheet" href="/pkg/resume-web.css" />
                            <HydrationScripts options=shell_options.clone() />
                        </head>
                        <body>
                            <App />
                        </body>
                    </html>
                }
            }
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side code runs through `hydrate()` in lib.rs
}
