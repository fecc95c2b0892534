//! SSR server binary: renders the app shell and serves the hydrate bundle.
//!
//! All REST endpoints live in the separate backend; this process only does
//! server-side rendering and static assets, so the client keeps working
//! without JavaScript until hydration takes over.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), String> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};

    use keystone_crm::app::{App, shell};

    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;
    leptos::logging::log!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| format!("serve: {e}"))
}

// The WASM build mounts through `keystone_crm::hydrate`; this binary only
// exists for the ssr feature.
#[cfg(not(feature = "ssr"))]
fn main() {}
