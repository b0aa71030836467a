use leptos::*;

use crate::config::APP_NAME;
use crate::services::ApiClient;

/// Backend reachability, as shown in the header badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BackendStatus {
    Checking,
    Online,
    Offline,
}

#[component]
pub fn Header(api: ApiClient) -> impl IntoView {
    let (status, set_status) = create_signal(BackendStatus::Checking);

    // Health check au démarrage
    spawn_local(async move {
        match api.check_health().await {
            Ok(true) => {
                log::info!("✅ Backend reachable at {}", api.config().base_url());
                set_status.set(BackendStatus::Online);
            }
            Ok(false) => {
                log::warn!("⚠️ Backend at {} answered but is not healthy", api.config().base_url());
                set_status.set(BackendStatus::Offline);
            }
            Err(e) => {
                log::warn!("⚠️ Backend unreachable: {}", e);
                set_status.set(BackendStatus::Offline);
            }
        }
    });

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge">"PDF chart analysis"</span>
            </div>
            <div class="header-right">
                <div
                    class="backend-status"
                    class:connected=move || status.get() == BackendStatus::Online
                >
                    <span class="status-dot" class:connected=move || status.get() == BackendStatus::Online></span>
                    <span>
                        {move || match status.get() {
                            BackendStatus::Checking => "Checking API...",
                            BackendStatus::Online => "API online",
                            BackendStatus::Offline => "API offline",
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
