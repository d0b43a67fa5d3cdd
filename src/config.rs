#[cfg(debug_assertions)]
pub fn get_webhook_base_url() -> &'static str {
    "http://localhost:8787"  // Local webhook relay when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_base_url() -> &'static str {
    "https://hooks.trilhadev.com.br"
}

#[cfg(debug_assertions)]
pub fn gtm_container_id() -> &'static str {
    "GTM-DEV0000"
}

#[cfg(not(debug_assertions))]
pub fn gtm_container_id() -> &'static str {
    "GTM-5TRLHDV"
}

/// Whether events should reach the dataLayer at all. Decided once per build;
/// debug builds stay silent so local clicks don't pollute the production
/// container.
pub fn tracking_enabled() -> bool {
    !cfg!(debug_assertions)
}
