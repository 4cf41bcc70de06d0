//! Application configuration.
//!
//! Centralized configuration for the portal frontend. Supabase settings
//! are baked in at build time: set `SUPABASE_URL` and `SUPABASE_ANON_KEY`
//! in the environment of `trunk build` to override the placeholders.

use portal_core::SupabaseConfig;

/// Supabase project URL.
pub const SUPABASE_URL: &str = match option_env!("SUPABASE_URL") {
    Some(url) => url,
    None => "https://your-project.supabase.co",
};

/// Supabase public (anon) key.
///
/// Row-level security on the table only allows inserts with this key.
pub const SUPABASE_ANON_KEY: &str = match option_env!("SUPABASE_ANON_KEY") {
    Some(key) => key,
    None => "public-anon-key",
};

/// Document title.
pub const APP_TITLE: &str = "TCS AI Club x DUK Portal";

/// TCS AI Club site, linked from the club logo.
pub const CLUB_URL: &str = "https://aiclub-425152380784.us-central1.run.app/";

/// Digital University Kerala site, linked from the DUK logo.
pub const DUK_URL: &str = "https://duk.ac.in/";

/// Club logo, served from `public/`.
pub const CLUB_LOGO: &str = "/tcs_ai_club_logo.svg";

/// DUK logo, served from `public/`.
pub const DUK_LOGO: &str = "/duk_logo.svg";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts visible at once.
pub const MAX_TOASTS: usize = 3;

/// Store settings for the submission form.
pub fn supabase_config() -> SupabaseConfig {
    SupabaseConfig::new(SUPABASE_URL, SUPABASE_ANON_KEY)
}
