//! Admin API over a small in-memory user snapshot
//!
//! ```text
//! cargo run --example admin_api -- config.yaml
//! curl 'http://127.0.0.1:3000/users?listener_only=true'
//! curl -X POST -H 'content-type: application/json' \
//!      -d '{"rating": 6}' http://127.0.0.1:3000/validate/rating
//! ```

use anyhow::Context;
use callto::prelude::*;

fn sample_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("u-001", AccountType::User)
            .with_display_name("Asha Rao")
            .with_email("asha@example.com")
            .with_location("Pune", "India"),
        UserRecord::new("u-002", AccountType::Listener)
            .with_display_name("Ben Okafor")
            .with_email("ben@example.com")
            .with_location("Lagos", "Nigeria"),
        UserRecord::new("u-003", AccountType::Listener).with_display_name("Chloé Martin"),
        UserRecord::new("u-004", AccountType::Admin).with_email("ops@callto.app"),
        UserRecord::new("u-005", AccountType::User)
            .with_display_name("Dev Patel")
            .inactive(),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => CoreConfig::default(),
    };

    serve(config, sample_users()).await
}
