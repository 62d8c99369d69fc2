mod loader;
mod repo_url;
mod schema;

pub use loader::SubscriptionLoader;
pub use repo_url::{format_url, FormattedUrl, GitUrlResolver, HostResolver};
pub use schema::{PullOption, PullType, Subscription, SubscriptionType};
