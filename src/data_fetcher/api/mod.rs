pub mod averages_api;
pub mod fetch_utils;
pub mod http_client;
pub mod scoreboard_api;

pub use averages_api::fetch_team_averages;
pub use http_client::create_http_client_with_timeout;
pub use scoreboard_api::fetch_scoreboard;
