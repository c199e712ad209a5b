//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the node source.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_completion, format_listing_json, format_listing_text, format_node_json,
    format_node_text, format_subtree_text,
};
pub use route::RunContext;
