//! Look up a user, a group and a game against the live Roblox API.
//!
//! Run with `RUST_LOG=roblox_core=debug` to see each request.

use roblox_core::{ApiError, RobloxClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rbx = RobloxClient::shared();

    let user = rbx.users.get(748671568)?;
    println!("User: {user:#?}");

    let group = rbx.groups.get(13666720)?;
    println!("Group: {group:#?}");

    let universe_id = rbx.games.get_universe_id(17872901145)?;
    println!("Universe ID: {universe_id}");

    let game = rbx.games.get(universe_id)?;
    println!("Game: {game:#?}");

    for rec in rbx.games.get_recommended(universe_id, 3)? {
        println!("Recommended: {} ({} playing)", rec.name, rec.player_count);
    }

    Ok(())
}
