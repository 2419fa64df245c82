//! One-shot import of a legacy NDJSON export into the data directory.
//! Run with: cargo run --bin migrate -- <legacy_friends.json> <legacy_game_records.json>
//! Target directory comes from DATA_DIR (default `data`). Existing entries with
//! the same id are replaced; everything else is kept.

use mahjong_score_web::logic::migrate::{
    merge_by_id, parse_legacy_friends, parse_legacy_records, sort_newest_first,
};
use mahjong_score_web::{AppState, ServerConfig, StoreError};
use std::process::ExitCode;

async fn run(friends_path: &str, records_path: &str) -> Result<(usize, usize), StoreError> {
    let (friends_text, records_text) = tokio::try_join!(
        tokio::fs::read_to_string(friends_path),
        tokio::fs::read_to_string(records_path),
    )?;
    let migrated_friends = parse_legacy_friends(&friends_text);
    let migrated_records = parse_legacy_records(&records_text);
    log::info!(
        "Read {} legacy friends and {} legacy records",
        migrated_friends.len(),
        migrated_records.len()
    );

    let config = ServerConfig::from_env();
    let state = AppState::open(&config.data_dir).await?;

    let friends = state
        .friends
        .collection()
        .modify(|existing| {
            let merged = merge_by_id(std::mem::take(existing), migrated_friends, |f| f.id.as_str());
            *existing = merged;
            Ok(existing.len())
        })
        .await?;

    let records = state
        .records
        .collection()
        .modify(|existing| {
            let mut merged =
                merge_by_id(std::mem::take(existing), migrated_records, |r| r.id.as_str());
            sort_newest_first(&mut merged);
            *existing = merged;
            Ok(existing.len())
        })
        .await?;

    Ok((friends, records))
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (friends_path, records_path) = match args.as_slice() {
        [f, r] => (f.as_str(), r.as_str()),
        _ => {
            eprintln!("usage: migrate <legacy_friends.json> <legacy_game_records.json>");
            return ExitCode::from(2);
        }
    };

    match run(friends_path, records_path).await {
        Ok((friends, records)) => {
            log::info!("Migration done: friends={}, records={}", friends, records);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Migration failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
