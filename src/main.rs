use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use songdex::{
    build_index, FileStore, KeyValueStore, MemoryStore, SearchConfig, SearchHistory, SearchHit,
    SongSearch, Suggestion, SuggestionSet,
};

mod cli;
use cli::display::{
    highlight, key_label, pad_right, paint, row, score_value, section_bot, section_mid, section_top,
    suggestion_badge, truncate, Role, BOLD, BOX_WIDTH,
};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    let store = open_store(cli.history_file.as_deref());

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            json,
        } => {
            let mut engine = open_engine(&catalog, config, store)?;
            let mut hits = engine.search(&query);
            hits.truncate(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print_hits(&engine, &query, &hits);
            }
        }
        Commands::Suggest {
            catalog,
            prefix,
            limit,
            json,
        } => {
            let engine = open_engine(&catalog, config, store)?;
            let set = engine.suggest(&prefix, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&set)?);
            } else {
                print_suggestions(&set);
            }
        }
        Commands::History { clear, json } => {
            let mut history = SearchHistory::load(store, config.history_key, config.history_limit);
            if clear {
                history.clear();
            }
            if json {
                println!("{}", serde_json::to_string_pretty(history.entries())?);
            } else {
                print_history(history.entries(), cli.history_file.is_some());
            }
        }
        Commands::Inspect {
            catalog,
            song,
            json,
        } => {
            let raw = read_catalog(&catalog)?;
            let parsed = songdex::parse_catalog_lenient(&raw);
            let index = build_index(Some(&parsed));
            let songs: Vec<_> = index
                .songs
                .iter()
                .filter(|s| song.as_deref().map_or(true, |id| s.id() == id))
                .collect();
            if let Some(id) = song.as_deref() {
                if songs.is_empty() {
                    bail!("no song with id `{id}` in {}", catalog.display());
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&songs)?);
            } else {
                print_index(&songs);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SearchConfig::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn open_store(path: Option<&Path>) -> Box<dyn KeyValueStore> {
    match path {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    }
}

fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read catalog {}", path.display()))
}

fn open_engine(
    catalog: &Path,
    config: SearchConfig,
    store: Box<dyn KeyValueStore>,
) -> Result<SongSearch> {
    let raw = read_catalog(catalog)?;
    Ok(SongSearch::from_json(&raw, config, store)?)
}

fn print_hits(engine: &SongSearch, query: &str, hits: &[SearchHit]) {
    section_top("SEARCH");
    row(&format!(" query  {}", paint(Role::Accent, &[BOLD], query.trim())));
    row(&format!(" hits   {}", hits.len()));

    for (rank, hit) in hits.iter().enumerate() {
        let title = engine
            .song(&hit.song_id)
            .map_or(hit.song_id.as_str(), |s| s.primary_title());
        section_mid(&format!("#{}", rank + 1));
        row(&format!(
            " {}  {}  {}",
            score_value(hit.score),
            paint(Role::Title, &[BOLD], &truncate(title, 40)),
            paint(Role::Muted, &[], &hit.song_id)
        ));
        for m in hit.matches.iter().take(4) {
            let value = truncate(&m.value, BOX_WIDTH.saturating_sub(36));
            let spans: Vec<_> = m
                .spans
                .iter()
                .filter(|s| s.end <= value.chars().count())
                .cloned()
                .collect();
            row(&format!(
                "   {} {}",
                pad_right(&key_label(m.key), 30),
                highlight(&value, &spans)
            ));
        }
        if hit.matches.len() > 4 {
            row(&paint(
                Role::Muted,
                &[],
                &format!("   … {} more matched values", hit.matches.len() - 4),
            ));
        }
    }
    section_bot();
}

fn print_suggestions(set: &SuggestionSet) {
    section_top("SUGGEST");
    row(&format!(" prefix {}", paint(Role::Accent, &[BOLD], &set.query)));

    for (label, items) in [
        ("TITLES", &set.titles),
        ("CREATORS", &set.creators),
        ("HISTORY", &set.history),
    ] {
        section_mid(label);
        if items.is_empty() {
            row(&paint(Role::Muted, &[], " (none)"));
        }
        for s in items {
            let context = match s {
                Suggestion::CreatorAlias {
                    creator_name,
                    song_title,
                    ..
                } => format!("  {} · {}", creator_name, song_title),
                _ => String::new(),
            };
            row(&format!(
                " {} {}{}",
                suggestion_badge(s),
                s.text(),
                paint(Role::Muted, &[], &context)
            ));
        }
    }
    section_bot();
}

fn print_history(entries: &[String], persisted: bool) {
    section_top("HISTORY");
    if !persisted {
        row(&paint(
            Role::Muted,
            &[],
            " not persisted; pass --history-file to keep queries between runs",
        ));
    }
    if entries.is_empty() {
        row(&paint(Role::Muted, &[], " (empty)"));
    }
    for (i, entry) in entries.iter().enumerate() {
        row(&format!(" {:>2}. {}", i + 1, entry));
    }
    section_bot();
}

fn print_index(songs: &[&songdex::IndexedSong]) {
    section_top("INDEX");
    row(&format!(" songs  {}", songs.len()));

    for song in songs {
        section_mid(song.id());
        for (raw, variants) in song.song.titles.iter().zip(&song.titles) {
            let initials = variants.initials.as_deref().unwrap_or("-");
            row(&format!(
                " {} {}  {}  {}",
                paint(Role::Muted, &[], "title  "),
                paint(Role::Title, &[BOLD], &truncate(raw, 30)),
                truncate(&variants.romanized, 20),
                paint(Role::Muted, &[], initials)
            ));
        }
        for (raw, derived) in song.song.creators.iter().zip(&song.creators) {
            row(&format!(
                " {} {}  {}  {}",
                paint(Role::Muted, &[], "creator"),
                paint(Role::Creator, &[], &truncate(&raw.name, 30)),
                truncate(&derived.name.romanized, 20),
                paint(Role::Muted, &[], &raw.aliases.join(", "))
            ));
        }
        row(&format!(
            " {} {} tokens",
            paint(Role::Muted, &[], "words  "),
            song.words.len()
        ));
        row(&format!(
            "         {}",
            truncate(&song.words_index, BOX_WIDTH.saturating_sub(10))
        ));
    }
    section_bot();
}
