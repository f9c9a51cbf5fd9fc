use crate::args::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use reelscout_core::{DetailPanelView, PosterView, SuggestionEntryView};

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn poster_text(poster: &PosterView) -> &str {
    match poster {
        PosterView::Url(url) => url.as_str(),
        PosterView::Placeholder => "(no poster)",
    }
}

pub fn render_matches(
    term: &str,
    entries: &[SuggestionEntryView],
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No results for '{}'.", term);
        return Ok(());
    }

    println!("{:<12} {:<6} TITLE", "IMDB_ID", "YEAR");
    println!("{}", "-".repeat(60));
    for entry in entries {
        if use_color() {
            println!(
                "{:<12} {:<6} {}",
                entry.imdb_id.cyan(),
                entry.year,
                entry.title.bold()
            );
        } else {
            println!("{:<12} {:<6} {}", entry.imdb_id, entry.year, entry.title);
        }
    }
    println!();
    println!("View one with: reelscout show <IMDB_ID>");
    Ok(())
}

pub fn render_detail(panel: &DetailPanelView, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(panel)?);
        return Ok(());
    }

    match panel {
        DetailPanelView::Empty => {
            println!("Nothing to show.");
        }
        DetailPanelView::NotFound(reason) => {
            println!("Not found: {}", reason);
        }
        DetailPanelView::Movie(view) => {
            if use_color() {
                println!("{} ({})", view.title.bold(), view.year);
            } else {
                println!("{} ({})", view.title, view.year);
            }
            println!();
            println!("{:<10} {}", "Rated:", view.rated);
            println!("{:<10} {}", "Released:", view.released);
            println!("{:<10} {}", "Genre:", view.genre);
            println!("{:<10} {}", "Writer:", view.writer);
            println!("{:<10} {}", "Actors:", view.actors);
            println!("{:<10} {}", "Language:", view.language);
            println!("{:<10} {}", "Awards:", view.awards);
            println!("{:<10} {}", "Poster:", poster_text(&view.poster));
            println!();
            println!("{}", view.plot);
            println!();
            println!("[{}]", view.favorite.as_str());
        }
    }
    Ok(())
}

pub fn render_favorites(favorites: &[String], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(favorites)?);
        return Ok(());
    }

    if favorites.is_empty() {
        println!("No favorites yet.");
        println!("Add one from the widget, or: reelscout show <IMDB_ID>");
        return Ok(());
    }

    for id in favorites {
        println!("{}", id);
    }
    Ok(())
}
