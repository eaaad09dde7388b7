use std::io::{Read, Write};
use std::path::Path;

use snipvault_core::models::conflict::DuplicateConflicts;
use snipvault_core::models::payload::SavePayload;
use snipvault_core::models::snippet::{Snippet, SnippetId};
use snipvault_library::library::Library;
use snipvault_library::outcome::SaveOutcome;
use snipvault_library::session::Session;
use snipvault_storage::kv::KeyValueStore;

use crate::cli::{AddArgs, CodeArgs, Command, ConfigArgs, EditArgs, ListArgs, RmArgs, SearchArgs, ShowArgs};
use crate::config::{self, SnipvaultConfig};

/// Execute a snippet command against an open library, writing to `out`.
///
/// `config` is handled by [`config_command`] since it needs no library.
pub fn run<S: KeyValueStore>(
    library: &mut Library<S>,
    command: Command,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    match command {
        Command::List(args) => list(library, args, out),
        Command::Search(args) => search(library, args, out),
        Command::Show(args) => show(library, args, out),
        Command::Add(args) => add(library, args, out),
        Command::Edit(args) => edit(library, args, out),
        Command::Rm(args) => rm(library, args, out),
        Command::Languages => {
            for language in library.all_languages() {
                writeln!(out, "{language}")?;
            }
            Ok(())
        }
        Command::Stats => {
            for stat in library.language_stats() {
                writeln!(out, "{:>4}  {}", stat.count, stat.language)?;
            }
            Ok(())
        }
        Command::Config(_) => Err(eyre::eyre!("config does not operate on a library")),
    }
}

pub fn config_command(
    path: &Path,
    config: &SnipvaultConfig,
    args: ConfigArgs,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    if args.write {
        config::save_config(path, config)?;
    }
    writeln!(out, "config: {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}

fn list<S: KeyValueStore>(library: &Library<S>, args: ListArgs, out: &mut dyn Write) -> eyre::Result<()> {
    let found = library.search("", args.language.as_deref());
    print_snippets(&found, args.json, out)
}

fn search<S: KeyValueStore>(library: &Library<S>, args: SearchArgs, out: &mut dyn Write) -> eyre::Result<()> {
    let found = library.search(&args.term, args.language.as_deref());
    print_snippets(&found, args.json, out)
}

fn show<S: KeyValueStore>(library: &Library<S>, args: ShowArgs, out: &mut dyn Write) -> eyre::Result<()> {
    let id = SnippetId::from(args.id);
    let snippet = library
        .get(&id)
        .ok_or_else(|| eyre::eyre!("snippet not found: {id}"))?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(snippet)?)?;
        return Ok(());
    }

    writeln!(out, "{}", summary_line(snippet))?;
    if let Some(description) = snippet.description() {
        writeln!(out, "{description}")?;
    }
    writeln!(out, "hash {}  created {}  updated {}", snippet.normalized_hash(), snippet.created_at(), snippet.updated_at())?;
    writeln!(out)?;
    writeln!(out, "{}", snippet.code())?;
    Ok(())
}

fn add<S: KeyValueStore>(library: &mut Library<S>, args: AddArgs, out: &mut dyn Write) -> eyre::Result<()> {
    let code = match read_code(&args.code)? {
        Some(code) => code,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let payload = SavePayload {
        id: None,
        name: args.name,
        description: args.description,
        code,
        key_terms_raw: args.tags,
        language: args.language,
    };

    let mut session = Session::new();
    session.start_create();
    submit(&mut session, library, payload, args.force, out)
}

fn edit<S: KeyValueStore>(library: &mut Library<S>, args: EditArgs, out: &mut dyn Write) -> eyre::Result<()> {
    let id = SnippetId::from(args.id);
    let existing = library
        .get(&id)
        .ok_or_else(|| eyre::eyre!("snippet not found: {id}"))?;

    // Unspecified fields keep their current values, like a pre-filled form.
    let payload = SavePayload {
        id: Some(id.clone()),
        name: args.name.unwrap_or_else(|| existing.name().to_string()),
        description: args
            .description
            .or_else(|| existing.description().map(str::to_string)),
        code: match read_code(&args.code)? {
            Some(code) => code,
            None => existing.code().to_string(),
        },
        key_terms_raw: args.tags.unwrap_or_else(|| existing.key_terms().join(", ")),
        language: args
            .language
            .or_else(|| existing.language().map(str::to_string)),
    };

    let mut session = Session::new();
    session.start_edit(id);
    submit(&mut session, library, payload, args.force, out)
}

fn rm<S: KeyValueStore>(library: &mut Library<S>, args: RmArgs, out: &mut dyn Write) -> eyre::Result<()> {
    let id = SnippetId::from(args.id);
    let removed = library
        .remove(&id)
        .ok_or_else(|| eyre::eyre!("snippet not found: {id}"))?;
    writeln!(out, "removed {}", summary_line(&removed))?;
    Ok(())
}

fn submit<S: KeyValueStore>(
    session: &mut Session,
    library: &mut Library<S>,
    payload: SavePayload,
    force: bool,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    let mut outcome = session.submit(library, payload)?;

    if let Some(conflicts) = outcome.conflicts() {
        print_conflicts(conflicts, out)?;
        if !force {
            return Err(eyre::eyre!("snippet not saved: rerun with --force to save anyway"));
        }
    }
    if !outcome.is_saved() {
        outcome = session
            .force_save(library)?
            .ok_or_else(|| eyre::eyre!("no pending conflict to force"))?;
    }

    if outcome.trimmed() {
        writeln!(out, "note: surrounding whitespace was trimmed")?;
    }
    if let SaveOutcome::Saved { snippet, was_new, .. } = &outcome {
        let verb = if *was_new { "added" } else { "updated" };
        writeln!(out, "{verb} {}", summary_line(snippet))?;
    }
    Ok(())
}

fn read_code(args: &CodeArgs) -> eyre::Result<Option<String>> {
    if let Some(code) = &args.code {
        return Ok(Some(code.clone()));
    }
    if let Some(path) = &args.file {
        let code = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
        return Ok(Some(code));
    }
    Ok(None)
}

fn print_conflicts(conflicts: &DuplicateConflicts, out: &mut dyn Write) -> eyre::Result<()> {
    writeln!(out, "conflict:")?;
    if let Some(snippet) = &conflicts.by_name {
        writeln!(out, "  same name as {}", summary_line(snippet))?;
    }
    if let Some(snippet) = &conflicts.by_content {
        writeln!(out, "  same code as {}", summary_line(snippet))?;
    }
    Ok(())
}

fn print_snippets(snippets: &[&Snippet], json: bool, out: &mut dyn Write) -> eyre::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(snippets)?)?;
        return Ok(());
    }
    for snippet in snippets {
        writeln!(out, "{}", summary_line(snippet))?;
    }
    Ok(())
}

fn summary_line(snippet: &Snippet) -> String {
    let mut line = format!("{}  {}", snippet.id(), snippet.name());
    if let Some(language) = snippet.language() {
        line.push_str(&format!("  [{language}]"));
    }
    if !snippet.key_terms().is_empty() {
        line.push_str(&format!("  #{}", snippet.key_terms().join(" #")));
    }
    line
}
