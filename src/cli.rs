// src/cli.rs
use std::{env, fs, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat};
use crate::file;
use crate::store::{self, RecordId, RecordStore};
use crate::view::{self, Query, SortMode};

pub struct Params {
    pub options: AppOptions,
    pub query: Query,
    pub page: usize,
    pub detail: Option<RecordId>,
    pub list_languages: bool,
    pub export: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            options: AppOptions::default(),
            query: Query::default(),
            page: 1,
            detail: None,
            list_languages: false,
            export: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let store = load_store(&params)?;
    logf!("CLI: {} approved records", store.len());

    if params.list_languages {
        for lang in store.languages() {
            println!("{lang}");
        }
        return Ok(());
    }

    if let Some(id) = params.detail {
        return print_detail(&store, id);
    }

    let view = view::compute_view(&store, &params.query);

    if params.export {
        let rows: Vec<Vec<String>> = view
            .ids
            .iter()
            .filter_map(|&id| store.record(id).map(|r| r.cells().to_vec()))
            .collect();
        let path = file::write_export(&params.options.export, store.headers(), &rows)?;
        println!("Wrote {} ({} recipes)", path.display(), rows.len());
        return Ok(());
    }

    let paged = view::paginate(&view, params.page, params.options.page_size);
    if paged.ids.is_empty() {
        println!("No recipes found.");
    }
    for &id in paged.ids {
        if let Some(card) = view::card(&store, id) {
            let name = if card.name.is_empty() { "(Unnamed recipe)" } else { card.name.as_str() };
            let by = if card.submitter.is_empty() { "Anonymous" } else { card.submitter.as_str() };
            if card.language.is_empty() {
                println!("[{}] {} — by {}", id, name, by);
            } else {
                println!("[{}] {} — by {} ({})", id, name, by, card.language);
            }
            if !card.preview.is_empty() {
                println!("      {}", card.preview);
            }
        }
    }
    println!("Page {} of {} ({} recipes)", paged.current, paged.total, view.len());

    Ok(())
}

fn load_store(params: &Params) -> Result<RecordStore, Box<dyn std::error::Error>> {
    let src = &params.options.source;

    if let Some(path) = &src.file {
        let text = fs::read_to_string(path)?;
        return Ok(RecordStore::load(&text));
    }
    if src.offline {
        return Ok(store::cached_store()?);
    }
    Ok(store::fetch_store(&src.url)?)
}

fn print_detail(store: &RecordStore, id: RecordId) -> Result<(), Box<dyn std::error::Error>> {
    let Some(rec) = store.record(id) else {
        return Err(format!("No recipe with id {} (store holds {})", id, store.len()).into());
    };
    for (header, value) in rec.fields() {
        println!("{header}: {value}");
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.options.source.url = args.next().ok_or("Missing value for --url")?,
            "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.options.source.file = Some(PathBuf::from(v));
            }
            "--offline" => params.options.source.offline = true,
            "-s" | "--search" => params.query.search = args.next().ok_or("Missing value for --search")?,
            "-l" | "--language" => params.query.language = args.next().ok_or("Missing value for --language")?,
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.query.sort = SortMode::from_token(&v);
            }
            "-p" | "--page" => params.page = args.next().ok_or("Missing value for --page")?.parse()?,
            "--page-size" => {
                let v: usize = args.next().ok_or("Missing value for --page-size")?.parse()?;
                if v == 0 { return Err("Page size must be at least 1".into()); }
                params.options.page_size = v;
            }
            "--id" => params.detail = Some(args.next().ok_or("Missing value for --id")?.parse()?),
            "--list-languages" => params.list_languages = true,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&v);
                params.export = true;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.options.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
