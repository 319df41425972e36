#![allow(dead_code)]

use paste_linker::domain::entities::Position;
use paste_linker::infrastructure::editor::TextDocument;
use paste_linker::prelude::{PasteService, PasteSettings};

pub const VIDEO_ID: &str = "dQw4w9WgXcQ";

pub fn canonical_watch(suffix: &str) -> String {
    format!("https://www.youtube.com/watch?v={VIDEO_ID}{suffix}")
}

pub fn default_service() -> PasteService {
    PasteService::new(PasteSettings::default())
}

pub fn service_with(settings: PasteSettings) -> PasteService {
    PasteService::new(settings)
}

/// One-line document `before + selection` with `selection` selected.
pub fn doc_with_selection(before: &str, selection: &str) -> TextDocument {
    let start = before.chars().count();
    let end = start + selection.chars().count();
    TextDocument::new(&format!("{before}{selection}"))
        .with_selection(Position::new(0, start), Position::new(0, end))
}
