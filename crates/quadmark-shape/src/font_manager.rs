//! System font lookup for label text
//!
//! Labels are drawn with the platform sans-serif face. Faces are loaded
//! once per weight and leaked, so painters can hold `&'static` references.

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};
use tracing::warn;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Sans-serif label font, `None` when the system has no usable face.
pub fn label_font(bold: bool) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<bool, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let mut cache = cache.lock().unwrap_or_else(|p| p.into_inner());
    *cache.entry(bold).or_insert_with(|| {
        let loaded = load_font_from_system(bold);
        if loaded.is_none() {
            warn!(bold, "no sans-serif system font found, labels will not be drawn");
        }
        loaded.map(|font| &*Box::leak(Box::new(font)))
    })
}

fn load_font_from_system(bold: bool) -> Option<Font<'static>> {
    let query = Query {
        families: &[Family::SansSerif],
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;
    load_face(&face.source, face.index)
}

/// Face `index` of a font file; collections (`.ttc`) hold several.
fn load_face(source: &Source, index: u32) -> Option<Font<'static>> {
    match source {
        Source::File(path) | Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, index)
        }
        Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), index)
        }
    }
}
