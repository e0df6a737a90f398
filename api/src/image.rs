use crate::search::{Item, SearchImagesReq};

pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const UNTITLED: &str = "Untitled";

// one card in the gallery
//
// the id is only unique within a single query session (query, page, position in the
// filtered batch), so it must not be used to match entries across searches
#[derive(Clone, Debug, PartialEq)]
pub struct ImageEntry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub url: String,
}

impl ImageEntry {
    // the first link is the preview; items without one cannot be shown at all
    pub(crate) fn usable_href(item: &Item) -> Option<(&str, &Item)> {
        let href = item.links.first()?.href.as_deref()?;

        if href.is_empty() {
            return None;
        }

        Some((href, item))
    }

    pub(crate) fn new(req: &SearchImagesReq, index: usize, href: &str, item: &Item) -> Self {
        let data = item.data.first();

        let title = data
            .and_then(|d| d.title.clone())
            .unwrap_or_else(|| String::from(UNTITLED));

        let date = data
            .and_then(|d| d.date_created.as_deref())
            .map(display_date)
            .unwrap_or_else(|| String::from(UNKNOWN_DATE));

        ImageEntry {
            id: format!("{}-{}-{}", req.query, req.page, index),
            title,
            date,
            url: href.to_owned(),
        }
    }
}

// the api returns full iso timestamps, but only the calendar day is displayed
pub fn display_date(date_created: &str) -> String {
    match date_created.split('T').next() {
        Some(day) if !day.is_empty() => day.to_owned(),
        _ => String::from(UNKNOWN_DATE),
    }
}
