use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::image::ImageEntry;

// structs and types
//
// these mirror the subset of the collection+json document returned by /search that
// the gallery actually reads.  everything is defaulted so that a sparse item (and
// the api does return sparse items) never fails the whole page
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchImagesResp {
    pub collection: Collection,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub metadata: Option<CollectionMetadata>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CollectionMetadata {
    pub total_hits: u64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub links: Vec<ItemLink>,
    #[serde(default)]
    pub data: Vec<ItemData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemLink {
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

// messages

// one page of a plain text search, restricted to still images
#[derive(Clone, Debug, PartialEq)]
pub struct SearchImagesReq {
    pub query: String,
    pub page: u32,
}

impl SearchImagesReq {
    pub fn url(&self, api_root: &str) -> anyhow::Result<Url> {
        let base = Url::parse(api_root)?.join("search")?;
        let page = self.page.to_string();

        let url = Url::parse_with_params(
            base.as_str(),
            &[
                ("q", self.query.as_str()),
                ("media_type", "image"),
                ("page", page.as_str()),
            ],
        )?;

        Ok(url)
    }
}

// the mapped form of a page, which is all the gallery state ever sees
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPage {
    pub entries: Vec<ImageEntry>,
    pub total_hits: Option<u64>,
}

impl SearchImagesResp {
    pub fn into_page(self, req: &SearchImagesReq) -> SearchPage {
        let entries = self
            .collection
            .items
            .iter()
            .filter_map(ImageEntry::usable_href)
            .enumerate()
            .map(|(index, (href, item))| ImageEntry::new(req, index, href, item))
            .collect();

        SearchPage {
            entries,
            total_hits: self.collection.metadata.map(|m| m.total_hits),
        }
    }
}

#[instrument(level = "debug", skip(api_root))]
pub async fn search_images(api_root: &str, req: &SearchImagesReq) -> anyhow::Result<SearchPage> {
    let url = req.url(api_root)?;

    let resp = gloo_net::http::Request::get(url.as_str()).send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(resp.text().await?));
    }

    let body: SearchImagesResp = resp.json().await?;
    let page = body.into_page(req);

    debug!(entries = page.entries.len(), "mapped search page");
    Ok(page)
}
