use std::fmt;

use members_core::{Gender, MemberRecord};
use scraper::{ElementRef, Selector};
use thiserror::Error;

/// Text fields read from a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Party,
    Constituency,
    Province,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Party => "party",
            Field::Constituency => "constituency",
            Field::Province => "province",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("tile has no {field} element matching `{marker}`")]
    MissingField { field: Field, marker: String },
    #[error("tile has no `{marker}` element with a src attribute")]
    MissingImage { marker: String },
    #[error("tile has no enclosing `{marker}` link with an href")]
    MissingProfileLink { marker: String },
}

/// CSS selectors locating a member tile and its fields on the directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMarkers {
    pub tile: String,
    pub name: String,
    pub party: String,
    pub constituency: String,
    pub province: String,
    pub image: String,
    /// Matched against the tile's ancestors, nearest first.
    pub profile_link: String,
}

impl Default for TileMarkers {
    fn default() -> Self {
        Self {
            tile: "div.ce-mip-flex-tile".to_string(),
            name: "div.ce-mip-mp-name".to_string(),
            party: "div.ce-mip-mp-party".to_string(),
            constituency: "div.ce-mip-mp-constituency".to_string(),
            province: "div.ce-mip-mp-province".to_string(),
            image: "img".to_string(),
            profile_link: "a.ce-mip-mp-tile".to_string(),
        }
    }
}

/// Compiled form of [`TileMarkers`].
#[derive(Debug, Clone)]
pub struct TileSchema {
    markers: TileMarkers,
    tile: Selector,
    name: Selector,
    party: Selector,
    constituency: Selector,
    province: Selector,
    image: Selector,
    profile_link: Selector,
}

impl TileSchema {
    pub fn compile(markers: &TileMarkers) -> Result<Self, ExtractError> {
        Ok(Self {
            tile: compile_selector(&markers.tile)?,
            name: compile_selector(&markers.name)?,
            party: compile_selector(&markers.party)?,
            constituency: compile_selector(&markers.constituency)?,
            province: compile_selector(&markers.province)?,
            image: compile_selector(&markers.image)?,
            profile_link: compile_selector(&markers.profile_link)?,
            markers: markers.clone(),
        })
    }

    pub fn markers(&self) -> &TileMarkers {
        &self.markers
    }

    pub(crate) fn tile_selector(&self) -> &Selector {
        &self.tile
    }

    /// Projects one tile onto a [`MemberRecord`].
    ///
    /// `image_host` is prepended verbatim to the image `src`. Any missing
    /// field fails the whole tile.
    pub fn extract(
        &self,
        tile: ElementRef<'_>,
        gender: Gender,
        image_host: &str,
    ) -> Result<MemberRecord, ExtractError> {
        let name = self.field_text(tile, Field::Name)?;
        let party = self.field_text(tile, Field::Party)?;
        let constituency = self.field_text(tile, Field::Constituency)?;
        let province = self.field_text(tile, Field::Province)?;

        let src = tile
            .select(&self.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or_else(|| ExtractError::MissingImage {
                marker: self.markers.image.clone(),
            })?;

        let profile_url = tile
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|ancestor| self.profile_link.matches(ancestor))
            .and_then(|link| link.value().attr("href"))
            .ok_or_else(|| ExtractError::MissingProfileLink {
                marker: self.markers.profile_link.clone(),
            })?;

        Ok(MemberRecord {
            name,
            gender,
            party,
            constituency,
            province,
            image_url: format!("{image_host}{src}"),
            profile_url: profile_url.to_string(),
        })
    }

    fn field_text(&self, tile: ElementRef<'_>, field: Field) -> Result<String, ExtractError> {
        let (selector, marker) = match field {
            Field::Name => (&self.name, &self.markers.name),
            Field::Party => (&self.party, &self.markers.party),
            Field::Constituency => (&self.constituency, &self.markers.constituency),
            Field::Province => (&self.province, &self.markers.province),
        };
        tile.select(selector)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
            .ok_or_else(|| ExtractError::MissingField {
                field,
                marker: marker.clone(),
            })
    }
}

fn compile_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|err| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}
