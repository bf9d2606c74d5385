use std::collections::BTreeMap;

use tracing::trace;

use crate::model::normalize_category;

pub const FOOD_IMAGE: &str =
  "https://picsum.photos/seed/hangout-food/480/270";
pub const PARK_IMAGE: &str =
  "https://picsum.photos/seed/hangout-park/480/270";
pub const ART_IMAGE: &str =
  "https://picsum.photos/seed/hangout-art/480/270";
pub const DEFAULT_IMAGE: &str =
  "https://picsum.photos/seed/hangout/480/270";

pub fn default_category_images()
-> BTreeMap<String, String> {
  BTreeMap::from([
    (
      "food".to_string(),
      FOOD_IMAGE.to_string()
    ),
    (
      "park".to_string(),
      PARK_IMAGE.to_string()
    ),
    (
      "art".to_string(),
      ART_IMAGE.to_string()
    )
  ])
}

/// Category to image lookup with a
/// fallback for unknown or empty
/// categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCatalog {
  images:  BTreeMap<String, String>,
  default: String
}

impl Default for ImageCatalog {
  fn default() -> Self {
    Self {
      images:  default_category_images(),
      default: DEFAULT_IMAGE.to_string()
    }
  }
}

impl ImageCatalog {
  pub fn new(
    images: BTreeMap<String, String>,
    default: String
  ) -> Self {
    Self {
      images,
      default
    }
  }

  /// Resolves an image for a raw
  /// category. The lookup key is
  /// trimmed and lowercased first.
  pub fn resolve(
    &self,
    category: &str
  ) -> &str {
    let key =
      normalize_category(category);
    match self.images.get(&key) {
      | Some(url) => url.as_str(),
      | None => {
        trace!(category = %key, "no image for category; using default");
        self.default.as_str()
      }
    }
  }

  pub fn categories(
    &self
  ) -> impl Iterator<Item = &str> {
    self.images.keys().map(String::as_str)
  }
}
