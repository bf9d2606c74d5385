use std::collections::BTreeMap;

use anyhow::{
  Context,
  anyhow
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info,
  warn
};

use crate::catalog::{
  DEFAULT_IMAGE,
  ImageCatalog,
  default_category_images
};
use crate::model::normalize_category;

pub const DEFAULT_DAY_COUNT: u8 = 30;
pub const MAX_DAY_COUNT: u8 = 31;
pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_LINK_DISPLAY_LIMIT:
  usize = 30;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct PlannerConfig {
  #[serde(
    default = "default_version"
  )]
  pub version:            u32,
  /// Raw picker length; read it through
  /// [`PlannerConfig::day_count`].
  #[serde(
    default = "default_day_count"
  )]
  pub day_count:          i64,
  #[serde(
    default = "default_link_display_limit"
  )]
  pub link_display_limit: usize,
  #[serde(
    default = "default_image"
  )]
  pub default_image:      String,
  #[serde(
    default = "default_category_images"
  )]
  pub categories:
    BTreeMap<String, String>
}

fn default_version() -> u32 {
  CONFIG_VERSION
}

fn default_day_count() -> i64 {
  i64::from(DEFAULT_DAY_COUNT)
}

fn default_link_display_limit() -> usize
{
  DEFAULT_LINK_DISPLAY_LIMIT
}

fn default_image() -> String {
  DEFAULT_IMAGE.to_string()
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      version:            default_version(),
      day_count:          default_day_count(),
      link_display_limit:
        DEFAULT_LINK_DISPLAY_LIMIT,
      default_image:      default_image(),
      categories:
        default_category_images()
    }
  }
}

impl PlannerConfig {
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg =
      toml::from_str::<PlannerConfig>(
        text
      )
      .context(
        "failed to parse planner config"
      )?;
    cfg.sanitize();
    cfg.validate()?;

    info!(
      version = cfg.version,
      day_count = cfg.day_count,
      categories = cfg.categories.len(),
      "loaded planner config"
    );
    Ok(cfg)
  }

  /// Clamps numeric knobs into range
  /// and normalizes category keys the
  /// same way activity categories are
  /// normalized.
  pub fn sanitize(&mut self) {
    if !(1..=i64::from(MAX_DAY_COUNT))
      .contains(&self.day_count)
    {
      warn!(
        day_count = self.day_count,
        "day_count out of range; \
         clamping"
      );
      self.day_count = self
        .day_count
        .clamp(1, i64::from(MAX_DAY_COUNT));
    }

    if self.link_display_limit == 0 {
      warn!(
        "link_display_limit of 0 is \
         not allowed; using 1"
      );
      self.link_display_limit = 1;
    }

    self.default_image =
      self.default_image.trim().to_string();

    let raw =
      std::mem::take(&mut self.categories);
    for (key, url) in raw {
      let key = normalize_category(&key);
      let url = url.trim().to_string();
      if key.is_empty() || url.is_empty()
      {
        debug!(category = %key, "dropping blank category entry");
        continue;
      }
      self.categories.insert(key, url);
    }
  }

  fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.default_image.is_empty() {
      return Err(anyhow!(
        "default_image must not be \
         empty"
      ));
    }
    Ok(())
  }

  /// Picker length, always within
  /// `1..=MAX_DAY_COUNT`.
  pub fn day_count(&self) -> u8 {
    u8::try_from(
      self
        .day_count
        .clamp(1, i64::from(MAX_DAY_COUNT))
    )
    .unwrap_or(DEFAULT_DAY_COUNT)
  }

  pub fn image_catalog(
    &self
  ) -> ImageCatalog {
    ImageCatalog::new(
      self.categories.clone(),
      self.default_image.clone()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::FOOD_IMAGE;

  #[test]
  fn empty_document_yields_defaults() {
    let cfg =
      PlannerConfig::from_toml_str("")
        .expect("empty config parses");

    assert_eq!(cfg.day_count(), 30);
    assert_eq!(
      cfg.link_display_limit,
      30
    );
    assert_eq!(
      cfg.version,
      PlannerConfig::default().version
    );
    assert_eq!(
      cfg.categories.get("food").map(
        String::as_str
      ),
      Some(FOOD_IMAGE)
    );
  }

  #[test]
  fn sanitize_clamps_and_normalizes() {
    let cfg = PlannerConfig::from_toml_str(
      r#"
version = 2
day_count = 99
link_display_limit = 0

[categories]
" Museum " = "https://example.com/museum.png"
blank = "   "
"#
    )
    .expect("config parses");

    assert_eq!(cfg.version, 2);
    assert_eq!(cfg.day_count, 31);
    assert_eq!(
      cfg.link_display_limit,
      1
    );
    assert_eq!(
      cfg
        .categories
        .get("museum")
        .map(String::as_str),
      Some(
        "https://example.com/museum.png"
      )
    );
    assert!(
      !cfg.categories.contains_key("blank")
    );
  }

  #[test]
  fn day_count_beyond_byte_range_is_clamped()
   {
    let high =
      PlannerConfig::from_toml_str(
        "day_count = 400"
      )
      .expect("large day_count parses");
    assert_eq!(high.day_count(), 31);

    let low = PlannerConfig::from_toml_str(
      "day_count = -5\n\n[categories]\nfood = \"https://example.com/f.png\""
    )
    .expect("negative day_count parses");
    assert_eq!(low.day_count(), 1);
    assert_eq!(
      low
        .categories
        .get("food")
        .map(String::as_str),
      Some("https://example.com/f.png")
    );
  }

  #[test]
  fn blank_default_image_is_rejected() {
    let err = PlannerConfig::from_toml_str(
      "default_image = \"  \""
    )
    .expect_err("blank default rejected");
    assert!(
      err
        .to_string()
        .contains("default_image")
    );
  }

  #[test]
  fn malformed_toml_reports_context() {
    let err = PlannerConfig::from_toml_str(
      "day_count = \"many\""
    )
    .expect_err("bad type rejected");
    assert!(
      err
        .to_string()
        .contains("planner config")
    );
  }
}
