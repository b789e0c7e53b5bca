//! News blocks: the tagged content units served to clients.
//!
//! Every block is a JSON object whose `type` field carries a `__name__`
//! discriminator. Encoding always writes the discriminator of the variant.
//! Decoding dispatches on it alone and is total: an unrecognized
//! discriminator, a record that is not an object, or a record whose fields
//! do not fit the variant all decode to [`NewsBlock::Unknown`]. One bad block
//! never fails the list it came in.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::actions::BlockAction;
use super::category::Category;

/// Metadata shared by every post preview variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBlock {
    pub id: String,
    pub category: Category,
    #[serde(default)]
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<BlockAction>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_content_overlaid: bool,
}

/// A group of grid tiles under one category heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostGridGroupBlock {
    pub category: Category,
    #[serde(default)]
    pub tiles: Vec<PostBlock>,
}

/// Header shown at the top of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIntroductionBlock {
    pub category: Category,
    #[serde(default)]
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

/// Plain text used by headline, lead paragraph and paragraph blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextCaptionColor {
    #[default]
    Normal,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCaptionBlock {
    pub text: String,
    #[serde(default)]
    pub color: TextCaptionColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoIntroductionBlock {
    pub category: Category,
    pub title: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeaderBlock {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<BlockAction>,
}

/// Vertical gap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    ExtraSmall,
    Small,
    Medium,
    Large,
    VeryLarge,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacerBlock {
    pub spacing: Spacing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BannerAdSize {
    #[default]
    Normal,
    Large,
    ExtraLarge,
    AnchoredAdaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerAdBlock {
    #[serde(default)]
    pub size: BannerAdSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingStoryBlock {
    pub content: PostBlock,
}

/// One slide of a slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideBlock {
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photo_credit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideshowBlock {
    pub title: String,
    #[serde(default)]
    pub slides: Vec<SlideBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowIntroductionBlock {
    pub title: String,
    pub cover_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<BlockAction>,
}

/// Raw HTML rendered by the client's HTML widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlBlock {
    pub content: String,
}

/// A renderable unit of news content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum NewsBlock {
    // Post previews
    #[serde(rename = "__post_large__")]
    PostLarge(PostBlock),
    #[serde(rename = "__post_medium__")]
    PostMedium(PostBlock),
    #[serde(rename = "__post_small__")]
    PostSmall(PostBlock),
    #[serde(rename = "__post_grid_tile__")]
    PostGridTile(PostBlock),
    #[serde(rename = "__post_grid_group__")]
    PostGridGroup(PostGridGroupBlock),

    // Text
    #[serde(rename = "__article_introduction__")]
    ArticleIntroduction(ArticleIntroductionBlock),
    #[serde(rename = "__text_headline__")]
    TextHeadline(TextBlock),
    #[serde(rename = "__text_lead_paragraph__")]
    TextLeadParagraph(TextBlock),
    #[serde(rename = "__text_paragraph__")]
    TextParagraph(TextBlock),
    #[serde(rename = "__text_caption__")]
    TextCaption(TextCaptionBlock),

    // Media
    #[serde(rename = "__image__")]
    Image(ImageBlock),
    #[serde(rename = "__video__")]
    Video(VideoBlock),
    #[serde(rename = "__video_introduction__")]
    VideoIntroduction(VideoIntroductionBlock),

    // Layout
    #[serde(rename = "__section_header__")]
    SectionHeader(SectionHeaderBlock),
    #[serde(rename = "__divider_horizontal__")]
    DividerHorizontal,
    #[serde(rename = "__spacer__")]
    Spacer(SpacerBlock),

    // Special
    #[serde(rename = "__banner_ad__")]
    BannerAd(BannerAdBlock),
    #[serde(rename = "__newsletter__")]
    Newsletter,
    #[serde(rename = "__trending_story__")]
    TrendingStory(TrendingStoryBlock),
    #[serde(rename = "__slideshow__")]
    Slideshow(SlideshowBlock),
    #[serde(rename = "__slideshow_introduction__")]
    SlideshowIntroduction(SlideshowIntroductionBlock),
    #[serde(rename = "__html__")]
    Html(HtmlBlock),

    #[serde(rename = "__unknown__")]
    Unknown,
}

impl NewsBlock {
    /// Discriminator written to the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::PostLarge(_) => "__post_large__",
            Self::PostMedium(_) => "__post_medium__",
            Self::PostSmall(_) => "__post_small__",
            Self::PostGridTile(_) => "__post_grid_tile__",
            Self::PostGridGroup(_) => "__post_grid_group__",
            Self::ArticleIntroduction(_) => "__article_introduction__",
            Self::TextHeadline(_) => "__text_headline__",
            Self::TextLeadParagraph(_) => "__text_lead_paragraph__",
            Self::TextParagraph(_) => "__text_paragraph__",
            Self::TextCaption(_) => "__text_caption__",
            Self::Image(_) => "__image__",
            Self::Video(_) => "__video__",
            Self::VideoIntroduction(_) => "__video_introduction__",
            Self::SectionHeader(_) => "__section_header__",
            Self::DividerHorizontal => "__divider_horizontal__",
            Self::Spacer(_) => "__spacer__",
            Self::BannerAd(_) => "__banner_ad__",
            Self::Newsletter => "__newsletter__",
            Self::TrendingStory(_) => "__trending_story__",
            Self::Slideshow(_) => "__slideshow__",
            Self::SlideshowIntroduction(_) => "__slideshow_introduction__",
            Self::Html(_) => "__html__",
            Self::Unknown => "__unknown__",
        }
    }

    /// The shared post metadata, for the single-post variants.
    pub fn as_post(&self) -> Option<&PostBlock> {
        match self {
            Self::PostLarge(post)
            | Self::PostMedium(post)
            | Self::PostSmall(post)
            | Self::PostGridTile(post) => Some(post),
            Self::TrendingStory(story) => Some(&story.content),
            _ => None,
        }
    }

    /// Shorthand for a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::TextParagraph(TextBlock { text: text.into() })
    }

    /// Decode a block from a JSON record, dispatching on its `type`.
    pub fn decode(value: Value) -> Self {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let unknown = Self::Unknown;
        match tag.as_str() {
            "__post_large__" => decode_variant(value, &tag, Self::PostLarge, unknown),
            "__post_medium__" => decode_variant(value, &tag, Self::PostMedium, unknown),
            "__post_small__" => decode_variant(value, &tag, Self::PostSmall, unknown),
            "__post_grid_tile__" => decode_variant(value, &tag, Self::PostGridTile, unknown),
            "__post_grid_group__" => decode_variant(value, &tag, Self::PostGridGroup, unknown),
            "__article_introduction__" => {
                decode_variant(value, &tag, Self::ArticleIntroduction, unknown)
            }
            "__text_headline__" => decode_variant(value, &tag, Self::TextHeadline, unknown),
            "__text_lead_paragraph__" => {
                decode_variant(value, &tag, Self::TextLeadParagraph, unknown)
            }
            "__text_paragraph__" => decode_variant(value, &tag, Self::TextParagraph, unknown),
            "__text_caption__" => decode_variant(value, &tag, Self::TextCaption, unknown),
            "__image__" => decode_variant(value, &tag, Self::Image, unknown),
            "__video__" => decode_variant(value, &tag, Self::Video, unknown),
            "__video_introduction__" => {
                decode_variant(value, &tag, Self::VideoIntroduction, unknown)
            }
            "__section_header__" => decode_variant(value, &tag, Self::SectionHeader, unknown),
            "__divider_horizontal__" => Self::DividerHorizontal,
            "__spacer__" => decode_variant(value, &tag, Self::Spacer, unknown),
            "__banner_ad__" => decode_variant(value, &tag, Self::BannerAd, unknown),
            "__newsletter__" => Self::Newsletter,
            "__trending_story__" => decode_variant(value, &tag, Self::TrendingStory, unknown),
            "__slideshow__" => decode_variant(value, &tag, Self::Slideshow, unknown),
            "__slideshow_introduction__" => {
                decode_variant(value, &tag, Self::SlideshowIntroduction, unknown)
            }
            "__html__" => decode_variant(value, &tag, Self::Html, unknown),
            _ => {
                if !tag.is_empty() {
                    debug!(block_type = %tag, "unrecognized block type");
                }
                unknown
            }
        }
    }
}

impl<'de> Deserialize<'de> for NewsBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::decode)
    }
}

/// Decode a list of block records, degrading bad entries individually.
pub fn decode_blocks(values: Vec<Value>) -> Vec<NewsBlock> {
    values.into_iter().map(NewsBlock::decode).collect()
}

/// Parse `value` as `T` and wrap it, or return `fallback` if the fields
/// don't fit.
pub(super) fn decode_variant<T, R>(
    value: Value,
    tag: &str,
    wrap: impl FnOnce(T) -> R,
    fallback: R,
) -> R
where
    T: DeserializeOwned,
{
    match serde_json::from_value::<T>(value) {
        Ok(inner) => wrap(inner),
        Err(e) => {
            debug!(block_type = %tag, error = %e, "malformed record, using fallback");
            fallback
        }
    }
}
