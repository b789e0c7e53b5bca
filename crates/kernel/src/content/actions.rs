//! Navigation actions attached to post and section-header blocks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::blocks::decode_variant;
use super::category::Category;

/// Kind of behavior an action triggers on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockActionType {
    Navigation,
    Unknown,
}

/// Navigate to an article by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateToArticle {
    pub article_id: String,
}

/// Navigate to a feed category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateToFeedCategory {
    pub category: Category,
}

/// A tagged block action.
///
/// Decoding never fails: unrecognized or malformed actions become
/// [`BlockAction::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BlockAction {
    #[serde(rename = "__navigate_to_article__")]
    NavigateToArticle(NavigateToArticle),

    #[serde(rename = "__navigate_to_video_article__")]
    NavigateToVideoArticle(NavigateToArticle),

    #[serde(rename = "__navigate_to_feed_category__")]
    NavigateToFeedCategory(NavigateToFeedCategory),

    #[serde(rename = "__navigate_to_slideshow__")]
    NavigateToSlideshow(NavigateToArticle),

    #[serde(rename = "__unknown__")]
    Unknown,
}

impl BlockAction {
    /// Shorthand for a navigate-to-article action.
    pub fn to_article(article_id: impl Into<String>) -> Self {
        Self::NavigateToArticle(NavigateToArticle {
            article_id: article_id.into(),
        })
    }

    /// Shorthand for a navigate-to-category action.
    pub fn to_category(category: Category) -> Self {
        Self::NavigateToFeedCategory(NavigateToFeedCategory { category })
    }

    /// Discriminator written to the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::NavigateToArticle(_) => "__navigate_to_article__",
            Self::NavigateToVideoArticle(_) => "__navigate_to_video_article__",
            Self::NavigateToFeedCategory(_) => "__navigate_to_feed_category__",
            Self::NavigateToSlideshow(_) => "__navigate_to_slideshow__",
            Self::Unknown => "__unknown__",
        }
    }

    pub fn action_type(&self) -> BlockActionType {
        match self {
            Self::Unknown => BlockActionType::Unknown,
            _ => BlockActionType::Navigation,
        }
    }

    /// Decode an action from a JSON record, dispatching on its `type`.
    pub fn decode(value: Value) -> Self {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match tag.as_str() {
            "__navigate_to_article__" => {
                decode_variant(value, &tag, Self::NavigateToArticle, Self::Unknown)
            }
            "__navigate_to_video_article__" => {
                decode_variant(value, &tag, Self::NavigateToVideoArticle, Self::Unknown)
            }
            "__navigate_to_feed_category__" => {
                decode_variant(value, &tag, Self::NavigateToFeedCategory, Self::Unknown)
            }
            "__navigate_to_slideshow__" => {
                decode_variant(value, &tag, Self::NavigateToSlideshow, Self::Unknown)
            }
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for BlockAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::decode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn navigate_to_article_encodes_tag_and_id() {
        let json = serde_json::to_value(BlockAction::to_article("a1")).unwrap();
        assert_eq!(
            json,
            json!({ "type": "__navigate_to_article__", "articleId": "a1" })
        );
    }

    #[test]
    fn encoding_writes_exact_discriminator() {
        let actions = [
            BlockAction::to_article("a1"),
            BlockAction::NavigateToVideoArticle(NavigateToArticle {
                article_id: "v1".to_string(),
            }),
            BlockAction::to_category(Category::Health),
            BlockAction::NavigateToSlideshow(NavigateToArticle {
                article_id: "s1".to_string(),
            }),
            BlockAction::Unknown,
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.type_name());
        }
    }

    #[test]
    fn category_action_decodes() {
        let action = BlockAction::decode(json!({
            "type": "__navigate_to_feed_category__",
            "category": "sports"
        }));
        assert_eq!(action, BlockAction::to_category(Category::Sports));
        assert_eq!(action.action_type(), BlockActionType::Navigation);
    }

    #[test]
    fn unrecognized_action_is_unknown() {
        let action: BlockAction =
            serde_json::from_value(json!({ "type": "__share__", "url": "x" })).unwrap();
        assert_eq!(action, BlockAction::Unknown);
        assert_eq!(action.action_type(), BlockActionType::Unknown);
    }

    #[test]
    fn malformed_action_is_unknown() {
        let action = BlockAction::decode(json!({
            "type": "__navigate_to_feed_category__",
            "category": "weather"
        }));
        assert_eq!(action, BlockAction::Unknown);
    }

    #[test]
    fn unknown_encodes_bare_tag() {
        let json = serde_json::to_value(BlockAction::Unknown).unwrap();
        assert_eq!(json, json!({ "type": "__unknown__" }));
    }
}
