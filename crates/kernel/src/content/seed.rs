//! Built-in news data served when no seed file is configured.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::actions::BlockAction;
use super::blocks::{
    ArticleIntroductionBlock, BannerAdBlock, BannerAdSize, ImageBlock, NewsBlock, PostBlock,
    PostGridGroupBlock, SectionHeaderBlock, SlideBlock, SlideshowBlock,
    SlideshowIntroductionBlock, SpacerBlock, Spacing, TextBlock, TextCaptionBlock,
    TextCaptionColor, TrendingStoryBlock, VideoBlock, VideoIntroductionBlock,
};
use super::category::Category;
use super::store::NewsSeed;
use crate::models::NewsItem;

const SITE_URL: &str = "https://news.example.com";

struct Story {
    id: &'static str,
    category: Category,
    author: &'static str,
    published: i64,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    premium: bool,
    paragraphs: &'static [&'static str],
}

const STORIES: &[Story] = &[
    Story {
        id: "c4a1f0de-5b1e-4c55-8a0a-2f6b0a7f3e11",
        category: Category::Technology,
        author: "Priya Raman",
        published: 1_662_470_400,
        title: "Chipmakers race to shrink transistors below two nanometres",
        description: "A new generation of gate-all-around designs is moving from lab to fab.",
        image: "https://images.example.com/tech/wafer.jpg",
        premium: false,
        paragraphs: &[
            "Three of the largest foundries confirmed this week that pilot lines for sub-two-nanometre nodes are running.",
            "Gate-all-around transistors wrap the gate around the channel on every side, cutting leakage at small sizes.",
            "Analysts expect the first consumer devices built on the process within two years.",
            "Equipment suppliers say lithography capacity remains the bottleneck.",
        ],
    },
    Story {
        id: "7d3e9b42-1f8c-4b0e-9c6d-5a2e8f1b4c73",
        category: Category::Sports,
        author: "Marcus Bell",
        published: 1_662_384_000,
        title: "Inside the analytics team behind an unlikely title run",
        description: "How a mid-table club used tracking data to rebuild its midfield.",
        image: "https://images.example.com/sports/stadium.jpg",
        premium: true,
        paragraphs: &[
            "Two seasons ago the club finished eleventh. This spring it lifted the trophy.",
            "The turnaround began with a four-person data team hired from logistics firms.",
            "Their first recommendation was to stop signing players on highlight reels alone.",
            "Instead the club scouted pressing intensity and passing lanes across lower leagues.",
            "Rivals have since tried to hire the team away, without success.",
        ],
    },
    Story {
        id: "a9f2c6e1-3d4b-4e7a-8b1c-0d5e6f7a8b92",
        category: Category::Health,
        author: "Dr. Helen Osei",
        published: 1_662_297_600,
        title: "Short walks after meals help steady blood sugar",
        description: "Two to five minutes of light movement makes a measurable difference.",
        image: "https://images.example.com/health/walk.jpg",
        premium: false,
        paragraphs: &[
            "A review of seven studies found that brief walks after eating blunted glucose spikes.",
            "Standing helped a little; walking helped more.",
            "Researchers suggest timing the walk within an hour of the meal.",
        ],
    },
    Story {
        id: "e1b7d4c2-8a6f-4d3e-b5c9-1f2a3b4c5d64",
        category: Category::Science,
        author: "Tomás Ortega",
        published: 1_662_211_200,
        title: "Deep-field images reveal galaxies older than expected",
        description: "New infrared observations push back the timeline of galaxy formation.",
        image: "https://images.example.com/science/deep-field.jpg",
        premium: false,
        paragraphs: &[
            "Astronomers identified several candidate galaxies from less than 400 million years after the Big Bang.",
            "Their brightness suggests stars formed faster than most models predict.",
            "Spectroscopic follow-up will confirm the distances over the coming months.",
        ],
    },
    Story {
        id: "3b8c1d5e-6f7a-4b9c-a0d1-e2f3a4b5c6d7",
        category: Category::Business,
        author: "Lena Fischer",
        published: 1_662_124_800,
        title: "Why freight rates collapsed faster than anyone predicted",
        description: "Container prices are back to pre-pandemic levels on major routes.",
        image: "https://images.example.com/business/port.jpg",
        premium: true,
        paragraphs: &[
            "Spot rates from Shanghai to Rotterdam fell by more than two thirds in a year.",
            "Retailers over-ordered in 2021 and are now sitting on inventory.",
            "Carriers are cancelling sailings to support prices.",
            "Shipyards still have record order books for new vessels due through 2025.",
        ],
    },
    Story {
        id: "f6a5b4c3-d2e1-4f0a-9b8c-7d6e5f4a3b21",
        category: Category::Entertainment,
        author: "Sam Okafor",
        published: 1_662_038_400,
        title: "Festival season returns with a record number of premieres",
        description: "Organisers report sold-out screenings across three continents.",
        image: "https://images.example.com/entertainment/festival.jpg",
        premium: false,
        paragraphs: &[
            "More than ninety features will premiere at this year's autumn festivals.",
            "Streaming services account for a third of the competition slate.",
        ],
    },
];

const POPULAR_TOPICS: &[&str] = &["Semiconductors", "Football analytics", "Shipping"];

const TOPICS: &[&str] = &[
    "Semiconductors",
    "Football analytics",
    "Shipping",
    "Nutrition",
    "Astronomy",
    "Film festivals",
    "Supply chains",
];

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn post(story: &Story) -> PostBlock {
    PostBlock {
        id: story.id.to_string(),
        category: story.category,
        author: story.author.to_string(),
        published_at: at(story.published),
        title: story.title.to_string(),
        image_url: Some(story.image.to_string()),
        description: Some(story.description.to_string()),
        action: Some(BlockAction::to_article(story.id)),
        is_premium: story.premium,
        is_content_overlaid: false,
    }
}

fn content(story: &Story) -> Vec<NewsBlock> {
    let mut blocks = vec![
        NewsBlock::ArticleIntroduction(ArticleIntroductionBlock {
            category: story.category,
            author: story.author.to_string(),
            published_at: at(story.published),
            title: story.title.to_string(),
            image_url: Some(story.image.to_string()),
            is_premium: story.premium,
        }),
        NewsBlock::TextLeadParagraph(TextBlock {
            text: story.description.to_string(),
        }),
        NewsBlock::Spacer(SpacerBlock {
            spacing: Spacing::Medium,
        }),
    ];

    for (i, paragraph) in story.paragraphs.iter().enumerate() {
        blocks.push(NewsBlock::paragraph(*paragraph));
        if i == 1 {
            blocks.push(NewsBlock::BannerAd(BannerAdBlock {
                size: BannerAdSize::Normal,
            }));
        }
    }

    blocks.push(NewsBlock::Image(ImageBlock {
        image_url: story.image.to_string(),
    }));
    blocks.push(NewsBlock::TextCaption(TextCaptionBlock {
        text: format!("Photo: {}", story.author),
        color: TextCaptionColor::Light,
    }));
    blocks.push(NewsBlock::Newsletter);
    blocks
}

/// Introduction, lead, spacer and the first paragraph.
fn preview(story: &Story) -> Vec<NewsBlock> {
    content(story).into_iter().take(4).collect()
}

fn related(story: &Story) -> Vec<NewsBlock> {
    STORIES
        .iter()
        .filter(|other| other.id != story.id)
        .take(3)
        .map(|other| NewsBlock::PostSmall(post(other)))
        .collect()
}

fn item(story: &Story) -> NewsItem {
    NewsItem {
        content: content(story),
        content_preview: preview(story),
        post: post(story),
        url: format!("{SITE_URL}/{}/{}", story.category, story.id),
        related_articles: related(story),
    }
}

fn slideshow_item() -> NewsItem {
    let id = "0c1d2e3f-4a5b-4c6d-8e7f-9a0b1c2d3e4f";
    let cover = "https://images.example.com/science/aurora-1.jpg";
    let published = 1_661_952_000;

    let slides: Vec<SlideBlock> = [
        ("Aurora over Tromsø", "aurora-1"),
        ("Green ribbons above Yellowknife", "aurora-2"),
        ("Red fringes seen from Tasmania", "aurora-3"),
    ]
    .into_iter()
    .map(|(caption, image)| SlideBlock {
        image_url: format!("https://images.example.com/science/{image}.jpg"),
        caption: caption.to_string(),
        description: "Solar activity is near the peak of its eleven-year cycle.".to_string(),
        photo_credit: "Reader submission".to_string(),
    })
    .collect();

    let post = PostBlock {
        id: id.to_string(),
        category: Category::Science,
        author: "Photo desk".to_string(),
        published_at: at(published),
        title: "Photos: the brightest auroras in a decade".to_string(),
        image_url: Some(cover.to_string()),
        description: None,
        action: Some(BlockAction::NavigateToSlideshow(
            super::actions::NavigateToArticle {
                article_id: id.to_string(),
            },
        )),
        is_premium: false,
        is_content_overlaid: true,
    };

    let content = vec![
        NewsBlock::SlideshowIntroduction(SlideshowIntroductionBlock {
            title: post.title.clone(),
            cover_image_url: cover.to_string(),
            action: post.action.clone(),
        }),
        NewsBlock::Slideshow(SlideshowBlock {
            title: post.title.clone(),
            slides,
        }),
    ];

    NewsItem {
        content_preview: content.iter().take(1).cloned().collect(),
        content,
        url: format!("{SITE_URL}/science/{id}"),
        related_articles: vec![NewsBlock::PostSmall(post_for(Category::Science))],
        post,
    }
}

fn video_item() -> NewsItem {
    let id = "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b";
    let video = "https://videos.example.com/sports/final-highlights.mp4";
    let published = 1_661_865_600;

    let post = PostBlock {
        id: id.to_string(),
        category: Category::Sports,
        author: "Video desk".to_string(),
        published_at: at(published),
        title: "Watch: extended highlights from the cup final".to_string(),
        image_url: Some("https://images.example.com/sports/final.jpg".to_string()),
        description: None,
        action: Some(BlockAction::NavigateToVideoArticle(
            super::actions::NavigateToArticle {
                article_id: id.to_string(),
            },
        )),
        is_premium: false,
        is_content_overlaid: true,
    };

    let content = vec![
        NewsBlock::VideoIntroduction(VideoIntroductionBlock {
            category: Category::Sports,
            title: post.title.clone(),
            video_url: video.to_string(),
        }),
        NewsBlock::TextLeadParagraph(TextBlock {
            text: "Every goal and the penalty shoot-out, in eight minutes.".to_string(),
        }),
        NewsBlock::Video(VideoBlock {
            video_url: video.to_string(),
        }),
    ];

    NewsItem {
        content_preview: content.iter().take(2).cloned().collect(),
        content,
        url: format!("{SITE_URL}/sports/{id}"),
        related_articles: vec![NewsBlock::PostSmall(post_for(Category::Sports))],
        post,
    }
}

/// The post of the first story in `category`.
fn post_for(category: Category) -> PostBlock {
    STORIES
        .iter()
        .find(|s| s.category == category)
        .map(post)
        .unwrap_or_else(|| post(&STORIES[0]))
}

fn section(title: &str, category: Option<Category>) -> NewsBlock {
    NewsBlock::SectionHeader(SectionHeaderBlock {
        title: title.to_string(),
        action: category.map(BlockAction::to_category),
    })
}

fn general_feed(items: &[NewsItem]) -> Vec<NewsBlock> {
    let mut feed = vec![section("Breaking news", None)];

    let mut posts = items.iter().map(|item| item.post.clone());
    if let Some(mut lead) = posts.next() {
        lead.is_content_overlaid = true;
        feed.push(NewsBlock::PostLarge(lead));
    }
    feed.push(NewsBlock::DividerHorizontal);

    for post in posts.by_ref().take(2) {
        feed.push(NewsBlock::PostMedium(post));
    }
    feed.push(NewsBlock::BannerAd(BannerAdBlock {
        size: BannerAdSize::Large,
    }));
    feed.push(NewsBlock::TrendingStory(TrendingStoryBlock {
        content: post_for(Category::Business),
    }));
    feed.push(NewsBlock::Newsletter);

    let tiles: Vec<PostBlock> = posts.collect();
    if !tiles.is_empty() {
        feed.push(NewsBlock::PostGridGroup(PostGridGroupBlock {
            category: Category::General,
            tiles,
        }));
    }
    feed.push(NewsBlock::Spacer(SpacerBlock {
        spacing: Spacing::ExtraLarge,
    }));
    feed
}

fn category_feed(category: Category, items: &[NewsItem]) -> Vec<NewsBlock> {
    let mut feed = vec![section(&format!("Latest in {category}"), Some(category))];
    for (i, item) in items
        .iter()
        .filter(|item| item.post.category == category)
        .enumerate()
    {
        let post = item.post.clone();
        feed.push(if i == 0 {
            NewsBlock::PostLarge(post)
        } else {
            NewsBlock::PostSmall(post)
        });
        feed.push(NewsBlock::DividerHorizontal);
    }
    feed.push(NewsBlock::BannerAd(BannerAdBlock {
        size: BannerAdSize::Normal,
    }));
    feed
}

/// The built-in seed: a handful of articles across every category, one
/// slideshow, one video, and a feed per category.
pub fn builtin() -> NewsSeed {
    let mut items: Vec<NewsItem> = STORIES.iter().map(item).collect();
    items.push(slideshow_item());
    items.push(video_item());
    items.sort_by(|a, b| b.post.published_at.cmp(&a.post.published_at));

    let mut feeds = BTreeMap::new();
    feeds.insert(Category::General, general_feed(&items));
    for category in Category::ALL {
        if category != Category::General
            && items.iter().any(|item| item.post.category == category)
        {
            feeds.insert(category, category_feed(category, &items));
        }
    }

    let popular_articles = items
        .iter()
        .take(3)
        .map(|item| NewsBlock::PostSmall(item.post.clone()))
        .collect();

    NewsSeed {
        items,
        feeds,
        popular_articles,
        popular_topics: POPULAR_TOPICS.iter().map(|t| t.to_string()).collect(),
        topics: TOPICS.iter().map(|t| t.to_string()).collect(),
    }
}
