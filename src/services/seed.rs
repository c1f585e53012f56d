//! Sample posts and the policy deciding when an empty collection gets them.
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::repos::NewPost;

/// When `GET /posts` may fill an empty collection with [`sample_posts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Every empty observation reseeds, including after all posts were deleted.
    Always,
    /// Only the first empty observation of the process lifetime seeds.
    #[default]
    Once,
    Never,
}

impl SeedPolicy {
    pub fn should_seed(self, already_seeded: bool) -> bool {
        match self {
            SeedPolicy::Always => true,
            SeedPolicy::Once => !already_seeded,
            SeedPolicy::Never => false,
        }
    }
}

impl FromStr for SeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(SeedPolicy::Always),
            "once" => Ok(SeedPolicy::Once),
            "never" | "off" => Ok(SeedPolicy::Never),
            other => Err(format!("unknown seed policy: {other}")),
        }
    }
}

fn seed_date(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_default()
}

pub fn sample_posts() -> Vec<NewPost> {
    vec![
        NewPost {
            title: "The Rise of Decentralized Finance".to_string(),
            content: "Decentralized Finance (DeFi) is an emerging and rapidly evolving field in the blockchain industry. It refers to the shift from traditional, centralized financial systems to peer-to-peer finance enabled by decentralized technologies built on Ethereum and other blockchains. With the promise of reduced dependency on the traditional banking sector, DeFi platforms offer a wide range of services, from lending and borrowing to insurance and trading.".to_string(),
            author: "Alex Thompson".to_string(),
            date: seed_date("2023-08-01T10:00:00Z"),
        },
        NewPost {
            title: "The Impact of Artificial Intelligence on Modern Businesses".to_string(),
            content: "Artificial Intelligence (AI) is no longer a concept of the future. It's very much a part of our present, reshaping industries and enhancing the capabilities of existing systems. From automating routine tasks to offering intelligent insights, AI is proving to be a boon for businesses. With advancements in machine learning and deep learning, businesses can now address previously insurmountable problems and tap into new opportunities.".to_string(),
            author: "Mia Williams".to_string(),
            date: seed_date("2023-08-05T14:30:00Z"),
        },
        NewPost {
            title: "Sustainable Living: Tips for an Eco-Friendly Lifestyle".to_string(),
            content: "Sustainability is more than just a buzzword; it's a way of life. As the effects of climate change become more pronounced, there's a growing realization about the need to live sustainably. From reducing waste and conserving energy to supporting eco-friendly products, there are numerous ways we can make our daily lives more environmentally friendly. This post will explore practical tips and habits that can make a significant difference.".to_string(),
            author: "Samuel Green".to_string(),
            date: seed_date("2023-08-10T09:15:00Z"),
        },
    ]
}
