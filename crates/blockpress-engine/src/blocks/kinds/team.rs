use super::SectionIntro;
use crate::interaction::Selection;
use crate::layout::{Background, Columns};
use crate::models::{ImageField, de};
use serde::Deserialize;

/// Bios longer than this many characters get a "View Full Bio" modal.
pub const BIO_PREVIEW_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TeamProfiles {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub team_members: Vec<TeamMember>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub columns: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
    #[serde(default = "de::yes", deserialize_with = "de::flag")]
    pub show_social_links: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TeamMember {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub photo: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub twitter_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub instagram_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink<'a> {
    pub network: &'static str,
    pub url: &'a str,
}

impl TeamProfiles {
    pub fn columns(&self) -> Columns {
        Columns::from_token(self.columns.as_deref())
    }

    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::White)
    }

    /// Social links to show for `member`, empty when the block hides them.
    pub fn social_links<'a>(&self, member: &'a TeamMember) -> Vec<SocialLink<'a>> {
        if !self.show_social_links {
            return Vec::new();
        }
        member.social_links()
    }

    /// Modal state: no bio open initially.
    pub fn modal(&self) -> Selection {
        Selection::new(None)
    }
}

impl TeamMember {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_ref().and_then(ImageField::url)
    }

    pub fn photo_alt(&self) -> &str {
        self.photo
            .as_ref()
            .and_then(ImageField::alt)
            .unwrap_or(self.name())
    }

    pub fn has_long_bio(&self) -> bool {
        self.bio
            .as_deref()
            .is_some_and(|bio| bio.chars().count() > BIO_PREVIEW_CHARS)
    }

    pub fn social_links(&self) -> Vec<SocialLink<'_>> {
        [
            ("LinkedIn", &self.linkedin_url),
            ("Twitter", &self.twitter_url),
            ("Instagram", &self.instagram_url),
        ]
        .into_iter()
        .filter_map(|(network, url)| url.as_deref().map(|url| SocialLink { network, url }))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn member(bio_len: usize) -> TeamMember {
        TeamMember {
            name: Some("Ada".to_string()),
            bio: Some("x".repeat(bio_len)),
            ..Default::default()
        }
    }

    #[test]
    fn test_long_bio_threshold() {
        assert!(!member(150).has_long_bio());
        assert!(member(151).has_long_bio());
        assert!(!TeamMember::default().has_long_bio());
    }

    #[test]
    fn test_social_links_respect_block_flag() {
        let shown: TeamProfiles = serde_json::from_value(json!({
            "team_members": [{
                "name": "Ada",
                "linkedin_url": "https://linkedin.com/in/ada",
                "twitter_url": "",
                "instagram_url": "https://instagram.com/ada"
            }]
        }))
        .unwrap();
        let hidden = TeamProfiles {
            show_social_links: false,
            ..shown.clone()
        };

        let networks: Vec<&str> = shown
            .social_links(&shown.team_members[0])
            .iter()
            .map(|link| link.network)
            .collect();
        assert_eq!(networks, vec!["LinkedIn", "Instagram"]);
        assert!(hidden.social_links(&hidden.team_members[0]).is_empty());
    }

    #[test]
    fn test_photo_alt_falls_back_to_name() {
        let with_photo = TeamMember {
            photo: Some(ImageField::Url("https://x.test/ada.jpg".to_string())),
            ..member(10)
        };

        assert_eq!(with_photo.photo_url(), Some("https://x.test/ada.jpg"));
        assert_eq!(with_photo.photo_alt(), "Ada");
        assert_eq!(member(10).photo_url(), None);
    }

    #[test]
    fn test_defaults() {
        let block = TeamProfiles::default();
        assert_eq!(block.columns(), Columns::Three);
        assert_eq!(block.modal().active(), None);
    }
}
