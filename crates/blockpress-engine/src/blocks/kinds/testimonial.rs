use super::SectionIntro;
use crate::interaction::Carousel;
use crate::layout::Background;
use crate::models::{ImageField, de};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TestimonialSlider {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub testimonial_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub client_position: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub client_photo: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub rating: Option<String>,
}

impl TestimonialSlider {
    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::Gray)
    }

    pub fn carousel(&self) -> Carousel {
        Carousel::new(self.testimonials.len())
    }
}

impl Testimonial {
    /// Star rating, read like `parseInt`: leading digits only, capped at 5.
    /// `None` hides the stars entirely.
    pub fn rating(&self) -> Option<u8> {
        let raw = self.rating.as_deref()?.trim();
        let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
        Some(digits.parse::<u32>().map_or(0, |n| n.min(5) as u8))
    }
}

/// Five star slots, the first `rating` filled.
pub fn star_states(rating: u8) -> [bool; 5] {
    std::array::from_fn(|i| i < usize::from(rating))
}
