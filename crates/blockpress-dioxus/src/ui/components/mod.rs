pub mod block_renderer;
pub mod faq_block;
pub mod fallback_screen;
pub mod feature_grid_block;
pub mod footer;
pub mod header;
pub mod hero_block;
pub mod location_block;
pub mod main_panel;
pub mod navigation;
pub mod page_content;
pub mod page_list;
pub mod pricing_block;
pub mod rich_text_block;
pub mod search_box;
pub mod search_page;
pub mod section_header;
pub mod site_link;
pub mod stats_block;
pub mod team_block;
pub mod testimonial_block;
pub mod timeline_block;
pub mod video_player;

pub use block_renderer::BlockRenderer;
pub use faq_block::FaqBlock;
pub use fallback_screen::{HomeMissing, NotFound};
pub use feature_grid_block::FeatureGridBlock;
pub use footer::Footer;
pub use header::{Brand, Header};
pub use hero_block::HeroBlock;
pub use location_block::LocationBlock;
pub use main_panel::MainPanel;
pub use navigation::Navigation;
pub use page_content::{PageBody, PageContent};
pub use page_list::PageList;
pub use pricing_block::PricingBlock;
pub use rich_text_block::RichTextBlock;
pub use search_box::SearchBox;
pub use search_page::{SearchPage, SearchResults};
pub use section_header::SectionHeader;
pub use site_link::SiteLink;
pub use stats_block::StatsBlock;
pub use team_block::TeamBlock;
pub use testimonial_block::TestimonialBlock;
pub use timeline_block::TimelineBlock;
pub use video_player::VideoPlayer;
