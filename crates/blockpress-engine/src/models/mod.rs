pub(crate) mod de;
pub mod html;
pub mod image;
pub mod menu;
pub mod page;
pub mod search_result;
pub mod site_options;
pub mod yoast;

pub use html::HtmlFragment;
pub use image::{Image, ImageField, Media, image_url};
pub use menu::{MenuItem, MenuSummary};
pub use page::{Page, PageSummary};
pub use search_result::SearchResult;
pub use site_options::SiteOptions;
pub use yoast::{OgImage, YoastHead, YoastRobots};
