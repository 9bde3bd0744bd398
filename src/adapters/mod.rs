pub mod frame_ticker;
pub mod html_renderer;
pub mod http_source;
pub mod local_storage;

pub use frame_ticker::{FrameTicker, DEFAULT_FRAME_INTERVAL_MS};
pub use html_renderer::HtmlRenderer;
pub use http_source::HttpProductSource;
pub use local_storage::LocalStorage;
