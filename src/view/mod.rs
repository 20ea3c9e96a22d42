pub mod rss_renderer;
