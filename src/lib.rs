pub mod builder;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod logger;
pub mod post_template;
pub mod view;
mod post_list;
mod test_data;
mod text_utils;
