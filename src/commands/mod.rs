pub mod clean_channels;
pub mod create_channel;
pub mod create_defaults;
pub mod remove_channel;
