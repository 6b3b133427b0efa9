//! Asset Adapters

mod file_asset_store;
mod pipe;

pub use file_asset_store::FileAssetStore;
pub use pipe::copy_to_pipe;
