pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{Tuning, tuning_from_env};
pub use frameworks::runtime::{
    BannerHandle, BattlefieldFrame, BattlefieldHandle, init_runtime, mount_banner,
    mount_battlefield,
};
