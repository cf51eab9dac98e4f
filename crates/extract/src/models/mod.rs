mod mapping;
mod release;

pub use self::mapping::ReleaseMapping;
pub use self::release::Release;
