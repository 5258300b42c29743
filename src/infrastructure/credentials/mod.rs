mod pypirc;

pub use pypirc::PypircStore;
