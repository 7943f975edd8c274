// Landing page sections

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = "v2.0";

/// On-chain program the footer points at. Opaque identifier, never resolved.
pub const PROGRAM_ID: &str = "Da3fi9D86CM262Xbu8nCwiJRNc6wEgSoKH1cw3p1MA8V";

pub const GITHUB_URL: &str = "https://github.com/flyingMooncake/SentinelKarma";
pub const WHITEPAPER_PATH: &str = "/whitepaper.md";

mod cta;
mod features;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod nav;
mod roadmap;
mod tokenomics;
mod use_cases;

pub use cta::Cta;
pub use features::Features;
pub use footer::Footer;
pub use header::SectionHeader;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use roadmap::Roadmap;
pub use tokenomics::Tokenomics;
pub use use_cases::UseCases;
