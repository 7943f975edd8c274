//! The fixed content table for the SentinelKarma page.
//!
//! All marketing copy lives here as data, not markup. The table is built once
//! at startup through [`PageContent::load`]; construction is the only place a
//! malformed animation spec can surface, and it surfaces as a
//! [`ContentError`] rather than a runtime condition.

use crate::types::{AnimationError, AnimationSpec, ContentError, Section, SectionKind};

/// The ordered, immutable content of the page, grouped by section kind.
///
/// Group order is fixed: navigation, hero, features, process steps, token
/// cards, use cases, roadmap, call to action, footer. Within a group,
/// sections keep table order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub navigation: Section,
    pub hero: Section,
    pub features: Vec<Section>,
    pub steps: Vec<Section>,
    pub tokens: Vec<Section>,
    pub use_cases: Vec<Section>,
    pub roadmap: Vec<Section>,
    pub call_to_action: Section,
    pub footer: Section,
}

fn section(
    id: &str,
    kind: SectionKind,
    title: &str,
    body: &str,
    items: &[&str],
    animation: Result<AnimationSpec, AnimationError>,
) -> Result<Section, ContentError> {
    let animation = animation.map_err(|source| ContentError::BadAnimation {
        id: id.to_string(),
        source,
    })?;
    Ok(Section {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        body: body.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
        animation,
    })
}

impl PageContent {
    /// Build the full page content from the compiled-in table.
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            navigation: section(
                "nav",
                SectionKind::Navigation,
                "SentinelKarma",
                "",
                &[],
                Ok(AnimationSpec::none()),
            )?,

            hero: section(
                "hero",
                SectionKind::Hero,
                "Decentralized Threat Intelligence",
                "A peer-to-peer network monitoring system that combines real-time \
                 anomaly detection, blockchain reputation, and simple HTTP-based log \
                 sharing to protect RPC endpoints from malicious traffic.",
                &["for Web3 Infrastructure"],
                AnimationSpec::fade_up(0.0),
            )?,

            features: vec![
                section(
                    "feature-realtime-detection",
                    SectionKind::FeatureCard,
                    "Real-time Detection",
                    "Statistical anomaly detection using z-scores and percentile \
                     analysis. Detect malicious patterns in <400ms with 250ms \
                     aggregation windows.",
                    &[],
                    AnimationSpec::fade_up(0.1),
                )?,
                section(
                    "feature-p2p-sharing",
                    SectionKind::FeatureCard,
                    "Simple P2P Sharing",
                    "Direct HTTP-based log sharing between peers. No complex IPFS \
                     setup—just FastAPI servers with signed requests and blockchain \
                     verification.",
                    &[],
                    AnimationSpec::fade_up(0.2),
                )?,
                section(
                    "feature-blockchain-verified",
                    SectionKind::FeatureCard,
                    "Blockchain Verified",
                    "Every threat report stored as an NFT with SHA256 hash on Solana. \
                     Download logs from peers and verify integrity against blockchain.",
                    &[],
                    AnimationSpec::fade_up(0.3),
                )?,
                section(
                    "feature-economic-incentives",
                    SectionKind::FeatureCard,
                    "Economic Incentives",
                    "Earn Karma Points by validating threat reports. Convert to SEKA \
                     tokens at 100 KP = 1 SEKA. 1,000 SEKA distributed every 2 hours.",
                    &[],
                    AnimationSpec::fade_up(0.4),
                )?,
                section(
                    "feature-privacy-protected",
                    SectionKind::FeatureCard,
                    "Privacy Protected",
                    "IP addresses salted and hashed before logging. No PII exposure, \
                     data minimization, and automatic retention policies.",
                    &[],
                    AnimationSpec::fade_up(0.5),
                )?,
                section(
                    "feature-affordable-storage",
                    SectionKind::FeatureCard,
                    "Affordable Storage",
                    "$0-5/month per peer vs $25-50 for IPFS. Local storage with \
                     automatic cleanup. 1GB limit, 10MB max per log file.",
                    &[],
                    AnimationSpec::fade_up(0.6),
                )?,
            ],

            steps: vec![
                section(
                    "step-telemetry",
                    SectionKind::ProcessStep,
                    "Telemetry Collection",
                    "Monitor RPC endpoints in real-time. Capture request metadata \
                     (IP hash, method, latency, errors) as JSONL events.",
                    &[
                        "Rolling 250ms windows",
                        "P95 latency calculation",
                        "Error rate computation",
                        "Z-score anomaly detection",
                    ],
                    AnimationSpec::slide_in(0.0),
                )?,
                section(
                    "step-log-sharing",
                    SectionKind::ProcessStep,
                    "P2P Log Sharing",
                    "Store malicious logs locally and serve via FastAPI HTTP server. \
                     Peers download with signed requests.",
                    &[
                        "30-second rotation for threats",
                        "Ed25519 signature authentication",
                        "SHA256 hash verification",
                        "Auto-mint NFTs with log URL",
                    ],
                    AnimationSpec::slide_in(0.2),
                )?,
                section(
                    "step-reputation",
                    SectionKind::ProcessStep,
                    "Blockchain Reputation",
                    "Community validates reports through likes. Earn karma, convert \
                     to SEKA tokens, get rewarded.",
                    &[
                        "Non-transferable Karma Points",
                        "Fungible SEKA token",
                        "2-hour reward cycles",
                        "1,000 SEKA per cycle pool",
                    ],
                    AnimationSpec::slide_in(0.4),
                )?,
            ],

            tokens: vec![
                section(
                    "token-karma",
                    SectionKind::TokenCard,
                    "Karma Points (KP)",
                    "Non-transferable reputation metric",
                    &[
                        "Earned through community validation",
                        "1 like = 1 karma point",
                        "Accumulated per 2-hour cycle",
                        "Reset after distribution",
                        "Stored on-chain in PeerState",
                    ],
                    AnimationSpec::fade_up(0.0),
                )?,
                section(
                    "token-seka",
                    SectionKind::TokenCard,
                    "SEKA Token",
                    "Fungible SPL token with utility",
                    &[
                        "Conversion: 100 KP = 1 SEKA",
                        "Network membership: 1,000 SEKA",
                        "Cycle pool: 1,000 SEKA/2hrs",
                        "Max per peer: 100 SEKA/cycle",
                        "Dynamic supply via karma conversion",
                    ],
                    AnimationSpec::fade_up(0.2),
                )?,
                section(
                    "token-formula",
                    SectionKind::TokenCard,
                    "Reward Distribution Formula",
                    "Proportional distribution with 10% cap prevents single-peer \
                     dominance",
                    &["peer_reward = min((peer_karma / total_karma) × 1000 SEKA, 100 SEKA)"],
                    AnimationSpec::fade_up(0.0),
                )?,
            ],

            use_cases: vec![
                section(
                    "use-case-rpc-protection",
                    SectionKind::UseCase,
                    "RPC Provider Protection",
                    "Deploy SentinelKarma to monitor public endpoints. Detect abuse \
                     patterns, receive real-time alerts, and implement rate limiting \
                     based on validated threat intelligence. 70% reduction in abusive \
                     traffic.",
                    &[],
                    AnimationSpec::fade_up(0.0),
                )?,
                section(
                    "use-case-collaborative-intel",
                    SectionKind::UseCase,
                    "Collaborative Threat Intelligence",
                    "Multiple RPC providers share security data through P2P log \
                     sharing. Community validates reports, high-karma threats \
                     automatically trusted. Faster detection, reduced costs, \
                     collective defense.",
                    &[],
                    AnimationSpec::fade_up(0.1),
                )?,
                section(
                    "use-case-security-research",
                    SectionKind::UseCase,
                    "Security Research",
                    "Deploy monitoring agents across regions to collect real-world \
                     attack data. Analyze patterns, share findings via NFT reports, \
                     and contribute to Web3 security knowledge base.",
                    &[],
                    AnimationSpec::fade_up(0.2),
                )?,
            ],

            roadmap: vec![
                section(
                    "roadmap-q1-2025",
                    SectionKind::RoadmapItem,
                    "MVP Launch ✅",
                    "Q1 2025",
                    &[
                        "Core telemetry pipeline",
                        "MQTT messaging layer",
                        "Smart contracts deployed",
                        "NFT-based reporting",
                        "P2P HTTP log sharing",
                        "Auto-mint daemon",
                        "Web dashboard",
                    ],
                    AnimationSpec::slide_in(0.0),
                )?,
                section(
                    "roadmap-q2-2025",
                    SectionKind::RoadmapItem,
                    "Production Hardening",
                    "Q2 2025",
                    &[
                        "TLS-encrypted MQTT",
                        "HTTPS log server with SSL",
                        "ML-based anomaly detection",
                        "Multi-region deployment",
                        "Security audit",
                        "CDN integration",
                    ],
                    AnimationSpec::slide_in(0.1),
                )?,
                section(
                    "roadmap-q3-2025",
                    SectionKind::RoadmapItem,
                    "Ecosystem Growth",
                    "Q3 2025",
                    &[
                        "Public testnet launch",
                        "Developer SDK",
                        "Mobile monitoring app",
                        "RPC provider partnerships",
                        "Community onboarding",
                    ],
                    AnimationSpec::slide_in(0.2),
                )?,
                section(
                    "roadmap-q4-2025",
                    SectionKind::RoadmapItem,
                    "Decentralization",
                    "Q4 2025",
                    &[
                        "Multisig governance",
                        "Permissionless joining",
                        "Cross-chain bridge",
                        "Mainnet launch",
                        "DAO formation",
                    ],
                    AnimationSpec::slide_in(0.3),
                )?,
            ],

            call_to_action: section(
                "cta",
                SectionKind::CallToAction,
                "Ready to Secure Web3?",
                "Join the decentralized threat intelligence network today",
                &[],
                AnimationSpec::scale_in(0.0),
            )?,

            footer: section(
                "footer",
                SectionKind::Footer,
                "SentinelKarma",
                "Decentralized threat intelligence for Web3 infrastructure",
                &[],
                Ok(AnimationSpec::none()),
            )?,
        })
    }

    /// The full table in rendered page order.
    pub fn sections(&self) -> Vec<&Section> {
        let mut ordered = vec![&self.navigation, &self.hero];
        ordered.extend(&self.features);
        ordered.extend(&self.steps);
        ordered.extend(&self.tokens);
        ordered.extend(&self.use_cases);
        ordered.extend(&self.roadmap);
        ordered.push(&self.call_to_action);
        ordered.push(&self.footer);
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_loads() {
        PageContent::load().expect("compiled-in content table must be valid");
    }

    #[test]
    fn test_section_order_matches_fixed_table() {
        let content = PageContent::load().unwrap();
        let kinds: Vec<SectionKind> = content.sections().iter().map(|s| s.kind).collect();

        let expected = [
            vec![SectionKind::Navigation, SectionKind::Hero],
            vec![SectionKind::FeatureCard; 6],
            vec![SectionKind::ProcessStep; 3],
            vec![SectionKind::TokenCard; 3],
            vec![SectionKind::UseCase; 3],
            vec![SectionKind::RoadmapItem; 4],
            vec![SectionKind::CallToAction, SectionKind::Footer],
        ]
        .concat();

        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let content = PageContent::load().unwrap();
        let mut ids: Vec<&str> = content.sections().iter().map(|s| s.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate section id in content table");
    }

    #[test]
    fn test_feature_stagger_delays() {
        let content = PageContent::load().unwrap();
        let delays: Vec<f32> = content
            .features
            .iter()
            .map(|s| s.animation.delay_seconds())
            .collect();
        assert_eq!(delays, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }

    #[test]
    fn test_realtime_detection_card_timing() {
        let content = PageContent::load().unwrap();
        let card = &content.features[0];
        assert_eq!(card.id, "feature-realtime-detection");
        assert_eq!(card.animation.delay_seconds(), 0.1);
        assert_eq!(card.animation.duration_seconds(), 0.8);
        assert!(card.animation.trigger_once());
    }

    #[test]
    fn test_every_animated_section_latches_once() {
        let content = PageContent::load().unwrap();
        for s in content.sections() {
            assert!(
                s.animation.trigger_once(),
                "section `{}` should reveal once per page load",
                s.id
            );
        }
    }

    #[test]
    fn test_chrome_sections_have_noop_animation() {
        let content = PageContent::load().unwrap();
        for s in [&content.navigation, &content.footer] {
            assert_eq!(s.animation, AnimationSpec::none());
        }
    }

    #[test]
    fn test_sections_serialize_for_export() {
        let content = PageContent::load().unwrap();
        let json = serde_json::to_string(&content.hero).unwrap();
        assert!(json.contains("\"kind\":\"Hero\""));
        assert!(json.contains("Decentralized Threat Intelligence"));
    }

    #[test]
    fn test_roadmap_quarters_cover_2025() {
        let content = PageContent::load().unwrap();
        let quarters: Vec<&str> = content.roadmap.iter().map(|s| s.body.as_str()).collect();
        assert_eq!(quarters, vec!["Q1 2025", "Q2 2025", "Q3 2025", "Q4 2025"]);
    }
}
