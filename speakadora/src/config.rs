//! Static configuration for the mini app.

use implicit_clone::unsync::{IArray, IString};
use implicit_clone::ImplicitClone;

const REFERRAL_MILESTONES: &[u32] = &[1, 5, 10, 20];
const DEVELOPMENT_HOSTS: &[IString] = &[IString::Static("localhost")];
const DEVELOPMENT_HOST_FRAGMENTS: &[IString] = &[IString::Static("replit")];
const PREMIUM_PLANS: &[PremiumPlan] = &[
    PremiumPlan {
        label: IString::Static("Premium for 1 month"),
        href: IString::Static("/static/premium-month.html"),
    },
    PremiumPlan {
        label: IString::Static("Premium for 1 year"),
        href: IString::Static("/static/premium-year.html"),
    },
];

/// A premium subscription offer linked from the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumPlan {
    /// Text shown on the link.
    pub label: IString,
    /// Link target before the user's id is appended.
    pub href: IString,
}

impl ImplicitClone for PremiumPlan {}

/// Configuration shared by every part of the client.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Username of the bot that referral links point at.
    pub bot_username: IString,
    /// Path of the aggregate usage statistics endpoint.
    pub stats_path: IString,
    /// Path of the profile endpoint.
    pub profile_path: IString,
    /// Number of qualifying invites needed to earn premium.
    pub premium_referral_threshold: u32,
    /// Invite counts shown as cards on the achievements page, in display order.
    pub referral_milestones: IArray<u32>,
    /// Host names which are development hosts only when they match exactly.
    pub development_hosts: IArray<IString>,
    /// Substrings which mark a host name as a development host.
    pub development_host_fragments: IArray<IString>,
    /// Identifier used when running on a development host with no other identity source.
    pub development_sentinel: IString,
    /// Name displayed when neither the host nor the profile provide one.
    pub fallback_display_name: IString,
    /// Avatar shown until the profile provides one.
    pub placeholder_avatar: IString,
    /// Premium offers, in display order.
    pub premium_plans: IArray<PremiumPlan>,
}

impl AppConfig {
    /// Whether `hostname` is a local or test hosting context.
    pub fn is_development_host(&self, hostname: &str) -> bool {
        self.development_hosts
            .as_slice()
            .iter()
            .any(|host| host.as_str() == hostname)
            || self
                .development_host_fragments
                .as_slice()
                .iter()
                .any(|fragment| hostname.contains(fragment.as_str()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_username: "Speakadora_bot".into(),
            stats_path: "/api/stats".into(),
            profile_path: "/api/profile".into(),
            premium_referral_threshold: 10,
            referral_milestones: IArray::Static(REFERRAL_MILESTONES),
            development_hosts: IArray::Static(DEVELOPMENT_HOSTS),
            development_host_fragments: IArray::Static(DEVELOPMENT_HOST_FRAGMENTS),
            development_sentinel: "12345".into(),
            fallback_display_name: "Student".into(),
            placeholder_avatar: "/static/image/student_avatar.png".into(),
            premium_plans: IArray::Static(PREMIUM_PLANS),
        }
    }
}
