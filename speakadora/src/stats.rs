//! Payloads returned by the backend and the text shown for them.

use std::fmt;

use implicit_clone::unsync::IString;
use serde::{Deserialize, Deserializer};

use crate::config::AppConfig;

/// Account status which grants premium features.
pub const PREMIUM_STATUS: &str = "PREMIUM";

/// Reads a field which the backend may send as `null`, treating `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Minutes the user has spent talking with the bot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TalkTime {
    #[serde(deserialize_with = "null_as_default")]
    pub today: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub weekly: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

/// Status of the user's account as reported by the backend, e.g. `FREE` or `PREMIUM`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccountStatus(IString);

impl AccountStatus {
    pub fn new(status: impl Into<IString>) -> Self {
        Self(status.into())
    }

    /// Whether this status grants premium.
    pub fn is_premium(&self) -> bool {
        self.0.as_str() == PREMIUM_STATUS
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self(IString::Static("FREE"))
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate usage statistics for a user.
///
/// Missing or `null` fields take their default, so a partial payload still renders.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserStats {
    /// Talk time in minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub talk_time: TalkTime,
    /// Minutes of English speech listened to.
    #[serde(deserialize_with = "null_as_default")]
    pub listened_time: u64,
    /// Number of distinct days the user engaged.
    #[serde(deserialize_with = "null_as_default")]
    pub days_engaged: u64,
    /// Current level.
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub account_status: AccountStatus,
    /// Number of invited users who reached the qualifying level.
    #[serde(deserialize_with = "null_as_default")]
    pub invited_friends: u32,
}

/// Profile data for a user. Both fields may be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Name stored by the backend.
    pub name: Option<String>,
    /// URL of the avatar image.
    pub avatar: Option<String>,
}

/// How far the user is from earning premium through referrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumProgress {
    /// The account already has premium.
    Earned,
    /// This many more qualifying invites are needed.
    Remaining(u32),
}

impl PremiumProgress {
    /// Computes progress towards premium for `stats`. A premium account is always `Earned`, no
    /// matter how many friends it invited.
    pub fn for_stats(stats: &UserStats, config: &AppConfig) -> Self {
        if stats.account_status.is_premium() {
            Self::Earned
        } else {
            Self::Remaining(
                config
                    .premium_referral_threshold
                    .saturating_sub(stats.invited_friends),
            )
        }
    }

    /// Message shown in the gift section.
    pub fn message(self) -> String {
        match self {
            Self::Earned => "🎉 Congratulations! You have earned Premium status! 🎉".to_owned(),
            Self::Remaining(remaining) => format!(
                "Invite {remaining} more friend{} who reach level 5 to get Premium subscription",
                if remaining == 1 { "" } else { "s" },
            ),
        }
    }
}

/// Progress of one referral achievement card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneProgress {
    /// Number of invites the card asks for.
    pub milestone: u32,
    /// Invites counted towards the milestone, capped at the milestone.
    pub progress: u32,
}

impl MilestoneProgress {
    /// Progress towards `milestone` with `invited` qualifying invites.
    pub fn new(milestone: u32, invited: u32) -> Self {
        Self {
            milestone,
            progress: invited.min(milestone),
        }
    }

    /// Whether the milestone has been reached.
    pub fn completed(&self) -> bool {
        self.progress >= self.milestone
    }

    /// Text shown on the card, e.g. `3/5`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.progress, self.milestone)
    }
}

/// Progress towards every configured referral milestone, in display order.
pub fn referral_milestones(stats: &UserStats, config: &AppConfig) -> Vec<MilestoneProgress> {
    config
        .referral_milestones
        .as_slice()
        .iter()
        .map(|&milestone| MilestoneProgress::new(milestone, stats.invited_friends))
        .collect()
}

/// Formatted text for each statistics field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsLines {
    pub talk_today: String,
    pub talk_weekly: String,
    pub talk_total: String,
    pub listened: String,
    pub days: String,
    pub level: String,
    pub account_status: String,
    pub invited_friends: String,
    pub premium_progress: String,
}

impl StatsLines {
    /// Formats every field of `stats`.
    pub fn new(stats: &UserStats, config: &AppConfig) -> Self {
        Self {
            talk_today: format!("- Today: {} min.", stats.talk_time.today),
            talk_weekly: format!("- Weekly: {} min.", stats.talk_time.weekly),
            talk_total: format!("- Total: {} min.", stats.talk_time.total),
            listened: format!(
                "🎯 Listened Time: {} min. of English speech",
                stats.listened_time
            ),
            days: format!("⏰ Total Days Engaged: {} days", stats.days_engaged),
            level: format!("lvl {} ⭐", stats.level),
            account_status: format!("ACCOUNT STATUS {}", stats.account_status),
            invited_friends: format!("👥 You have invited {} friends", stats.invited_friends),
            premium_progress: PremiumProgress::for_stats(stats, config).message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(invited_friends: u32, account_status: &'static str) -> UserStats {
        UserStats {
            invited_friends,
            account_status: AccountStatus::new(account_status),
            ..Default::default()
        }
    }

    #[test]
    fn parses_backend_payload() {
        let stats: UserStats = serde_json::from_str(
            r#"{
                "talk_time": {"today": 5, "weekly": 40, "total": 300},
                "listened_time": 120,
                "days_engaged": 14,
                "invited_friends": 3,
                "level": 2,
                "account_status": "FREE"
            }"#,
        )
        .unwrap();
        assert_eq!(
            stats.talk_time,
            TalkTime {
                today: 5,
                weekly: 40,
                total: 300
            }
        );
        assert_eq!(stats.listened_time, 120);
        assert_eq!(stats.days_engaged, 14);
        assert_eq!(stats.invited_friends, 3);
        assert_eq!(stats.level, 2);
        assert!(!stats.account_status.is_premium());
    }

    #[test]
    fn null_and_missing_stats_fields_take_defaults() {
        let stats: UserStats = serde_json::from_str(
            r#"{
                "talk_time": {"today": 5, "weekly": null},
                "listened_time": 120,
                "days_engaged": null,
                "level": 2,
                "account_status": null
            }"#,
        )
        .unwrap();
        assert_eq!(
            stats.talk_time,
            TalkTime {
                today: 5,
                weekly: 0,
                total: 0
            }
        );
        assert_eq!(stats.listened_time, 120);
        assert_eq!(stats.days_engaged, 0);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.account_status, AccountStatus::default());
        assert_eq!(stats.invited_friends, 0);

        let stats: UserStats = serde_json::from_str(r#"{"talk_time": null}"#).unwrap();
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn parses_partial_profile() {
        let profile: UserProfile = serde_json::from_str(r#"{"name": "Student"}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Student"));
        assert_eq!(profile.avatar, None);

        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn ten_invites_leaves_zero_remaining() {
        let config = AppConfig::default();
        let progress = PremiumProgress::for_stats(&stats(10, "FREE"), &config);
        assert_eq!(progress, PremiumProgress::Remaining(0));
        assert_eq!(
            progress.message(),
            "Invite 0 more friends who reach level 5 to get Premium subscription"
        );
    }

    #[test]
    fn nine_invites_uses_singular() {
        let config = AppConfig::default();
        let progress = PremiumProgress::for_stats(&stats(9, "FREE"), &config);
        assert_eq!(progress, PremiumProgress::Remaining(1));
        assert_eq!(
            progress.message(),
            "Invite 1 more friend who reach level 5 to get Premium subscription"
        );
    }

    #[test]
    fn remaining_never_goes_negative() {
        let config = AppConfig::default();
        let progress = PremiumProgress::for_stats(&stats(14, "FREE"), &config);
        assert_eq!(progress, PremiumProgress::Remaining(0));
    }

    #[test]
    fn premium_always_congratulates() {
        let config = AppConfig::default();
        for invited in [0, 3, 10, 25] {
            let lines = StatsLines::new(&stats(invited, "PREMIUM"), &config);
            assert_eq!(
                lines.premium_progress,
                "🎉 Congratulations! You have earned Premium status! 🎉"
            );
        }
    }

    #[test]
    fn formats_stats_lines() {
        let config = AppConfig::default();
        let stats = UserStats {
            talk_time: TalkTime {
                today: 1,
                weekly: 2,
                total: 3,
            },
            listened_time: 4,
            days_engaged: 5,
            level: 6,
            account_status: AccountStatus::new("FREE"),
            invited_friends: 7,
        };
        let lines = StatsLines::new(&stats, &config);
        assert_eq!(lines.talk_today, "- Today: 1 min.");
        assert_eq!(lines.talk_weekly, "- Weekly: 2 min.");
        assert_eq!(lines.talk_total, "- Total: 3 min.");
        assert_eq!(lines.listened, "🎯 Listened Time: 4 min. of English speech");
        assert_eq!(lines.days, "⏰ Total Days Engaged: 5 days");
        assert_eq!(lines.level, "lvl 6 ⭐");
        assert_eq!(lines.account_status, "ACCOUNT STATUS FREE");
        assert_eq!(lines.invited_friends, "👥 You have invited 7 friends");
        assert_eq!(
            lines.premium_progress,
            "Invite 3 more friends who reach level 5 to get Premium subscription"
        );
    }

    #[test]
    fn milestones_cap_progress_and_mark_completion() {
        let config = AppConfig::default();
        let cards = referral_milestones(&stats(7, "FREE"), &config);
        let labels: Vec<_> = cards.iter().map(MilestoneProgress::label).collect();
        let completed: Vec<_> = cards.iter().map(MilestoneProgress::completed).collect();
        assert_eq!(labels, ["1/1", "5/5", "7/10", "7/20"]);
        assert_eq!(completed, [true, true, false, false]);
    }
}
