//! Strava follow badge
//!
//! Link target for the "follow us on Strava" badge. Pure formatting over the
//! club slug; the anchor markup belongs to the rendering layer.

/// Base URL for Strava club pages
const STRAVA_CLUB_BASE_URL: &str = "https://www.strava.com/clubs/";

/// The club's follow badge link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StravaFollowBadge {
    club_slug: String,
}

impl StravaFollowBadge {
    pub fn new(club_slug: impl Into<String>) -> Self {
        Self {
            club_slug: club_slug.into(),
        }
    }

    /// The link target for the badge
    pub fn href(&self) -> String {
        format!("{STRAVA_CLUB_BASE_URL}{}", self.club_slug)
    }

    /// The badge's accessible label
    pub fn label(&self) -> &'static str {
        "Follow us on Strava"
    }
}

/// Create a follow badge for a club slug
pub fn strava_follow(club_slug: impl Into<String>) -> StravaFollowBadge {
    StravaFollowBadge::new(club_slug)
}
