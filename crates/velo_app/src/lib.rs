//! Veloclub App Shell
//!
//! Navigation and view state shared by the member-facing screens:
//!
//! - **Routes**: the fixed path table and the admin gate
//! - **Registration stepper**: position state for the sign-up flow
//! - **Strava link**: the club's follow badge target

pub mod routes;
pub mod stepper;
pub mod strava;

pub use routes::AppRoute;
pub use stepper::{RegistrationStepper, REGISTRATION_STEPS};
pub use strava::{strava_follow, StravaFollowBadge};
