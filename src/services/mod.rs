// Portfolio services
// Services talk to the outside world (GitHub, EmailJS) and own the theme palette.

pub mod email_relay;
pub mod github_projects;
pub mod theme_engine;
