//! Third-party sign-in providers.
//!
//! Authentication itself happens outside the app: signing in only resolves
//! the provider's sign-in URL, which the view layer navigates to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthProvider {
    Facebook,
    Google,
    Github,
}

impl AuthProvider {
    pub const ALL: [Self; 3] = [Self::Facebook, Self::Google, Self::Github];

    /// Provider id understood by the auth endpoint.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Google => "google",
            Self::Github => "github",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Continue with Facebook",
            Self::Google => "Continue with Google",
            Self::Github => "Continue with Github",
        }
    }

    #[must_use]
    pub fn sign_in_url(self, api_base: &str) -> String {
        format!("{}/api/auth/signin/{}", api_base.trim_end_matches('/'), self.id())
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
