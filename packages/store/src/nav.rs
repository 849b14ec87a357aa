//! Header links for the current session.

use crate::models::User;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    /// A plain link.
    Link { label: String, href: &'static str },
    /// Logs the user out; rendered as a link with a click handler.
    Logout,
}

impl NavItem {
    fn link(label: impl Into<String>, href: &'static str) -> Self {
        NavItem::Link {
            label: label.into(),
            href,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavItem::Link { label, .. } => label,
            NavItem::Logout => "LOGOUT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinks(pub Vec<NavItem>);

impl NavLinks {
    pub fn for_session(user: Option<&User>) -> Self {
        match user {
            Some(user) => NavLinks(vec![
                NavItem::link(format!("Welcome, {}", user.username), "#"),
                NavItem::link("SETTINGS", "/settings"),
                NavItem::Logout,
            ]),
            None => NavLinks(vec![
                NavItem::link("JOIN US", "/signup"),
                NavItem::link("SEARCH", "#"),
                NavItem::link("LOGIN", "/login"),
            ]),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavItem> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &NavLinks) -> Vec<&str> {
        links.iter().map(NavItem::label).collect()
    }

    #[test]
    fn test_guest_links() {
        let links = NavLinks::for_session(None);
        assert_eq!(labels(&links), ["JOIN US", "SEARCH", "LOGIN"]);
        assert!(!links.0.contains(&NavItem::Logout));
    }

    #[test]
    fn test_member_links() {
        let user = User::new("luna", "p", "l@x.com");
        let links = NavLinks::for_session(Some(&user));
        assert_eq!(labels(&links), ["Welcome, luna", "SETTINGS", "LOGOUT"]);
        assert_eq!(
            links.0[1],
            NavItem::Link {
                label: "SETTINGS".to_string(),
                href: "/settings"
            }
        );
    }
}
