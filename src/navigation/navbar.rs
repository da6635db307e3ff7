//! Top navigation bar

use crate::models::User;
use super::routes::{LOGIN_PATH, REGISTER_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub const PUBLIC_LINKS: [NavLink; 3] = [
    NavLink { title: "Courses", href: "/courses" },
    NavLink { title: "About", href: "/about" },
    NavLink { title: "Blog", href: "/blog" },
];

pub const SIGN_IN: NavLink = NavLink { title: "Sign In", href: LOGIN_PATH };
pub const GET_STARTED: NavLink = NavLink { title: "Get Started", href: REGISTER_PATH };

/// Where logout sends the visitor
pub const AFTER_LOGOUT_PATH: &str = "/";

/// Menu shown for a signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMenu {
    pub name: String,
    pub email: String,
    pub initials: String,
    pub dashboard_path: &'static str,
    pub unread_notifications: usize,
}

impl UserMenu {
    pub fn new(user: &User, unread_notifications: usize) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            initials: user.initials(),
            dashboard_path: user.role.dashboard_path(),
            unread_notifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navbar {
    SignedOut,
    SignedIn(UserMenu),
}

impl Navbar {
    pub fn for_session(session: Option<&User>, unread_notifications: usize) -> Self {
        match session {
            Some(user) => Navbar::SignedIn(UserMenu::new(user, unread_notifications)),
            None => Navbar::SignedOut,
        }
    }

    /// Links on the right-hand side of the bar
    pub fn actions(&self) -> Vec<NavLink> {
        match self {
            Navbar::SignedOut => vec![SIGN_IN, GET_STARTED],
            Navbar::SignedIn(menu) => vec![NavLink { title: "Dashboard", href: menu.dashboard_path }],
        }
    }

    pub fn render(&self) -> String {
        let links: Vec<String> = PUBLIC_LINKS
            .iter()
            .chain(self.actions().iter())
            .map(|link| format!("{} ({})", link.title, link.href))
            .collect();
        let mut line = format!("EduLMS | {}", links.join(" | "));

        if let Navbar::SignedIn(menu) = self {
            line.push_str(&format!(" | [{}] {} <{}>", menu.initials, menu.name, menu.email));
            if menu.unread_notifications > 0 {
                line.push_str(&format!(" ({} new)", menu.unread_notifications));
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;
    use crate::models::Role;

    #[test]
    fn test_signed_out_offers_sign_in() {
        let navbar = Navbar::for_session(None, 0);
        let hrefs: Vec<&str> = navbar.actions().iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/auth/login", "/auth/register"]);
        assert!(navbar.render().starts_with("EduLMS | Courses (/courses) | About (/about) | Blog (/blog)"));
    }

    #[test]
    fn test_signed_in_menu() {
        let student = seed::users().into_iter().find(|u| u.role == Role::Student).unwrap();
        let navbar = Navbar::for_session(Some(&student), 2);

        let Navbar::SignedIn(menu) = &navbar else {
            panic!("expected a user menu");
        };
        assert_eq!(menu.initials, "MC");
        assert_eq!(menu.dashboard_path, "/student");
        assert!(navbar.render().contains("[MC] Mike Chen <student@lms.com> (2 new)"));
        assert!(!navbar.render().contains("Sign In"));
    }
}
